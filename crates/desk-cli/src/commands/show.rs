use desk_store::ArticleOps;
use desk_view::Route;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::commands::shared::responses::PreviewResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk show`: navigate to the live-site preview and render it.
pub fn handle(args: &ShowArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.app.store_mut().goto_article(&args.id);

    let articles = ctx.app.store().snapshot();
    ctx.app.with_live_site(|site| site.advance_images(&articles, args.image));

    let Route::LiveSite(site) = ctx.app.route() else {
        anyhow::bail!("navigation to article '{}' did not reach the live site", args.id);
    };
    let response = PreviewResponse::from(site.render(&articles));
    ctx.app.go_back();
    output(&response, flags.format)
}
