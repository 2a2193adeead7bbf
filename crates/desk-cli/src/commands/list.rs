use desk_store::ArticleOps;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::responses::ListResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk list`.
pub fn handle(args: &ListArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (dashboard, store) = ctx.app.dashboard_and_store();

    dashboard.set_search(args.search.clone().unwrap_or_default());
    dashboard.set_status(args.status);
    if let Some(rows) = args.rows
        && !dashboard.set_rows_per_page(rows)
    {
        let options = dashboard
            .rows_per_page_options()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::bail!("invalid --rows {rows}: expected one of {options}");
    }
    dashboard.set_page(args.page);

    let view = dashboard.view(store.articles());
    output(
        &ListResponse::new(dashboard.search(), dashboard.status(), &view),
        flags.format,
    )
}
