use desk_core::enums::Field;
use desk_editor::SubmitOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::editor::{attach_images, submit};
use crate::commands::shared::responses::ArticleResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk add`.
pub async fn handle(args: &AddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (dashboard, store) = ctx.app.dashboard_and_store();

    dashboard.open_create();
    let editor = dashboard.editor_mut();
    editor.set_text(Field::Headline, args.headline.as_str());
    editor.set_text(Field::Author, args.author.as_str());
    editor.set_text(Field::Body, args.body.as_str());
    editor.set_text(Field::PublicationDate, args.publication_date.as_str());
    editor.set_published(args.published);
    attach_images(editor, &args.images).await;

    match submit(dashboard, store)? {
        SubmitOutcome::Created(article) => output(&ArticleResponse(article), flags.format),
        other => anyhow::bail!("unexpected editor outcome for create: {other:?}"),
    }
}
