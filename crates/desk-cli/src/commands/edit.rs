use anyhow::Context;
use desk_core::enums::Field;
use desk_store::ArticleOps;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EditArgs;
use crate::commands::shared::editor::{attach_images, submit};
use crate::commands::shared::responses::ArticleResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk edit`.
pub async fn handle(args: &EditArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (dashboard, store) = ctx.app.dashboard_and_store();

    if !dashboard.open_edit(store, &args.id) {
        anyhow::bail!("article '{}' not found", args.id);
    }

    let editor = dashboard.editor_mut();
    let texts = [
        (Field::Headline, &args.headline),
        (Field::Author, &args.author),
        (Field::Body, &args.body),
        (Field::PublicationDate, &args.publication_date),
    ];
    for (field, value) in texts {
        if let Some(value) = value {
            editor.set_text(field, value.as_str());
        }
    }
    if args.publish || args.unpublish {
        editor.set_published(args.publish);
    }

    let mut removals = args.remove_images.clone();
    removals.sort_unstable();
    removals.dedup();
    for index in removals.into_iter().rev() {
        if editor.remove_image(index).is_none() {
            anyhow::bail!("article '{}' has no image at index {index}", args.id);
        }
    }
    attach_images(editor, &args.images).await;

    submit(dashboard, store)?;

    let article = store
        .find(&args.id)
        .cloned()
        .with_context(|| format!("article '{}' disappeared while editing", args.id))?;
    output(&ArticleResponse(article), flags.format)
}
