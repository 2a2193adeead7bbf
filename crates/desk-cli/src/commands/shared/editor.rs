use std::fmt::Write as _;
use std::path::PathBuf;

use desk_core::enums::Field;
use desk_editor::{EditorForm, ImageUpload, SubmitOutcome};
use desk_store::ArticleOps;
use desk_view::Dashboard;

/// Read `paths` as one batch and append it to the open draft.
///
/// A failed batch leaves the draft as it was; the article is still saved.
pub async fn attach_images(editor: &mut EditorForm, paths: &[PathBuf]) {
    if paths.is_empty() {
        return;
    }

    let upload = ImageUpload::spawn(paths.iter().cloned());
    match upload.wait().await {
        Ok(batch) => {
            tracing::debug!(count = batch.len(), "attaching image batch");
            editor.commit_images(batch);
        }
        Err(error) => tracing::warn!(%error, "image batch dropped, saving without it"),
    }
}

/// Submit the drawer as if every field had been visited.
///
/// A blocked submit becomes an error listing each field's message.
pub fn submit(dashboard: &mut Dashboard, ops: &mut impl ArticleOps) -> anyhow::Result<SubmitOutcome> {
    let editor = dashboard.editor_mut();
    for field in Field::ALL {
        editor.blur(field);
    }

    let outcome = dashboard.submit_editor(ops)?;
    if let SubmitOutcome::Blocked(errors) = &outcome {
        let mut message = String::from("article not saved:");
        for (field, error) in errors.iter() {
            let _ = write!(message, "\n  {}: {error}", field.label());
        }
        anyhow::bail!(message);
    }
    Ok(outcome)
}
