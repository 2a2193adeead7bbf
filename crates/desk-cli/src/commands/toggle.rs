use desk_store::ArticleOps;

use crate::cli::GlobalFlags;
use crate::commands::shared::responses::MutationResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk toggle`.
pub fn handle(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let applied = ctx.app.store_mut().toggle_publish(id)?;
    output(
        &MutationResponse {
            action: "toggle",
            id: id.to_string(),
            applied,
        },
        flags.format,
    )
}
