use crate::cli::GlobalFlags;
use crate::commands::shared::responses::MutationResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk delete`.
pub fn handle(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (dashboard, store) = ctx.app.dashboard_and_store();
    let applied = dashboard.delete(store, id)?;
    output(
        &MutationResponse {
            action: "delete",
            id: id.to_string(),
            applied,
        },
        flags.format,
    )
}
