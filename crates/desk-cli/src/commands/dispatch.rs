use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::Add(args) => commands::add::handle(&args, ctx, flags).await,
        Commands::Edit(args) => commands::edit::handle(&args, ctx, flags).await,
        Commands::Toggle { id } => commands::toggle::handle(&id, ctx, flags),
        Commands::Delete { id } => commands::delete::handle(&id, ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
    }
}
