use anyhow::Context;
use desk_config::DeskConfig;
use desk_store::{ArticleStore, FileKeyedStore};
use desk_view::{App, Dashboard};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub app: App<FileKeyedStore>,
}

impl AppContext {
    /// Open the article store under the configured directory and mount it.
    pub fn init(config: &DeskConfig) -> anyhow::Result<Self> {
        let data_dir = config.storage.resolved_dir()?;
        let backend = FileKeyedStore::open(&data_dir)
            .with_context(|| format!("failed to open article store at {}", data_dir.display()))?;
        let store = ArticleStore::open(backend, config.storage.key.clone());
        tracing::debug!(dir = %data_dir.display(), key = %config.storage.key, "article store mounted");

        let mut app = App::new(Dashboard::from_config(&config.dashboard));
        app.mount(store);

        Ok(Self { app })
    }
}
