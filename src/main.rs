use bwlp_core::backend::routing::RouteTable;
use bwlp_core::backend::services::{SessionFile, SessionStore};
use bwlp_core::backend::utils::config::AppConfig;
use bwlp_core::frontend::app::App;
use bwlp_core::frontend::services::AppContext;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use std::sync::{Arc, OnceLock};
use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    // Logging setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AppConfig::load();
    let table = Arc::new(RouteTable::bwlp()?);
    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string_pretty(table.routes()) {
            Ok(json) => log::debug!("Route table:\n{json}"),
            Err(e) => log::warn!("Failed to serialize route table: {e}"),
        }
    }

    // Session IO and background tasks run on this runtime
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let rt = RUNTIME.get_or_init(|| rt);
    let _guard = rt.enter();

    let session = rt.block_on(SessionFile::load()).unwrap_or_default();
    let ctx = AppContext {
        table,
        routing: config.routing.clone(),
        session: SessionStore::from(session),
    };

    let size = LogicalSize::new(config.window.width, config.window.height);
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(config.window.title.as_str())
                .with_inner_size(size)
                .with_resizable(config.window.resizable),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(desktop)
        .with_context(ctx)
        .launch(App);

    Ok(())
}
