use dioxus::desktop::{Config, WindowBuilder};
use gopher_archive::app::App;
use gopher_archive::storage::settings::load_settings;
use gopher_archive::types::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = load_settings();
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Gopher Archive");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title("Gopher Archive")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 760.0)),
            ),
        )
        .with_context(config)
        .launch(App);
}
