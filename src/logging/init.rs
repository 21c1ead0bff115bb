use std::sync::Once;

use log::LevelFilter;

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Host builds prefer `RUST_LOG` when this is `None`.
    pub level: Option<LevelFilter>,
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        install(config);
        log::debug!("logging initialized");
    });
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    super::console::install(config.level.unwrap_or(LevelFilter::Info));
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    match (config.level, std::env::var("RUST_LOG")) {
        (Some(level), _) => {
            builder.filter_level(level);
        }
        (None, Ok(filter)) => {
            builder.parse_filters(&filter);
        }
        (None, Err(_)) => {
            builder.filter_level(LevelFilter::Info);
        }
    }

    // another logger may already be registered by a test harness
    let _ = builder.try_init();
}
