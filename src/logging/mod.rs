//! Logger setup. Everything else logs through the `log` macros; this module
//! only decides where records end up: the browser console on wasm, stderr
//! through `env_logger` on the host.

#[cfg(target_arch = "wasm32")]
mod console;
mod init;

pub use init::{init_logging, LoggingConfig};
