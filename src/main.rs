//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` on a local HTTP server.

use std::process::{self, Command, Stdio};

use log::{error, info, warn};
use square_wasm::logging::{init_logging, LoggingConfig};

const PORT: &str = "8000";

fn main() {
    init_logging(LoggingConfig::default());

    info!("packaging square_wasm for the browser");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            error!("wasm-pack could not build the square module; see its output above");
            process::exit(1);
        }
        Err(_) => {
            warn!("wasm-pack is not installed; serving whatever static/pkg already holds");
        }
    }

    info!("open http://127.0.0.1:{PORT}/ to see the square");
    let status = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(st) if st.success() => {}
        Ok(st) => {
            error!("http server exited with {st}");
            process::exit(1);
        }
        Err(err) => {
            error!("failed to start http server: {err}");
            process::exit(1);
        }
    }
}
