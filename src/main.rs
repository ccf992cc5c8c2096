//! Host-side helper: `cargo run` builds the wasm package into `static/pkg`
//! and serves `static/` on a local port for previewing the sketch.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    host::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::process::{Command, ExitCode, Stdio};

    const PORT: &str = "8000";

    pub fn run() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        log::info!("building wasm pkg");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(st) if st.success() => {}
            Ok(st) => {
                log::error!("wasm-pack exited with {st}");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                log::warn!("wasm-pack unavailable ({e}); serving whatever is already in static/pkg");
            }
        }

        log::info!("serving static/ at http://127.0.0.1:{PORT}");
        let server = Command::new("python3")
            .args(["-m", "http.server", PORT, "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status();
        match server {
            Ok(st) if st.success() => ExitCode::SUCCESS,
            Ok(st) => {
                log::error!("http server exited with {st}");
                ExitCode::FAILURE
            }
            Err(e) => {
                log::error!("could not start http server: {e}");
                ExitCode::FAILURE
            }
        }
    }
}
