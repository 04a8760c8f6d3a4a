use heart::Screen;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};
fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,heart=debug"));
    fmt().with_env_filter(filter).with_target(true).init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "drawing session failed");
            ExitCode::FAILURE
        }
    }
}
fn run() -> heart::Result<()> {
    let mut screen = Screen::new()?;
    heart::render(screen.turtle_mut());
    screen.done()
}
