use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod app;
mod craft;
mod features;
mod finishem;
mod shared;
mod ui;
mod widgets;


/// Route tracing output to a log file; the terminal belongs to the TUI
fn init_logging() -> Result<()> {
    let log_path = shared::Config::config_dir()?.join("bridge.log");
    let file = std::fs::File::create(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    tracing::info!("finishem-bridge starting");

    // Initialize the application
    let mut app = app::App::new()?;

    // Run the TUI
    app.run().await?;

    Ok(())
}
