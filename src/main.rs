use anyhow::Context;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use zpype::app::App;
use zpype::constants::LOOP_TIME;
use zpype::formatter::TickFormatter;

/// The main entry point of the application.
///
/// Initializes logging, the SDL window, and the game state, then enters the
/// main game loop.
fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("ZPYPE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default())
        .with(tracing_subscriber::fmt::layer().event_format(TickFormatter))
        .init();

    let mut app = App::new().context("Could not create app")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    Ok(())
}
