use clap::Parser;
use tracing::error;

use love_journey_lib::bootstrap::tracing::init_tracing_subscriber;
use love_journey_lib::cli::{commands, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let cli = Cli::parse();
    if let Err(err) = commands::run(cli).await {
        error!(error = %err, "command failed");
        return Err(err);
    }
    Ok(())
}
