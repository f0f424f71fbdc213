use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use gradekeeper::{logging, metrics::SessionMetrics, session::Session};

#[derive(Parser)]
#[command(
    name = "gradekeeper",
    about = "Interactive student grade tracking and reporting",
    version
)]
struct Cli {
    /// Append diagnostics to this file instead of logs/gradekeeper.log.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init_tracing(cli.log_file.as_deref());

    let metrics = Arc::new(SessionMetrics::new());
    let mut session = Session::new(
        tokio::io::stdin(),
        tokio::io::stdout(),
        Arc::clone(&metrics),
    );

    tokio::select! {
        result = session.run() => result?,
        _ = tokio::signal::ctrl_c() => println!("\n{}", gradekeeper::session::FAREWELL),
    }

    let snapshot = metrics.snapshot();
    tracing::info!(summary = %snapshot.to_json(), "Session complete");
    Ok(())
}
