mod cli;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use spinline::{Spinner, logging};
use tracing::info;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = args
        .log_file
        .clone()
        .or_else(logging::default_log_path)
        .and_then(|path| logging::init(&path, args.verbose));

    let style = args.style()?;
    let duration = Duration::from_millis(args.duration_ms);

    for job in args.jobs() {
        info!(message = %job.progress, outcome = ?job.outcome, "running job");
        let spinner = Spinner::with_config(args.config(&job, &style)).run();
        tokio::time::sleep(duration).await;
        spinner.finish(job.outcome).await;
    }

    Ok(())
}
