use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with file output.
///
/// Stdout belongs to the spinner, so logs only ever go to `log_path`.
/// Returns a guard that must be held for the lifetime of the application
/// to ensure logs are flushed.
pub fn init(log_path: &Path, verbose: bool) -> Option<WorkerGuard> {
    let parent = log_path.parent()?;
    std::fs::create_dir_all(parent).ok()?;
    let file_appender = tracing_appender::rolling::never(parent, log_path.file_name()?);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = filter(std::env::var("RUST_LOG").ok().as_deref(), verbose);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Some(guard)
}

/// `RUST_LOG` when it parses, otherwise the crate at info (debug with `verbose`).
fn filter(env: Option<&str>, verbose: bool) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| {
            EnvFilter::new(if verbose {
                "spinline=debug"
            } else {
                "spinline=info"
            })
        })
}

/// `<cache dir>/spinline/spin.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("spinline").join("spin.log"))
}
