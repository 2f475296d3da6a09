//! File logging.
//!
//! The terminal is in raw mode on the alternate screen while the simulation
//! runs, so logs go to `<log dir>/tui-life.log` and never to stdout/stderr.
//! `RUST_LOG` overrides the default filter.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE: &str = "tui-life.log";

const DEFAULT_FILTER: &str = "tui_life=info,tui_life_input=info,tui_life_term=info,warn";

/// Install the global subscriber.
///
/// Keep the returned guard alive for the whole run; dropping it flushes and
/// stops the background writer.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(log_dir)
        .with_context(|| format!("open log file in {}", log_dir.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .context("install tracing subscriber")?;

    Ok(guard)
}
