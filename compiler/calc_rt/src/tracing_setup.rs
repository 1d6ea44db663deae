//! Opt-in log output for hosts that do not install their own subscriber.
//!
//! The engine only emits through the `tracing` facade. Nothing is printed
//! until a host calls [`init_tracing`] (or `calc_init_tracing` from C) with
//! filter directives such as `"calc_parse=trace,calc_eval=debug"`. The
//! directives are passed explicitly; no environment variable is consulted.

use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Why [`init_tracing`] did not install a subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("invalid filter directives: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("a global subscriber is already installed")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Install a global `fmt` subscriber writing to stderr, filtered by
/// `directives`. Only the first successful call in a process takes effect.
pub fn init_tracing(directives: &str) -> Result<(), TracingError> {
    let filter = EnvFilter::try_new(directives)?;
    subscriber(filter, std::io::stderr).try_init()?;
    Ok(())
}

/// Plain-text `fmt` output: C hosts often redirect stderr to a file, so no
/// ANSI colour codes.
pub(crate) fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
}
