use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter, format::FmtSpan};
use tracing_subscriber::{Layer, filter::LevelFilter, prelude::*, registry::LookupSpan};

pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Span close events carry `time.busy`, which is how solver and field
/// timings reach the terminal at `-vv` and above.
fn span_events(level: LevelFilter) -> FmtSpan {
    if level >= LevelFilter::DEBUG {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

fn terminal_layer<S>(level: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(span_events(level))
        .compact()
}

/// Plain-text layer that records every `#[instrument]` span it closes along
/// with the emitting thread.
fn file_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let level = level_filter(verbosity, quiet);
    let log_file = log_file
        .map(|path| File::create(&path).map_err(CliError::Io))
        .transpose()?;

    tracing_subscriber::registry()
        .with(level)
        .with(terminal_layer(level))
        .with(log_file.map(|file| file_layer(Mutex::new(file))))
        .init();
    Ok(())
}
