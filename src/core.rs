use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;
use futures::StreamExt;
use tracing::{debug, error};

use crate::cli::{write_help, Args};
use crate::client::{HttpTransport, Transport};
use crate::context::Environment;
use crate::errors::{Result, SeaquestError};
use crate::logging;
use crate::models::Options;
use crate::output::{write_banner, write_fatal, Palette, ReportSettings, Reporter};
use crate::request::RequestDescriptor;
use crate::runner::ExecutionLoop;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Prints the banner, then either the help text or the request report.
/// Setup failures are printed as one highlighted line and give a non-zero
/// exit status; failed iterations do not.
pub fn run(args: Vec<String>, env: Environment) -> ExitStatus {
    logging::init();

    let palette = env.palette();

    let parsed = match Args::try_parse_from(&args) {
        Ok(parsed) => Ok(parsed),
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            e.print().ok();
            return ExitStatus::Success;
        }
        Err(e) => Err(SeaquestError::Argument(clap_message(&e))),
    };

    let mut out = env.stdout.lock();

    let result = write_banner(&mut out, &palette)
        .and_then(|_| parsed)
        .and_then(Args::into_options)
        .and_then(|options| execute(&options, &mut out, palette));

    match result {
        Ok(()) => ExitStatus::Success,
        Err(e) => handle_error(e, &mut out, &palette),
    }
}

/// Dispatch a parsed invocation: help text, or the request run
pub fn execute<W: Write>(options: &Options, out: &mut W, palette: Palette) -> Result<()> {
    if options.help {
        return write_help(out, &palette);
    }

    debug!(?options, "Starting run");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SeaquestError::Runtime(format!("Failed to create tokio runtime: {}", e)))?;

    runtime.block_on(program(options, out, palette))
}

/// Build the descriptor once and run every iteration over HTTP
pub async fn program<W: Write>(options: &Options, out: &mut W, palette: Palette) -> Result<()> {
    let descriptor = RequestDescriptor::from(options);
    let transport = HttpTransport::new()?;

    run_iterations(transport, &descriptor, options, out, palette).await?;
    Ok(())
}

/// Echo the request, then report each outcome as soon as it completes.
///
/// Returns the writer so callers can inspect what was written.
pub async fn run_iterations<T: Transport, W: Write>(
    transport: T,
    descriptor: &RequestDescriptor,
    options: &Options,
    out: W,
    palette: Palette,
) -> Result<W> {
    let mut reporter = Reporter::new(out, palette, ReportSettings::from(options));
    reporter.request(descriptor)?;

    let runner = ExecutionLoop::new(transport, options.iterations, options.interval());
    let outcomes = runner.run(descriptor);
    futures::pin_mut!(outcomes);

    while let Some(outcome) = outcomes.next().await {
        reporter.report(&outcome)?;
    }

    reporter.finish()?;
    Ok(reporter.into_inner())
}

fn handle_error<W: Write>(err: SeaquestError, out: &mut W, palette: &Palette) -> ExitStatus {
    error!(error = %err, "Run aborted");

    if write_fatal(out, palette, &err.to_string()).is_err() {
        eprintln!("Error: {}", err);
    }

    ExitStatus::Error
}

/// First line of a clap error without its `error: ` prefix
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}
