//! generate-context - renders a BizBrain knowledge base into a session-start
//! context document.

use bizbrain_context::Error;
use bizbrain_context::cli::Cli;
use bizbrain_context::commands::{self, CommandResult};
use bizbrain_context::config::{OutputFormat, resolve_invocation};
use clap::Parser;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "BIZBRAIN_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let invocation = match resolve_invocation(cli.invocation_args()) {
        Ok(invocation) => invocation,
        Err(e) => {
            // MissingBrainPath displays as the usage line
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match commands::generate(&invocation) {
        Ok(result) => output(&result, invocation.output_format),
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    }
}

/// Log to stderr so stdout carries nothing but the document.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn output<T: CommandResult>(result: &T, format: OutputFormat) {
    let rendered = match format {
        OutputFormat::Markdown => result.to_human(),
        OutputFormat::Json => format!("{}\n", result.to_json()),
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
    {
        // A hook runner that closed the pipe early is not an error worth reporting
        if e.kind() != io::ErrorKind::BrokenPipe {
            tracing::warn!(error = %e, "failed to write context");
        }
    }
}

fn report_error(error: &Error) {
    tracing::debug!(?error, "context generation failed");
    eprintln!("Error: {}", error);
}
