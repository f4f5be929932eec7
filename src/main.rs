use clap::Parser;
use fit_dump::fit::FitDecoder;
use fit_dump::DumpError;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Print every populated field of a FIT file as an indented tree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// FIT file to dump
    file: PathBuf,
}

fn init_logging() {
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_target(false)
        .compact();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .event_format(format)
        .init();
}

fn run() -> Result<(), DumpError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(err.into()),
    };
    let out = BufWriter::new(io::stdout().lock());
    fit_dump::dump(&FitDecoder, &cli.file, out)
}

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(kind = err.kind(), "dump failed");
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}
