use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use foldcalc::{
    diagnostics::{Diagnostics, Silent, Stderr, Tracing},
    evaluate_with,
};
use tracing_subscriber::EnvFilter;

/// foldcalc is a line-oriented calculator that applies each instruction to
/// a running accumulator and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads instructions from this file instead of standard input.
    #[arg(short, long, conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Evaluates the given instruction; may be repeated.
    #[arg(short, long, allow_hyphen_values = true)]
    eval: Vec<String>,

    /// Starting value of the accumulator.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    initial: f64,

    /// Where to send diagnostics for rejected instructions.
    #[arg(short, long, value_enum, default_value_t = DiagnosticsMode::Plain)]
    diagnostics: DiagnosticsMode,

    /// Prints only the final accumulator instead of one value per line.
    #[arg(short, long)]
    quiet: bool,

    /// Enables debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DiagnosticsMode {
    /// One plain line per failure on standard error.
    Plain,
    /// Failures become `tracing` warnings.
    Log,
    /// Failures are not reported.
    Off,
}

fn main() -> ExitCode {
    let mut args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();

    let mut sink: Box<dyn Diagnostics> = match args.diagnostics {
        DiagnosticsMode::Plain => Box::new(Stderr),
        DiagnosticsMode::Log => Box::new(Tracing),
        DiagnosticsMode::Off => Box::new(Silent),
    };

    let lines: Box<dyn Iterator<Item = io::Result<String>>> = if !args.eval.is_empty() {
        Box::new(std::mem::take(&mut args.eval).into_iter().map(Ok))
    } else if let Some(path) = &args.file {
        match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file).lines()),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        }
    } else {
        Box::new(io::stdin().lock().lines())
    };

    match run(lines, args.initial, args.quiet, sink.as_mut()) {
        Ok(value) => {
            tracing::debug!(value, "finished");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Feeds every line to the evaluator, threading the accumulator through.
fn run(lines: impl Iterator<Item = io::Result<String>>,
       initial: f64,
       quiet: bool,
       sink: &mut dyn Diagnostics)
       -> io::Result<f64> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut accumulator = initial;

    for line in lines {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        accumulator = evaluate_with(accumulator, line, sink);
        if !quiet {
            writeln!(out, "{accumulator}")?;
        }
    }

    if quiet {
        writeln!(out, "{accumulator}")?;
    }
    out.flush()?;

    Ok(accumulator)
}
