// Command-line entry point for entry_trace.

use anyhow::{Context, Result};
use clap::Parser;
use entry_trace::application::InstrumentUsecase;
use entry_trace::infrastructure::{PrettyGenerator, SynParser};
use entry_trace::{GapPolicy, InstrumentConfig};
use std::fs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input Rust source file to instrument
    input: String,

    /// Output file path (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Macro path invoked by the injected trace statements
    #[arg(long, default_value = "println")]
    sink: String,

    /// Policy for parameters that are not simple identifiers
    #[arg(long, value_enum, default_value_t = GapArg::Placeholder)]
    on_gap: GapArg,

    /// Print a JSON summary of the instrumented functions to stderr
    #[arg(long)]
    summary: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum GapArg {
    Placeholder,
    Fail,
}

impl From<GapArg> for GapPolicy {
    fn from(arg: GapArg) -> Self {
        match arg {
            GapArg::Placeholder => GapPolicy::Placeholder,
            GapArg::Fail => GapPolicy::Fail,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("Cannot read input file: {}", cli.input))?;

    let mut config = InstrumentConfig::default()
        .with_sink(&cli.sink)
        .with_context(|| format!("Invalid --sink macro path: {}", cli.sink))?;
    config.gap_policy = cli.on_gap.into();

    let usecase = InstrumentUsecase {
        parser: &SynParser,
        generator: &PrettyGenerator,
    };
    let result = usecase
        .run(&source, &config)
        .with_context(|| format!("Failed to instrument {}", cli.input))?;

    if cli.summary {
        eprintln!("{}", serde_json::to_string_pretty(&result.records)?);
    }

    match &cli.output {
        Some(path) => fs::write(path, &result.code)
            .with_context(|| format!("Cannot write output file: {path}"))?,
        None => print!("{}", result.code),
    }

    Ok(())
}
