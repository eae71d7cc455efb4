//! Binary entry point for the undirect graph conversion CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use undirect::io::Format;
use undirect::pipeline::{self, PipelineConfig};
use undirect::types::{KeyWidth, WeightType};

#[derive(Parser, Debug)]
#[command(
    name = "undirect",
    version,
    about = "Convert a directed graph file to an undirected graph",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(short = 'i', long = "input", value_name = "FILE", help = "Input file name")]
    input: PathBuf,

    #[arg(short = 'o', long = "output", value_name = "FILE", help = "Output file name")]
    output: PathBuf,

    #[arg(
        short = 'f',
        long = "input-format",
        value_enum,
        default_value_t = FormatArg::Mtx,
        help = "Input file format"
    )]
    input_format: FormatArg,

    #[arg(
        short = 'g',
        long = "output-format",
        value_enum,
        default_value_t = FormatArg::Mtx,
        help = "Output file format"
    )]
    output_format: FormatArg,

    #[arg(short = 'w', long = "weighted", help = "Input graph is weighted")]
    weighted: bool,

    #[arg(
        short = 's',
        long = "symmetric",
        help = "Input graph is already symmetric"
    )]
    symmetric: bool,

    #[arg(long, default_value_t = 0, help = "Worker threads (0 = all cores)")]
    threads: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Mtx,
    Coo,
    Edgelist,
    Csv,
    Tsv,
}

impl From<FormatArg> for Format {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Mtx => Format::Mtx,
            FormatArg::Coo => Format::Coo,
            FormatArg::Edgelist => Format::Edgelist,
            FormatArg::Csv => Format::Csv,
            FormatArg::Tsv => Format::Tsv,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Help and usage errors both exit non-zero.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let config = PipelineConfig {
        input: cli.input,
        output: cli.output,
        input_format: cli.input_format.into(),
        output_format: cli.output_format.into(),
        weighted: cli.weighted,
        symmetric: cli.symmetric,
        key_width: KeyWidth::default(),
        weight_type: WeightType::default(),
        max_workers: cli.threads,
    };
    if let Err(err) = pipeline::run(&config) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
