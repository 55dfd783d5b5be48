// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-aa CLI
//!
//! Command-line interface for converting protein variant amino acid notation.

use clap::{Parser, Subcommand};
use ferro_aa::amino_acid::table;
use ferro_aa::cli::{
    lookup_code, output_error, parse_max_lines, read_input, trim_final_newline, write_batch,
    write_lookup, write_table, OutputFormat,
};
use ferro_aa::config::FerroAaConfig;
use ferro_aa::{BatchConverter, Direction, StopSymbol};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "ferro-aa")]
#[command(author, version, about = "Protein variant amino acid notation converter")]
#[command(
    long_about = "Convert protein variant descriptions between three-letter and one-letter amino acid codes.

Examples:
  ferro-aa convert 'p.Leu858Arg'
  ferro-aa convert -d one-to-three 'p.L858R'
  ferro-aa convert -i variants.txt --stop Ter
  echo 'p.Gln61Ter' | ferro-aa convert
  ferro-aa lookup Trp
  ferro-aa table -f json"
)]
struct Cli {
    /// Configuration file (default: .ferro-aa.toml, then ~/.config/ferro/aa.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert variant notation
    Convert {
        /// Variant to convert (reads --input or stdin when omitted)
        variant: Option<String>,

        /// Input file, one variant per line (use - for stdin, .gz supported)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Conversion direction: three-to-one or one-to-three
        #[arg(short, long)]
        direction: Option<Direction>,

        /// Stop codon symbol: Ter, * (or star), X
        #[arg(long = "stop")]
        stop_symbol: Option<StopSymbol>,

        /// Maximum number of input lines (at least 1)
        #[arg(long, value_parser = parse_max_lines)]
        max_lines: Option<usize>,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Look up the counterpart of a one- or three-letter code
    Lookup {
        /// Amino acid code (e.g., Leu or L)
        code: String,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Print the amino acid lookup table
    Table {
        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Convert {
            variant,
            input,
            direction,
            stop_symbol,
            max_lines,
            format,
        } => {
            let file_config = load_config(cli.config.as_deref())?;
            let config = file_config.merge_with_cli(direction, stop_symbol, max_lines);
            run_convert(
                variant.as_deref(),
                input.as_deref(),
                BatchConverter::new(config),
                format.parse()?,
            )
        }
        Commands::Lookup { code, format } => run_lookup(&code, format.parse()?),
        Commands::Table { format } => run_table(format.parse()?),
    }
}

fn load_config(path: Option<&Path>) -> Result<FerroAaConfig, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(FerroAaConfig::load_from_path(p)?),
        None => Ok(FerroAaConfig::load().unwrap_or_default()),
    }
}

fn run_convert(
    variant: Option<&str>,
    input: Option<&Path>,
    converter: BatchConverter,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = match variant {
        Some(v) => v.to_string(),
        None => read_input(input)?,
    };
    let text = if variant.is_some() {
        text.as_str()
    } else {
        trim_final_newline(&text)
    };

    let output = match converter.convert(text) {
        Ok(output) => output,
        Err(e) => {
            output_error(&mut io::stderr(), &e, format)?;
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_batch(&mut writer, &output, format)?;
    writer.flush()?;
    Ok(())
}

fn run_lookup(code: &str, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match lookup_code(code) {
        Some(found) => {
            write_lookup(&mut io::stdout(), code, &found, format)?;
            Ok(())
        }
        None => {
            eprintln!("ERROR: unknown amino acid code '{}'", code);
            std::process::exit(1);
        }
    }
}

fn run_table(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    write_table(&mut io::stdout(), &table(), format)?;
    Ok(())
}

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

    let filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{}': {}", level, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    Ok(())
}
