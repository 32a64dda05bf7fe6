use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use gfa_records::gfa::CountDecoding;
use gfa_records::parser::{GFAParser, GFAParsingConfig};
use gfa_records::writer::write_gfa;

mod cli;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) -> Result<()> {
    stderrlog::new()
        .module(module_path!())
        .quiet(false)
        .verbosity(log_max_level)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .context("failed to initialize logging")
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_log(1 + cli.verbose as usize)?;

    let count_decoding = if cli.legacy_counts {
        CountDecoding::FirstByte
    } else {
        CountDecoding::Decimal
    };
    let config = GFAParsingConfig::default()
        .with_count_decoding(count_decoding)
        .with_tolerance(cli.tolerance);

    let gfa = GFAParser::with_config(config)
        .parse_file(&cli.input_file)
        .with_context(|| format!("failed to read {}", cli.input_file.display()))?;

    info!("# segments: {}", gfa.segments().len());
    info!("# links: {}", gfa.links().len());
    info!("# comments: {}", gfa.header().comments().len());

    match &cli.out_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_gfa(&gfa, &mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_gfa(&gfa, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
