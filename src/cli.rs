use std::path::PathBuf;

use clap::Parser;

use gfa_records::parser::ParserTolerance;

// Read a GFA1 file record by record and write it back out normalized
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    // Input GFA file
    #[arg(required = true, help = "Input GFA1 file")]
    pub input_file: PathBuf,

    // Output file path, stdout if not given
    #[arg(short = 'o', long = "output", required = false)]
    pub out_file: Option<PathBuf>,

    // Read RC/FC/KC values by their first byte, like older tools did
    #[arg(long = "legacy-counts", default_value_t = false)]
    pub legacy_counts: bool,

    // What to do with lines that can't be used
    #[arg(long = "tolerance", default_value = "safe")]
    pub tolerance: ParserTolerance,

    // Verbosity, repeat for more
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
