use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use molbond::io::Format;

#[derive(Parser)]
#[command(
    name = "mbond",
    about = "Distance-based bond perception for molecular geometries",
    version,
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Perceive bonds from atomic coordinates
    #[command(visible_alias = "b")]
    Bonds(BondsArgs),

    /// Summarize a molecular geometry file
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Input file (stdin if omitted, requires --infmt)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format (inferred from the file extension if omitted)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct BondsArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Strict upper distance bound for a bond (Å)
    #[arg(long = "max-bond", value_name = "Å", default_value = "1.5")]
    pub max_bond: f64,

    /// Strict lower distance bound for a bond (Å)
    #[arg(
        long = "min-bond",
        value_name = "Å",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    pub min_bond: f64,

    /// Emit the bond list as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub io: IoOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Xyz,
    Pdb,
}

impl From<InputFormat> for Format {
    fn from(f: InputFormat) -> Self {
        match f {
            InputFormat::Xyz => Format::Xyz,
            InputFormat::Pdb => Format::Pdb,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
