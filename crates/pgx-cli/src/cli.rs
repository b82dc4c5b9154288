//! CLI argument definitions for `pgx`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pgx_cli::options::parse_diplotype_pair;

#[derive(Parser)]
#[command(
    name = "pgx",
    version,
    about = "Pharmacogenomic phenotype and drug-gene lookups",
    long_about = "Resolve metabolizer phenotypes from star-allele diplotypes and map drugs\n\
                  to their primary pharmacogene.\n\n\
                  Reference data combines embedded CPIC tables with the CPIC DPYD\n\
                  diplotype table and the PharmGKB relationships table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the DPYD diplotype table and relationships.csv.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// TOML config file with a [data] section.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the reference data and report what was loaded.
    Check,

    /// Look up the phenotype for a gene and diplotype.
    Phenotype(PhenotypeArgs),

    /// Look up the primary gene for a drug.
    Drug(DrugArgs),

    /// Resolve a patient's diplotypes and drugs, printed as JSON.
    Resolve(ResolveArgs),
}

#[derive(Args)]
pub struct PhenotypeArgs {
    /// Gene symbol, e.g. CYP2C19.
    #[arg(value_name = "GENE")]
    pub gene: String,

    /// Diplotype, e.g. *1/*2 or *2.
    #[arg(value_name = "DIPLOTYPE")]
    pub diplotype: String,
}

#[derive(Args)]
pub struct DrugArgs {
    #[arg(value_name = "DRUG")]
    pub drug: String,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Patient identifier echoed in the result.
    #[arg(long = "patient", value_name = "ID")]
    pub patient: String,

    /// Diplotype call; repeat for each gene.
    #[arg(long = "diplotype", value_name = "GENE=DIPLOTYPE", value_parser = parse_diplotype_pair)]
    pub diplotypes: Vec<(String, String)>,

    /// Drug to resolve; repeat or separate with commas.
    #[arg(long = "drug", value_name = "DRUG", value_delimiter = ',')]
    pub drugs: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
