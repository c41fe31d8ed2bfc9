use clap::{Args, Parser, Subcommand};
use elementa::engine::config::DEFAULT_MODEL;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Elementa Developers",
    version,
    about = "Elementa CLI - Rule-based prediction of element, bond and structure properties, with confidence scores, up to Z=200.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub data: DataOptions,
}

/// Reference data shared by every element-generating command.
#[derive(Args, Debug, Clone)]
pub struct DataOptions {
    /// Confidence profile used to score derived properties.
    #[arg(long, global = true, default_value = "default", value_name = "NAME")]
    pub profile: String,

    /// Load confidence profiles from this TOML file instead of the bundled table.
    #[arg(long, global = true, value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// Load element names and electronegativities from this TOML file.
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Theoretical model label recorded on the generator.
    #[arg(long, global = true, default_value = DEFAULT_MODEL, value_name = "LABEL")]
    pub model: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ground-state electron configuration of an element (Z 1-173).
    Config(ConfigArgs),
    /// Generate an element and print its derived properties (Z 1-200).
    Element(ElementArgs),
    /// Predict the bond between two elements.
    Bond(BondArgs),
    /// Generate a range of elements and predict every pairwise bond.
    Survey(SurveyArgs),
    /// Measure the additivity violation of a structure described in TOML.
    Additivity(AdditivityArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Atomic number.
    #[arg(required = true, value_name = "Z")]
    pub z: u32,

    /// Print every occupied subshell instead of the noble-gas core form.
    #[arg(long)]
    pub full: bool,
}

#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Atomic number.
    #[arg(required = true, value_name = "Z")]
    pub z: u32,
}

#[derive(Args, Debug)]
pub struct BondArgs {
    /// Atomic number of the first element.
    #[arg(required = true, value_name = "ZA")]
    pub a: u32,

    /// Atomic number of the second element.
    #[arg(required = true, value_name = "ZB")]
    pub b: u32,

    /// List every admissible bond order instead of only the most likely one.
    #[arg(long)]
    pub all_orders: bool,
}

#[derive(Args, Debug)]
pub struct SurveyArgs {
    /// First atomic number of the range.
    #[arg(long, default_value_t = 1, value_name = "Z")]
    pub from: u32,

    /// Last atomic number of the range (inclusive).
    #[arg(long, required = true, value_name = "Z")]
    pub to: u32,

    /// Write the full bond table as CSV.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct AdditivityArgs {
    /// Structure file with `actual`, `[graph]` and `[energies]` sections.
    #[arg(required = true, value_name = "PATH")]
    pub structure: PathBuf,

    /// Relative violation threshold (default 0.05).
    #[arg(short, long, value_name = "FLOAT")]
    pub threshold: Option<f64>,
}
