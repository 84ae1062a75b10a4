use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gem-growth")]
#[command(about = "Gem interest calculator: 0.10% daily, compounded hourly")]
pub struct CliConfig {
    /// Path to a TOML file overriding the rate and duration presets
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute growth for a starting amount
    Calc {
        /// Starting gems, e.g. 1b, 500m, 1.5k
        amount: String,

        #[command(flatten)]
        duration: DurationArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse shorthand text into a number
    Parse { text: String },
    /// Format a number with a k/m/b suffix
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// List the duration presets
    Presets,
    /// Line-oriented calculator session on stdin/stdout
    Interactive,
}

#[derive(Debug, Clone, Default, Args)]
#[group(multiple = false)]
pub struct DurationArgs {
    /// Free-form day count, e.g. 1.5
    #[arg(long)]
    pub days: Option<String>,

    /// Preset number as listed by `presets` (1-based)
    #[arg(long)]
    pub preset: Option<usize>,
}
