//! Command-line argument definitions.

use clap::Parser;

use crate::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "grade_estimator", version)]
#[command(about = "Estimate a letter grade from a relative class rank", long_about = None)]
pub struct Cli {
    /// Print every grade cutoff before the estimate
    #[arg(short, long, visible_alias = "verbosity")]
    pub verbose: bool,

    /// Print the estimate as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Format of diagnostic logs written to stderr
    #[arg(
        long,
        value_enum,
        env = "GRADE_ESTIMATOR_LOG_FORMAT",
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,

    /// Relative score index in the class (0 is the top)
    #[arg(value_name = "INDEX", allow_negative_numbers = true)]
    pub index: i64,

    /// Number of total students in your class
    #[arg(value_name = "TOTAL", allow_negative_numbers = true)]
    pub total: i64,
}
