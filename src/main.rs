//! CLI entry point for the grade estimator.

use anyhow::Result;
use clap::Parser;
use grade_estimator::{cli::Cli, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    logging::init(cli.log_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    grade_estimator::run(&cli, &mut out)
}
