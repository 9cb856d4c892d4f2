//! Estimate a letter grade from a relative class rank.
//!
//! A [`Distribution`] of letter counts becomes a [`CutoffTable`] of
//! cumulative percentiles; a rank is turned into a [`Percentile`] and the
//! table returns the letter of the smallest cutoff at or above it.

pub mod cli;
pub mod cutoff;
pub mod distribution;
pub mod error;
pub mod estimate;
pub mod logging;
pub mod output;
pub mod percentile;

pub use cutoff::{CutoffTable, GradeBand};
pub use distribution::{Distribution, GradeCount};
pub use error::{ErrorKind, GradeError};
pub use estimate::Estimate;
pub use percentile::Percentile;

use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use crate::cli::Cli;

/// Estimates a grade for the parsed arguments and writes the report to `out`.
///
/// Nothing is written unless the estimate succeeds.
#[tracing::instrument(skip_all, fields(index = cli.index, total = cli.total))]
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let distribution = Distribution::cs161_spring_2014();
    let estimate = Estimate::compute(&distribution, cli.index, cli.total, cli.verbose)
        .context("grade estimate failed")?;

    info!(
        distribution = %estimate.distribution,
        percentile = %estimate.percentile,
        grade = %estimate.grade,
        "Grade estimated"
    );

    if cli.json {
        output::write_json(out, &estimate)?;
    } else {
        output::write_text(out, &estimate)?;
    }
    Ok(())
}
