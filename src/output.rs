//! Output formatting for grade estimates.
//!
//! Supports the plain-text report and JSON serialization.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::cutoff::GradeBand;
use crate::estimate::Estimate;

/// Writes one `LETTER: 0.XXXX` line per band, in table order.
pub fn write_cutoffs<W: Write>(out: &mut W, bands: &[GradeBand]) -> Result<()> {
    for band in bands {
        writeln!(out, "{}: {:.4}", band.letter, band.cutoff)?;
    }
    Ok(())
}

/// Writes the cutoffs (when present) followed by the result line.
pub fn write_text<W: Write>(out: &mut W, estimate: &Estimate) -> Result<()> {
    if let Some(bands) = &estimate.cutoffs {
        debug!(bands = bands.len(), "Writing cutoff table");
        write_cutoffs(out, bands)?;
    }
    writeln!(
        out,
        "Estimated grade for percentile {}: {}",
        estimate.percentile, estimate.grade
    )?;
    Ok(())
}

/// Writes the estimate as pretty-printed JSON with a trailing newline.
pub fn write_json<W: Write>(out: &mut W, estimate: &Estimate) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, estimate)?;
    writeln!(out)?;
    Ok(())
}
