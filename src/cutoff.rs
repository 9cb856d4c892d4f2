//! Cumulative percentile cutoffs and ceiling lookup.
//!
//! A [`CutoffTable`] turns a [`Distribution`] into ascending cumulative
//! percentiles. For the built-in distribution:
//!
//! | Letter | Cutoff |
//! |--------|--------|
//! | A+     | 0.0170 |
//! | A      | 0.2244 |
//! | A-     | 0.2472 |
//! | B+     | 0.4375 |
//! | B      | 0.6733 |
//! | B-     | 0.7812 |
//! | C+     | 0.8977 |
//! | C      | 0.9631 |
//! | C-     | 0.9688 |
//! | D      | 0.9858 |
//! | F      | 1.0000 |
//!
//! A percentile gets the letter of the smallest cutoff at or above it.

use serde::Serialize;
use tracing::debug;

use crate::distribution::Distribution;
use crate::error::GradeError;

/// A cumulative percentile and the letter that applies at or below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeBand {
    pub letter: String,
    pub cutoff: f64,
}

/// Grade bands sorted by strictly increasing cutoff. The last cutoff is 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoffTable {
    bands: Vec<GradeBand>,
}

impl CutoffTable {
    /// Builds the table from running sums of `distribution`'s counts.
    ///
    /// The final cutoff is pinned to exactly `1.0` so that a percentile of 1
    /// always resolves, whatever rounding the division produced.
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution is empty or any count is zero.
    pub fn from_distribution(distribution: &Distribution) -> Result<Self, GradeError> {
        if distribution.grades.is_empty() {
            return Err(GradeError::EmptyDistribution);
        }
        if let Some(g) = distribution.grades.iter().find(|g| g.count == 0) {
            return Err(GradeError::ZeroCount {
                letter: g.letter.clone(),
            });
        }

        let total = distribution.total() as f64;
        let last = distribution.grades.len() - 1;
        let mut running = 0u64;

        let bands = distribution
            .grades
            .iter()
            .enumerate()
            .map(|(i, g)| {
                running += u64::from(g.count);
                let cutoff = if i == last {
                    1.0
                } else {
                    running as f64 / total
                };
                GradeBand {
                    letter: g.letter.clone(),
                    cutoff,
                }
            })
            .collect::<Vec<_>>();

        let table = Self { bands };
        debug!(
            distribution = %distribution.name,
            bands = table.len(),
            total,
            "Cutoff table built"
        );

        Ok(table)
    }

    /// Returns the letter for `percentile` using ceiling search.
    ///
    /// An exact match on a cutoff returns that cutoff's letter; otherwise the
    /// letter of the next larger cutoff is returned. Values below zero land in
    /// the first band.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::OutOfDomain`] if `percentile` is NaN or larger
    /// than every cutoff.
    pub fn lookup(&self, percentile: f64) -> Result<&str, GradeError> {
        let largest = self.bands.last().map_or(0.0, |b| b.cutoff);
        if percentile.is_nan() {
            return Err(GradeError::OutOfDomain {
                percentile,
                largest,
            });
        }

        let idx = self.bands.partition_point(|b| b.cutoff < percentile);
        let band = self.bands.get(idx).ok_or(GradeError::OutOfDomain {
            percentile,
            largest,
        })?;

        debug!(percentile, cutoff = band.cutoff, letter = %band.letter, "Ceiling lookup");
        Ok(band.letter.as_str())
    }

    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }

    pub(crate) fn len(&self) -> usize {
        self.bands.len()
    }
}
