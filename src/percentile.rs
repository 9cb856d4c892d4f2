//! Turning a class rank into a validated percentile.

use serde::Serialize;

use crate::error::GradeError;

/// A rank divided by class size, guaranteed to lie in `[0, 1]`.
///
/// 0 is the top of the class, 1 the bottom.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentile(f64);

impl Percentile {
    /// Computes `index / total`, rejecting inputs outside the class.
    ///
    /// # Errors
    ///
    /// Returns an error if `total` is not positive, `index` is negative, or
    /// `index` exceeds `total`.
    pub fn from_rank(index: i64, total: i64) -> Result<Self, GradeError> {
        if total <= 0 {
            return Err(GradeError::NonPositiveTotal { total });
        }
        if index < 0 {
            return Err(GradeError::NegativeIndex { index });
        }
        if index > total {
            return Err(GradeError::IndexExceedsTotal { index, total });
        }

        Ok(Self(index as f64 / total as f64))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Percentile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug keeps the trailing `.0` on whole numbers.
        write!(f, "{:?}", self.0)
    }
}
