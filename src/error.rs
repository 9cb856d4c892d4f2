//! Error types for percentile validation and cutoff lookup.

/// Broad category of a [`GradeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The rank or class size given by the user cannot form a percentile.
    InvalidInput,
    /// A validated percentile fell outside every cutoff in the table.
    Domain,
    /// The grade distribution cannot produce a strictly ordered table.
    InvalidDistribution,
}

/// Everything that can go wrong between reading a rank and printing a grade.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    #[error("bad input for total: {total} (class size must be positive)")]
    NonPositiveTotal { total: i64 },

    #[error("relative index {index} must not be negative")]
    NegativeIndex { index: i64 },

    #[error("relative index {index} must not exceed the total {total}")]
    IndexExceedsTotal { index: i64, total: i64 },

    #[error("percentile {percentile} has no cutoff at or above it (largest cutoff is {largest})")]
    OutOfDomain { percentile: f64, largest: f64 },

    #[error("grade distribution has no grades")]
    EmptyDistribution,

    #[error("grade `{letter}` has a count of zero")]
    ZeroCount { letter: String },
}

impl GradeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GradeError::NonPositiveTotal { .. }
            | GradeError::NegativeIndex { .. }
            | GradeError::IndexExceedsTotal { .. } => ErrorKind::InvalidInput,
            GradeError::OutOfDomain { .. } => ErrorKind::Domain,
            GradeError::EmptyDistribution | GradeError::ZeroCount { .. } => {
                ErrorKind::InvalidDistribution
            }
        }
    }
}
