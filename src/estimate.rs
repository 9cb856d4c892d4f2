//! A single grade estimate and everything needed to report it.

use serde::Serialize;

use crate::cutoff::{CutoffTable, GradeBand};
use crate::distribution::Distribution;
use crate::error::GradeError;
use crate::percentile::Percentile;

/// The result of looking up one rank against one distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub distribution: String,
    pub index: i64,
    pub total: i64,
    pub percentile: Percentile,
    pub grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoffs: Option<Vec<GradeBand>>,
}

impl Estimate {
    /// Validates the rank, builds the cutoff table and looks up the grade.
    ///
    /// Nothing is computed from the table until the rank has been validated.
    /// `with_cutoffs` keeps a copy of every band for verbose reporting.
    pub fn compute(
        distribution: &Distribution,
        index: i64,
        total: i64,
        with_cutoffs: bool,
    ) -> Result<Self, GradeError> {
        let percentile = Percentile::from_rank(index, total)?;
        let table = CutoffTable::from_distribution(distribution)?;
        let grade = table.lookup(percentile.value())?.to_string();

        Ok(Self {
            distribution: distribution.name.clone(),
            index,
            total,
            percentile,
            grade,
            cutoffs: with_cutoffs.then(|| table.bands().to_vec()),
        })
    }
}
