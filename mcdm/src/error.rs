use thiserror::Error;

/// Failures surfaced by an analysis run.
///
/// Every variant aborts the run at the stage that detects it; partial
/// scores or ranks are never returned.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AnalysisError {
    /// No alternatives were supplied.
    #[error("no alternatives to analyze")]
    EmptyInput,
    /// A configured criterion has no entry in the weight mapping, or an
    /// alternative has no finite value for it.
    #[error("missing or non-finite value for criterion `{0}`")]
    MissingCriterion(String),
    /// A criterion name appears more than once across the cost/benefit
    /// partition, which would duplicate its column in the decision matrix.
    #[error("criterion `{0}` appears more than once in the cost/benefit partition")]
    DuplicateCriterion(String),
    /// Weights over the active criterion set must sum to 1.0, within an
    /// absolute tolerance of 0.01.
    #[error("criterion weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },
    /// A weighted criterion column has zero variance, so it cannot separate
    /// the alternatives and vector normalization may be undefined for it.
    #[error("criterion `{0}` has the same value for every alternative")]
    DegenerateCriterion(String),
    /// An alternative coincides with both ideal points, which leaves its
    /// relative closeness undefined.
    #[error("alternative at row {row} is equidistant from both ideal points")]
    DegenerateScore { row: usize },
}
