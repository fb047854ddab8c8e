mod error;
pub mod matrix;
mod method;
pub mod num;
mod rank;
pub mod topsis;


use std::collections::{BTreeMap, BTreeSet};

pub use crate::error::AnalysisError;
pub use crate::matrix::Matrix;
pub use crate::method::{Method, MethodSet, Outcome};
pub use crate::num::Normalized;
pub use crate::topsis::Topsis;

/// Absolute tolerance on the sum of criterion weights.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// One candidate under evaluation: a stable identity plus a numeric
/// measurement per named criterion.
pub trait Alternative {
    type Id: Eq + Ord;
    fn id(&self) -> Self::Id;
    /// The raw measurement for `criterion`, if this alternative has one.
    fn value(&self, criterion: &str) -> Option<f64>;
}

/// Criterion configuration for one analysis run: an ordered cost/benefit
/// partition plus a weight per criterion name.
#[derive(Clone, Debug, PartialEq)]
pub struct Criteria {
    cost: Vec<String>,
    benefit: Vec<String>,
    weights: BTreeMap<String, f64>,
}

impl Criteria {
    pub fn new(cost: Vec<String>, benefit: Vec<String>, weights: BTreeMap<String, f64>) -> Self {
        Self {
            cost,
            benefit,
            weights,
        }
    }

    /// Criterion names in column order: the cost block first, then the
    /// benefit block.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cost.iter().chain(&self.benefit).map(String::as_str)
    }

    pub fn n_cost(&self) -> usize {
        self.cost.len()
    }

    pub fn len(&self) -> usize {
        self.cost.len() + self.benefit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn weight(&self, criterion: &str) -> Option<f64> {
        self.weights.get(criterion).copied()
    }
}

/// An assembled decision: the raw matrix plus the column metadata every
/// scoring method needs. Rows are alternatives in input order; columns are
/// the cost criteria followed by the benefit criteria.
#[derive(Clone, Debug)]
pub struct Decision {
    matrix: Matrix,
    weights: Vec<f64>,
    criteria: Vec<String>,
    n_cost: usize,
}

impl Decision {
    /// Build the decision matrix and the aligned weight vector, failing
    /// fast before any numeric work: no alternatives, a criterion missing
    /// from the weight mapping or lacking a finite value on some
    /// alternative, a duplicated criterion name, or weights that do not sum
    /// to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
    pub fn assemble<A: Alternative>(
        alternatives: &[A],
        criteria: &Criteria,
    ) -> Result<Self, AnalysisError> {
        if alternatives.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let names: Vec<String> = criteria.names().map(str::to_owned).collect();
        let mut seen = BTreeSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(AnalysisError::DuplicateCriterion(name.clone()));
            }
            if criteria.weight(name).is_none() {
                return Err(AnalysisError::MissingCriterion(name.clone()));
            }
        }

        let mut rows = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            let mut row = Vec::with_capacity(names.len());
            for name in &names {
                match alternative.value(name) {
                    Some(value) if value.is_finite() => row.push(value),
                    _ => return Err(AnalysisError::MissingCriterion(name.clone())),
                }
            }
            rows.push(row);
        }

        let sum: f64 = names.iter().filter_map(|name| criteria.weight(name)).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AnalysisError::InvalidWeights { sum });
        }

        Ok(Self {
            matrix: Matrix::from_rows(rows),
            weights: names
                .iter()
                .filter_map(|name| criteria.weight(name))
                .collect(),
            criteria: names,
            n_cost: criteria.n_cost(),
        })
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Weights aligned to the matrix columns.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of leading cost columns; the remainder are benefit columns.
    pub fn n_cost(&self) -> usize {
        self.n_cost
    }

    pub fn criterion(&self, col: usize) -> &str {
        &self.criteria[col]
    }
}

/// Score and rank attached back to an alternative's identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Ranked<Id> {
    pub id: Id,
    pub score: Normalized,
    /// 1-based dense competition rank; ties share the minimum rank.
    pub rank: u32,
}

/// Run `method` over `alternatives`, returning one outcome per alternative
/// in input order.
pub fn analyze<A: Alternative>(
    method: &dyn Method,
    alternatives: &[A],
    criteria: &Criteria,
) -> Result<Vec<Ranked<A::Id>>, AnalysisError> {
    let decision = Decision::assemble(alternatives, criteria)?;
    let outcomes = method.evaluate(&decision)?;
    Ok(alternatives
        .iter()
        .zip(outcomes)
        .map(|(alternative, outcome)| Ranked {
            id: alternative.id(),
            score: outcome.score,
            rank: outcome.rank,
        })
        .collect())
}
