//! Technique for Order Preference by Similarity to Ideal Solution.
//!
//! The pipeline is the textbook one: vector-normalize the decision matrix,
//! weight it, resolve the two ideal points with the cost/benefit direction
//! flip, measure each alternative's Euclidean distance to both, and score
//! by relative closeness to the worst point. Higher scores are better.

use crate::matrix::Matrix;
use crate::rank::dense_min_ranks;
use crate::{AnalysisError, Decision, Method, Normalized, Outcome};

pub struct Topsis;

impl Method for Topsis {
    fn name(&self) -> &'static str {
        "topsis"
    }

    fn evaluate(&self, decision: &Decision) -> Result<Vec<Outcome>, AnalysisError> {
        let weighted = weight(&normalize(decision.matrix()), decision.weights());
        check_columns(&weighted, decision)?;
        let (ideal_best, ideal_worst) = ideal_points(&weighted, decision.n_cost());
        let scores = closeness_scores(&weighted, &ideal_best, &ideal_worst)?;
        let ranks = dense_min_ranks(&scores);
        Ok(scores
            .into_iter()
            .zip(ranks)
            .map(|(score, rank)| Outcome { score, rank })
            .collect())
    }
}

/// Divide each column by its Euclidean norm. An all-zero column divides to
/// NaN; that is deliberate — `check_columns` turns it into an error before
/// scoring instead of substituting a value.
fn normalize(matrix: &Matrix) -> Matrix {
    let norms: Vec<f64> = (0..matrix.cols())
        .map(|col| matrix.column(col).map(|v| v * v).sum::<f64>().sqrt())
        .collect();
    Matrix::from_fn(matrix.rows(), matrix.cols(), |row, col| {
        matrix.get(row, col) / norms[col]
    })
}

/// Multiply each column by its weight. A zero weight zeroes the column
/// outright, removing it from consideration even when its normalization was
/// undefined.
fn weight(matrix: &Matrix, weights: &[f64]) -> Matrix {
    Matrix::from_fn(matrix.rows(), matrix.cols(), |row, col| {
        if weights[col] == 0.0 {
            0.0
        } else {
            matrix.get(row, col) * weights[col]
        }
    })
}

/// Reject columns that cannot separate the alternatives: non-finite cells
/// come from normalizing an all-zero column, and a constant column with
/// nonzero weight pins every alternative to both ideal points at once.
///
/// The finiteness check applies to any number of rows; the constancy check
/// only to two or more, since a single row is trivially constant and falls
/// through to the score stage, which reports it as a degenerate score.
fn check_columns(weighted: &Matrix, decision: &Decision) -> Result<(), AnalysisError> {
    for col in 0..weighted.cols() {
        if decision.weights()[col] == 0.0 {
            continue;
        }
        let mut finite = true;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in weighted.column(col) {
            finite &= value.is_finite();
            min = min.min(value);
            max = max.max(value);
        }
        if !finite || (weighted.rows() > 1 && min == max) {
            return Err(AnalysisError::DegenerateCriterion(
                decision.criterion(col).to_owned(),
            ));
        }
    }
    Ok(())
}

/// Per-column best and worst attainable weighted values. Smaller values
/// anchor "best" for the leading cost block, larger values for the benefit
/// block.
fn ideal_points(weighted: &Matrix, n_cost: usize) -> (Vec<f64>, Vec<f64>) {
    let mut ideal_best = Vec::with_capacity(weighted.cols());
    let mut ideal_worst = Vec::with_capacity(weighted.cols());
    for col in 0..weighted.cols() {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in weighted.column(col) {
            min = min.min(value);
            max = max.max(value);
        }
        if col < n_cost {
            ideal_best.push(min);
            ideal_worst.push(max);
        } else {
            ideal_best.push(max);
            ideal_worst.push(min);
        }
    }
    (ideal_best, ideal_worst)
}

fn closeness_scores(
    weighted: &Matrix,
    ideal_best: &[f64],
    ideal_worst: &[f64],
) -> Result<Vec<Normalized>, AnalysisError> {
    (0..weighted.rows())
        .map(|row| {
            let dist_best = distance(weighted.row(row), ideal_best);
            let dist_worst = distance(weighted.row(row), ideal_worst);
            if dist_best + dist_worst == 0.0 {
                return Err(AnalysisError::DegenerateScore { row });
            }
            // A ratio of non-negative distances over their sum is always in [0, 1].
            Ok(Normalized::new(dist_worst / (dist_best + dist_worst)).unwrap())
        })
        .collect()
}

fn distance(row: &[f64], ideal: &[f64]) -> f64 {
    row.iter()
        .zip(ideal)
        .map(|(value, ideal)| (value - ideal).powi(2))
        .sum::<f64>()
        .sqrt()
}
