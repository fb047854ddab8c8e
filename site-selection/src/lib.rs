//! Retail site selection on top of the generic `mcdm` core.
//!
//! Candidate sites are measured on four cost criteria (rent, renovation,
//! competitors, warehouse distance) and four benefit criteria (floor area,
//! front width, traffic, population density). An expert weight profile sets
//! the tradeoffs, and an analysis run reports the top-ranked sites together
//! with score statistics.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use mcdm::{Alternative, AnalysisError, Criteria, Ranked};

pub use mcdm::MethodSet;

#[cfg(test)]
mod test;

/// Upper bound on how many ranked sites a report may request.
pub const TOP_RESULTS_LIMIT: usize = 50;

/// Criterion names, matching the measurement fields on [`Site`].
pub mod criterion {
    pub const RENT_COST: &str = "rent_cost";
    pub const RENOVATION_COST: &str = "renovation_cost";
    pub const COMPETITOR_COUNT: &str = "competitor_count";
    pub const DISTANCE_TO_WAREHOUSE: &str = "distance_to_warehouse";
    pub const FLOOR_AREA: &str = "floor_area";
    pub const FRONT_WIDTH: &str = "front_width";
    pub const TRAFFIC_SCORE: &str = "traffic_score";
    pub const POPULATION_DENSITY: &str = "population_density";

    /// Lower raw values are preferable.
    pub const COST: [&str; 4] = [
        RENT_COST,
        RENOVATION_COST,
        COMPETITOR_COUNT,
        DISTANCE_TO_WAREHOUSE,
    ];
    /// Higher raw values are preferable.
    pub const BENEFIT: [&str; 4] = [
        FLOOR_AREA,
        FRONT_WIDTH,
        TRAFFIC_SCORE,
        POPULATION_DENSITY,
    ];
}

/// One candidate retail site and its measured attributes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Site {
    pub site_code: String,
    pub address: String,
    pub rent_cost: f64,
    pub renovation_cost: f64,
    pub competitor_count: u32,
    pub distance_to_warehouse: f64,
    pub floor_area: f64,
    pub front_width: f64,
    pub traffic_score: u32,
    pub population_density: f64,
}

impl Alternative for Site {
    type Id = String;

    fn id(&self) -> String {
        self.site_code.clone()
    }

    fn value(&self, criterion: &str) -> Option<f64> {
        match criterion {
            criterion::RENT_COST => Some(self.rent_cost),
            criterion::RENOVATION_COST => Some(self.renovation_cost),
            criterion::COMPETITOR_COUNT => Some(self.competitor_count as f64),
            criterion::DISTANCE_TO_WAREHOUSE => Some(self.distance_to_warehouse),
            criterion::FLOOR_AREA => Some(self.floor_area),
            criterion::FRONT_WIDTH => Some(self.front_width),
            criterion::TRAFFIC_SCORE => Some(self.traffic_score as f64),
            criterion::POPULATION_DENSITY => Some(self.population_density),
            _ => None,
        }
    }
}

/// A named expert weighting of the eight site criteria. Weights are
/// expected to sum to 1.0; the core validates this on every run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeightProfile {
    pub strategy_name: String,
    #[serde(default)]
    pub description: String,
    pub weight_rent_cost: f64,
    pub weight_renovation_cost: f64,
    pub weight_competitor_count: f64,
    pub weight_warehouse_distance: f64,
    pub weight_floor_area: f64,
    pub weight_front_width: f64,
    pub weight_traffic_score: f64,
    pub weight_population_density: f64,
}

impl WeightProfile {
    /// Even-handed defaults: half the weight on the cost block and half on
    /// the benefit block, with rent and foot traffic as the leading
    /// concerns.
    pub fn balanced() -> Self {
        Self {
            strategy_name: "balanced".to_owned(),
            description: "Even split between cost and benefit criteria".to_owned(),
            weight_rent_cost: 0.20,
            weight_renovation_cost: 0.10,
            weight_competitor_count: 0.10,
            weight_warehouse_distance: 0.10,
            weight_floor_area: 0.125,
            weight_front_width: 0.075,
            weight_traffic_score: 0.175,
            weight_population_density: 0.125,
        }
    }

    /// The criterion partition and weights in the form the core consumes.
    pub fn criteria(&self) -> Criteria {
        let weights = BTreeMap::from([
            (criterion::RENT_COST.to_owned(), self.weight_rent_cost),
            (
                criterion::RENOVATION_COST.to_owned(),
                self.weight_renovation_cost,
            ),
            (
                criterion::COMPETITOR_COUNT.to_owned(),
                self.weight_competitor_count,
            ),
            (
                criterion::DISTANCE_TO_WAREHOUSE.to_owned(),
                self.weight_warehouse_distance,
            ),
            (criterion::FLOOR_AREA.to_owned(), self.weight_floor_area),
            (criterion::FRONT_WIDTH.to_owned(), self.weight_front_width),
            (
                criterion::TRAFFIC_SCORE.to_owned(),
                self.weight_traffic_score,
            ),
            (
                criterion::POPULATION_DENSITY.to_owned(),
                self.weight_population_density,
            ),
        ]);
        Criteria::new(
            criterion::COST.map(str::to_owned).to_vec(),
            criterion::BENEFIT.map(str::to_owned).to_vec(),
            weights,
        )
    }
}

#[derive(Debug, Error)]
pub enum SiteRankingError {
    #[error("unknown ranking method `{0}`")]
    UnknownMethod(String),
    #[error("top_n must be between 1 and {TOP_RESULTS_LIMIT}, got {0}")]
    InvalidTopN(usize),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Parameters for one analysis run.
#[derive(Clone, Debug, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            method: default_method(),
            top_n: default_top_n(),
        }
    }
}

fn default_method() -> String {
    "topsis".to_owned()
}

fn default_top_n() -> usize {
    10
}

/// Summary statistics over all site scores in a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoreStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for a single site.
    pub std: f64,
}

impl ScoreStatistics {
    fn from_scores(scores: &[f64]) -> Self {
        let n = scores.len() as f64;
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = scores.iter().sum::<f64>() / n;
        let std = if scores.len() > 1 {
            let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0);
            variance.sqrt()
        } else {
            0.0
        };
        Self {
            min,
            max,
            mean,
            std,
        }
    }
}

/// One ranked site in a report.
#[derive(Clone, Debug, Serialize)]
pub struct RankedSite {
    pub rank: u32,
    pub site_code: String,
    pub address: String,
    pub score: f64,
    pub rent_cost: f64,
    pub floor_area: f64,
    pub traffic_score: u32,
    pub competitor_count: u32,
}

/// Outcome of an analysis run: the top-ranked sites plus run metadata.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    pub method: String,
    pub strategy_name: String,
    pub sites_analyzed: usize,
    pub execution_time_ms: u64,
    pub score_statistics: ScoreStatistics,
    pub top_sites: Vec<RankedSite>,
}

/// Rank `sites` with the requested method and weight profile, returning the
/// top `request.top_n` of them by rank.
pub fn run_analysis(
    methods: &MethodSet,
    request: &AnalysisRequest,
    profile: &WeightProfile,
    sites: &[Site],
) -> Result<AnalysisReport, SiteRankingError> {
    if request.top_n < 1 || request.top_n > TOP_RESULTS_LIMIT {
        return Err(SiteRankingError::InvalidTopN(request.top_n));
    }
    let method = methods
        .get(&request.method)
        .ok_or_else(|| SiteRankingError::UnknownMethod(request.method.clone()))?;

    info!(
        method = method.name(),
        strategy = %profile.strategy_name,
        sites = sites.len(),
        "starting analysis"
    );
    let started = Instant::now();
    let ranked = mcdm::analyze(method, sites, &profile.criteria())?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let scores: Vec<f64> = ranked.iter().map(|r| r.score.as_f64()).collect();
    let mut by_rank: Vec<(&Site, &Ranked<String>)> = sites.iter().zip(&ranked).collect();
    // Stable sort keeps input order within tied ranks.
    by_rank.sort_by_key(|(_, outcome)| outcome.rank);
    let top_sites = by_rank
        .iter()
        .take(request.top_n)
        .map(|(site, outcome)| RankedSite {
            rank: outcome.rank,
            site_code: site.site_code.clone(),
            address: site.address.clone(),
            score: outcome.score.as_f64(),
            rent_cost: site.rent_cost,
            floor_area: site.floor_area,
            traffic_score: site.traffic_score,
            competitor_count: site.competitor_count,
        })
        .collect();

    info!(elapsed_ms, "analysis complete");

    Ok(AnalysisReport {
        method: method.name().to_owned(),
        strategy_name: profile.strategy_name.clone(),
        sites_analyzed: sites.len(),
        execution_time_ms: elapsed_ms,
        score_statistics: ScoreStatistics::from_scores(&scores),
        top_sites,
    })
}
