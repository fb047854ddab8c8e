use crate::{
    criterion, run_analysis, AnalysisRequest, MethodSet, Site, SiteRankingError, WeightProfile,
    TOP_RESULTS_LIMIT,
};
use mcdm::Alternative as _;

fn sites() -> Vec<Site> {
    let template = |code: &str, rent: f64, traffic: u32, area: f64| Site {
        site_code: code.to_owned(),
        address: format!("{code} Example Street"),
        rent_cost: rent,
        renovation_cost: rent * 0.1,
        competitor_count: traffic / 2,
        distance_to_warehouse: 5.0 + rent / 10_000_000.0,
        floor_area: area,
        front_width: area / 12.0,
        traffic_score: traffic,
        population_density: 1000.0 * traffic as f64,
    };
    vec![
        template("S001", 45_000_000.0, 9, 120.0),
        template("S002", 80_000_000.0, 6, 95.0),
        template("S003", 30_000_000.0, 4, 60.0),
        template("S004", 55_000_000.0, 8, 180.0),
    ]
}

#[test]
fn site_resolves_every_configured_criterion() {
    let site = &sites()[0];
    for name in criterion::COST.into_iter().chain(criterion::BENEFIT) {
        assert!(site.value(name).is_some(), "no value for {name}");
    }
    assert!(site.value("nonsense").is_none());
    assert_eq!(site.id(), "S001");
}

#[test]
fn balanced_profile_weights_sum_to_one() {
    let criteria = WeightProfile::balanced().criteria();
    let sum: f64 = criteria.names().filter_map(|n| criteria.weight(n)).sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert_eq!(criteria.n_cost(), 4);
    assert_eq!(criteria.len(), 8);
}

#[test]
fn analysis_reports_ranked_sites() {
    let methods = MethodSet::standard();
    let report = run_analysis(
        &methods,
        &AnalysisRequest::default(),
        &WeightProfile::balanced(),
        &sites(),
    )
    .unwrap();

    assert_eq!(report.method, "topsis");
    assert_eq!(report.strategy_name, "balanced");
    assert_eq!(report.sites_analyzed, 4);
    assert_eq!(report.top_sites.len(), 4);
    assert_eq!(report.top_sites[0].rank, 1);

    // Ranks come back sorted and dense.
    let ranks: Vec<u32> = report.top_sites.iter().map(|s| s.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);

    let stats = report.score_statistics;
    assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    assert!(stats.std > 0.0);
    assert!((0.0..=1.0).contains(&stats.min));
    assert!((0.0..=1.0).contains(&stats.max));
}

#[test]
fn top_n_truncates_the_report() {
    let methods = MethodSet::standard();
    let request = AnalysisRequest {
        top_n: 2,
        ..AnalysisRequest::default()
    };
    let report = run_analysis(&methods, &request, &WeightProfile::balanced(), &sites()).unwrap();
    assert_eq!(report.sites_analyzed, 4);
    assert_eq!(report.top_sites.len(), 2);
    assert_eq!(report.top_sites[0].rank, 1);
    assert_eq!(report.top_sites[1].rank, 2);
}

#[test]
fn unknown_method_is_rejected() {
    let methods = MethodSet::standard();
    let request = AnalysisRequest {
        method: "promethee".to_owned(),
        ..AnalysisRequest::default()
    };
    let err = run_analysis(&methods, &request, &WeightProfile::balanced(), &sites()).unwrap_err();
    assert!(matches!(err, SiteRankingError::UnknownMethod(name) if name == "promethee"));
}

#[test]
fn top_n_out_of_bounds_is_rejected() {
    let methods = MethodSet::standard();
    for top_n in [0, TOP_RESULTS_LIMIT + 1] {
        let request = AnalysisRequest {
            top_n,
            ..AnalysisRequest::default()
        };
        let err =
            run_analysis(&methods, &request, &WeightProfile::balanced(), &sites()).unwrap_err();
        assert!(matches!(err, SiteRankingError::InvalidTopN(n) if n == top_n));
    }
}

#[test]
fn analysis_errors_pass_through() {
    let methods = MethodSet::standard();
    let err = run_analysis(
        &methods,
        &AnalysisRequest::default(),
        &WeightProfile::balanced(),
        &[],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SiteRankingError::Analysis(mcdm::AnalysisError::EmptyInput)
    ));
}

#[test]
fn weight_profile_deserializes_with_default_description() {
    let profile: WeightProfile = serde_json::from_str(
        r#"{
            "strategy_name": "cost focused",
            "weight_rent_cost": 0.3,
            "weight_renovation_cost": 0.15,
            "weight_competitor_count": 0.1,
            "weight_warehouse_distance": 0.15,
            "weight_floor_area": 0.1,
            "weight_front_width": 0.05,
            "weight_traffic_score": 0.1,
            "weight_population_density": 0.05
        }"#,
    )
    .unwrap();
    assert_eq!(profile.strategy_name, "cost focused");
    assert!(profile.description.is_empty());

    let criteria = profile.criteria();
    let sum: f64 = criteria.names().filter_map(|n| criteria.weight(n)).sum();
    assert!((sum - 1.0).abs() < 1e-9);
}
