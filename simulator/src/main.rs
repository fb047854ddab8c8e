use std::io::stdin;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use site_selection::{run_analysis, AnalysisRequest, MethodSet, Site, WeightProfile};

/// Feeds candidate sites through an analysis run and prints the report as
/// JSON. Sites are read as CSV from stdin, or generated with `--random N`.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let sites = match std::env::args().nth(1).as_deref() {
        Some("--random") => {
            let count = match std::env::args().nth(2) {
                Some(count) => count.parse()?,
                None => 80,
            };
            random_sites(count)
        }
        _ => read_sites(),
    };

    let methods = MethodSet::standard();
    let report = run_analysis(
        &methods,
        &AnalysisRequest::default(),
        &WeightProfile::balanced(),
        &sites,
    )?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn read_sites() -> Vec<Site> {
    let header = "site_code,address,rent_cost,renovation_cost,competitor_count,\
                  distance_to_warehouse,floor_area,front_width,traffic_score,population_density";
    stdin()
        .lines()
        .filter_map(|line| {
            let line = line.expect("read stdin");
            if line.is_empty() || line.starts_with(header) {
                return None;
            }
            let fields = line.split(',').collect::<Vec<&str>>();
            Some(Site {
                site_code: fields[0].to_owned(),
                address: fields[1].to_owned(),
                rent_cost: fields[2].parse().expect("rent_cost"),
                renovation_cost: fields[3].parse().expect("renovation_cost"),
                competitor_count: fields[4].parse().expect("competitor_count"),
                distance_to_warehouse: fields[5].parse().expect("distance_to_warehouse"),
                floor_area: fields[6].parse().expect("floor_area"),
                front_width: fields[7].parse().expect("front_width"),
                traffic_score: fields[8].parse().expect("traffic_score"),
                population_density: fields[9].parse().expect("population_density"),
            })
        })
        .collect()
}

fn random_sites(count: usize) -> Vec<Site> {
    let mut rng = SmallRng::from_entropy();
    (0..count)
        .map(|i| {
            let floor_area = rng.gen_range(40.0..200.0);
            Site {
                site_code: format!("SITE{:03}", i + 1),
                address: format!("{} Example Street", i + 1),
                rent_cost: rng.gen_range(8.0..120.0) * 1e6,
                renovation_cost: floor_area * rng.gen_range(0.8..2.0) * 1e6,
                competitor_count: rng.gen_range(0..=15),
                distance_to_warehouse: rng.gen_range(1.0..25.0),
                floor_area,
                front_width: rng.gen_range(4.0..15.0),
                traffic_score: rng.gen_range(3..=10),
                population_density: rng.gen_range(1_000.0..45_000.0),
            }
        })
        .collect()
}
