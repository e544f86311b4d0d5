// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Compare multicast routing strategies on a ring interconnect.
//!
//! A ring of nodes is generated with random temperatures and link
//! utilizations, optionally overwritten by a fixed [Scenario], and split
//! into partitions. Every source then routes to every target twice:
//!  - with TempCon, which avoids hot nodes and congested links,
//!  - with shortest path first, which only counts hops.
//!
//! The resulting paths are reduced to metrics so that the two strategies can
//! be compared.
//!
//! # Examples
//!
//! Run the default 20 node ring with the lower half congested:
//! ```txt
//! cargo run --bin sim-ringcast --release -- --scenario high_congestion --seed 7
//! ```
//!
//! Route from three sources with a temperature-heavy weighting:
//! ```txt
//! cargo run --bin sim-ringcast --release -- --sources 0,7,14 --wc 0.2 --wt 0.8
//! ```

use log::info;
use ringcast_models::partition::{Partition, partition_nodes};
use ringcast_models::report::{
    NodeMetrics, PartitionMetrics, PathMetrics, StrategySummary, node_metrics,
    partition_metrics, path_metrics,
};
use ringcast_models::ring::{Ring, create_ring, seeded_rng};
use ringcast_models::routing::spf::ShortestPathFirst;
use ringcast_models::routing::tempcon::TempCon;
use ringcast_models::routing::{MulticastRoutes, RoutingStrategy, route_multicast};
use ringcast_models::scenario::Scenario;
use ringcast_models::types::RingResult;

use crate::config::SimConfig;

pub mod config;

/// Everything produced by a single simulation run.
#[derive(Clone, Debug)]
pub struct SimulationOutcome {
    /// Seed the ring attributes were generated from.
    pub seed: u64,
    pub ring: Ring,
    pub scenario: Option<Scenario>,
    pub partitions: Vec<Partition>,
    pub tempcon: MulticastRoutes,
    pub spf: MulticastRoutes,
    pub tempcon_paths: Vec<PathMetrics>,
    pub spf_paths: Vec<PathMetrics>,
    pub nodes: Vec<NodeMetrics>,
    pub partition_metrics: Vec<PartitionMetrics>,

    /// TempCon first, then shortest path first.
    pub summaries: Vec<StrategySummary>,
}

/// Generate, route and measure the ring described by `config`.
pub fn run_simulation(config: &SimConfig) -> RingResult<SimulationOutcome> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("Using seed {seed}");

    let mut ring = create_ring(config.num_nodes()?, &mut seeded_rng(seed))?;
    let scenario = config.to_scenario()?;
    if let Some(scenario) = &scenario {
        scenario.apply(&mut ring)?;
    }
    let partitions = partition_nodes(&mut ring, config.partition_size()?)?;

    let weights = config.weights()?;
    let tempcon_strategy = TempCon::with_weights(weights);
    let sources = config.sources()?;
    let targets = config.targets()?;

    let tempcon = route_multicast(&tempcon_strategy, &ring, sources, targets)?;
    let spf = route_multicast(&ShortestPathFirst, &ring, sources, targets)?;

    let summaries = vec![
        StrategySummary::new(tempcon_strategy.name(), &ring, &tempcon)?,
        StrategySummary::new(ShortestPathFirst.name(), &ring, &spf)?,
    ];

    Ok(SimulationOutcome {
        seed,
        tempcon_paths: path_metrics(&ring, &tempcon, &weights)?,
        spf_paths: path_metrics(&ring, &spf, &weights)?,
        nodes: node_metrics(&ring)?,
        partition_metrics: partition_metrics(&ring, &partitions)?,
        ring,
        scenario,
        partitions,
        tempcon,
        spf,
        summaries,
    })
}

const PATH_TABLE_HEADER: &str = "strategy | src | len |   temp |   cong |   score | path";

fn path_row(name: &str, m: &PathMetrics) -> String {
    format!(
        "{name:>8} | {:>3} | {:>3} | {:>6.2} | {:>6.2} | {:>7.3} | {}",
        m.source, m.length, m.avg_temperature, m.avg_congestion, m.weighted_score, m.path
    )
}

fn log_paths(name: &str, paths: &[PathMetrics]) {
    for m in paths {
        info!("{}", path_row(name, m));
    }
}

/// Log the routes of both strategies followed by their summaries.
pub fn log_comparison(outcome: &SimulationOutcome) {
    info!(
        "Ring of {} nodes in {} partitions, average temperature {:.2}, average utilization {:.2}",
        outcome.ring.num_nodes(),
        outcome.partitions.len(),
        outcome.ring.avg_node_temperature(),
        outcome.ring.avg_edge_utilization()
    );
    if let Some(scenario) = &outcome.scenario {
        info!("Scenario: {scenario}");
    }

    info!("{PATH_TABLE_HEADER}");
    log_paths("TempCon", &outcome.tempcon_paths);
    log_paths("SPF", &outcome.spf_paths);

    for summary in &outcome.summaries {
        info!(
            "{}: {} paths, average length {:.2}, average temperature {:.2}, average score {:.3}",
            summary.name,
            summary.num_paths,
            summary.avg_path_length,
            summary.avg_temperature,
            summary.avg_score
        );
    }
}

#[test]
fn path_table_columns_align() {
    let metrics = PathMetrics {
        source: 0,
        path: "0->1->2".to_string(),
        length: 3,
        avg_temperature: 35.0,
        max_temperature: 35.0,
        avg_congestion: 40.0,
        max_congestion: 40.0,
        weighted_score: 38.5,
    };
    let separators = |line: &str| -> Vec<usize> {
        line.match_indices('|').map(|(i, _)| i).collect()
    };
    assert_eq!(
        separators(&path_row("TempCon", &metrics)),
        separators(PATH_TABLE_HEADER)
    );
}
