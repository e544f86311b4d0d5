// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Metrics derived from a routed ring for reporting.
//!
//! These are the rows a reporting layer renders: one per routed path, one per
//! node, one per partition and one summary per routing strategy. Formatting
//! them to files is left to the caller.

use crate::partition::Partition;
use crate::ring::Ring;
use crate::routing::MulticastRoutes;
use crate::scoring::Weights;
use crate::types::{NodeId, RingResult};

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Render a sequence of node ids joined by `separator`.
#[must_use]
pub fn join_nodes(nodes: &[NodeId], separator: &str) -> String {
    nodes
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn path_utilizations(ring: &Ring, path: &[NodeId]) -> RingResult<Vec<f64>> {
    path.windows(2)
        .map(|pair| ring.utilization(pair[0], pair[1]))
        .collect()
}

fn node_temperatures(ring: &Ring, nodes: &[NodeId]) -> RingResult<Vec<f64>> {
    nodes.iter().map(|&n| ring.temperature(n)).collect()
}

/// Utilization of both links of a node.
fn incident_utilizations(ring: &Ring, node: NodeId) -> RingResult<Vec<f64>> {
    ring.neighbours(node)?
        .iter()
        .map(|&neighbour| ring.utilization(node, neighbour))
        .collect()
}

/// Per-path metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMetrics {
    pub source: NodeId,

    /// Nodes joined by `->`.
    pub path: String,

    /// Number of nodes on the path.
    pub length: usize,
    pub avg_temperature: f64,
    pub max_temperature: f64,

    /// Average edge utilization; 0 for single-node paths.
    pub avg_congestion: f64,
    pub max_congestion: f64,

    /// `wc * avg_congestion + wt * avg_temperature`.
    pub weighted_score: f64,
}

impl PathMetrics {
    pub fn new(
        ring: &Ring,
        source: NodeId,
        path: &[NodeId],
        weights: &Weights,
    ) -> RingResult<Self> {
        let temperatures = node_temperatures(ring, path)?;
        let utilizations = path_utilizations(ring, path)?;

        let avg_temperature = mean(&temperatures);
        let avg_congestion = mean(&utilizations);
        Ok(Self {
            source,
            path: join_nodes(path, "->"),
            length: path.len(),
            avg_temperature,
            max_temperature: max(&temperatures),
            avg_congestion,
            max_congestion: max(&utilizations),
            weighted_score: weights.congestion() * avg_congestion
                + weights.temperature() * avg_temperature,
        })
    }
}

/// Metrics for every path in `routes`, source by source.
pub fn path_metrics(
    ring: &Ring,
    routes: &MulticastRoutes,
    weights: &Weights,
) -> RingResult<Vec<PathMetrics>> {
    routes
        .all_paths()
        .map(|(source, path)| PathMetrics::new(ring, source, path, weights))
        .collect()
}

/// Per-node metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeMetrics {
    pub node: NodeId,
    pub temperature: f64,
    pub partition: Option<usize>,

    /// Average utilization of the node's two links.
    pub avg_edge_congestion: f64,
}

pub fn node_metrics(ring: &Ring) -> RingResult<Vec<NodeMetrics>> {
    ring.nodes()
        .iter()
        .map(|node| -> RingResult<NodeMetrics> {
            Ok(NodeMetrics {
                node: node.id(),
                temperature: node.temperature(),
                partition: node.partition(),
                avg_edge_congestion: mean(&incident_utilizations(ring, node.id())?),
            })
        })
        .collect()
}

/// Per-partition metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionMetrics {
    pub partition: usize,

    /// Member nodes joined by `,`.
    pub nodes: String,
    pub avg_temperature: f64,
    pub max_temperature: f64,

    /// Average utilization over the links of every member node. Links
    /// internal to the partition are counted once from each end.
    pub avg_congestion: f64,
}

pub fn partition_metrics(
    ring: &Ring,
    partitions: &[Partition],
) -> RingResult<Vec<PartitionMetrics>> {
    partitions
        .iter()
        .enumerate()
        .map(|(index, partition)| -> RingResult<PartitionMetrics> {
            let temperatures = node_temperatures(ring, partition)?;
            let mut utilizations = Vec::with_capacity(2 * partition.len());
            for &node in partition {
                utilizations.extend(incident_utilizations(ring, node)?);
            }
            Ok(PartitionMetrics {
                partition: index,
                nodes: join_nodes(partition, ","),
                avg_temperature: mean(&temperatures),
                max_temperature: max(&temperatures),
                avg_congestion: mean(&utilizations),
            })
        })
        .collect()
}

/// Aggregate view of one routing strategy's results.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategySummary {
    pub name: String,
    pub num_paths: usize,
    pub avg_path_length: f64,

    /// Average temperature over every node visited by every path.
    pub avg_temperature: f64,

    /// Average of the scores reported by the strategy.
    pub avg_score: f64,
}

impl StrategySummary {
    pub fn new(name: &str, ring: &Ring, routes: &MulticastRoutes) -> RingResult<Self> {
        let mut lengths = Vec::new();
        let mut temperatures = Vec::new();
        let mut scores = Vec::new();
        for source_routes in routes {
            for path in source_routes.paths() {
                lengths.push(path.len() as f64);
                temperatures.extend(node_temperatures(ring, path)?);
            }
            scores.extend_from_slice(source_routes.scores());
        }

        Ok(Self {
            name: name.to_string(),
            num_paths: lengths.len(),
            avg_path_length: mean(&lengths),
            avg_temperature: mean(&temperatures),
            avg_score: mean(&scores),
        })
    }
}

#[test]
fn empty_statistics() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(max(&[]), 0.0);
    assert_eq!(max(&[1.0, 3.0, 2.0]), 3.0);
    assert_eq!(join_nodes(&[0, 19, 18], "->"), "0->19->18");
}
