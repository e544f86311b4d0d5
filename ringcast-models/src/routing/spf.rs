// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Shortest Path First multicast routing.
//!
//! The baseline strategy: a path costs its length in nodes and the reported
//! score of each path is that hop count.

use crate::ring::Ring;
use crate::routing::{MulticastRoutes, RoutingStrategy, route_multicast};
use crate::types::{NodeId, RingResult};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShortestPathFirst;

impl RoutingStrategy for ShortestPathFirst {
    fn name(&self) -> &str {
        "SPF"
    }

    fn path_cost(&self, ring: &Ring, path: &[NodeId]) -> RingResult<f64> {
        for &node in path {
            ring.check_node(node)?;
        }
        Ok(path.len() as f64)
    }
}

/// Hop-count multicast routing from every source to every target.
pub fn shortest_path_first(
    ring: &Ring,
    sources: &[NodeId],
    targets: &[NodeId],
) -> RingResult<MulticastRoutes> {
    route_multicast(&ShortestPathFirst, ring, sources, targets)
}
