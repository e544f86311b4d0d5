// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Congestion and temperature aware multicast routing (TempCon).

use crate::ring::Ring;
use crate::routing::{MulticastRoutes, RoutingStrategy, route_multicast};
use crate::scoring::{Weights, weighted_path_score};
use crate::types::{NodeId, RingResult};

/// Scores each path with the weighted, ring-normalised
/// [path score](crate::scoring::path_score).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TempCon {
    weights: Weights,
}

impl TempCon {
    pub fn new(wc: f64, wt: f64) -> RingResult<Self> {
        Ok(Self::with_weights(Weights::new(wc, wt)?))
    }

    #[must_use]
    pub fn with_weights(weights: Weights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> Weights {
        self.weights
    }
}

impl RoutingStrategy for TempCon {
    fn name(&self) -> &str {
        "TempCon"
    }

    fn path_cost(&self, ring: &Ring, path: &[NodeId]) -> RingResult<f64> {
        weighted_path_score(ring, path, &self.weights)
    }
}

/// Weighted multicast search from every source to every target.
///
/// The weights are checked before any routing takes place, so invalid
/// weights are reported even when there is nothing to route.
pub fn multicast_search(
    ring: &Ring,
    sources: &[NodeId],
    targets: &[NodeId],
    wc: f64,
    wt: f64,
) -> RingResult<MulticastRoutes> {
    let strategy = TempCon::new(wc, wt)?;
    route_multicast(&strategy, ring, sources, targets)
}
