// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Fixed attribute scenarios.
//!
//! A [Scenario] overwrites the randomly generated temperatures and
//! utilizations of a ring in place before routing is run, so that the
//! behaviour of the routing strategies can be compared on known conditions.

use std::fmt;

use log::info;

use crate::ring::Ring;
use crate::types::{NodeId, RingResult};

/// Hotspot nodes used when none are given.
pub const DEFAULT_HOTSPOTS: [NodeId; 3] = [5, 15, 25];

/// Node temperature of the default uniform scenario.
pub const UNIFORM_TEMPERATURE: f64 = 35.0;

/// Link utilization of the default uniform scenario.
pub const UNIFORM_UTILIZATION: f64 = 40.0;

const HOT_TEMPERATURE: f64 = 85.0;
const WARM_TEMPERATURE: f64 = 65.0;
const CONGESTED_UTILIZATION: f64 = 90.0;
const NORMAL_UTILIZATION: f64 = 30.0;

const HOTSPOT_TEMPERATURE: f64 = 90.0;
const HOTSPOT_UTILIZATION: f64 = 85.0;
const BACKGROUND_TEMPERATURE: f64 = 60.0;
const BACKGROUND_UTILIZATION: f64 = 25.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Scenario {
    /// The lower half of the ring is hot and its internal links congested;
    /// the shortest paths between nodes in that half are the worst ones.
    HighCongestion,

    /// Hot, congested nodes on an otherwise cool ring. Ids outside the ring
    /// are ignored.
    Hotspot(Vec<NodeId>),

    /// Every node and every link set to the same value.
    Uniform { temperature: f64, utilization: f64 },
}

impl Scenario {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Scenario::HighCongestion => "high_congestion",
            Scenario::Hotspot(_) => "hotspot",
            Scenario::Uniform { .. } => "uniform",
        }
    }

    /// Overwrite the attributes of `ring` with this scenario.
    pub fn apply(&self, ring: &mut Ring) -> RingResult<()> {
        match self {
            Scenario::HighCongestion => apply_high_congestion(ring)?,
            Scenario::Hotspot(hotspots) => apply_hotspots(ring, hotspots)?,
            Scenario::Uniform {
                temperature,
                utilization,
            } => apply_uniform(ring, *temperature, *utilization)?,
        }
        info!("Applied scenario {self}");
        Ok(())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn apply_high_congestion(ring: &mut Ring) -> RingResult<()> {
    let half = ring.num_nodes() / 2;
    for node in 0..ring.num_nodes() {
        let temperature = if node < half {
            HOT_TEMPERATURE
        } else {
            WARM_TEMPERATURE
        };
        ring.set_temperature(node, temperature)?;
    }

    let endpoints: Vec<(NodeId, NodeId)> = ring.edges().iter().map(|e| e.endpoints()).collect();
    for (index, (u, v)) in endpoints.into_iter().enumerate() {
        let utilization = if u < half && v < half {
            CONGESTED_UTILIZATION
        } else {
            NORMAL_UTILIZATION
        };
        ring.set_edge_utilization(index, utilization);
    }
    Ok(())
}

/// Nodes are visited in ascending order and each one rewrites both of its
/// links, so a link shared with a later node takes that node's value.
fn apply_hotspots(ring: &mut Ring, hotspots: &[NodeId]) -> RingResult<()> {
    for node in 0..ring.num_nodes() {
        let (temperature, utilization) = if hotspots.contains(&node) {
            (HOTSPOT_TEMPERATURE, HOTSPOT_UTILIZATION)
        } else {
            (BACKGROUND_TEMPERATURE, BACKGROUND_UTILIZATION)
        };
        ring.set_temperature(node, temperature)?;
        for neighbour in ring.neighbours(node)? {
            ring.set_utilization(node, neighbour, utilization)?;
        }
    }
    Ok(())
}

fn apply_uniform(ring: &mut Ring, temperature: f64, utilization: f64) -> RingResult<()> {
    for node in 0..ring.num_nodes() {
        ring.set_temperature(node, temperature)?;
    }
    for index in 0..ring.num_edges() {
        ring.set_edge_utilization(index, utilization);
    }
    Ok(())
}
