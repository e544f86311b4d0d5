// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The ring topology model.
//!
//! A ring of `N` nodes is held as two arenas indexed by integer id: one of
//! [Node] records and one of [Edge] records. Edge `i` links node `i` to node
//! `(i + 1) % N` so a single record serves both traversal directions of a
//! link and the utilization read in either direction is always the same.
//!
//! A two-node ring has a single edge since both links would join the same
//! pair of nodes.
//!
//! # Diagram
//!
//! ```text
//!  /--------------------- e(N-1) ---------------------\
//!  |                                                  |
//!  +-> n0 -- e0 -- n1 -- e1 -- n2 -- ... -- n(N-1) <--/
//! ```
//!
//! Random attributes are drawn from a generator owned by the caller so that
//! two runs given the same seed build identical rings:
//!
//! ```rust
//! use ringcast_models::ring::{create_ring, seeded_rng};
//!
//! let ring_a = create_ring(20, &mut seeded_rng(7)).unwrap();
//! let ring_b = create_ring(20, &mut seeded_rng(7)).unwrap();
//! assert_eq!(ring_a, ring_b);
//! ```

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::types::{NodeId, RingError, RingResult};

/// A ring node and its attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,

    /// Temperature in degrees Celsius.
    temperature: f64,

    /// Informational congestion reading. Path scoring reads edge utilization
    /// instead.
    congestion: f64,

    /// Partition index, written by the partitioner.
    partition: Option<usize>,
}

impl Node {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    #[must_use]
    pub fn congestion(&self) -> f64 {
        self.congestion
    }

    #[must_use]
    pub fn partition(&self) -> Option<usize> {
        self.partition
    }
}

/// A link between two neighbouring nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    id: usize,
    from: NodeId,
    to: NodeId,
    utilization: f64,
}

impl Edge {
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The two nodes joined by this edge, in clockwise order.
    #[must_use]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }

    #[must_use]
    pub fn utilization(&self) -> f64 {
        self.utilization
    }
}

/// Distributions used when generating node and edge attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct RingConfig {
    /// Mean of the normal distribution temperatures are drawn from.
    pub temperature_mean: f64,

    /// Standard deviation of the temperature distribution.
    pub temperature_std_dev: f64,

    /// Temperatures are clamped to `[temperature_min, temperature_max]`.
    pub temperature_min: f64,
    pub temperature_max: f64,

    /// Node congestion is drawn uniformly from `[congestion_min,
    /// congestion_max]`.
    pub congestion_min: f64,
    pub congestion_max: f64,

    /// Edge utilization is drawn uniformly from `[utilization_min,
    /// utilization_max]`.
    pub utilization_min: f64,
    pub utilization_max: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            temperature_mean: 35.0,
            temperature_std_dev: 5.0,
            temperature_min: 25.0,
            temperature_max: 50.0,
            congestion_min: 20.0,
            congestion_max: 60.0,
            utilization_min: 20.0,
            utilization_max: 60.0,
        }
    }
}

fn check_range(name: &str, min: f64, max: f64) -> RingResult<()> {
    if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
        return Err(RingError::InvalidConfig(format!(
            "{name} range [{min}, {max}] is not a valid range"
        )));
    }
    Ok(())
}

impl RingConfig {
    /// Check that every distribution can be sampled.
    pub fn validate(&self) -> RingResult<()> {
        if !self.temperature_mean.is_finite()
            || !self.temperature_std_dev.is_finite()
            || self.temperature_std_dev < 0.0
        {
            return Err(RingError::InvalidConfig(format!(
                "temperature distribution N({}, {}) cannot be sampled",
                self.temperature_mean, self.temperature_std_dev
            )));
        }
        check_range("temperature", self.temperature_min, self.temperature_max)?;
        check_range("congestion", self.congestion_min, self.congestion_max)?;
        check_range("utilization", self.utilization_min, self.utilization_max)?;
        Ok(())
    }
}

/// The ring graph: `N` nodes and `N` edges forming the single cycle
/// `0-1-2-...-(N-1)-0`. A two-node ring has one edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Ring {
    /// Create a ring where every node has the same temperature and every edge
    /// the same utilization.
    pub fn uniform(num_nodes: usize, temperature: f64, utilization: f64) -> RingResult<Self> {
        let temperatures = vec![temperature; num_nodes];
        let congestions = vec![utilization; num_nodes];
        let utilizations = vec![utilization; num_nodes];
        Ring::from_attributes(&temperatures, &congestions, &utilizations)
    }

    fn from_attributes(
        temperatures: &[f64],
        congestions: &[f64],
        utilizations: &[f64],
    ) -> RingResult<Self> {
        let num_nodes = temperatures.len();
        if num_nodes == 0 {
            return Err(RingError::InvalidRingSize(num_nodes));
        }

        let nodes = temperatures
            .iter()
            .zip(congestions)
            .enumerate()
            .map(|(id, (&temperature, &congestion))| Node {
                id,
                temperature,
                congestion,
                partition: None,
            })
            .collect();

        let num_edges = if num_nodes == 2 { 1 } else { num_nodes };
        let edges = utilizations
            .iter()
            .take(num_edges)
            .enumerate()
            .map(|(id, &utilization)| Edge {
                id,
                from: id,
                to: (id + 1) % num_nodes,
                utilization,
            })
            .collect();

        Ok(Self { nodes, edges })
    }

    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Return an error unless `id` names a node of this ring.
    pub fn check_node(&self, id: NodeId) -> RingResult<()> {
        if id >= self.num_nodes() {
            return Err(RingError::UnknownNode {
                node: id,
                num_nodes: self.num_nodes(),
            });
        }
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> RingResult<&Node> {
        self.check_node(id)?;
        Ok(&self.nodes[id])
    }

    pub fn temperature(&self, id: NodeId) -> RingResult<f64> {
        Ok(self.node(id)?.temperature)
    }

    /// The two neighbours of a node: `[(id + 1) % N, (id - 1) % N]`.
    pub fn neighbours(&self, id: NodeId) -> RingResult<[NodeId; 2]> {
        self.check_node(id)?;
        let n = self.num_nodes();
        Ok([(id + 1) % n, (id + n - 1) % n])
    }

    /// Index of the edge joining `u` and `v` in either direction.
    pub fn edge_index(&self, u: NodeId, v: NodeId) -> RingResult<usize> {
        self.check_node(u)?;
        self.check_node(v)?;
        let n = self.num_nodes();
        let clockwise = ((u + 1) % n == v).then_some(u);
        let counterclockwise = ((v + 1) % n == u).then_some(v);
        match (clockwise, counterclockwise) {
            (Some(a), Some(b)) => Ok(a.min(b)),
            (Some(index), None) | (None, Some(index)) => Ok(index),
            (None, None) => Err(RingError::InvalidPath { from: u, to: v }),
        }
    }

    /// Utilization of the edge between `u` and `v`; the same value is
    /// returned for `(u, v)` and `(v, u)`.
    pub fn utilization(&self, u: NodeId, v: NodeId) -> RingResult<f64> {
        let index = self.edge_index(u, v)?;
        Ok(self.edges[index].utilization)
    }

    pub fn set_temperature(&mut self, id: NodeId, temperature: f64) -> RingResult<()> {
        self.check_node(id)?;
        self.nodes[id].temperature = temperature;
        Ok(())
    }

    /// Overwrite the utilization of the edge between `u` and `v`. Both
    /// traversal directions observe the new value.
    pub fn set_utilization(&mut self, u: NodeId, v: NodeId, utilization: f64) -> RingResult<()> {
        let index = self.edge_index(u, v)?;
        self.edges[index].utilization = utilization;
        Ok(())
    }

    pub(crate) fn set_edge_utilization(&mut self, index: usize, utilization: f64) {
        self.edges[index].utilization = utilization;
    }

    pub(crate) fn set_partition(&mut self, id: NodeId, partition: usize) {
        self.nodes[id].partition = Some(partition);
    }

    /// Mean utilization over every edge of the ring.
    #[must_use]
    pub fn avg_edge_utilization(&self) -> f64 {
        let total: f64 = self.edges.iter().map(|e| e.utilization).sum();
        total / self.edges.len() as f64
    }

    /// Mean temperature over every node of the ring.
    #[must_use]
    pub fn avg_node_temperature(&self) -> f64 {
        let total: f64 = self.nodes.iter().map(|n| n.temperature).sum();
        total / self.nodes.len() as f64
    }
}

/// Build the generator used for topology creation from a seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Create a ring of `num_nodes` nodes with attributes drawn from the default
/// [RingConfig] distributions.
pub fn create_ring<R: Rng>(num_nodes: usize, rng: &mut R) -> RingResult<Ring> {
    create_ring_with(num_nodes, &RingConfig::default(), rng)
}

/// Create a ring of `num_nodes` nodes with attributes drawn from the
/// distributions in `config`.
///
/// All temperatures are drawn first, then node congestion, then edge
/// utilization.
pub fn create_ring_with<R: Rng>(
    num_nodes: usize,
    config: &RingConfig,
    rng: &mut R,
) -> RingResult<Ring> {
    if num_nodes == 0 {
        return Err(RingError::InvalidRingSize(num_nodes));
    }
    config.validate()?;

    let normal = Normal::new(config.temperature_mean, config.temperature_std_dev)
        .map_err(|e| RingError::InvalidConfig(format!("temperature distribution: {e}")))?;

    let temperatures: Vec<f64> = (0..num_nodes)
        .map(|_| {
            normal
                .sample(rng)
                .clamp(config.temperature_min, config.temperature_max)
        })
        .collect();
    let congestions: Vec<f64> = (0..num_nodes)
        .map(|_| rng.gen_range(config.congestion_min..=config.congestion_max))
        .collect();
    let utilizations: Vec<f64> = (0..num_nodes)
        .map(|_| rng.gen_range(config.utilization_min..=config.utilization_max))
        .collect();

    let ring = Ring::from_attributes(&temperatures, &congestions, &utilizations)?;
    info!(
        "Created ring of {num_nodes} nodes (avg temperature {:.2}, avg utilization {:.2})",
        ring.avg_node_temperature(),
        ring.avg_edge_utilization()
    );
    Ok(ring)
}
