// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Rings for tests and benchmarks.

use crate::ring::{Ring, create_ring, seeded_rng};
use crate::types::RingResult;

pub use crate::scenario::{UNIFORM_TEMPERATURE, UNIFORM_UTILIZATION};

/// A ring where every node is at 35 degrees and every link at 40%
/// utilization.
pub fn uniform_ring(num_nodes: usize) -> RingResult<Ring> {
    Ring::uniform(num_nodes, UNIFORM_TEMPERATURE, UNIFORM_UTILIZATION)
}

/// A randomly generated ring that is the same for the same seed.
pub fn seeded_ring(num_nodes: usize, seed: u64) -> RingResult<Ring> {
    create_ring(num_nodes, &mut seeded_rng(seed))
}
