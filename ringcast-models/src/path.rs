// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Directional path building.
//!
//! Paths are built by stepping around the ring in one fixed direction from
//! the start node until the end node is reached. No alternative routes are
//! considered.

use std::fmt;

use crate::ring::Ring;
use crate::types::{NodeId, Path, RingResult};

/// Rotational direction around the ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Increasing node ids: `i -> (i + 1) % N`.
    #[default]
    Clockwise,

    /// Decreasing node ids: `i -> (i - 1) % N`.
    Counterclockwise,
}

impl Direction {
    /// The neighbour reached by taking one step from `current` on a ring of
    /// `num_nodes` nodes.
    #[must_use]
    pub fn step(self, current: NodeId, num_nodes: usize) -> NodeId {
        match self {
            Direction::Clockwise => (current + 1) % num_nodes,
            Direction::Counterclockwise => (current + num_nodes - 1) % num_nodes,
        }
    }

    /// Build the path from `start` to `end` in this direction.
    pub fn path(self, ring: &Ring, start: NodeId, end: NodeId) -> RingResult<Path> {
        ring.check_node(start)?;
        ring.check_node(end)?;

        let num_nodes = ring.num_nodes();
        let mut path = Vec::with_capacity(num_nodes);
        path.push(start);
        let mut current = start;
        while current != end {
            current = self.step(current, num_nodes);
            path.push(current);
        }
        Ok(path)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Clockwise => {
                write!(f, "clockwise")
            }
            Direction::Counterclockwise => {
                write!(f, "counterclockwise")
            }
        }
    }
}

/// Path from `start` to `end` visiting nodes in increasing order (modulo
/// `N`). Returns `[start]` when `start == end`.
pub fn clockwise_path(ring: &Ring, start: NodeId, end: NodeId) -> RingResult<Path> {
    Direction::Clockwise.path(ring, start, end)
}

/// Path from `start` to `end` visiting nodes in decreasing order (modulo
/// `N`). Returns `[start]` when `start == end`.
pub fn counterclockwise_path(ring: &Ring, start: NodeId, end: NodeId) -> RingResult<Path> {
    Direction::Counterclockwise.path(ring, start, end)
}

#[test]
fn step_wraps() {
    assert_eq!(Direction::Clockwise.step(19, 20), 0);
    assert_eq!(Direction::Counterclockwise.step(0, 20), 19);
    assert_eq!(Direction::Counterclockwise.step(0, 1), 0);
}
