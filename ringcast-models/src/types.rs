// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Shared types.

use std::error::Error;
use std::fmt;

/// Index of a node in a ring, in the range `0..N`.
pub type NodeId = usize;

/// An ordered sequence of adjacent nodes.
pub type Path = Vec<NodeId>;

// Ring errors

/// The `RingError` is returned whenever a precondition of a topology, scoring,
/// routing or partitioning operation is violated.
#[derive(Clone, Debug, PartialEq)]
pub enum RingError {
    /// A ring must contain at least one node.
    InvalidRingSize(usize),

    /// Partition size must be in the range `1..=num_nodes`.
    InvalidPartitionSize { size: usize, num_nodes: usize },

    /// Weights must each be in `[0, 1]` and sum to 1.
    InvalidWeights { wc: f64, wt: f64 },

    /// Two consecutive path nodes are not connected by a ring edge.
    InvalidPath { from: NodeId, to: NodeId },

    /// A path with no nodes cannot be scored.
    EmptyPath,

    /// A node id outside the ring.
    UnknownNode { node: NodeId, num_nodes: usize },

    /// A physical input outside its valid domain.
    InvalidInput(String),

    /// A generation or simulation parameter that cannot be used.
    InvalidConfig(String),
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RingError::InvalidRingSize(n) => {
                write!(f, "Error: invalid ring size {n}, a ring needs at least one node")
            }
            RingError::InvalidPartitionSize { size, num_nodes } => {
                write!(
                    f,
                    "Error: invalid partition size {size} for a ring of {num_nodes} nodes"
                )
            }
            RingError::InvalidWeights { wc, wt } => {
                write!(
                    f,
                    "Error: weights must be between 0 and 1 and sum to 1 (wc={wc}, wt={wt})"
                )
            }
            RingError::InvalidPath { from, to } => {
                write!(f, "Error: invalid path, no edge between {from} and {to}")
            }
            RingError::EmptyPath => {
                write!(f, "Error: path contains no nodes")
            }
            RingError::UnknownNode { node, num_nodes } => {
                write!(f, "Error: node {node} is not in a ring of {num_nodes} nodes")
            }
            RingError::InvalidInput(msg) => {
                write!(f, "Error: invalid input: {msg}")
            }
            RingError::InvalidConfig(msg) => {
                write!(f, "Error: invalid configuration: {msg}")
            }
        }
    }
}

impl Error for RingError {}

/// The RingResult is the return type for most fallible ring functions
pub type RingResult<T> = Result<T, RingError>;

#[test]
fn error_display() {
    let err = RingError::InvalidPath { from: 2, to: 7 };
    assert_eq!(err.to_string(), "Error: invalid path, no edge between 2 and 7");

    let err = RingError::InvalidPartitionSize {
        size: 0,
        num_nodes: 20,
    };
    assert_eq!(
        err.to_string(),
        "Error: invalid partition size 0 for a ring of 20 nodes"
    );
}
