// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

#![doc(test(attr(warn(unused))))]

//! `RingCast` - multicast routing models for ring interconnects
//!
//! This library models an optical network-on-chip built as a ring where
//! every node carries a temperature reading and every link a utilization
//! reading. It provides:
//!  - [ring]: generation of a ring with randomised attributes.
//!  - [scoring]: the congestion/temperature path score.
//!  - [path]: clockwise and counterclockwise path building.
//!  - [routing]: the TempCon and Shortest Path First multicast strategies.
//!  - [partition]: grouping of nodes into contiguous partitions.
//!  - [scenario]: fixed attribute scenarios applied in place.
//!  - [report]: per-path, per-node, per-partition and per-strategy metrics.
//!
//! # Simple Application
//!
//! ```rust
//! use ringcast_models::partition::partition_nodes;
//! use ringcast_models::ring::{create_ring, seeded_rng};
//! use ringcast_models::routing::spf::shortest_path_first;
//! use ringcast_models::routing::tempcon::multicast_search;
//!
//! let mut ring = create_ring(20, &mut seeded_rng(1)).unwrap();
//! let partitions = partition_nodes(&mut ring, 5).unwrap();
//! assert_eq!(partitions.len(), 4);
//!
//! let tempcon = multicast_search(&ring, &[0, 10], &[5, 15], 0.7, 0.3).unwrap();
//! let spf = shortest_path_first(&ring, &[0, 10], &[5, 15]).unwrap();
//! assert_eq!(tempcon.len(), 2);
//! assert_eq!(spf.paths(0).unwrap().len(), 2);
//! ```

pub mod partition;
pub mod path;
pub mod report;
pub mod ring;
pub mod routing;
pub mod scenario;
pub mod scoring;
pub mod test_helpers;
pub mod types;
