// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use ringcast_models::partition::partition_nodes;
use ringcast_models::test_helpers::{seeded_ring, uniform_ring};
use ringcast_models::types::RingError;

#[test]
fn equal_partitions() {
    let mut ring = seeded_ring(20, 0).unwrap();
    let partitions = partition_nodes(&mut ring, 5).unwrap();

    assert_eq!(partitions.len(), 4);
    assert!(partitions.iter().all(|p| p.len() == 5));

    let all: Vec<usize> = partitions.iter().flatten().copied().collect();
    assert_eq!(all, (0..20).collect::<Vec<_>>());

    for node in ring.nodes() {
        assert_eq!(node.partition(), Some(node.id() / 5));
    }
}

#[test]
fn last_partition_is_shorter() {
    let mut ring = uniform_ring(20).unwrap();
    let partitions = partition_nodes(&mut ring, 7).unwrap();

    let sizes: Vec<usize> = partitions.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![7, 7, 6]);
    assert_eq!(partitions[2], (14..20).collect::<Vec<_>>());
    assert_eq!(ring.node(19).unwrap().partition(), Some(2));
    assert_eq!(ring.node(13).unwrap().partition(), Some(1));
}

#[test]
fn whole_ring_and_single_nodes() {
    let mut ring = uniform_ring(6).unwrap();
    assert_eq!(partition_nodes(&mut ring, 6).unwrap(), vec![vec![0, 1, 2, 3, 4, 5]]);

    let partitions = partition_nodes(&mut ring, 1).unwrap();
    assert_eq!(partitions.len(), 6);
    // Repartitioning overwrites the previous ids
    assert_eq!(ring.node(5).unwrap().partition(), Some(5));
}

#[test]
fn invalid_partition_size() {
    let mut ring = uniform_ring(20).unwrap();
    assert_eq!(
        partition_nodes(&mut ring, 0),
        Err(RingError::InvalidPartitionSize {
            size: 0,
            num_nodes: 20
        })
    );
    assert_eq!(
        partition_nodes(&mut ring, 21),
        Err(RingError::InvalidPartitionSize {
            size: 21,
            num_nodes: 20
        })
    );
    assert!(ring.nodes().iter().all(|n| n.partition().is_none()));
}
