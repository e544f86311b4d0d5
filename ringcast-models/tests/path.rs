// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use ringcast_models::path::{Direction, clockwise_path, counterclockwise_path};
use ringcast_models::test_helpers::{seeded_ring, uniform_ring};
use ringcast_models::types::RingError;

#[test]
fn start_is_end() {
    let ring = uniform_ring(20).unwrap();
    for s in 0..20 {
        assert_eq!(clockwise_path(&ring, s, s).unwrap(), vec![s]);
        assert_eq!(counterclockwise_path(&ring, s, s).unwrap(), vec![s]);
    }
}

#[test]
fn paths_wrap_around() {
    let ring = uniform_ring(20).unwrap();
    assert_eq!(
        clockwise_path(&ring, 18, 2).unwrap(),
        vec![18, 19, 0, 1, 2]
    );
    assert_eq!(
        counterclockwise_path(&ring, 2, 18).unwrap(),
        vec![2, 1, 0, 19, 18]
    );
    assert_eq!(
        counterclockwise_path(&ring, 0, 15).unwrap(),
        vec![0, 19, 18, 17, 16, 15]
    );
}

#[test]
fn opposite_directions_cover_same_arc() {
    let ring = seeded_ring(10, 4).unwrap();
    for s in 0..10 {
        for t in 0..10 {
            let forward = clockwise_path(&ring, s, t).unwrap();
            let mut backward = counterclockwise_path(&ring, t, s).unwrap();
            backward.reverse();
            assert_eq!(forward, backward);
        }
    }
}

#[test]
fn both_directions_span_the_ring() {
    let ring = uniform_ring(12).unwrap();
    for s in 0..12 {
        for t in 0..12 {
            if s == t {
                continue;
            }
            let clockwise = clockwise_path(&ring, s, t).unwrap();
            let counterclockwise = counterclockwise_path(&ring, s, t).unwrap();
            // Both endpoints appear in both paths
            assert_eq!(clockwise.len() + counterclockwise.len(), 12 + 2);
        }
    }
}

#[test]
fn every_step_is_an_edge() {
    let ring = seeded_ring(7, 0).unwrap();
    for direction in [Direction::Clockwise, Direction::Counterclockwise] {
        let path = direction.path(&ring, 3, 2).unwrap();
        assert_eq!(path.len(), if direction == Direction::Clockwise { 7 } else { 2 });
        for pair in path.windows(2) {
            assert!(ring.utilization(pair[0], pair[1]).is_ok());
        }
    }
}

#[test]
fn unknown_end_node() {
    let ring = uniform_ring(20).unwrap();
    assert_eq!(
        clockwise_path(&ring, 0, 20),
        Err(RingError::UnknownNode {
            node: 20,
            num_nodes: 20
        })
    );
    assert!(counterclockwise_path(&ring, 21, 0).is_err());
}

#[test]
fn direction_display() {
    assert_eq!(Direction::Clockwise.to_string(), "clockwise");
    assert_eq!(Direction::Counterclockwise.to_string(), "counterclockwise");
    assert_eq!(Direction::default(), Direction::Clockwise);
}
