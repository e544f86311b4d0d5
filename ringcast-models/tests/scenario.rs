// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use ringcast_models::scenario::{DEFAULT_HOTSPOTS, Scenario};
use ringcast_models::test_helpers::seeded_ring;

#[test]
fn high_congestion() {
    let mut ring = seeded_ring(20, 0).unwrap();
    Scenario::HighCongestion.apply(&mut ring).unwrap();

    for node in ring.nodes() {
        let expected = if node.id() < 10 { 85.0 } else { 65.0 };
        assert_eq!(node.temperature(), expected);
    }

    assert_eq!(ring.utilization(0, 1).unwrap(), 90.0);
    assert_eq!(ring.utilization(8, 9).unwrap(), 90.0);
    assert_eq!(ring.utilization(9, 10).unwrap(), 30.0);
    assert_eq!(ring.utilization(15, 16).unwrap(), 30.0);
    assert_eq!(ring.utilization(19, 0).unwrap(), 30.0);
}

#[test]
fn hotspots() {
    let mut ring = seeded_ring(20, 1).unwrap();
    Scenario::Hotspot(DEFAULT_HOTSPOTS.to_vec())
        .apply(&mut ring)
        .unwrap();

    for node in ring.nodes() {
        let expected = if [5, 15].contains(&node.id()) {
            90.0
        } else {
            60.0
        };
        assert_eq!(node.temperature(), expected);
    }

    // The link before a hotspot keeps the hotspot's value; the link after it
    // is rewritten when the following node is visited.
    assert_eq!(ring.utilization(4, 5).unwrap(), 85.0);
    assert_eq!(ring.utilization(5, 6).unwrap(), 25.0);
    assert_eq!(ring.utilization(14, 15).unwrap(), 85.0);
    assert_eq!(ring.utilization(15, 16).unwrap(), 25.0);
    assert_eq!(ring.utilization(0, 1).unwrap(), 25.0);
    assert_eq!(ring.utilization(19, 0).unwrap(), 25.0);
}

#[test]
fn hotspot_on_last_node() {
    let mut ring = seeded_ring(10, 2).unwrap();
    Scenario::Hotspot(vec![9]).apply(&mut ring).unwrap();
    assert_eq!(ring.utilization(8, 9).unwrap(), 85.0);
    assert_eq!(ring.utilization(9, 0).unwrap(), 85.0);
    assert_eq!(ring.utilization(0, 1).unwrap(), 25.0);
}

#[test]
fn uniform() {
    let mut ring = seeded_ring(12, 3).unwrap();
    Scenario::Uniform {
        temperature: 35.0,
        utilization: 40.0,
    }
    .apply(&mut ring)
    .unwrap();
    assert!(ring.nodes().iter().all(|n| n.temperature() == 35.0));
    assert!(ring.edges().iter().all(|e| e.utilization() == 40.0));
}

#[test]
fn names() {
    assert_eq!(Scenario::HighCongestion.to_string(), "high_congestion");
    assert_eq!(Scenario::Hotspot(vec![]).name(), "hotspot");
    assert_eq!(
        Scenario::Uniform {
            temperature: 0.0,
            utilization: 0.0
        }
        .name(),
        "uniform"
    );
}
