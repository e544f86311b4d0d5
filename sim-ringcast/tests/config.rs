// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::io::Write;
use std::path::PathBuf;

use approx::assert_relative_eq;
use clap::Parser;
use ringcast_models::scenario::Scenario;
use ringcast_models::types::RingError;
use serial_test::serial;
use sim_ringcast::config::{ScenarioKind, SimConfig};

const ENV_VARS: [&str; 4] = [
    "RINGCAST_NUM_NODES",
    "RINGCAST_PARTITION_SIZE",
    "RINGCAST_WC",
    "RINGCAST_WT",
];

fn set_env(name: &str, value: &str) {
    // SAFETY: every test touching the environment is run serially
    unsafe { std::env::set_var(name, value) };
}

fn clear_env() {
    for name in ENV_VARS {
        // SAFETY: every test touching the environment is run serially
        unsafe { std::env::remove_var(name) };
    }
}

fn from_args(args: &[&str]) -> Result<SimConfig, RingError> {
    let argv = std::iter::once("sim-ringcast").chain(args.iter().copied());
    let cli = SimConfig::try_parse_from(argv).unwrap();
    SimConfig::merge_over(cli)
}

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn defaults() {
    clear_env();
    let config = from_args(&[]).unwrap();
    assert_eq!(config, SimConfig::default());
    assert_eq!(config.seed, None);
    assert_eq!(config.sources, Some(vec![0, 10]));
    assert_eq!(config.hotspots, Some(vec![5, 15, 25]));
}

#[test]
#[serial]
fn command_line_overrides() {
    clear_env();
    let config = from_args(&[
        "--num-nodes",
        "30",
        "--sources",
        "1,2,3",
        "--scenario",
        "high_congestion",
        "--seed",
        "9",
    ])
    .unwrap();

    assert_eq!(config.num_nodes, Some(30));
    assert_eq!(config.sources, Some(vec![1, 2, 3]));
    assert_eq!(config.scenario, Some(ScenarioKind::HighCongestion));
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.targets, Some(vec![5, 15]));
    assert_relative_eq!(config.wc.unwrap(), 0.7);
}

#[test]
#[serial]
fn environment_overrides_defaults_not_command_line() {
    clear_env();
    set_env("RINGCAST_NUM_NODES", "40");
    set_env("RINGCAST_WC", "0.5");
    set_env("RINGCAST_WT", "0.5");

    let config = from_args(&["--num-nodes", "30"]);
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.num_nodes, Some(30));
    assert_relative_eq!(config.wc.unwrap(), 0.5);
    assert_relative_eq!(config.wt.unwrap(), 0.5);
}

#[test]
#[serial]
fn invalid_environment_value() {
    clear_env();
    set_env("RINGCAST_NUM_NODES", "lots");
    let result = from_args(&[]);
    clear_env();

    assert!(matches!(result, Err(RingError::InvalidConfig(_))));
}

#[test]
#[serial]
fn extra_conf_file() {
    clear_env();
    let file = toml_file(
        "num_nodes = 12\npartition_size = 4\ntargets = [3, 9]\nscenario = \"hotspot\"\n",
    );
    let path = file.path().to_str().unwrap();

    set_env("RINGCAST_PARTITION_SIZE", "6");
    let config = from_args(&["--conf-file", path]);
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.num_nodes, Some(12));
    assert_eq!(config.partition_size, Some(6));
    assert_eq!(config.targets, Some(vec![3, 9]));
    assert_eq!(config.scenario, Some(ScenarioKind::Hotspot));
    assert_eq!(config.conf_file, Some(PathBuf::from(path)));
}

#[test]
#[serial]
fn command_line_overrides_conf_file() {
    clear_env();
    let file = toml_file("num_nodes = 12\n");
    let path = file.path().to_str().unwrap();

    let config = from_args(&["--conf-file", path, "--num-nodes", "16"]).unwrap();
    assert_eq!(config.num_nodes, Some(16));
}

#[test]
#[serial]
fn missing_conf_file() {
    clear_env();
    let result = from_args(&["--conf-file", "does/not/exist.toml"]);
    assert_eq!(
        result,
        Err(RingError::InvalidConfig(
            "does/not/exist.toml not found".to_string()
        ))
    );
}

#[test]
#[serial]
fn directory_as_conf_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let result = from_args(&["--conf-file", dir.path().to_str().unwrap()]);
    assert!(matches!(result, Err(RingError::InvalidConfig(_))));
}

#[test]
fn validation() {
    let config = SimConfig {
        num_nodes: Some(0),
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(RingError::InvalidRingSize(0)));

    let config = SimConfig {
        partition_size: Some(21),
        ..SimConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(RingError::InvalidPartitionSize {
            size: 21,
            num_nodes: 20
        })
    );

    let config = SimConfig {
        wc: Some(0.5),
        wt: Some(0.6),
        ..SimConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(RingError::InvalidWeights { wc: 0.5, wt: 0.6 })
    );

    let config = SimConfig {
        targets: Some(vec![5, 20]),
        ..SimConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(RingError::UnknownNode {
            node: 20,
            num_nodes: 20
        })
    );

    let config = SimConfig {
        sources: None,
        ..SimConfig::default()
    };
    assert!(matches!(config.validate(), Err(RingError::InvalidConfig(_))));
}

#[test]
fn scenarios() {
    let config = SimConfig {
        scenario: Some(ScenarioKind::Hotspot),
        hotspots: Some(vec![2, 4]),
        ..SimConfig::default()
    };
    assert_eq!(
        config.to_scenario().unwrap(),
        Some(Scenario::Hotspot(vec![2, 4]))
    );

    let config = SimConfig {
        scenario: Some(ScenarioKind::Uniform),
        ..SimConfig::default()
    };
    assert_eq!(
        config.to_scenario().unwrap(),
        Some(Scenario::Uniform {
            temperature: 35.0,
            utilization: 40.0
        })
    );

    let config = SimConfig {
        scenario: None,
        ..SimConfig::default()
    };
    assert_eq!(config.to_scenario().unwrap(), None);
}
