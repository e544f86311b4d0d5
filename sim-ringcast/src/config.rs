// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Simulation configuration gathered from multiple sources.
//!
//! Values are merged in increasing order of priority:
//!  - the built-in defaults,
//!  - `ringcast.toml` in the working directory, when present,
//!  - the extra TOML file named by `conf_file`, when set,
//!  - environment variables prefixed with `RINGCAST_`,
//!  - command-line arguments.
//!
//! Every field is an [Option] so that a later source only overrides the
//! values it actually sets.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use ringcast_models::scenario::{
    DEFAULT_HOTSPOTS, Scenario, UNIFORM_TEMPERATURE, UNIFORM_UTILIZATION,
};
use ringcast_models::scoring::Weights;
use ringcast_models::types::{NodeId, RingError, RingResult};
use serde::{Deserialize, Serialize};

/// Configuration file read from the working directory.
pub const DEFAULT_CONF_FILE: &str = "ringcast.toml";

/// Prefix of the environment variables that override the configuration.
pub const ENV_PREFIX: &str = "RINGCAST_";

/// Attribute scenario applied to the ring before routing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Keep the randomly generated attributes.
    #[default]
    None,
    HighCongestion,
    Hotspot,
    Uniform,
}

#[derive(Clone, Debug, PartialEq, Parser, Serialize, Deserialize)]
#[command(about = "Compare TempCon and shortest path first multicast routing on a ring.")]
pub struct SimConfig {
    /// Logging level
    #[arg(long)]
    pub log: Option<String>,

    /// Number of nodes in the ring
    #[arg(short = 'n', long)]
    pub num_nodes: Option<usize>,

    /// Number of nodes in each partition
    #[arg(long)]
    pub partition_size: Option<usize>,

    /// Weight of link congestion in the TempCon score
    #[arg(long)]
    pub wc: Option<f64>,

    /// Weight of node temperature in the TempCon score
    #[arg(long)]
    pub wt: Option<f64>,

    /// Comma separated source node ids
    #[arg(long, value_delimiter = ',')]
    pub sources: Option<Vec<NodeId>>,

    /// Comma separated target node ids
    #[arg(long, value_delimiter = ',')]
    pub targets: Option<Vec<NodeId>>,

    /// Attribute scenario applied before routing
    #[arg(long, value_enum)]
    pub scenario: Option<ScenarioKind>,

    /// Comma separated hotspot node ids used by the hotspot scenario
    #[arg(long, value_delimiter = ',')]
    pub hotspots: Option<Vec<NodeId>>,

    /// Seed of the attribute generator; a random seed is used when unset
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to an additional TOML configuration file
    #[arg(long)]
    pub conf_file: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            log: Some("info".to_string()),
            num_nodes: Some(20),
            partition_size: Some(5),
            wc: Some(0.7),
            wt: Some(0.3),
            sources: Some(vec![0, 10]),
            targets: Some(vec![5, 15]),
            scenario: Some(ScenarioKind::None),
            hotspots: Some(DEFAULT_HOTSPOTS.to_vec()),
            seed: None,
            conf_file: Some(Default::default()),
        }
    }
}

fn config_error(error: figment::Error) -> RingError {
    RingError::InvalidConfig(error.to_string())
}

/// Read a field that every complete configuration carries.
fn required<'a, T>(value: &'a Option<T>, name: &str) -> RingResult<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| RingError::InvalidConfig(format!("{name} is not set")))
}

fn check_conf_file(conf_file: &Path) -> RingResult<()> {
    if conf_file.is_dir() {
        return Err(RingError::InvalidConfig(format!(
            "{} is not a file path",
            conf_file.display()
        )));
    }
    if !conf_file.exists() {
        return Err(RingError::InvalidConfig(format!(
            "{} not found",
            conf_file.display()
        )));
    }
    Ok(())
}

impl SimConfig {
    /// Parse the command line and merge it over every other source.
    pub fn parse_all_sources() -> RingResult<Self> {
        Self::merge_over(Self::parse())
    }

    /// Merge the configuration files and environment under `cli`.
    ///
    /// The extra configuration file can itself be named by any source, so the
    /// sources are merged once to find it and again to apply it.
    pub fn merge_over(cli: Self) -> RingResult<Self> {
        let config = Self::clap_merge(Self::figment_to_config(None)?, &cli);
        let extra_conf_file = config
            .conf_file
            .clone()
            .filter(|conf_file| conf_file.as_os_str() != "");
        match extra_conf_file {
            Some(conf_file) => {
                check_conf_file(&conf_file)?;
                let with_extra = Self::figment_to_config(Some(&conf_file))?;
                Ok(Self::clap_merge(with_extra, &cli))
            }
            None => Ok(config),
        }
    }

    fn figment_to_config(extra_conf_file: Option<&Path>) -> RingResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        figment = figment.merge(Toml::file(DEFAULT_CONF_FILE));
        if let Some(conf_file) = extra_conf_file {
            figment = figment.merge(Toml::file(conf_file));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX));
        figment.extract().map_err(config_error)
    }

    fn clap_merge(mut config: Self, cli: &Self) -> Self {
        macro_rules! merge_fields {
            ($($field:ident),*) => {
                $(
                    if cli.$field.is_some() {
                        config.$field = cli.$field.clone();
                    }
                )*
            };
        }
        merge_fields!(
            log,
            num_nodes,
            partition_size,
            wc,
            wt,
            sources,
            targets,
            scenario,
            hotspots,
            seed,
            conf_file
        );
        config
    }

    /// Check that the configuration describes a simulation that can run.
    pub fn validate(&self) -> RingResult<()> {
        let num_nodes = *required(&self.num_nodes, "num_nodes")?;
        if num_nodes == 0 {
            return Err(RingError::InvalidRingSize(num_nodes));
        }

        let size = *required(&self.partition_size, "partition_size")?;
        if size == 0 || size > num_nodes {
            return Err(RingError::InvalidPartitionSize { size, num_nodes });
        }

        self.weights()?;

        let sources = required(&self.sources, "sources")?;
        let targets = required(&self.targets, "targets")?;
        for &node in sources.iter().chain(targets) {
            if node >= num_nodes {
                return Err(RingError::UnknownNode { node, num_nodes });
            }
        }
        Ok(())
    }

    pub fn num_nodes(&self) -> RingResult<usize> {
        required(&self.num_nodes, "num_nodes").copied()
    }

    pub fn partition_size(&self) -> RingResult<usize> {
        required(&self.partition_size, "partition_size").copied()
    }

    pub fn weights(&self) -> RingResult<Weights> {
        Weights::new(*required(&self.wc, "wc")?, *required(&self.wt, "wt")?)
    }

    pub fn sources(&self) -> RingResult<&[NodeId]> {
        required(&self.sources, "sources").map(Vec::as_slice)
    }

    pub fn targets(&self) -> RingResult<&[NodeId]> {
        required(&self.targets, "targets").map(Vec::as_slice)
    }

    /// The scenario to apply, if any.
    pub fn to_scenario(&self) -> RingResult<Option<Scenario>> {
        let scenario = match self.scenario.unwrap_or_default() {
            ScenarioKind::None => None,
            ScenarioKind::HighCongestion => Some(Scenario::HighCongestion),
            ScenarioKind::Hotspot => Some(Scenario::Hotspot(
                required(&self.hotspots, "hotspots")?.clone(),
            )),
            ScenarioKind::Uniform => Some(Scenario::Uniform {
                temperature: UNIFORM_TEMPERATURE,
                utilization: UNIFORM_UTILIZATION,
            }),
        };
        Ok(scenario)
    }
}

#[test]
fn defaults_are_valid() {
    let config = SimConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.to_scenario().unwrap(), None);
}
