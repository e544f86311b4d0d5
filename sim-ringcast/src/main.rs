// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Compare multicast routing strategies on a ring interconnect.
//!
//! See `lib.rs` for details.

use std::process::ExitCode;
use std::str::FromStr;

use log::{LevelFilter, error};
use sim_ringcast::config::SimConfig;
use sim_ringcast::{log_comparison, run_simulation};
use simplelog::{ConfigBuilder, SimpleLogger};

/// Take the configured string and convert it to a Level
fn choose_level(lvl: &str) -> LevelFilter {
    match LevelFilter::from_str(lvl) {
        Ok(level) => level,
        Err(_) => {
            let default = LevelFilter::Error;
            println!("Unable to parse level string '{lvl}', defaulting to {default}");
            default
        }
    }
}

fn setup_logger(config: &SimConfig) {
    let level = choose_level(config.log.as_deref().unwrap_or("info"));

    // Build up the logging configuration such that:
    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off) // No timestamps are printed
        .set_location_level(LevelFilter::Off) // No file locations are printed
        .set_thread_level(LevelFilter::Off) // No thread information is printed
        .set_target_level(LevelFilter::Off) // No target is printed
        .build();
    if let Err(e) = SimpleLogger::init(level, log_config) {
        eprintln!("Unable to set up logging: {e}");
    }
}

fn main() -> ExitCode {
    let config = match SimConfig::parse_all_sources() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    setup_logger(&config);

    match run_simulation(&config) {
        Ok(outcome) => {
            log_comparison(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
