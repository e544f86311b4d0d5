// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Path scoring.
//!
//! A path is scored by combining its edge utilization (congestion) and node
//! temperatures, each normalised by the path length and the ring-wide
//! average so that scores from different rings can be compared:
//!
//! ```text
//! score = wc * congestion(path)  / (len(path) * avg_edge_utilization(ring))
//!       + wt * temperature(path) / (len(path) * avg_node_temperature(ring))
//! ```

use crate::ring::Ring;
use crate::types::{NodeId, RingError, RingResult};

/// Tolerance allowed on `wc + wt == 1`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A validated pair of congestion/temperature weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    wc: f64,
    wt: f64,
}

impl Weights {
    /// Both weights must lie in `[0, 1]` and sum to 1 within
    /// [WEIGHT_SUM_TOLERANCE].
    pub fn new(wc: f64, wt: f64) -> RingResult<Self> {
        let in_range = |w: f64| (0.0..=1.0).contains(&w);
        if !(in_range(wc) && in_range(wt) && (wc + wt - 1.0).abs() < WEIGHT_SUM_TOLERANCE) {
            return Err(RingError::InvalidWeights { wc, wt });
        }
        Ok(Self { wc, wt })
    }

    /// Weight applied to normalised congestion.
    #[must_use]
    pub fn congestion(&self) -> f64 {
        self.wc
    }

    /// Weight applied to normalised temperature.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.wt
    }
}

/// Sum of edge utilization along a path.
///
/// Paths of fewer than two nodes have no edges and a congestion of 0.
pub fn path_congestion(ring: &Ring, path: &[NodeId]) -> RingResult<f64> {
    if path.len() < 2 {
        return Ok(0.0);
    }
    path.windows(2)
        .map(|pair| ring.utilization(pair[0], pair[1]))
        .sum()
}

/// Sum of node temperatures along a path, endpoints included. Repeated nodes
/// are counted each time they appear.
pub fn path_temperature(ring: &Ring, path: &[NodeId]) -> RingResult<f64> {
    path.iter().map(|&node| ring.temperature(node)).sum()
}

/// Weighted, ring-normalised score of a path. Lower is better.
pub fn path_score(ring: &Ring, path: &[NodeId], wc: f64, wt: f64) -> RingResult<f64> {
    let weights = Weights::new(wc, wt)?;
    weighted_path_score(ring, path, &weights)
}

/// As [path_score] with weights that have already been validated.
pub fn weighted_path_score(ring: &Ring, path: &[NodeId], weights: &Weights) -> RingResult<f64> {
    if path.is_empty() {
        return Err(RingError::EmptyPath);
    }

    let congestion = path_congestion(ring, path)?;
    let temperature = path_temperature(ring, path)?;

    let len = path.len() as f64;
    let normalized_congestion = congestion / (len * ring.avg_edge_utilization());
    let normalized_temperature = temperature / (len * ring.avg_node_temperature());

    Ok(weights.wc * normalized_congestion + weights.wt * normalized_temperature)
}

/// Coefficients of the microring resonator used to convert a resonant
/// wavelength shift into a temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThermalCoefficients {
    /// Thermo-optic coefficient (per degree Celsius).
    pub alpha: f64,

    /// Nominal resonant wavelength (nm).
    pub lambda_o: f64,

    /// Reference temperature (degrees Celsius).
    pub t_o: f64,
}

impl Default for ThermalCoefficients {
    fn default() -> Self {
        Self {
            alpha: 1.86e-4,
            lambda_o: 1550.0,
            t_o: 25.0,
        }
    }
}

/// Convert a resonant wavelength shift into a temperature using the default
/// [ThermalCoefficients].
pub fn temperature_from_shift(delta_lambda: f64) -> RingResult<f64> {
    temperature_from_shift_with(delta_lambda, &ThermalCoefficients::default())
}

/// Convert a resonant wavelength shift into a temperature:
/// `t_o + delta_lambda / (lambda_o * alpha)`.
///
/// The shift must be a finite, non-negative number.
pub fn temperature_from_shift_with(
    delta_lambda: f64,
    coefficients: &ThermalCoefficients,
) -> RingResult<f64> {
    if !delta_lambda.is_finite() || delta_lambda < 0.0 {
        return Err(RingError::InvalidInput(format!(
            "invalid wavelength shift value {delta_lambda}"
        )));
    }
    let delta_t = delta_lambda / (coefficients.lambda_o * coefficients.alpha);
    Ok(coefficients.t_o + delta_t)
}
