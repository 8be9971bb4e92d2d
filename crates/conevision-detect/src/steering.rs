//! Steering heuristics and the per-frame accuracy report.
//!
//! The recorded variants of the steering formula disagree with each other
//! (an IR-voltage sigmoid, an angular-velocity ramp, and a stub returning
//! zero), so the heuristic is a swappable strategy rather than a single
//! hard-coded formula. None of them is validated against the vehicle; the
//! detector does not consume any of this.

use log::info;
use serde::{Deserialize, Serialize};

/// Sensor readings a steering strategy may draw on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SteeringInput {
    /// Left IR sensor voltage.
    pub left_voltage: f32,
    /// Right IR sensor voltage.
    pub right_voltage: f32,
    /// Yaw rate around the vertical axis.
    pub angular_velocity_z: f32,
}

/// Maps sensor readings to a signed steering value in `[-0.3, 0.3]`.
pub trait SteeringEstimator {
    fn estimate(&self, input: &SteeringInput) -> f32;
}

/// Logistic squash of the reciprocal-voltage difference between the two
/// IR sensors: `0.6 * sigmoid(k * (1/L - 1/R)) - 0.3`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoltageSigmoid {
    /// Sigmoid steepness; 0.002 is the recorded tuning.
    #[serde(default = "default_squish_factor")]
    pub squish_factor: f32,
}

fn default_squish_factor() -> f32 {
    0.002
}

impl Default for VoltageSigmoid {
    fn default() -> Self {
        Self {
            squish_factor: default_squish_factor(),
        }
    }
}

impl SteeringEstimator for VoltageSigmoid {
    fn estimate(&self, input: &SteeringInput) -> f32 {
        let leftness = input.left_voltage.recip();
        let rightness = input.right_voltage.recip();
        let metric = leftness - rightness;
        0.6 / (1.0 + (-self.squish_factor * metric).exp()) - 0.3
    }
}

/// Clamped piecewise-linear map from yaw rate to steering.
///
/// Negative rates are clamped at -78 and ramp linearly to -0.3; positive
/// rates below 2 snap to 1 (steering 0) and then ramp as `(w - 1) / 100
/// * 0.3`. The positive branch is deliberately unclamped above, matching
/// the recorded behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AngularVelocityLinear;

impl SteeringEstimator for AngularVelocityLinear {
    fn estimate(&self, input: &SteeringInput) -> f32 {
        let w = input.angular_velocity_z;
        if w <= 0.0 {
            let w = w.max(-78.0);
            (w + 78.0) / 78.0 * 0.3 - 0.3
        } else {
            let w = if w < 2.0 { 1.0 } else { w };
            (w - 1.0) / 100.0 * 0.3
        }
    }
}

/// The stub variant: always steers straight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZeroSteering;

impl SteeringEstimator for ZeroSteering {
    fn estimate(&self, _input: &SteeringInput) -> f32 {
        0.0
    }
}

/// Tolerance band test against a ground-truth steering value: absolute
/// 0.05 when the ground truth is exactly zero, otherwise 30% of its
/// magnitude.
pub fn within_tolerance(ground_truth: f32, estimate: f32) -> bool {
    let band = if ground_truth == 0.0 {
        0.05
    } else {
        ground_truth.abs() * 0.3
    };
    (ground_truth - estimate).abs() < band
}

/// Running per-frame accuracy accumulator for offline steering checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteeringReport {
    pub frames: u32,
    pub correct: u32,
}

impl SteeringReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame; returns whether the estimate passed.
    pub fn record(&mut self, ground_truth: f32, estimate: f32) -> bool {
        let passed = within_tolerance(ground_truth, estimate);
        self.frames += 1;
        if passed {
            self.correct += 1;
        }
        info!(
            "steering estimate {:.4} vs ground truth {:.4}: {} ({:.1}% over {} frames)",
            estimate,
            ground_truth,
            if passed { "pass" } else { "fail" },
            100.0 * self.pass_rate(),
            self.frames
        );
        passed
    }

    /// Fraction of recorded frames that passed, 0.0 when empty.
    pub fn pass_rate(&self) -> f32 {
        if self.frames == 0 {
            0.0
        } else {
            self.correct as f32 / self.frames as f32
        }
    }
}
