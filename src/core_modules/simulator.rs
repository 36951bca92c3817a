// THEORY:
// The `simulator` module renders how an image appears under one of three forms
// of color-vision deficiency. Each deficiency is a fixed 3x3 linear transform of
// the RGB vector: output = M * (r, g, b), clamped to [0, 255] and truncated back
// to bytes. The matrix constants encode a specific, widely recognized simulation
// model; they are reproduced digit-for-digit and must never be "improved", since
// downstream comparisons depend on byte-identical output.
//
// Key architectural principles:
// 1.  **Pure and total**: Simulation never fails. The typed entry point takes a
//     `Deficiency` enum; the name-based entry point degrades to an identity copy
//     for unrecognized names rather than erroring.
// 2.  **Alpha passthrough**: Only the three color channels are recombined; the
//     alpha channel, when present, is copied through untouched.
// 3.  **Buffer-walking hot path**: The transform advances through the raw buffer
//     in channel-sized steps so the same routine serves both the sequential
//     simulator and the row-band worker pool.

use crate::core_modules::frame::Frame;
use std::fmt;

/// Row-major 3x3 transform applied as output = M * (r, g, b).
pub type SimulationMatrix = [[f64; 3]; 3];

pub static PROTANOPIA_MATRIX: SimulationMatrix = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

pub static DEUTERANOPIA_MATRIX: SimulationMatrix = [
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
];

pub static TRITANOPIA_MATRIX: SimulationMatrix = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

/// A supported color-vision deficiency type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// Red-blindness (missing L cones).
    Protanopia,
    /// Green-blindness (missing M cones).
    Deuteranopia,
    /// Blue-blindness (missing S cones).
    Tritanopia,
}

impl Deficiency {
    /// The fixed simulation matrix for this deficiency.
    pub fn matrix(&self) -> &'static SimulationMatrix {
        match self {
            Deficiency::Protanopia => &PROTANOPIA_MATRIX,
            Deficiency::Deuteranopia => &DEUTERANOPIA_MATRIX,
            Deficiency::Tritanopia => &TRITANOPIA_MATRIX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
        }
    }

    /// Case-insensitive name lookup. `None` for anything unrecognized.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "protanopia" => Some(Deficiency::Protanopia),
            "deuteranopia" => Some(Deficiency::Deuteranopia),
            "tritanopia" => Some(Deficiency::Tritanopia),
            _ => None,
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recombines the RGB channels of every `channels`-sized sample in `data` with
/// the given matrix. Any trailing channel (alpha) is left untouched. Results
/// are clamped to [0, 255] and truncated toward zero.
pub fn transform_rgb(data: &mut [u8], channels: usize, matrix: &SimulationMatrix) {
    for sample in data.chunks_exact_mut(channels) {
        let r = sample[0] as f64;
        let g = sample[1] as f64;
        let b = sample[2] as f64;
        sample[0] = (matrix[0][0] * r + matrix[0][1] * g + matrix[0][2] * b).clamp(0.0, 255.0) as u8;
        sample[1] = (matrix[1][0] * r + matrix[1][1] * g + matrix[1][2] * b).clamp(0.0, 255.0) as u8;
        sample[2] = (matrix[2][0] * r + matrix[2][1] * g + matrix[2][2] * b).clamp(0.0, 255.0) as u8;
    }
}

/// Simulates the given deficiency over every pixel, returning a new frame.
/// The input frame is never modified.
pub fn simulate(frame: &Frame, deficiency: Deficiency) -> Frame {
    let mut out = frame.clone();
    let channels = out.channels() as usize;
    transform_rgb(out.data_mut(), channels, deficiency.matrix());
    out
}

/// Name-based variant of [`simulate`]: unrecognized names return an unchanged
/// copy of the input (identity, not an error).
pub fn simulate_named(frame: &Frame, name: &str) -> Frame {
    match Deficiency::parse(name) {
        Some(deficiency) => simulate(frame, deficiency),
        None => frame.clone(),
    }
}
