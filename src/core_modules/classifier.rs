// THEORY:
// The `classifier` module maps a single RGB sample to a `ColorBucket`. It is the
// one genuinely hand-tuned piece of the engine: the HSV thresholds below were
// chosen empirically against real photographs and must be preserved exactly,
// boundary semantics included.
//
// Key architectural principles:
// 1.  **Totality**: Every byte triple classifies to some bucket. Achromatic and
//     dark checks run before the hue ranges; the hue ranges cover [0, 360); the
//     `Undetermined` arm is defensive only.
// 2.  **Lower-inclusive ranges**: Every hue range is lower-bound-inclusive and
//     upper-bound-exclusive. The single exception is red, which wraps the 0/360
//     seam: [345, 360) joins [0, 15).
// 3.  **Two-stage API**: `rgb_to_hsv` and `classify_hsv` are exposed separately
//     so threshold boundaries can be exercised at exact hue angles, which byte
//     triples cannot always hit.

use crate::core_modules::bucket::{ColorBucket, TextColor};

pub type Hue = f32;
pub type Saturation = f32;
pub type Value = f32;

/// HSV sample: hue in degrees [0, 360), saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: Hue,
    pub s: Saturation,
    pub v: Value,
}

/// The full classification of one sample: the bucket plus its fixed display
/// attributes, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub bucket: ColorBucket,
    pub hex: &'static str,
    pub text_color: TextColor,
}

// Achromatic and darkness gates, applied before any hue range.
const ACHROMATIC_SATURATION: Saturation = 0.15;
const WHITE_VALUE_FLOOR: Value = 0.65;
const BLACK_VALUE_CEILING: Value = 0.20;

// Value overrides inside the orange and yellow hue ranges: dim warm hues
// read as brown.
const BROWN_IN_ORANGE_VALUE: Value = 0.50;
const BROWN_IN_YELLOW_VALUE: Value = 0.40;

/// Converts a byte RGB triple to HSV. Value is the max channel, saturation is
/// chroma over value (0 for pure black), hue follows the standard sector
/// formula in degrees [0, 360).
pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> Hsv {
    let r = red as f32 / 255.0;
    let g = green as f32 / 255.0;
    let b = blue as f32 / 255.0;

    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let chroma = max - min;

    let v = max;
    let s = if max > 0.0 { chroma / max } else { 0.0 };

    if chroma <= f32::EPSILON {
        return Hsv { h: 0.0, s, v };
    }

    let (base_difference, sector_offset) = if max == r {
        (g - b, 0.0)
    } else if max == g {
        (b - r, 2.0)
    } else {
        (r - g, 4.0)
    };

    let mut h = (base_difference / chroma + sector_offset) * 60.0;
    if h < 0.0 {
        h += 360.0;
    }
    if h >= 360.0 {
        h -= 360.0;
    }

    Hsv { h, s, v }
}

/// Maps an HSV sample to its bucket using the hand-tuned thresholds.
pub fn classify_hsv(hsv: Hsv) -> ColorBucket {
    let Hsv { h, s, v } = hsv;

    // Washed-out samples split into white/black on brightness alone.
    if s < ACHROMATIC_SATURATION {
        return if v > WHITE_VALUE_FLOOR {
            ColorBucket::White
        } else {
            ColorBucket::Black
        };
    }

    // Dark chromatic samples that passed the saturation gate.
    if v < BLACK_VALUE_CEILING {
        return ColorBucket::Black;
    }

    if (0.0..15.0).contains(&h) || (345.0..360.0).contains(&h) {
        ColorBucket::Red
    } else if (15.0..45.0).contains(&h) {
        if v < BROWN_IN_ORANGE_VALUE {
            ColorBucket::Brown
        } else {
            ColorBucket::Orange
        }
    } else if (45.0..75.0).contains(&h) {
        if v < BROWN_IN_YELLOW_VALUE {
            ColorBucket::Brown
        } else {
            ColorBucket::Yellow
        }
    } else if (75.0..160.0).contains(&h) {
        if v > 0.6 && s < 0.8 {
            ColorBucket::LightGreen
        } else {
            ColorBucket::DarkGreen
        }
    } else if (160.0..260.0).contains(&h) {
        if h < 200.0 || (v > 0.7 && s < 0.6) {
            ColorBucket::LightBlue
        } else {
            ColorBucket::Blue
        }
    } else if (260.0..330.0).contains(&h) {
        ColorBucket::Purple
    } else if (330.0..345.0).contains(&h) {
        ColorBucket::Pink
    } else {
        // Unreachable for hue in [0, 360); kept so the function stays total.
        ColorBucket::Undetermined
    }
}

/// Classifies one RGB sample. Total over all byte triples; no failure path.
pub fn classify(red: u8, green: u8, blue: u8) -> Classification {
    let bucket = classify_hsv(rgb_to_hsv(red, green, blue));
    Classification {
        bucket,
        hex: bucket.hex(),
        text_color: bucket.text_color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsv(h: f32, s: f32, v: f32) -> Hsv {
        Hsv { h, s, v }
    }

    #[test]
    fn primary_colors() {
        assert_eq!(classify(255, 0, 0).bucket, ColorBucket::Red);
        assert_eq!(classify(255, 0, 0).hex, "#FF0000");
        assert_eq!(classify(255, 0, 0).text_color, TextColor::White);
        assert_eq!(classify(0, 0, 255).bucket, ColorBucket::Blue);
        assert_eq!(classify(255, 255, 0).bucket, ColorBucket::Yellow);
    }

    #[test]
    fn achromatic_samples() {
        assert_eq!(classify(255, 255, 255).bucket, ColorBucket::White);
        assert_eq!(classify(0, 0, 0).bucket, ColorBucket::Black);
        // Mid gray: saturation 0, value ~0.5, below the white floor.
        assert_eq!(classify(128, 128, 128).bucket, ColorBucket::Black);
    }

    #[test]
    fn warm_hues_dim_to_brown() {
        // Hue ~44 degrees at value 0.4 and 0.6 (saturation 1).
        assert_eq!(classify(102, 75, 0).bucket, ColorBucket::Brown);
        assert_eq!(classify(153, 112, 0).bucket, ColorBucket::Orange);
        assert_eq!(classify_hsv(hsv(44.0, 1.0, 0.4)), ColorBucket::Brown);
        assert_eq!(classify_hsv(hsv(44.0, 1.0, 0.6)), ColorBucket::Orange);
    }

    #[test]
    fn hue_range_boundaries_are_lower_inclusive() {
        assert_eq!(classify_hsv(hsv(0.0, 1.0, 1.0)), ColorBucket::Red);
        assert_eq!(classify_hsv(hsv(14.9, 1.0, 1.0)), ColorBucket::Red);
        assert_eq!(classify_hsv(hsv(15.0, 1.0, 1.0)), ColorBucket::Orange);
        assert_eq!(classify_hsv(hsv(45.0, 1.0, 1.0)), ColorBucket::Yellow);
        assert_eq!(classify_hsv(hsv(45.0, 1.0, 0.39)), ColorBucket::Brown);
        assert_eq!(classify_hsv(hsv(75.0, 1.0, 1.0)), ColorBucket::DarkGreen);
        assert_eq!(classify_hsv(hsv(75.0, 0.5, 0.7)), ColorBucket::LightGreen);
        assert_eq!(classify_hsv(hsv(160.0, 1.0, 0.5)), ColorBucket::LightBlue);
        assert_eq!(classify_hsv(hsv(199.9, 1.0, 0.3)), ColorBucket::LightBlue);
        assert_eq!(classify_hsv(hsv(200.0, 1.0, 0.5)), ColorBucket::Blue);
        assert_eq!(classify_hsv(hsv(200.0, 0.5, 0.8)), ColorBucket::LightBlue);
        assert_eq!(classify_hsv(hsv(260.0, 1.0, 1.0)), ColorBucket::Purple);
        assert_eq!(classify_hsv(hsv(330.0, 1.0, 1.0)), ColorBucket::Pink);
        assert_eq!(classify_hsv(hsv(344.9, 1.0, 1.0)), ColorBucket::Pink);
        assert_eq!(classify_hsv(hsv(345.0, 1.0, 1.0)), ColorBucket::Red);
    }

    #[test]
    fn dark_chromatic_samples_read_black() {
        // Saturated but very dark: passes the achromatic gate, caught by the
        // value ceiling.
        assert_eq!(classify_hsv(hsv(120.0, 1.0, 0.1)), ColorBucket::Black);
        assert_eq!(classify(20, 40, 20).bucket, ColorBucket::Black);
    }

    #[test]
    fn light_green_needs_brightness_and_low_saturation() {
        assert_eq!(classify(144, 238, 144).bucket, ColorBucket::LightGreen);
        assert_eq!(classify(0, 100, 0).bucket, ColorBucket::DarkGreen);
    }

    #[test]
    fn classification_is_total_with_consistent_tables() {
        // Sweep the RGB cube at stride 15 (18^3 samples): every triple must
        // classify, and the reported hex/text must match the bucket tables.
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let c = classify(r as u8, g as u8, b as u8);
                    assert_eq!(c.hex, c.bucket.hex());
                    assert_eq!(c.text_color, c.bucket.text_color());
                    let hsv = rgb_to_hsv(r as u8, g as u8, b as u8);
                    assert!((0.0..360.0).contains(&hsv.h));
                    assert_ne!(c.bucket, ColorBucket::Undetermined);
                }
            }
        }
    }
}
