// THEORY:
// The `analyzer` module decides the dominant color of a whole frame by voting.
// It deliberately does NOT classify every pixel of the input:
//
// 1.  **Working resize**: The frame is first resampled to a fixed 100x100
//     working copy. Dominant-color voting does not benefit from full
//     resolution, and the fixed size bounds the cost of every call.
// 2.  **Central region of interest**: Only a centered square covering 40% of
//     the shorter working dimension is consulted. Subjects sit in the middle
//     of a captured photo; borders are background.
// 3.  **Stride-2 sampling**: Within the ROI, every 2nd row and column votes.
//     For the 100x100 working copy that is a 40x40 region sampled at 400
//     positions — plenty for a stable majority.
//
// The vote table is insertion-ordered, and ties are broken deterministically in
// favor of the bucket first encountered during the scan (a strictly greater
// count is required to displace the current leader). The annotated result is
// always a new copy of the full-resolution input; the caller's frame is never
// touched.

use crate::core_modules::bucket::{ColorBucket, TextColor};
use crate::core_modules::classifier::classify;
use crate::core_modules::frame::{Frame, Pixel};
use indexmap::IndexMap;

/// Side length of the square working copy used for voting.
pub const WORKING_SIZE: u32 = 100;
/// ROI side as a fraction of the shorter working dimension.
const ROI_FRACTION: f32 = 0.4;
/// Sampling stride inside the ROI, in both axes.
const SAMPLE_STRIDE: usize = 2;
/// Stroke width of the ROI outline drawn on the annotated copy.
const OUTLINE_WIDTH: u32 = 8;

/// The result of a dominant-color analysis.
#[derive(Debug, Clone)]
pub struct DominantColor {
    /// The winning bucket; `Undetermined` for the degenerate empty-ROI case.
    pub bucket: ColorBucket,
    /// Display label. "Unknown" for the degenerate empty-ROI case.
    pub label: &'static str,
    /// Display hex backing the label.
    pub hex: &'static str,
    /// Contrasting text color for the label.
    pub text_color: TextColor,
    /// Number of pixels that voted.
    pub samples: usize,
    /// Copy of the input with the ROI outlined in the winner's color.
    pub annotated: Frame,
}

/// The centered ROI square for a working frame of the given dimensions:
/// `(x0, y0, side)` with `side = 40%` of the shorter dimension. The rectangle
/// spans `2 * (side / 2)` pixels from the midpoint, matching integer halving.
pub fn roi_rect(width: u32, height: u32) -> (u32, u32, u32) {
    let side = (width.min(height) as f32 * ROI_FRACTION) as u32;
    let half = side / 2;
    let x0 = (width / 2).saturating_sub(half);
    let y0 = (height / 2).saturating_sub(half);
    (x0, y0, side)
}

/// Votes bucket labels over the central ROI of a 100x100 working copy and
/// returns the winner together with an annotated copy of the original frame.
///
/// The input frame is never modified; annotation happens on a fresh copy at
/// full resolution, outlined at the working-space ROI coordinates.
pub fn analyze_dominant_color(frame: &Frame) -> DominantColor {
    let working = frame.resized(WORKING_SIZE, WORKING_SIZE);
    let (x0, y0, side) = roi_rect(working.width(), working.height());
    let half = side / 2;
    let x1 = working.width() / 2 + half;
    let y1 = working.height() / 2 + half;

    let mut votes: IndexMap<ColorBucket, u32> = IndexMap::new();
    for y in (y0..y1).step_by(SAMPLE_STRIDE) {
        for x in (x0..x1).step_by(SAMPLE_STRIDE) {
            if let Some(pixel) = working.pixel(x, y) {
                let bucket = classify(pixel.red, pixel.green, pixel.blue).bucket;
                *votes.entry(bucket).or_insert(0) += 1;
            }
        }
    }

    let samples = votes.values().map(|&count| count as usize).sum();
    if votes.is_empty() {
        // Degenerate ROI: report a fallback instead of failing.
        return DominantColor {
            bucket: ColorBucket::Undetermined,
            label: "Unknown",
            hex: "#000000",
            text_color: TextColor::White,
            samples: 0,
            annotated: frame.clone(),
        };
    }

    // First-encountered bucket wins ties: insertion order iteration plus a
    // strictly-greater comparison.
    let mut winner = ColorBucket::Undetermined;
    let mut best = 0u32;
    for (&bucket, &count) in &votes {
        if count > best {
            winner = bucket;
            best = count;
        }
    }

    tracing::debug!(
        winner = winner.label(),
        votes = best,
        samples,
        "dominant color decided"
    );

    let mut annotated = frame.clone();
    let (r, g, b) = winner.rgb();
    annotated.draw_rect_outline(x0, y0, x1, y1, OUTLINE_WIDTH, Pixel::opaque(r, g, b));

    DominantColor {
        bucket: winner,
        label: winner.label(),
        hex: winner.hex(),
        text_color: winner.text_color(),
        samples,
        annotated,
    }
}
