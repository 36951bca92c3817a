// THEORY:
// The `pipeline` module is the final, top-level API for the color engine. It
// encapsulates the classification, analysis, advice and speech layers into a
// single, easy-to-use interface: give it a frame, get back a complete report
// ready for rendering and (optionally) speaking aloud.

use crate::core_modules::advice::advice_for;
use crate::core_modules::analyzer::analyze_dominant_color;
use crate::core_modules::frame::Frame;
use crate::core_modules::simulator;
use crate::speech::{SpeechOutcome, SpeechSynthesizer};

// Re-export key data structures for the public API.
pub use crate::core_modules::advice::{Advice, Severity};
pub use crate::core_modules::analyzer::DominantColor;
pub use crate::core_modules::bucket::{ColorBucket, TextColor};
pub use crate::core_modules::classifier::Classification;
pub use crate::core_modules::simulator::Deficiency;

/// The complete result of scanning one frame: the dominant color, its display
/// attributes, the contextual advice, the announcement text for the speech
/// boundary, and the annotated copy of the input.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub bucket: ColorBucket,
    pub label: &'static str,
    pub hex: &'static str,
    pub text_color: TextColor,
    /// Number of pixels that voted during analysis.
    pub samples: usize,
    pub advice: Advice,
    /// Prebuilt sentence for the speech boundary.
    pub announcement: String,
    pub annotated: Frame,
}

/// Per-session state. The intro sequence is owned by an explicit context
/// object, set once, never a process-wide global.
#[derive(Debug, Default)]
pub struct SessionContext {
    initialized: bool,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot initialization guard: returns `true` exactly once, on the
    /// first call. The caller runs its intro sequence when this is true.
    pub fn take_intro(&mut self) -> bool {
        if self.initialized {
            false
        } else {
            self.initialized = true;
            true
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

/// The main, top-level struct for the color engine.
#[derive(Debug, Default)]
pub struct SensePipeline {
    session: SessionContext,
}

impl SensePipeline {
    pub fn new() -> Self {
        Self {
            session: SessionContext::new(),
        }
    }

    pub fn session_mut(&mut self) -> &mut SessionContext {
        &mut self.session
    }

    /// Analyzes the dominant color of a frame and attaches contextual advice.
    /// Total: the degenerate empty-ROI case yields the fallback report, not an
    /// error. The input frame is never modified.
    pub fn scan(&self, frame: &Frame) -> ScanReport {
        let dominant = analyze_dominant_color(frame);
        let advice = advice_for(dominant.bucket);
        let announcement = format!("Detected {}. Meaning: {}", dominant.label, advice.text);

        ScanReport {
            bucket: dominant.bucket,
            label: dominant.label,
            hex: dominant.hex,
            text_color: dominant.text_color,
            samples: dominant.samples,
            advice,
            announcement,
            annotated: dominant.annotated,
        }
    }

    /// Simulates a color-vision deficiency over a frame. See
    /// [`simulator::simulate`].
    pub fn simulate(&self, frame: &Frame, deficiency: Deficiency) -> Frame {
        simulator::simulate(frame, deficiency)
    }

    /// Name-based simulation: unrecognized names return an unchanged copy.
    pub fn simulate_named(&self, frame: &Frame, name: &str) -> Frame {
        simulator::simulate_named(frame, name)
    }

    /// Speaks a scan report through the given synthesizer. Failures are
    /// reported as a user-visible warning and a non-fatal outcome; they never
    /// propagate and never block the scan result.
    pub async fn announce(
        &self,
        synthesizer: &dyn SpeechSynthesizer,
        report: &ScanReport,
    ) -> SpeechOutcome {
        match synthesizer.synthesize(&report.announcement).await {
            Ok(audio) => SpeechOutcome::Spoken(audio),
            Err(error) => {
                tracing::warn!(%error, "speech synthesis unavailable, continuing without audio");
                SpeechOutcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::frame::{Pixel, RGB_CHANNELS};
    use crate::speech::test_support::EchoSynthesizer;
    use crate::speech::OfflineSynthesizer;

    fn red_frame() -> Frame {
        Frame::solid(200, 200, RGB_CHANNELS, Pixel::opaque(255, 0, 0)).unwrap()
    }

    #[test]
    fn scan_combines_analysis_and_advice() {
        let pipeline = SensePipeline::new();
        let report = pipeline.scan(&red_frame());
        assert_eq!(report.bucket, ColorBucket::Red);
        assert_eq!(report.advice.severity, Severity::Error);
        assert_eq!(report.announcement, "Detected Red. Meaning: Stop / Danger / Hot");
        assert_eq!(report.annotated.width(), 200);
    }

    #[tokio::test]
    async fn announce_speaks_the_announcement() {
        let pipeline = SensePipeline::new();
        let report = pipeline.scan(&red_frame());
        let outcome = pipeline.announce(&EchoSynthesizer, &report).await;
        assert_eq!(
            outcome,
            SpeechOutcome::Spoken(report.announcement.clone().into_bytes())
        );
    }

    #[tokio::test]
    async fn announce_failure_is_non_fatal() {
        let pipeline = SensePipeline::new();
        let report = pipeline.scan(&red_frame());
        let outcome = pipeline.announce(&OfflineSynthesizer, &report).await;
        assert_eq!(outcome, SpeechOutcome::Unavailable);
    }

    #[test]
    fn intro_guard_fires_exactly_once() {
        let mut pipeline = SensePipeline::new();
        assert!(!pipeline.session_mut().is_initialized());
        assert!(pipeline.session_mut().take_intro());
        assert!(!pipeline.session_mut().take_intro());
        assert!(pipeline.session_mut().is_initialized());
    }
}
