// THEORY:
// The `speech` module is the one boundary in the system that touches a slow,
// unreliable external resource: a network-backed text-to-speech service. The
// core never depends on it succeeding. The synthesizer sits behind a trait so
// the library stays free of any particular vendor, and the pipeline's
// `announce` call converts every failure into a logged warning plus an
// `Unavailable` outcome — a scan result must never be blocked by audio.

use crate::error::SpeechError;
use futures::future::BoxFuture;

/// Encoded audio produced by a synthesizer (e.g. MP3 bytes).
pub type AudioBytes = Vec<u8>;

/// A fallible text-to-speech backend. Implementations typically call out to a
/// remote service; the engine only ever awaits the returned future once per
/// announcement.
pub trait SpeechSynthesizer: Send + Sync {
    fn synthesize<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<AudioBytes, SpeechError>>;
}

/// What happened to an announcement. `Unavailable` is a normal, non-fatal
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechOutcome {
    Spoken(AudioBytes),
    Unavailable,
}

/// Stand-in used when no speech service is configured: every request reports
/// the service as unavailable, exercising the warn-and-continue path.
pub struct OfflineSynthesizer;

impl SpeechSynthesizer for OfflineSynthesizer {
    fn synthesize<'a>(&'a self, _text: &'a str) -> BoxFuture<'a, Result<AudioBytes, SpeechError>> {
        Box::pin(async {
            Err(SpeechError::Unavailable(
                "no speech service configured".to_string(),
            ))
        })
    }
}
