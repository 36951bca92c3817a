// THEORY:
// The `advice` module maps each color bucket to a short piece of contextual
// guidance plus a severity level, so the presentation layer can pick the right
// kind of callout (error/warning/success/info) without interpreting colors
// itself. The table is keyed by the `ColorBucket` enum rather than by label
// text: substring dispatch would make "Light Green" ambiguous against "Green"
// and force a fragile check ordering.

use crate::core_modules::bucket::ColorBucket;
use std::fmt;

/// How the presentation layer should style the advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contextual guidance for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub text: &'static str,
    pub severity: Severity,
}

/// Static advice table, one entry per bucket. Total over all buckets;
/// `Undetermined` gets the generic fallback.
pub fn advice_for(bucket: ColorBucket) -> Advice {
    match bucket {
        ColorBucket::Red => Advice {
            text: "Stop / Danger / Hot",
            severity: Severity::Error,
        },
        ColorBucket::Orange => Advice {
            text: "Warning / Construction zone / Energy",
            severity: Severity::Warning,
        },
        ColorBucket::Yellow => Advice {
            text: "Prepare to stop / Caution / Ripe fruit",
            severity: Severity::Warning,
        },
        ColorBucket::LightGreen => Advice {
            text: "Nature / Relaxing / Fruit may not be ripe yet",
            severity: Severity::Success,
        },
        ColorBucket::DarkGreen => Advice {
            text: "Go / Safe / Thriving nature",
            severity: Severity::Success,
        },
        ColorBucket::LightBlue => Advice {
            text: "Bright / Sky / Water / Coolness",
            severity: Severity::Info,
        },
        ColorBucket::Blue => Advice {
            text: "Mandatory signs / Information / Formal / Cold",
            severity: Severity::Info,
        },
        ColorBucket::Purple => Advice {
            text: "Poisonous in nature / Mysterious / Luxurious",
            severity: Severity::Error,
        },
        ColorBucket::Pink => Advice {
            text: "Gentle / Love / Sweets",
            severity: Severity::Success,
        },
        ColorBucket::Brown => Advice {
            text: "Soil / Dryness / Aged / Spoiled",
            severity: Severity::Warning,
        },
        ColorBucket::Black => Advice {
            text: "Power off / Dark / The end",
            severity: Severity::Error,
        },
        ColorBucket::White => Advice {
            text: "Bright / Clean / A beginning / Lights on",
            severity: Severity::Info,
        },
        ColorBucket::Undetermined => Advice {
            text: "Please consider additional context",
            severity: Severity::Info,
        },
    }
}
