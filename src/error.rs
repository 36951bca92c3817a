use thiserror::Error;

// Main library error type. The core computations (classify, analyze, simulate)
// are total and never return these; only the I/O and speech boundaries do.

#[derive(Error, Debug)]
pub enum SenseError {
    #[error("Failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("Failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("Failed to read or write image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported raster layout with {0} channels")]
    UnsupportedLayout(u8),
    #[error("Raster buffer does not match {width}x{height}x{channels}")]
    LayoutMismatch { width: u32, height: u32, channels: u8 },
    #[error("Speech synthesis failed: {0}")]
    Speech(#[from] SpeechError),
}

// Speech boundary error type.

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Speech service unavailable: {0}")]
    Unavailable(String),
    #[error("Speech service rejected the request: {0}")]
    Rejected(String),
}
