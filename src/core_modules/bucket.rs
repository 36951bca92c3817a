// THEORY:
// The `bucket` module defines the twelve discrete color categories the engine can
// report, plus an `Undetermined` fallback that keeps classification total. Each
// bucket carries two fixed display attributes: the hex color a renderer should
// paint the result card with, and the black-or-white text color that stays
// legible on top of it. Downstream rendering matches on the exact hex strings,
// so the tables here are load-bearing constants, not suggestions.

use std::fmt;

/// A contrasting text color chosen statically per bucket for legibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the twelve color categories produced by classification, plus the
/// defensive `Undetermined` fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBucket {
    White,
    Black,
    Red,
    Orange,
    Yellow,
    LightGreen,
    DarkGreen,
    LightBlue,
    Blue,
    Purple,
    Pink,
    Brown,
    Undetermined,
}

impl ColorBucket {
    /// Human-readable label for result cards and spoken announcements.
    pub fn label(&self) -> &'static str {
        match self {
            ColorBucket::White => "White",
            ColorBucket::Black => "Black",
            ColorBucket::Red => "Red",
            ColorBucket::Orange => "Orange",
            ColorBucket::Yellow => "Yellow",
            ColorBucket::LightGreen => "Light Green",
            ColorBucket::DarkGreen => "Dark Green",
            ColorBucket::LightBlue => "Light Blue",
            ColorBucket::Blue => "Blue",
            ColorBucket::Purple => "Purple",
            ColorBucket::Pink => "Pink",
            ColorBucket::Brown => "Brown",
            ColorBucket::Undetermined => "Undetermined",
        }
    }

    /// Fixed display hex for this bucket.
    pub fn hex(&self) -> &'static str {
        match self {
            ColorBucket::White => "#FFFFFF",
            ColorBucket::Black => "#000000",
            ColorBucket::Red => "#FF0000",
            ColorBucket::Orange => "#FFA500",
            ColorBucket::Yellow => "#FFFF00",
            ColorBucket::LightGreen => "#90EE90",
            ColorBucket::DarkGreen => "#006400",
            ColorBucket::LightBlue => "#00BFFF",
            ColorBucket::Blue => "#0000FF",
            ColorBucket::Purple => "#800080",
            ColorBucket::Pink => "#FFC0CB",
            ColorBucket::Brown => "#8B4513",
            ColorBucket::Undetermined => "#CCCCCC",
        }
    }

    /// The display hex as an RGB triple, for drawing annotations.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorBucket::White => (0xFF, 0xFF, 0xFF),
            ColorBucket::Black => (0x00, 0x00, 0x00),
            ColorBucket::Red => (0xFF, 0x00, 0x00),
            ColorBucket::Orange => (0xFF, 0xA5, 0x00),
            ColorBucket::Yellow => (0xFF, 0xFF, 0x00),
            ColorBucket::LightGreen => (0x90, 0xEE, 0x90),
            ColorBucket::DarkGreen => (0x00, 0x64, 0x00),
            ColorBucket::LightBlue => (0x00, 0xBF, 0xFF),
            ColorBucket::Blue => (0x00, 0x00, 0xFF),
            ColorBucket::Purple => (0x80, 0x00, 0x80),
            ColorBucket::Pink => (0xFF, 0xC0, 0xCB),
            ColorBucket::Brown => (0x8B, 0x45, 0x13),
            ColorBucket::Undetermined => (0xCC, 0xCC, 0xCC),
        }
    }

    /// Contrasting text color that stays legible on `hex()`.
    pub fn text_color(&self) -> TextColor {
        match self {
            ColorBucket::White
            | ColorBucket::Orange
            | ColorBucket::Yellow
            | ColorBucket::LightGreen
            | ColorBucket::LightBlue
            | ColorBucket::Pink
            | ColorBucket::Undetermined => TextColor::Black,
            ColorBucket::Black
            | ColorBucket::Red
            | ColorBucket::DarkGreen
            | ColorBucket::Blue
            | ColorBucket::Purple
            | ColorBucket::Brown => TextColor::White,
        }
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ColorBucket; 13] = [
        ColorBucket::White,
        ColorBucket::Black,
        ColorBucket::Red,
        ColorBucket::Orange,
        ColorBucket::Yellow,
        ColorBucket::LightGreen,
        ColorBucket::DarkGreen,
        ColorBucket::LightBlue,
        ColorBucket::Blue,
        ColorBucket::Purple,
        ColorBucket::Pink,
        ColorBucket::Brown,
        ColorBucket::Undetermined,
    ];

    #[test]
    fn hex_and_rgb_agree() {
        for bucket in ALL {
            let (r, g, b) = bucket.rgb();
            assert_eq!(bucket.hex(), format!("#{r:02X}{g:02X}{b:02X}"));
        }
    }

    #[test]
    fn fixed_table_entries() {
        assert_eq!(ColorBucket::Red.hex(), "#FF0000");
        assert_eq!(ColorBucket::Red.text_color(), TextColor::White);
        assert_eq!(ColorBucket::Yellow.hex(), "#FFFF00");
        assert_eq!(ColorBucket::Yellow.text_color(), TextColor::Black);
        assert_eq!(ColorBucket::LightGreen.hex(), "#90EE90");
        assert_eq!(ColorBucket::LightGreen.text_color(), TextColor::Black);
        assert_eq!(ColorBucket::Brown.hex(), "#8B4513");
        assert_eq!(ColorBucket::Brown.text_color(), TextColor::White);
        assert_eq!(ColorBucket::Undetermined.hex(), "#CCCCCC");
        assert_eq!(ColorBucket::Undetermined.text_color(), TextColor::Black);
    }
}
