//! Color tokens shared by the editor theme and host chrome.

use crate::error::AppError;
use std::fmt;

/// Straight (unpremultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_rgba(0, 0, 0, 0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether painting this color would leave the background untouched.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    ///
    /// # Errors
    /// Returns [`AppError::InvalidColor`] for any other shape.
    pub fn from_hex(input: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidColor(input.to_string());
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
            return Err(invalid());
        }
        let channel = |idx: usize| {
            u8::from_str_radix(&digits[idx * 2..idx * 2 + 2], 16).map_err(|_| invalid())
        };
        let alpha = if digits.len() == 8 { channel(3)? } else { 0xff };
        Ok(Self::from_rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transparent() {
            return f.write_str("transparent");
        }
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Visual constants shared across otherwise independent styling decisions.
///
/// Injected into the editor at construction rather than read from a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba,
    pub chrome_background: Rgba,
    pub foreground: Rgba,
    pub muted: Rgba,
    pub active_line: Rgba,
    pub selection: Rgba,
    pub cursor: Rgba,
    pub accent: Rgba,
}

impl Palette {
    /// The One Dark scheme.
    pub const fn one_dark() -> Self {
        Self {
            background: Rgba::from_rgb(0x28, 0x2c, 0x34),
            chrome_background: Rgba::from_rgb(0x21, 0x25, 0x2b),
            foreground: Rgba::from_rgb(0xab, 0xb2, 0xbf),
            muted: Rgba::from_rgb(0x7d, 0x87, 0x99),
            active_line: Rgba::from_rgb(0x2c, 0x31, 0x3a),
            selection: Rgba::from_rgb(0x3e, 0x44, 0x51),
            cursor: Rgba::from_rgb(0x52, 0x8b, 0xff),
            accent: Rgba::from_rgb(0xe5, 0xc0, 0x7b),
        }
    }

    /// Returns a copy with the active-line color replaced when `color` is set.
    pub fn with_active_line(mut self, color: Option<Rgba>) -> Self {
        if let Some(color) = color {
            self.active_line = color;
        }
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::one_dark()
    }
}
