//! RGB color values
//!
//! Colors enter the system as hex strings in palette definitions and leave
//! it as opaque `tiny_skia::Color` fills. `#RGB` and `#RRGGBB` forms are
//! accepted; the canvas is fully opaque so there is no alpha channel.

use std::fmt;
use thiserror::Error;

/// Error produced when a hex color string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
  /// Not a `#RGB` or `#RRGGBB` string
  #[error("invalid hex color: {0}")]
  InvalidHex(String),
}

/// An opaque RGB color.
///
/// # Examples
///
/// ```
/// use storecard::Rgb;
///
/// let bg = Rgb::parse("#f5eecb").unwrap();
/// assert_eq!(bg, Rgb::new(0xf5, 0xee, 0xcb));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
  /// Red component (0-255)
  pub r: u8,
  /// Green component (0-255)
  pub g: u8,
  /// Blue component (0-255)
  pub b: u8,
}

impl Rgb {
  /// Creates a color from its components.
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// Parses a `#RGB` or `#RRGGBB` hex string.
  pub fn parse(s: &str) -> Result<Self, ColorParseError> {
    let invalid = || ColorParseError::InvalidHex(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.is_ascii() {
      return Err(invalid());
    }

    let (r, g, b) = match hex.len() {
      3 => {
        // #RGB -> #RRGGBB
        let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).map_err(|_| invalid())?;
        (r, g, b)
      }
      6 => {
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
        (r, g, b)
      }
      _ => return Err(invalid()),
    };

    Ok(Self { r, g, b })
  }

  /// Converts to an opaque tiny-skia color.
  pub fn to_skia(self) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
  }
}

impl fmt::Display for Rgb {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}
