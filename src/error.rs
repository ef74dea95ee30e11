//! Error types for storecard
//!
//! Each subsystem gets its own error enum (fonts, rendering, palette
//! construction, color parsing) and the top-level [`Error`] wraps them with
//! `#[from]` conversions so `?` works across module boundaries.
//!
//! Request-time inputs never error: unknown categories fall back to the
//! "general" group and overlong text degrades to overflowing lines. Errors
//! here are either configuration-time (palette, colors) or resource/IO-time
//! (fonts, encoding).

use thiserror::Error;

/// Result type alias for storecard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for storecard.
#[derive(Error, Debug)]
pub enum Error {
  /// Font resource loading or parsing error
  #[error("Font error: {0}")]
  Font(#[from] FontError),

  /// Rasterization or encoding error
  #[error("Render error: {0}")]
  Render(#[from] RenderError),

  /// Palette construction error
  #[error("Palette error: {0}")]
  Palette(#[from] PaletteError),

  /// Color parsing error
  #[error("Color error: {0}")]
  Color(#[from] crate::color::ColorParseError),
}

/// Font resource errors.
///
/// `ResourceNotFound` is recoverable: the caller may retry with a fallback
/// font file. `ParseFailed` means the bytes were read but are not a usable
/// font face.
#[derive(Error, Debug)]
pub enum FontError {
  /// The font file could not be read
  #[error("font resource not found: {path}")]
  ResourceNotFound {
    path: String,
    #[source]
    source: std::io::Error,
  },

  /// The font data could not be parsed as a face
  #[error("font parse failed: {reason}")]
  ParseFailed { reason: String },
}

/// Rasterization and encoding errors.
///
/// These are fatal for the request that hit them. The composer never returns
/// a partial buffer: callers get either a complete encoded image or one of
/// these.
#[derive(Error, Debug)]
pub enum RenderError {
  /// The pixel buffer for the canvas could not be allocated
  #[error("cannot create {width}x{height} canvas")]
  CanvasCreation { width: u32, height: u32 },

  /// The encoder rejected the rendered canvas
  #[error("failed to encode {format}: {reason}")]
  EncodeFailed { format: String, reason: String },
}

/// Palette construction errors.
///
/// Only reachable through [`PaletteBuilder::build`](crate::palette::PaletteBuilder::build);
/// a built palette has no request-time error paths.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaletteError {
  /// A group was registered with no color schemes
  #[error("group {group:?} has no color schemes")]
  EmptyGroup { group: String },

  /// A category label was mapped to a group that does not exist
  #[error("label {label:?} mapped to unknown group {group:?}")]
  UnknownGroup { label: String, group: String },

  /// The fallback group is missing or does not exist
  #[error("fallback group {group:?} does not exist")]
  UnknownFallback { group: String },
}
