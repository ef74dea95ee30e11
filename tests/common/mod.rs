//! Shared test fixtures.

use storecard::Typeface;
use tiny_skia::{Path, PathBuilder, Rect};

/// Synthetic face with fixed metrics: 1000 units per em, ASCII
/// alphanumerics advance 500 units, whitespace 250, everything else is
/// full-width at 1000. Glyphs are plain rectangles, which is enough to put
/// ink on the canvas and keep measurements exact.
pub struct BlockTypeface;

/// Design-unit advance for ASCII alphanumerics at 1000 upem.
pub const ASCII_ADVANCE: f32 = 500.0;
/// Design-unit advance for whitespace.
pub const SPACE_ADVANCE: f32 = 250.0;
/// Design-unit advance for everything else (full-width).
pub const WIDE_ADVANCE: f32 = 1000.0;

impl Typeface for BlockTypeface {
  fn units_per_em(&self) -> u16 {
    1000
  }

  fn ascent(&self) -> f32 {
    800.0
  }

  fn glyph_advance(&self, ch: char) -> f32 {
    if ch.is_ascii_alphanumeric() {
      ASCII_ADVANCE
    } else if ch.is_whitespace() {
      SPACE_ADVANCE
    } else {
      WIDE_ADVANCE
    }
  }

  fn glyph_extent(&self, _ch: char) -> Option<f32> {
    Some(750.0)
  }

  fn glyph_outline(&self, ch: char) -> Option<Path> {
    if ch.is_whitespace() {
      return None;
    }
    let advance = self.glyph_advance(ch);
    let mut builder = PathBuilder::new();
    builder.push_rect(Rect::from_xywh(50.0, 0.0, advance - 100.0, 700.0)?);
    builder.finish()
  }
}

pub static FACE: BlockTypeface = BlockTypeface;
