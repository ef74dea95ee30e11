//! Greedy line fill and centering
//!
//! Pure layout: tokenizes the text, packs tokens into lines no wider than
//! the content box (canvas width minus padding on both sides), and computes
//! the offsets that center each line horizontally and the block vertically.
//! No drawing happens here; the composer consumes the [`LayoutResult`].
//!
//! Overflow policy: the first token of a line is always placed, even when it
//! alone exceeds the content width. A token is never split, so a single
//! oversized token produces a single overflowing line rather than an error.

use super::font::{ScaledFont, Typeface};
use super::tokenize::tokenize;

/// Fixed leading added below each line's glyph extent, in pixels.
pub const LINE_LEADING: f32 = 5.0;

/// One laid-out line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
  /// The line's text, a concatenation of consecutive tokens
  pub text: String,
  /// Rendered width in pixels
  pub width: f32,
  /// Horizontal start offset centering the line in the canvas
  pub x: f32,
}

/// Lines plus the vertical placement of the whole block.
///
/// Lines stack downward from `y_start` at `line_height` intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
  /// Lines in top-to-bottom order; never empty
  pub lines: Vec<Line>,
  /// Top of the first line, centering the block vertically
  pub y_start: f32,
  /// Vertical distance between consecutive line tops
  pub line_height: f32,
}

impl LayoutResult {
  /// Top edge of line `index`.
  pub fn line_y(&self, index: usize) -> f32 {
    self.y_start + index as f32 * self.line_height
  }
}

/// Lays out `text` in a `canvas`-sized box with `padding` on every side.
///
/// Empty text yields exactly one empty line whose height is still reserved,
/// so vertical centering collapses to a single row.
pub fn layout<F: Typeface>(
  text: &str,
  font: &ScaledFont<'_, F>,
  canvas: (u32, u32),
  padding: f32,
) -> LayoutResult {
  let (width, height) = canvas;
  let max_width = width as f32 - 2.0 * padding;

  let mut filled: Vec<String> = Vec::new();
  let mut current = String::new();
  for token in tokenize(text) {
    if current.is_empty() {
      // A line never starts empty, even with an oversized token.
      current.push_str(token.text);
      continue;
    }
    let mut tentative = current.clone();
    tentative.push_str(token.text);
    if font.measure(&tentative) <= max_width {
      current = tentative;
    } else {
      filled.push(std::mem::take(&mut current));
      current.push_str(token.text);
    }
  }
  filled.push(current);

  let line_height = font.line_extent() + LINE_LEADING;
  let total_height = filled.len() as f32 * line_height;
  let y_start = (height as f32 - total_height) / 2.0;

  let lines = filled
    .into_iter()
    .map(|text| {
      let line_width = font.measure(&text);
      Line {
        x: (width as f32 - line_width) / 2.0,
        width: line_width,
        text,
      }
    })
    .collect();

  LayoutResult {
    lines,
    y_start,
    line_height,
  }
}
