//! Font-size fitting
//!
//! Shrinks the font size until the store name, measured as a single
//! unwrapped line, fits the available width or the minimum size is reached.
//! This keeps short names large while long names stay readable; it does not
//! try to prevent wrapping, which the layout step handles afterwards.
//!
//! The size never goes below the configured floor. Text still wider than
//! the limit at the floor is accepted and will overflow or wrap, a
//! documented non-fatal degradation.

use log::warn;

use super::font::{ScaledFont, Typeface};

/// Parameters for the shrink loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitOptions {
  /// Size to start from, in pixels
  pub start_size: u32,
  /// Floor the size never goes below
  pub min_size: u32,
  /// Decrement per iteration
  pub step: u32,
}

impl Default for FitOptions {
  fn default() -> Self {
    Self {
      start_size: 65,
      min_size: 45,
      step: 2,
    }
  }
}

/// Returns the largest size in `{start, start-step, ...} ∩ [min, start]`
/// at which `text` measures at most `max_width` pixels, or `min_size` when
/// no such size exists.
pub fn fit_size<F: Typeface>(face: &F, text: &str, max_width: f32, options: FitOptions) -> u32 {
  let step = options.step.max(1);
  let mut size = options.start_size;
  while size > options.min_size && ScaledFont::new(face, size as f32).measure(text) > max_width {
    size = size.saturating_sub(step).max(options.min_size);
  }
  if ScaledFont::new(face, size as f32).measure(text) > max_width {
    warn!(
      "text {:?} still exceeds {max_width}px at minimum size {}",
      text, options.min_size
    );
  }
  size
}

/// Fits `text` and returns the face bound at the chosen size.
pub fn fit<'a, F: Typeface>(
  face: &'a F,
  text: &str,
  max_width: f32,
  options: FitOptions,
) -> ScaledFont<'a, F> {
  ScaledFont::new(face, fit_size(face, text, max_width, options) as f32)
}
