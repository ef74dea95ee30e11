//! Image composition
//!
//! Orchestrates a full card render: pick a color scheme for the category,
//! fill the canvas with its background, fit the font size to the store
//! name, lay the name out as wrapped centered lines, fill each glyph
//! outline in the text color, and encode the canvas to a PNG buffer.
//!
//! Composition either returns a complete encoded buffer or an error; no
//! partial buffer ever escapes.

use std::io::Cursor;

use image::{ImageFormat, RgbImage};
use log::debug;
use rand::Rng;
use tiny_skia::{FillRule, Paint, Pixmap};

use crate::error::{RenderError, Result};
use crate::palette::{ColorScheme, Palette};
use crate::text::{fit, glyph_transform, layout, FitOptions, LayoutResult, ScaledFont, Typeface};

/// Canvas and fitting parameters.
///
/// The defaults reproduce the production card: 400×400 canvas, font fitted
/// from 65px down to 45px in steps of 2 against the canvas width minus a
/// 40px margin, and lines wrapped inside a 20px padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeOptions {
  /// Canvas width in pixels
  pub width: u32,
  /// Canvas height in pixels
  pub height: u32,
  /// Font-size fitting parameters
  pub fit: FitOptions,
  /// Total horizontal margin subtracted from the width for the fitting pass
  pub fit_margin: f32,
  /// Content-box padding used by the wrapping pass, per side
  pub padding: f32,
}

impl Default for ComposeOptions {
  fn default() -> Self {
    Self {
      width: 400,
      height: 400,
      fit: FitOptions::default(),
      fit_margin: 40.0,
      padding: 20.0,
    }
  }
}

/// Renders store cards against a fixed palette and font.
///
/// Stateless across calls apart from the borrowed palette and face; each
/// [`compose`](Self::compose) call owns its canvas and buffers exclusively.
pub struct Composer<'a, F: Typeface> {
  palette: &'a Palette,
  font: &'a F,
  options: ComposeOptions,
}

impl<'a, F: Typeface> Composer<'a, F> {
  /// Creates a composer with default [`ComposeOptions`].
  pub fn new(palette: &'a Palette, font: &'a F) -> Self {
    Self::with_options(palette, font, ComposeOptions::default())
  }

  /// Creates a composer with explicit options.
  pub fn with_options(palette: &'a Palette, font: &'a F, options: ComposeOptions) -> Self {
    Self {
      palette,
      font,
      options,
    }
  }

  /// Renders a card for `name` styled by `category` and returns the encoded
  /// PNG bytes.
  pub fn compose(&self, name: &str, category: &str, rng: &mut impl Rng) -> Result<Vec<u8>> {
    let ComposeOptions { width, height, .. } = self.options;

    let scheme = self.palette.select(category, rng);
    debug!(
      "category {:?} resolved to group {:?} (bg {}, text {})",
      category,
      self.palette.group_for(category),
      scheme.background,
      scheme.text
    );

    let mut pixmap =
      Pixmap::new(width, height).ok_or(RenderError::CanvasCreation { width, height })?;
    pixmap.fill(scheme.background.to_skia());

    let max_text_width = width as f32 - self.options.fit_margin;
    let font = fit(self.font, name, max_text_width, self.options.fit);
    let result = layout(name, &font, (width, height), self.options.padding);
    debug!(
      "fitted {:?} at {}px into {} line(s)",
      name,
      font.size(),
      result.lines.len()
    );

    self.draw_lines(&mut pixmap, &font, &result, scheme);
    encode_png(&pixmap)
  }

  fn draw_lines(
    &self,
    pixmap: &mut Pixmap,
    font: &ScaledFont<'_, F>,
    result: &LayoutResult,
    scheme: ColorScheme,
  ) {
    let mut paint = Paint::default();
    paint.set_color(scheme.text.to_skia());
    paint.anti_alias = true;

    let scale = font.scale();
    for (index, line) in result.lines.iter().enumerate() {
      let baseline = result.line_y(index) + font.ascent();
      let mut pen_x = line.x;
      for ch in line.text.chars() {
        if let Some(path) = self.font.glyph_outline(ch) {
          let transform = glyph_transform(scale, pen_x, baseline);
          pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
        pen_x += self.font.glyph_advance(ch) * scale;
      }
    }
  }
}

/// Encodes a fully opaque canvas as an RGB PNG.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
  let width = pixmap.width();
  let height = pixmap.height();

  let mut rgb = Vec::with_capacity((width as usize) * (height as usize) * 3);
  for pixel in pixmap.pixels() {
    let color = pixel.demultiply();
    rgb.extend_from_slice(&[color.red(), color.green(), color.blue()]);
  }

  let img = RgbImage::from_raw(width, height, rgb).ok_or_else(|| RenderError::EncodeFailed {
    format: "PNG".to_string(),
    reason: "pixel buffer size mismatch".to_string(),
  })?;

  let mut out = Vec::new();
  img
    .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
    .map_err(|err| RenderError::EncodeFailed {
      format: "PNG".to_string(),
      reason: err.to_string(),
    })?;
  Ok(out)
}
