//! Font resources and measurement
//!
//! The layout engine measures and rasterizes through the [`Typeface`] trait,
//! the seam between the core and the font resource provider. The production
//! implementation is [`ParsedFace`], a thin wrapper over `ttf_parser::Face`;
//! tests substitute synthetic faces with known metrics.
//!
//! All trait values are in font design units (y-up). [`ScaledFont`] binds a
//! face to a pixel size and converts:
//!
//! ```text
//! pixels = design_units * (size_px / units_per_em)
//! ```
//!
//! Glyph outlines are emitted as `tiny_skia::Path`s in design units; the
//! rasterizer applies [`glyph_transform`] to scale, flip to tiny-skia's
//! y-down space, and position at the pen.

use std::fs;

use tiny_skia::{Path, PathBuilder, Transform};

use crate::error::FontError;

/// Reference full-width glyph used to derive the line height.
pub(crate) const REFERENCE_GLYPH: char = '一';

/// A measurable, renderable font face.
///
/// Advance, extent and ascent are in font design units.
pub trait Typeface {
  /// The face's design resolution (typically 1000 or 2048).
  fn units_per_em(&self) -> u16;

  /// Ascender height above the baseline.
  fn ascent(&self) -> f32;

  /// Horizontal advance of the glyph for `ch`.
  ///
  /// Faces without a glyph for `ch` report the .notdef advance (or zero);
  /// missing glyphs are a degradation, never an error.
  fn glyph_advance(&self, ch: char) -> f32;

  /// Topmost extent (bounding-box `y_max`) of the glyph for `ch`, if the
  /// face has one.
  fn glyph_extent(&self, ch: char) -> Option<f32>;

  /// Outline of the glyph for `ch` in design units, y-up.
  ///
  /// `None` for blank glyphs (e.g. spaces) and missing glyphs.
  fn glyph_outline(&self, ch: char) -> Option<Path>;
}

/// An owned font resource (raw file bytes).
///
/// Parsing borrows from the owned bytes, so a `FontFile` loaded once can
/// serve many requests.
#[derive(Debug, Clone)]
pub struct FontFile {
  data: Vec<u8>,
}

impl FontFile {
  /// Reads a font file from disk.
  ///
  /// IO failures surface as [`FontError::ResourceNotFound`]; the caller
  /// decides whether to substitute a fallback font or abort.
  pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, FontError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| FontError::ResourceNotFound {
      path: path.display().to_string(),
      source,
    })?;
    Ok(Self { data })
  }

  /// Wraps already-loaded font bytes.
  pub fn from_bytes(data: Vec<u8>) -> Self {
    Self { data }
  }

  /// Parses the first face in the file.
  pub fn parse(&self) -> Result<ParsedFace<'_>, FontError> {
    let face = ttf_parser::Face::parse(&self.data, 0).map_err(|err| FontError::ParseFailed {
      reason: err.to_string(),
    })?;
    Ok(ParsedFace { face })
  }
}

/// [`Typeface`] implementation backed by ttf-parser.
pub struct ParsedFace<'a> {
  face: ttf_parser::Face<'a>,
}

impl ParsedFace<'_> {
  fn glyph_id(&self, ch: char) -> Option<ttf_parser::GlyphId> {
    self.face.glyph_index(ch)
  }
}

impl Typeface for ParsedFace<'_> {
  fn units_per_em(&self) -> u16 {
    self.face.units_per_em()
  }

  fn ascent(&self) -> f32 {
    self.face.ascender() as f32
  }

  fn glyph_advance(&self, ch: char) -> f32 {
    // Missing glyphs fall back to .notdef so measurement stays defined.
    let glyph = self.glyph_id(ch).unwrap_or(ttf_parser::GlyphId(0));
    self.face.glyph_hor_advance(glyph).unwrap_or(0) as f32
  }

  fn glyph_extent(&self, ch: char) -> Option<f32> {
    let glyph = self.glyph_id(ch)?;
    let bbox = self.face.glyph_bounding_box(glyph)?;
    Some(bbox.y_max as f32)
  }

  fn glyph_outline(&self, ch: char) -> Option<Path> {
    let glyph = self.glyph_id(ch)?;
    let mut builder = GlyphOutlineBuilder::new();
    self.face.outline_glyph(glyph, &mut builder)?;
    builder.finish()
  }
}

/// Converts ttf-parser glyph outlines to tiny-skia paths.
///
/// Paths are recorded in font design units with no positioning or scaling;
/// the rasterizer applies [`glyph_transform`] when filling.
struct GlyphOutlineBuilder {
  builder: PathBuilder,
}

impl GlyphOutlineBuilder {
  fn new() -> Self {
    Self {
      builder: PathBuilder::new(),
    }
  }

  fn finish(self) -> Option<Path> {
    self.builder.finish()
  }
}

impl ttf_parser::OutlineBuilder for GlyphOutlineBuilder {
  fn move_to(&mut self, x: f32, y: f32) {
    self.builder.move_to(x, y);
  }

  fn line_to(&mut self, x: f32, y: f32) {
    self.builder.line_to(x, y);
  }

  fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
    self.builder.quad_to(x1, y1, x, y);
  }

  fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
    self.builder.cubic_to(x1, y1, x2, y2, x, y);
  }

  fn close(&mut self) {
    self.builder.close();
  }
}

/// Transform mapping font design units to device pixels.
///
/// `scale` converts design units to pixels; translation places the glyph
/// origin at `(x, y)` (the pen position on the baseline). The Y axis is
/// flipped to match tiny-skia's y-down coordinate system.
#[inline]
pub fn glyph_transform(scale: f32, x: f32, y: f32) -> Transform {
  Transform::from_row(scale, 0.0, 0.0, -scale, x, y)
}

/// A [`Typeface`] bound to a pixel size.
#[derive(Debug, Clone, Copy)]
pub struct ScaledFont<'a, F: Typeface> {
  face: &'a F,
  size: f32,
}

impl<'a, F: Typeface> ScaledFont<'a, F> {
  /// Binds `face` to a pixel size.
  pub fn new(face: &'a F, size: f32) -> Self {
    Self { face, size }
  }

  /// The pixel size this font was bound at.
  pub fn size(&self) -> f32 {
    self.size
  }

  /// The underlying face.
  pub fn face(&self) -> &'a F {
    self.face
  }

  /// Design-units-to-pixels factor.
  pub fn scale(&self) -> f32 {
    self.size / self.face.units_per_em() as f32
  }

  /// Width of `text` as a single unwrapped line, in pixels.
  ///
  /// Sum of scaled advances; kerning and shaping are ignored, which is
  /// accurate enough for fitting and greedy line fill.
  pub fn measure(&self, text: &str) -> f32 {
    let units: f32 = text.chars().map(|ch| self.face.glyph_advance(ch)).sum();
    units * self.scale()
  }

  /// Scaled ascender height, in pixels.
  pub fn ascent(&self) -> f32 {
    self.face.ascent() * self.scale()
  }

  /// Vertical extent of one line of text, in pixels.
  ///
  /// Uses the reference full-width glyph '一' when the face has it and
  /// falls back to the ascender for faces that do not, so Latin-only fonts
  /// still get a sane line height.
  pub fn line_extent(&self) -> f32 {
    let units = self
      .face
      .glyph_extent(REFERENCE_GLYPH)
      .unwrap_or_else(|| self.face.ascent());
    units * self.scale()
  }
}
