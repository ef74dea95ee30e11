//! # storecard
//!
//! Generates promotional store-card images: a store's name rendered on a
//! fixed-size canvas, styled by its category.
//!
//! The pipeline is select → fit → layout → rasterize → encode:
//!
//! - [`Palette`] maps a category label to a group of (background, text)
//!   color schemes and picks one with an injected random source.
//! - [`text::fit`] shrinks the font size until the unwrapped name fits a
//!   width limit, down to a floor.
//! - [`text::layout`] tokenizes the name (ASCII words stay whole, CJK wraps
//!   per character), greedily fills lines inside the padded content box and
//!   centers the block.
//! - [`Composer`] fills the canvas, rasterizes glyph outlines and encodes a
//!   lossless RGB PNG buffer.
//!
//! Storage is behind the [`Uploader`] seam; the HTTP layer is the hosting
//! service's concern.
//!
//! # Example
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use storecard::{Composer, FontFile, Palette};
//!
//! # fn main() -> storecard::Result<()> {
//! let palette = Palette::builtin();
//! let font_file = FontFile::load("fonts/card.ttf")?;
//! let face = font_file.parse()?;
//! let composer = Composer::new(&palette, &face);
//!
//! let mut rng = StdRng::from_entropy();
//! let png = composer.compose("老王火锅城", "火锅", &mut rng)?;
//! # let _ = png;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod compose;
pub mod error;
pub mod palette;
pub mod text;
pub mod upload;

pub use color::Rgb;
pub use compose::{encode_png, ComposeOptions, Composer};
pub use error::{Error, Result};
pub use palette::{ColorScheme, Palette, PaletteBuilder};
pub use text::{FitOptions, FontFile, ParsedFace, ScaledFont, Typeface};
pub use upload::{object_key, UploadError, Uploader};
