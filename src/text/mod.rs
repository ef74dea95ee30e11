//! Text tokenization, measurement, fitting and layout.

pub mod fit;
pub mod font;
pub mod layout;
pub mod tokenize;

pub use fit::{fit, fit_size, FitOptions};
pub use font::{glyph_transform, FontFile, ParsedFace, ScaledFont, Typeface};
pub use layout::{layout, LayoutResult, Line, LINE_LEADING};
pub use tokenize::{tokenize, Token, TokenKind};
