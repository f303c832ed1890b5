//! A compiler for text glyph bitmaps.
//!
//! Glyph sources are plain text where each row begins with a run of pixels: `.` for an unset
//! pixel, and `*` or `@` for a set pixel. Every such row is packed into a single byte, with the
//! leftmost pixel as the most significant bit. Rows that do not begin with a pixel are treated as
//! comments or separators, and anything following the pixel run on a row is ignored.
//!
//! ```text
//! .***.....  → 0xE0
//! *...*...   → 0x88
//! ```
//!
//! The packed output has no header, and is meant to be linked directly into code that renders
//! bitmap fonts.

mod build_font;
mod compile;
mod error;
pub mod pattern;

pub use build_font::build_font;
pub use compile::{compile, compile_font, CompiledFont};
pub use error::{FontError, FontResult};
