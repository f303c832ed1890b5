use crate::{
    error::{FontError, FontResult},
    pattern::{bitmap_pattern, pack_pattern},
};
use log::{debug, info, trace};

/// The result of compiling a glyph source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledFont {
    data: Vec<u8>,
    skipped_rows: usize,
}
impl CompiledFont {
    /// Returns the packed font data, one byte per bitmap row.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes this font, returning the packed font data.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the number of rows that produced a byte.
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of rows that had no bitmap pattern and were dropped.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Prints statistics about the compiled font using the `log` crate.
    pub fn print_statistics(&self) {
        info!("");
        info!("==================================================================");
        info!("Statistics");
        info!("==================================================================");
        info!("Bitmap Rows    : {}", self.rows());
        info!("Skipped Rows   : {}", self.skipped_rows);
        info!("Output Size    : {} bytes", self.data.len());
        info!("==================================================================");
        info!("");
    }
}

/// Whether a character ends a row.
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Whether a character is part of the blank run stripped from the start of a source.
fn is_leading_blank(ch: char) -> bool {
    ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch)
}

fn count_line_breaks(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if is_line_break(ch) {
            if ch == '\r' {
                chars.next_if_eq(&'\n');
            }
            count += 1;
        }
    }
    count
}

/// Iterates the rows of a source. `\r\n` counts as a single break, and a trailing break does not
/// start an extra empty row.
struct Rows<'a> {
    rest: &'a str,
}
impl<'a> Rows<'a> {
    fn new(text: &'a str) -> Self {
        Rows { rest: text }
    }
}
impl<'a> Iterator for Rows<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.char_indices().find(|(_, ch)| is_line_break(*ch)) {
            Some((idx, ch)) => {
                let row = &self.rest[..idx];
                let mut next = idx + ch.len_utf8();
                if ch == '\r' && self.rest[next..].starts_with('\n') {
                    next += 1;
                }
                self.rest = &self.rest[next..];
                Some(row)
            }
            None => {
                let row = self.rest;
                self.rest = "";
                Some(row)
            }
        }
    }
}

/// Compiles a glyph source into packed font data, keeping statistics about the rows seen.
///
/// Blank content at the very start of the source is stripped. After that each row is handled on
/// its own: a row starting with a pixel character produces exactly one byte, and any other row
/// produces nothing.
pub fn compile_font(src: &str) -> FontResult<CompiledFont> {
    let stripped = src.trim_start_matches(is_leading_blank);
    let first_line = 1 + count_line_breaks(&src[..src.len() - stripped.len()]);

    let mut data = Vec::new();
    let mut skipped_rows = 0;
    for (idx, row) in Rows::new(stripped).enumerate() {
        let line = first_line + idx;
        let Some(pattern) = bitmap_pattern(row) else {
            trace!("Skipping line {line}: {row:?}");
            skipped_rows += 1;
            continue;
        };
        match pack_pattern(pattern) {
            Some(byte) => data.push(byte),
            None => {
                return Err(FontError::OversizedPattern { line, pattern: pattern.to_string() });
            }
        }
    }

    debug!("Compiled {} bitmap rows, skipped {skipped_rows} rows", data.len());
    Ok(CompiledFont { data, skipped_rows })
}

/// Compiles a glyph source into packed font data.
pub fn compile(src: &str) -> FontResult<Vec<u8>> {
    Ok(compile_font(src)?.into_data())
}
