//! Matching and packing of a single glyph row.

/// A single pixel of a bitmap pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// Written as `.`.
    Off,
    /// Written as `*` or `@`.
    On,
}
impl Pixel {
    /// Returns the pixel a character stands for, or `None` if it is not part of the pixel alphabet.
    pub fn from_char(ch: char) -> Option<Pixel> {
        match ch {
            '.' => Some(Pixel::Off),
            '*' | '@' => Some(Pixel::On),
            _ => None,
        }
    }

    /// Returns the bit this pixel packs to.
    pub fn bit(self) -> u8 {
        match self {
            Pixel::Off => 0,
            Pixel::On => 1,
        }
    }
}

/// Returns the longest leading run of pixel characters in a row.
///
/// Rows that do not begin with a pixel character have no pattern and return `None`. Anything
/// after the run (comments, hex annotations, arrows) is not part of the pattern.
pub fn bitmap_pattern(row: &str) -> Option<&str> {
    let end = row
        .char_indices()
        .find(|(_, ch)| Pixel::from_char(*ch).is_none())
        .map_or(row.len(), |(idx, _)| idx);
    if end == 0 {
        None
    } else {
        Some(&row[..end])
    }
}

/// Packs a bitmap pattern into a byte, with the leftmost pixel as the most significant bit.
///
/// Patterns are not padded: `*..` packs to `0b100`. Returns `None` once the value no longer fits
/// in a `u8`, which can only happen to patterns longer than 8 pixels. Leading `.` pixels never
/// contribute, so `.***.....` still fits.
pub fn pack_pattern(pattern: &str) -> Option<u8> {
    let mut value = 0u8;
    for ch in pattern.chars() {
        let bit = Pixel::from_char(ch)?.bit();
        value = value.checked_mul(2)?.checked_add(bit)?;
    }
    Some(value)
}
