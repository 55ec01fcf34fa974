/// Bitmap columns stored per glyph.
pub const GLYPH_COLUMNS: usize = 5;
/// Horizontal advance of one glyph cell at size 1: the bitmap plus one blank column.
pub const CELL_WIDTH: usize = GLYPH_COLUMNS + 1;
/// Vertical advance of one glyph cell at size 1.
pub const CELL_HEIGHT: usize = 8;

/// Source of 5x8 glyph bitmaps.
///
/// Each column is one byte, least significant bit at the top. The font data itself lives
/// outside this crate; anything that can answer `column` can be drawn with.
pub trait Font {
    fn column(&self, code: u8, col: usize) -> u8;
}

/// A flat table laid out as `code * 5 + column`, the usual layout of 5x7 LCD fonts.
/// Codes past the end of the table read as blank.
impl Font for [u8] {
    fn column(&self, code: u8, col: usize) -> u8 {
        if col >= GLYPH_COLUMNS {
            return 0;
        }
        self.get(code as usize * GLYPH_COLUMNS + col).copied().unwrap_or(0)
    }
}

impl<const N: usize> Font for [u8; N] {
    fn column(&self, code: u8, col: usize) -> u8 { self[..].column(code, col) }
}

impl Font for alloc::vec::Vec<u8> {
    fn column(&self, code: u8, col: usize) -> u8 { self[..].column(code, col) }
}

impl<T: Font + ?Sized> Font for &T {
    fn column(&self, code: u8, col: usize) -> u8 { (**self).column(code, col) }
}
