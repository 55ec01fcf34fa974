use crate::numfmt::{format_float, format_int};
use crate::{Font, Gui, LcdHal, Point, Rgb565, TextMode, CELL_HEIGHT, CELL_WIDTH, GLYPH_COLUMNS};

/// Horizontal placement of a printed string.
#[cfg_attr(feature = "derive-rkyv", derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextX {
    /// Flush with the left edge, same as `At(0)`.
    Left,
    /// Centered on the canvas width.
    Center,
    /// Flush with the right edge, one pixel in.
    Right,
    At(i16),
}

impl From<i16> for TextX {
    fn from(x: i16) -> Self { TextX::At(x) }
}

impl TextX {
    /// Resolves to a pixel column for a string `text_width` pixels wide on a canvas
    /// `canvas_width` pixels wide.
    pub fn resolve(self, text_width: i32, canvas_width: i16) -> i16 {
        let pos = (canvas_width as i32).saturating_sub(text_width);
        match self {
            TextX::Left => 0,
            TextX::Center => (pos / 2) as i16,
            TextX::Right => pos.saturating_sub(1) as i16,
            TextX::At(x) => x,
        }
    }
}

impl<D: LcdHal, F: Font> Gui<D, F> {
    /// Renders one glyph cell with its top left at (x, y).
    ///
    /// The cell is 6 x 8 pixels scaled by `size`: five bitmap columns and a blank one. Set
    /// bits are painted in `color`. Clear bits are painted in `bg` only in opaque mode and
    /// only when `bg` differs from `color`. A cell entirely off the canvas is skipped.
    pub fn draw_char(
        &mut self,
        x: i16,
        y: i16,
        code: u8,
        color: Rgb565,
        bg: Rgb565,
        size: u8,
        mode: TextMode,
    ) {
        let (x, y, s) = (x as i32, y as i32, size as i32);
        if x >= self.hal.width() as i32
            || y >= self.hal.height() as i32
            || x + CELL_WIDTH as i32 * s - 1 < 0
            || y + CELL_HEIGHT as i32 * s - 1 < 0
        {
            log::trace!("glyph {:#04x} at ({}, {}) is off the canvas", code, x, y);
            return;
        }
        // the usual 5x7 tables skip one slot at 176
        let code = if code >= 176 { code.wrapping_add(1) } else { code };
        let paint_bg = bg != color && mode == TextMode::Opaque;

        for i in 0..CELL_WIDTH {
            let mut line = if i < GLYPH_COLUMNS { self.font.column(code, i) } else { 0 };
            let px = x + i as i32 * s;
            for j in 0..CELL_HEIGHT {
                let py = y + j as i32 * s;
                let fg = line & 0x1 != 0;
                line >>= 1;
                let c = if fg {
                    color
                } else if paint_bg {
                    bg
                } else {
                    continue;
                };
                if size == 1 {
                    self.hal.draw_pixel(px as i16, py as i16, c);
                } else {
                    self.fill(px, py, s, s, c);
                }
            }
        }
    }

    /// Writes one byte at the cursor in the current text style and advances the cursor.
    /// `\n` moves to the start of the next text line and `\r` is ignored. Returns the number
    /// of bytes consumed.
    pub fn write(&mut self, c: u8) -> usize {
        let size = self.state.text_size as i16;
        match c {
            b'\n' => {
                self.state.cursor.x = 0;
                self.state.cursor.y = self.state.cursor.y.wrapping_add(size.wrapping_mul(CELL_HEIGHT as i16));
            }
            b'\r' => {}
            _ => {
                let st = self.state;
                let Point { x, y } = st.cursor;
                self.draw_char(x, y, c, st.text_color, st.text_bg, st.text_size, st.text_mode);
                self.state.cursor.x = st.cursor.x.wrapping_add(size.wrapping_mul(CELL_WIDTH as i16));
            }
        }
        1
    }

    /// Prints `text` starting at (x, y), up to the first NUL byte. Returns the number of
    /// bytes written.
    pub fn print(&mut self, text: &[u8], x: impl Into<TextX>, y: i16) -> usize {
        let text = match text.iter().position(|&b| b == 0) {
            Some(end) => &text[..end],
            None => text,
        };
        let text_width = (text.len() as i64)
            .saturating_mul(CELL_WIDTH as i64 * self.state.text_size as i64)
            .min(i32::MAX as i64) as i32;
        let x = x.into().resolve(text_width, self.hal.width());
        self.set_cursor(x, y);

        let mut n = 0;
        for &c in text {
            if self.write(c) == 0 {
                break;
            }
            n += 1;
        }
        n
    }

    pub fn draw_str(&mut self, text: &str, x: impl Into<TextX>, y: i16) { self.print(text.as_bytes(), x, y); }

    /// Prints `num` in `base`, left-padded with `filler` to `length` characters.
    /// See [`format_int`] for the exact layout.
    pub fn draw_int(&mut self, num: i32, x: impl Into<TextX>, y: i16, length: i16, filler: u8, base: u32) {
        let text = format_int(num, length, filler, base);
        self.print(text.as_bytes(), x, y);
    }

    /// Prints `num` with `dec` decimals in a `length` wide field.
    /// See [`format_float`] for the exact layout.
    pub fn draw_float(
        &mut self,
        num: f64,
        dec: u8,
        x: impl Into<TextX>,
        y: i16,
        divider: u8,
        length: i16,
        filler: u8,
    ) {
        let text = format_float(num, dec, length, divider, filler);
        self.print(text.as_bytes(), x, y);
    }
}
