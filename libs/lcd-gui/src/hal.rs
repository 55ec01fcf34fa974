use crate::Rgb565;

/// The capabilities a display driver has to provide. Everything [`crate::Gui`] draws is
/// reduced to calls on this trait, so a new panel only needs these eight methods.
///
/// Coordinates are in the rotated (logical) space reported by [`LcdHal::width`] and
/// [`LcdHal::height`]. Drivers decide what to do with out-of-range coordinates; the drawing
/// layer never clips on their behalf.
pub trait LcdHal {
    /// Packs 8-bit channels into the panel's color word.
    fn color565(&self, r: u8, g: u8, b: u8) -> Rgb565 { Rgb565::from_rgb(r, g, b) }

    fn draw_pixel(&mut self, x: i16, y: i16, color: Rgb565);

    /// Fills `w` x `h` pixels with their top left at (x, y). Callers keep `w` and `h`
    /// non-negative.
    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565);

    /// Sets the inclusive region that subsequent [`LcdHal::push_colors`] calls stream into.
    fn set_addr_window(&mut self, x1: i16, y1: i16, x2: i16, y2: i16);

    /// Streams raw color words into the active address window, row by row. `first` restarts
    /// at the top left of the window; `flags` is passed through for drivers that need it.
    fn push_colors(&mut self, block: &[u16], first: bool, flags: u8);

    /// Reads back `w` x `h` pixels starting at (x, y) into `block`, row by row. Returns the
    /// number of pixels read.
    fn read_gram(&mut self, x: i16, y: i16, block: &mut [u16], w: i16, h: i16) -> i16;

    fn width(&self) -> i16;

    fn height(&self) -> i16;
}

impl<T: LcdHal + ?Sized> LcdHal for &mut T {
    fn color565(&self, r: u8, g: u8, b: u8) -> Rgb565 { (**self).color565(r, g, b) }

    fn draw_pixel(&mut self, x: i16, y: i16, color: Rgb565) { (**self).draw_pixel(x, y, color) }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565) {
        (**self).fill_rect(x, y, w, h, color)
    }

    fn set_addr_window(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) {
        (**self).set_addr_window(x1, y1, x2, y2)
    }

    fn push_colors(&mut self, block: &[u16], first: bool, flags: u8) {
        (**self).push_colors(block, first, flags)
    }

    fn read_gram(&mut self, x: i16, y: i16, block: &mut [u16], w: i16, h: i16) -> i16 {
        (**self).read_gram(x, y, block, w, h)
    }

    fn width(&self) -> i16 { (**self).width() }

    fn height(&self) -> i16 { (**self).height() }
}
