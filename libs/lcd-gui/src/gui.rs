use crate::{CanvasState, LcdHal, Point, Rgb565, TextMode};

/// A drawing canvas over one display.
///
/// `Gui` owns the driver, the font, and the drawing state (colors, text settings, cursor).
/// It is a plain single-owner value: share it between threads by putting it behind a lock
/// or by handing it to a service that owns it (see the `gui-server` crate).
pub struct Gui<D, F> {
    pub(crate) hal: D,
    pub(crate) font: F,
    pub(crate) state: CanvasState,
}

impl<D: LcdHal, F> Gui<D, F> {
    pub fn new(hal: D, font: F) -> Self { Gui { hal, font, state: CanvasState::default() } }

    pub fn with_state(hal: D, font: F, state: CanvasState) -> Self { Gui { hal, font, state } }

    pub fn display(&self) -> &D { &self.hal }

    pub fn display_mut(&mut self) -> &mut D { &mut self.hal }

    pub fn font(&self) -> &F { &self.font }

    pub fn state(&self) -> &CanvasState { &self.state }

    pub fn into_parts(self) -> (D, F, CanvasState) { (self.hal, self.font, self.state) }

    pub fn width(&self) -> i16 { self.hal.width() }

    pub fn height(&self) -> i16 { self.hal.height() }

    pub fn set_color(&mut self, color: Rgb565) { self.state.draw_color = color; }

    pub fn set_color_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.state.draw_color = self.hal.color565(r, g, b);
    }

    pub fn color(&self) -> Rgb565 { self.state.draw_color }

    pub fn set_text_color(&mut self, color: Rgb565) { self.state.text_color = color; }

    pub fn set_text_color_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.state.text_color = self.hal.color565(r, g, b);
    }

    pub fn text_color(&self) -> Rgb565 { self.state.text_color }

    pub fn set_text_background(&mut self, color: Rgb565) { self.state.text_bg = color; }

    pub fn set_text_background_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.state.text_bg = self.hal.color565(r, g, b);
    }

    pub fn text_background(&self) -> Rgb565 { self.state.text_bg }

    /// Sets the glyph scale factor. Size 0 is stored as given: glyph cells collapse to
    /// nothing and the cursor stops advancing.
    pub fn set_text_size(&mut self, size: u8) { self.state.text_size = size; }

    pub fn text_size(&self) -> u8 { self.state.text_size }

    pub fn set_text_mode(&mut self, mode: TextMode) { self.state.text_mode = mode; }

    pub fn text_mode(&self) -> TextMode { self.state.text_mode }

    pub fn set_cursor(&mut self, x: i16, y: i16) { self.state.cursor = Point::new(x, y); }

    pub fn cursor(&self) -> Point { self.state.cursor }

    pub fn cursor_x(&self) -> i16 { self.state.cursor.x }

    pub fn cursor_y(&self) -> i16 { self.state.cursor.y }

    /// Fills the whole canvas. The draw color is left alone.
    pub fn background(&mut self, color: Rgb565) {
        let (w, h) = (self.hal.width(), self.hal.height());
        self.hal.fill_rect(0, 0, w, h, color);
    }

    pub fn background_rgb(&mut self, r: u8, g: u8, b: u8) {
        let color = self.hal.color565(r, g, b);
        self.background(color);
    }

    /// Sets one pixel in the draw color.
    pub fn set_pixel(&mut self, x: i16, y: i16) { self.hal.draw_pixel(x, y, self.state.draw_color); }

    /// Reads one pixel back from the display.
    pub fn get_pixel(&mut self, x: i16, y: i16) -> Rgb565 {
        let mut px = [0u16; 1];
        self.hal.read_gram(x, y, &mut px, 1, 1);
        Rgb565(px[0])
    }

    // The rasterizers compute in i32 and narrow here, at the driver boundary.
    pub(crate) fn plot(&mut self, x: i32, y: i32) {
        self.hal.draw_pixel(x as i16, y as i16, self.state.draw_color);
    }

    pub(crate) fn fill(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) {
        self.hal.fill_rect(x as i16, y as i16, w as i16, h as i16, color);
    }
}
