use core::cmp::{max, min};

use crate::{
    Gui, LcdHal, CORNER_BOTTOM_LEFT, CORNER_BOTTOM_RIGHT, CORNER_TOP_LEFT, CORNER_TOP_RIGHT, HALF_LEFT, HALF_RIGHT,
};

/// Orders two corner coordinates on one axis; returns the start and the inclusive extent.
fn span(a: i16, b: i16) -> (i32, i32) {
    let (lo, hi) = (min(a, b) as i32, max(a, b) as i32);
    (lo, hi - lo + 1)
}

impl<D: LcdHal, F> Gui<D, F> {
    /// Fills the rectangle with corners (x1, y1) and (x2, y2), both inclusive. The corners
    /// may be given in any order.
    pub fn fill_rect(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) {
        let (x, w) = span(x1, x2);
        let (y, h) = span(y1, y2);
        self.fill(x, y, w, h, self.state.draw_color);
    }

    /// Fills `w` x `h` pixels with their top left at (x, y), passed straight to the driver.
    pub fn fill_rect_wh(&mut self, x: i16, y: i16, w: i16, h: i16) {
        self.hal.fill_rect(x, y, w, h, self.state.draw_color);
    }

    /// Outlines the rectangle with corners (x1, y1) and (x2, y2).
    pub fn draw_rect(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) {
        let (x, w) = span(x1, x2);
        let (y, h) = span(y1, y2);
        let color = self.state.draw_color;
        self.fill(x, y, w, 1, color);
        self.fill(x, y + h - 1, w, 1, color);
        self.fill(x, y, 1, h, color);
        self.fill(x + w - 1, y, 1, h, color);
    }

    /// Outlines a rectangle with quarter-circle corners of `radius`. The radius is not
    /// checked against the rectangle; a radius over half the short side draws garbage.
    pub fn draw_round_rect(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, radius: i16) {
        let (x, w) = span(x1, x2);
        let (y, h) = span(y1, y2);
        let r = radius as i32;
        let color = self.state.draw_color;
        self.fill(x + r, y, w - 2 * r, 1, color);
        self.fill(x + r, y + h - 1, w - 2 * r, 1, color);
        self.fill(x, y + r, 1, h - 2 * r, color);
        self.fill(x + w - 1, y + r, 1, h - 2 * r, color);
        self.draw_circle_helper((x + r) as i16, (y + r) as i16, radius, CORNER_TOP_LEFT);
        self.draw_circle_helper((x + w - r - 1) as i16, (y + r) as i16, radius, CORNER_TOP_RIGHT);
        self.draw_circle_helper((x + w - r - 1) as i16, (y + h - r - 1) as i16, radius, CORNER_BOTTOM_RIGHT);
        self.draw_circle_helper((x + r) as i16, (y + h - r - 1) as i16, radius, CORNER_BOTTOM_LEFT);
    }

    /// Fills a rectangle with quarter-circle corners of `radius`: the straight middle band
    /// first, then the two rounded ends stretched over the straight height.
    pub fn fill_round_rect(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, radius: i16) {
        let (x, w) = span(x1, x2);
        let (y, h) = span(y1, y2);
        let r = radius as i32;
        let delta = (h - 2 * r - 1) as i16;
        self.fill(x + r, y, w - 2 * r, h, self.state.draw_color);
        self.fill_circle_helper((x + w - r - 1) as i16, (y + r) as i16, radius, HALF_RIGHT, delta);
        self.fill_circle_helper((x + r) as i16, (y + r) as i16, radius, HALF_LEFT, delta);
    }
}
