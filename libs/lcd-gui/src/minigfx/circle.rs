use crate::{Gui, LcdHal};

// Corner masks for `draw_circle_helper`, in screen orientation (y grows downward).
pub const CORNER_TOP_LEFT: u8 = 0x1;
pub const CORNER_TOP_RIGHT: u8 = 0x2;
pub const CORNER_BOTTOM_RIGHT: u8 = 0x4;
pub const CORNER_BOTTOM_LEFT: u8 = 0x8;
pub const CORNER_ALL: u8 = 0xF;

// Half masks for `fill_circle_helper`.
pub const HALF_RIGHT: u8 = 0x1;
pub const HALF_LEFT: u8 = 0x2;
pub const HALF_BOTH: u8 = HALF_RIGHT | HALF_LEFT;

/// Integer midpoint circle stepper. Yields the (x, y) offsets of one octant, starting just
/// past the top axis point and ending at the diagonal.
#[derive(Debug, Clone, Copy)]
pub struct Midpoint {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
}

impl Midpoint {
    pub fn new(radius: i16) -> Self {
        let r = radius as i32;
        Midpoint { f: 1 - r, ddf_x: 1, ddf_y: -2 * r, x: 0, y: r }
    }
}

impl Iterator for Midpoint {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}

impl<D: LcdHal, F> Gui<D, F> {
    /// Outlines a circle centered on (x, y).
    pub fn draw_circle(&mut self, x: i16, y: i16, radius: i16) {
        let (cx, cy, r) = (x as i32, y as i32, radius as i32);
        self.plot(cx, cy + r);
        self.plot(cx, cy - r);
        self.plot(cx + r, cy);
        self.plot(cx - r, cy);
        for (dx, dy) in Midpoint::new(radius) {
            self.plot(cx + dx, cy + dy);
            self.plot(cx - dx, cy + dy);
            self.plot(cx + dx, cy - dy);
            self.plot(cx - dx, cy - dy);
            self.plot(cx + dy, cy + dx);
            self.plot(cx - dy, cy + dx);
            self.plot(cx + dy, cy - dx);
            self.plot(cx - dy, cy - dx);
        }
    }

    /// Outlines the quarter arcs selected by `corners` (`CORNER_*` bits). The axis points
    /// are left out; rounded rectangles supply them with their straight edges.
    pub fn draw_circle_helper(&mut self, x0: i16, y0: i16, radius: i16, corners: u8) {
        let (cx, cy) = (x0 as i32, y0 as i32);
        for (x, y) in Midpoint::new(radius) {
            if corners & CORNER_BOTTOM_RIGHT != 0 {
                self.plot(cx + x, cy + y);
                self.plot(cx + y, cy + x);
            }
            if corners & CORNER_TOP_RIGHT != 0 {
                self.plot(cx + x, cy - y);
                self.plot(cx + y, cy - x);
            }
            if corners & CORNER_BOTTOM_LEFT != 0 {
                self.plot(cx - y, cy + x);
                self.plot(cx - x, cy + y);
            }
            if corners & CORNER_TOP_LEFT != 0 {
                self.plot(cx - y, cy - x);
                self.plot(cx - x, cy - y);
            }
        }
    }

    /// Fills a circle centered on (x, y).
    pub fn fill_circle(&mut self, x: i16, y: i16, radius: i16) {
        let r = radius as i32;
        self.fill(x as i32, y as i32 - r, 1, 2 * r + 1, self.state.draw_color);
        self.fill_circle_helper(x, y, radius, HALF_BOTH, 0);
    }

    /// Fills the halves selected by `halves` (`HALF_*` bits) with vertical spans. `delta`
    /// stretches every span downward so the half circle can cap a straight band of that
    /// height, which is how rounded rectangles are filled.
    pub fn fill_circle_helper(&mut self, x0: i16, y0: i16, radius: i16, halves: u8, delta: i16) {
        let (cx, cy, delta) = (x0 as i32, y0 as i32, delta as i32);
        let color = self.state.draw_color;
        for (x, y) in Midpoint::new(radius) {
            if halves & HALF_RIGHT != 0 {
                self.fill(cx + x, cy - y, 1, 2 * y + 1 + delta, color);
                self.fill(cx + y, cy - x, 1, 2 * x + 1 + delta, color);
            }
            if halves & HALF_LEFT != 0 {
                self.fill(cx - x, cy - y, 1, 2 * y + 1 + delta, color);
                self.fill(cx - y, cy - x, 1, 2 * x + 1 + delta, color);
            }
        }
    }
}
