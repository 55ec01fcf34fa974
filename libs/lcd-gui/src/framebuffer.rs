//! An in-memory RGB565 display.
//!
//! Behaves like a panel controller's graphics RAM: writes outside the panel are dropped,
//! streamed pixels walk an address window row by row and wrap at its end, and the whole
//! buffer can be viewed in any of four rotations.

use alloc::vec;
use alloc::vec::Vec;

use crate::{LcdHal, Rgb565};

pub struct FrameBuffer565 {
    /// Pixels in native (rotation 0) row-major order.
    buf: Vec<u16>,
    native_width: i16,
    native_height: i16,
    rotation: u8,
    /// Inclusive address window in logical coordinates: x1, y1, x2, y2.
    window: (i32, i32, i32, i32),
    /// Next streaming position inside the window.
    cursor: (i32, i32),
}

impl FrameBuffer565 {
    /// A black buffer `width` x `height` pixels in its native orientation.
    pub fn new(width: i16, height: i16) -> Self {
        let (w, h) = (width.max(0), height.max(0));
        FrameBuffer565 {
            buf: vec![0; w as usize * h as usize],
            native_width: w,
            native_height: h,
            rotation: 0,
            window: (0, 0, w as i32 - 1, h as i32 - 1),
            cursor: (0, 0),
        }
    }

    /// Rotates the logical view by `rotation` quarter turns clockwise. Only the low two bits
    /// count. Rotations 1 and 3 swap the reported width and height; the pixels stay put.
    pub fn set_rotation(&mut self, rotation: u8) {
        self.rotation = rotation & 0x3;
        self.window = (0, 0, self.width() as i32 - 1, self.height() as i32 - 1);
        self.cursor = (0, 0);
    }

    pub fn rotation(&self) -> u8 { self.rotation }

    pub fn native_size(&self) -> (i16, i16) { (self.native_width, self.native_height) }

    /// Raw pixels in native row-major order.
    pub fn as_slice(&self) -> &[u16] { &self.buf }

    pub fn clear(&mut self, color: Rgb565) { self.buf.iter_mut().for_each(|px| *px = color.0); }

    /// The pixel at logical (x, y), or `None` off the panel.
    pub fn pixel(&self, x: i16, y: i16) -> Option<Rgb565> {
        self.index(x as i32, y as i32).map(|i| Rgb565(self.buf[i]))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return None;
        }
        let (nw, nh) = (self.native_width as i32, self.native_height as i32);
        let (nx, ny) = match self.rotation {
            0 => (x, y),
            1 => (nw - 1 - y, x),
            2 => (nw - 1 - x, nh - 1 - y),
            _ => (y, nh - 1 - x),
        };
        Some((ny * nw + nx) as usize)
    }

    fn put(&mut self, x: i32, y: i32, color: u16) {
        if let Some(i) = self.index(x, y) {
            self.buf[i] = color;
        }
    }
}

impl LcdHal for FrameBuffer565 {
    fn draw_pixel(&mut self, x: i16, y: i16, color: Rgb565) { self.put(x as i32, y as i32, color.0); }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565) {
        // clip up front so huge rectangles cost only their visible part
        let x1 = (x as i32).max(0);
        let y1 = (y as i32).max(0);
        let x2 = (x as i32 + w as i32).min(self.width() as i32);
        let y2 = (y as i32 + h as i32).min(self.height() as i32);
        for py in y1..y2 {
            for px in x1..x2 {
                self.put(px, py, color.0);
            }
        }
    }

    fn set_addr_window(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) {
        let (x1, x2) = ((x1.min(x2)) as i32, (x1.max(x2)) as i32);
        let (y1, y2) = ((y1.min(y2)) as i32, (y1.max(y2)) as i32);
        self.window = (x1, y1, x2, y2);
        self.cursor = (x1, y1);
    }

    fn push_colors(&mut self, block: &[u16], first: bool, _flags: u8) {
        let (x1, y1, x2, y2) = self.window;
        if first {
            self.cursor = (x1, y1);
        }
        let (mut x, mut y) = self.cursor;
        for &color in block {
            self.put(x, y, color);
            x += 1;
            if x > x2 {
                x = x1;
                y += 1;
                if y > y2 {
                    y = y1;
                }
            }
        }
        self.cursor = (x, y);
    }

    fn read_gram(&mut self, x: i16, y: i16, block: &mut [u16], w: i16, h: i16) -> i16 {
        let w = w.max(0) as usize;
        if w == 0 {
            return 0;
        }
        let count = (w * h.max(0) as usize).min(block.len());
        for (i, px) in block[..count].iter_mut().enumerate() {
            let (px_x, px_y) = (x as i32 + (i % w) as i32, y as i32 + (i / w) as i32);
            *px = self.index(px_x, px_y).map(|idx| self.buf[idx]).unwrap_or(0);
        }
        count as i16
    }

    fn width(&self) -> i16 { if self.rotation & 1 == 0 { self.native_width } else { self.native_height } }

    fn height(&self) -> i16 { if self.rotation & 1 == 0 { self.native_height } else { self.native_width } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipping() {
        let mut fb = FrameBuffer565::new(4, 3);
        fb.draw_pixel(-1, 0, Rgb565::WHITE);
        fb.draw_pixel(4, 0, Rgb565::WHITE);
        fb.draw_pixel(0, 3, Rgb565::WHITE);
        assert!(fb.as_slice().iter().all(|&px| px == 0));
        fb.fill_rect(-10, -10, 100, 100, Rgb565::BLUE);
        assert!(fb.as_slice().iter().all(|&px| px == Rgb565::BLUE.0));
        assert_eq!(fb.pixel(4, 0), None);
        assert_eq!(fb.pixel(-1, -1), None);
    }

    #[test]
    fn test_rotation_extents_and_mapping() {
        let mut fb = FrameBuffer565::new(4, 2);
        for rot in 0..4u8 {
            fb.clear(Rgb565::BLACK);
            fb.set_rotation(rot);
            let (w, h) = (fb.width(), fb.height());
            assert_eq!((w, h), if rot & 1 == 0 { (4, 2) } else { (2, 4) });
            fb.draw_pixel(0, 0, Rgb565::WHITE);
            // logical origin lands on a different native corner per rotation
            let native = fb.as_slice().iter().position(|&px| px != 0);
            let expected = match rot {
                0 => 0,
                1 => 3,
                2 => 7,
                _ => 4,
            };
            assert_eq!(native, Some(expected), "rotation {}", rot);
            assert_eq!(fb.pixel(0, 0), Some(Rgb565::WHITE));
            assert_eq!(fb.pixel(w - 1, h - 1), Some(Rgb565::BLACK));
        }
        fb.set_rotation(5);
        assert_eq!(fb.rotation(), 1);
    }

    #[test]
    fn test_window_streaming_wraps() {
        let mut fb = FrameBuffer565::new(6, 6);
        fb.set_addr_window(1, 1, 2, 2);
        fb.push_colors(&[1, 2, 3], true, 0);
        fb.push_colors(&[4, 5], false, 0);
        // the fifth color wrapped back to the window's top left
        assert_eq!(fb.pixel(1, 1), Some(Rgb565(5)));
        assert_eq!(fb.pixel(2, 1), Some(Rgb565(2)));
        assert_eq!(fb.pixel(1, 2), Some(Rgb565(3)));
        assert_eq!(fb.pixel(2, 2), Some(Rgb565(4)));
        assert_eq!(fb.pixel(3, 1), Some(Rgb565::BLACK));
        // first restarts at the top left
        fb.push_colors(&[9], true, 0);
        assert_eq!(fb.pixel(1, 1), Some(Rgb565(9)));
    }

    #[test]
    fn test_read_back() {
        let mut fb = FrameBuffer565::new(4, 4);
        fb.set_addr_window(0, 0, 3, 3);
        let data: Vec<u16> = (1..=16).collect();
        fb.push_colors(&data, true, 0);
        let mut block = [0u16; 4];
        assert_eq!(fb.read_gram(1, 1, &mut block, 2, 2), 4);
        assert_eq!(block, [6, 7, 10, 11]);
        // off-panel pixels read as zero
        assert_eq!(fb.read_gram(3, 3, &mut block, 2, 2), 4);
        assert_eq!(block, [16, 0, 0, 0]);
        // never more than the block holds
        let mut small = [0u16; 1];
        assert_eq!(fb.read_gram(0, 0, &mut small, 4, 4), 1);
        assert_eq!(small, [1]);
    }
}
