//! Test doubles for the capability trait.

use std::collections::BTreeSet;

use crate::{LcdHal, Rgb565};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Pixel(i16, i16, Rgb565),
    Fill(i16, i16, i16, i16, Rgb565),
    Window(i16, i16, i16, i16),
    Push(Vec<u16>, bool, u8),
    Read(i16, i16, i16, i16),
}

/// Records every capability call in order.
pub struct Recorder {
    pub ops: Vec<Op>,
    width: i16,
    height: i16,
}

impl Recorder {
    pub fn new(width: i16, height: i16) -> Self { Recorder { ops: Vec::new(), width, height } }

    /// Every pixel touched by pixel sets and fills, regardless of color.
    pub fn touched(&self) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        for op in self.ops.iter() {
            match *op {
                Op::Pixel(x, y, _) => {
                    set.insert((x as i32, y as i32));
                }
                Op::Fill(x, y, w, h, _) => {
                    for yy in y as i32..y as i32 + h as i32 {
                        for xx in x as i32..x as i32 + w as i32 {
                            set.insert((xx, yy));
                        }
                    }
                }
                _ => {}
            }
        }
        set
    }

    /// Pixels painted in `color`, counting each pixel call or filled cell once.
    pub fn painted(&self, color: Rgb565) -> usize {
        self.ops
            .iter()
            .map(|op| match *op {
                Op::Pixel(_, _, c) if c == color => 1,
                Op::Fill(_, _, w, h, c) if c == color => (w.max(0) as usize) * (h.max(0) as usize),
                _ => 0,
            })
            .sum()
    }
}

impl LcdHal for Recorder {
    fn draw_pixel(&mut self, x: i16, y: i16, color: Rgb565) { self.ops.push(Op::Pixel(x, y, color)); }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565) {
        self.ops.push(Op::Fill(x, y, w, h, color));
    }

    fn set_addr_window(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) {
        self.ops.push(Op::Window(x1, y1, x2, y2));
    }

    fn push_colors(&mut self, block: &[u16], first: bool, flags: u8) {
        self.ops.push(Op::Push(block.to_vec(), first, flags));
    }

    fn read_gram(&mut self, x: i16, y: i16, block: &mut [u16], w: i16, h: i16) -> i16 {
        self.ops.push(Op::Read(x, y, w, h));
        block.iter_mut().for_each(|px| *px = 0);
        block.len() as i16
    }

    fn width(&self) -> i16 { self.width }

    fn height(&self) -> i16 { self.height }
}

/// A 256-glyph table where every glyph is a solid 5x7 block except code 0x20 (blank) and
/// code 176 (blank, to catch the 176+ remap).
pub fn block_font() -> Vec<u8> {
    let mut table = vec![0x7Fu8; 256 * crate::GLYPH_COLUMNS];
    for code in [0x20usize, 176] {
        for col in 0..crate::GLYPH_COLUMNS {
            table[code * crate::GLYPH_COLUMNS + col] = 0;
        }
    }
    table
}
