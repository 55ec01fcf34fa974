use core::mem::swap;

use crate::{Gui, LcdHal};

impl<D: LcdHal, F> Gui<D, F> {
    /// Draws a horizontal line `w` pixels long starting at (x, y).
    pub fn draw_h_line(&mut self, x: i16, y: i16, w: i16) {
        self.fill(x as i32, y as i32, w as i32, 1, self.state.draw_color);
    }

    /// Draws a vertical line `h` pixels long starting at (x, y).
    pub fn draw_v_line(&mut self, x: i16, y: i16, h: i16) {
        self.fill(x as i32, y as i32, 1, h as i32, self.state.draw_color);
    }

    /// Draws an arbitrary line from (x1, y1) to (x2, y2), endpoints included.
    ///
    /// Bresenham's algorithm over the major axis: steep lines are stepped with the axes
    /// swapped, and the endpoints are ordered so x always increases. The pixel set does not
    /// depend on which endpoint comes first.
    pub fn draw_line(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) {
        let (mut x1, mut y1, mut x2, mut y2) = (x1 as i32, y1 as i32, x2 as i32, y2 as i32);
        let steep = (y2 - y1).abs() > (x2 - x1).abs();
        if steep {
            swap(&mut x1, &mut y1);
            swap(&mut x2, &mut y2);
        }
        if x1 > x2 {
            swap(&mut x1, &mut x2);
            swap(&mut y1, &mut y2);
        }

        let dx = x2 - x1;
        let dy = (y2 - y1).abs();
        let ystep = if y1 < y2 { 1 } else { -1 };
        let mut err = dx / 2;
        let mut y = y1;
        for x in x1..=x2 {
            if steep {
                self.plot(y, x);
            } else {
                self.plot(x, y);
            }
            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::testing::{Op, Recorder};
    use crate::{Gui, Rgb565};

    fn line(x1: i16, y1: i16, x2: i16, y2: i16) -> Vec<Op> {
        let mut gui = Gui::new(Recorder::new(100, 100), ());
        gui.draw_line(x1, y1, x2, y2);
        gui.into_parts().0.ops
    }

    fn pixel_set(ops: &[Op]) -> BTreeSet<(i16, i16)> {
        ops.iter()
            .map(|op| match *op {
                Op::Pixel(x, y, _) => (x, y),
                ref other => panic!("unexpected op {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_zero_length_line() {
        assert_eq!(line(7, 9, 7, 9), vec![Op::Pixel(7, 9, Rgb565::RED)]);
        assert_eq!(line(-2, 0, -2, 0), vec![Op::Pixel(-2, 0, Rgb565::RED)]);
    }

    #[test]
    fn test_shallow_line_sequence() {
        // dx = 4, dy = 2: err starts at 2, steps down every other pixel
        let expected: [(i16, i16); 5] = [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)];
        let ops = line(0, 0, 4, 2);
        let got: Vec<(i16, i16)> = ops
            .iter()
            .map(|op| match *op {
                Op::Pixel(x, y, _) => (x, y),
                _ => panic!("line emitted a non-pixel op"),
            })
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_steep_line_covers_every_row() {
        let set = pixel_set(&line(3, 0, 5, 10));
        assert_eq!(set.len(), 11);
        for y in 0..=10 {
            assert!(set.iter().any(|&(_, py)| py == y), "row {} missing", y);
        }
    }

    #[test]
    fn test_axis_lines() {
        let h = pixel_set(&line(2, 5, 8, 5));
        let expected: BTreeSet<(i16, i16)> = (2..=8).map(|x| (x, 5)).collect();
        assert_eq!(h, expected);
        let v = pixel_set(&line(4, 9, 4, 1));
        let expected: BTreeSet<(i16, i16)> = (1..=9).map(|y| (4, y)).collect();
        assert_eq!(v, expected);
    }

    #[test]
    fn test_line_is_symmetric() {
        let cases = [(0, 0, 13, 5), (20, 3, 1, 17), (5, 5, 5, 40), (-4, 8, 30, -2), (9, 9, 2, 2), (0, 7, 7, 0)];
        for (x1, y1, x2, y2) in cases {
            assert_eq!(pixel_set(&line(x1, y1, x2, y2)), pixel_set(&line(x2, y2, x1, y1)), "{:?}", (x1, y1, x2, y2));
        }
    }

    #[test]
    fn test_h_v_lines_are_fills() {
        let mut gui = Gui::new(Recorder::new(100, 100), ());
        gui.set_color(Rgb565::WHITE);
        gui.draw_h_line(1, 2, 30);
        gui.draw_v_line(4, 5, 6);
        assert_eq!(
            gui.display().ops,
            vec![Op::Fill(1, 2, 30, 1, Rgb565::WHITE), Op::Fill(4, 5, 1, 6, Rgb565::WHITE)]
        );
    }
}
