use core::mem::swap;

use crate::{Gui, LcdHal};

impl<D: LcdHal, F> Gui<D, F> {
    /// Outlines the triangle through the three vertices.
    pub fn draw_triangle(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, x2: i16, y2: i16) {
        self.draw_line(x0, y0, x1, y1);
        self.draw_line(x1, y1, x2, y2);
        self.draw_line(x2, y2, x0, y0);
    }

    /// Fills the triangle through the three vertices, one horizontal span per scanline.
    ///
    /// Vertices are sorted top to bottom, then the upper part (v0 to v1) and the lower part
    /// (v1 to v2) are filled separately, interpolating both edge intersections with integer
    /// accumulators. A triangle with all vertices on one row becomes a single span.
    pub fn fill_triangle(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, x2: i16, y2: i16) {
        let (mut x0, mut y0) = (x0 as i32, y0 as i32);
        let (mut x1, mut y1) = (x1 as i32, y1 as i32);
        let (mut x2, mut y2) = (x2 as i32, y2 as i32);
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            swap(&mut y2, &mut y1);
            swap(&mut x2, &mut x1);
        }
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }

        let color = self.state.draw_color;
        if y0 == y2 {
            let a = x0.min(x1).min(x2);
            let b = x0.max(x1).max(x2);
            self.fill(a, y0, b - a + 1, 1, color);
            return;
        }

        // edge accumulators grow to dx * dy, past i32 for vertices at the ends of the i16 range
        let (dx01, dy01) = ((x1 - x0) as i64, (y1 - y0) as i64);
        let (dx02, dy02) = ((x2 - x0) as i64, (y2 - y0) as i64);
        let (dx12, dy12) = ((x2 - x1) as i64, (y2 - y1) as i64);
        let mut sa: i64 = 0;
        let mut sb: i64 = 0;

        // With a flat bottom (y1 == y2) the upper part runs through y1 and the lower loop is
        // skipped; otherwise row y1 belongs to the lower part.
        let last = if y1 == y2 { y1 } else { y1 - 1 };

        // dy01 is zero only for a flat top, where this loop does not run
        let mut y = y0;
        while y <= last {
            let mut a = x0 + (sa / dy01) as i32;
            let mut b = x0 + (sb / dy02) as i32;
            sa += dx01;
            sb += dx02;
            if a > b {
                swap(&mut a, &mut b);
            }
            self.fill(a, y, b - a + 1, 1, color);
            y += 1;
        }

        // dy12 is zero only for a flat bottom, where this loop does not run
        sa = dx12 * (y - y1) as i64;
        sb = dx02 * (y - y0) as i64;
        while y <= y2 {
            let mut a = x1 + (sa / dy12) as i32;
            let mut b = x0 + (sb / dy02) as i32;
            sa += dx12;
            sb += dx02;
            if a > b {
                swap(&mut a, &mut b);
            }
            self.fill(a, y, b - a + 1, 1, color);
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::testing::{Op, Recorder};
    use crate::{Gui, Rgb565};

    fn filled(v: [(i16, i16); 3]) -> Recorder {
        let mut gui = Gui::new(Recorder::new(200, 200), ());
        gui.fill_triangle(v[0].0, v[0].1, v[1].0, v[1].1, v[2].0, v[2].1);
        gui.into_parts().0
    }

    #[test]
    fn test_flat_triangle_is_one_span() {
        for v in [[(5, 7), (20, 7), (11, 7)], [(20, 7), (5, 7), (11, 7)], [(11, 7), (20, 7), (5, 7)]] {
            assert_eq!(filled(v).ops, vec![Op::Fill(5, 7, 16, 1, Rgb565::RED)]);
        }
        assert_eq!(filled([(3, 3), (3, 3), (3, 3)]).ops, vec![Op::Fill(3, 3, 1, 1, Rgb565::RED)]);
    }

    #[test]
    fn test_one_span_per_row() {
        let rec = filled([(10, 0), (0, 10), (20, 20)]);
        let rows: Vec<i16> = rec
            .ops
            .iter()
            .map(|op| match *op {
                Op::Fill(_, y, w, h, _) => {
                    assert!(w >= 1);
                    assert_eq!(h, 1);
                    y
                }
                _ => panic!("fill_triangle emitted a non-span op"),
            })
            .collect();
        assert_eq!(rows, (0..=20).collect::<Vec<i16>>());
    }

    #[test]
    fn test_vertex_order_does_not_matter() {
        let v = [(10, 0), (0, 10), (20, 20)];
        let reference = filled(v).touched();
        for perm in [[v[1], v[0], v[2]], [v[2], v[1], v[0]], [v[1], v[2], v[0]], [v[2], v[0], v[1]]] {
            assert_eq!(filled(perm).touched(), reference);
        }
    }

    #[test]
    fn test_flat_top_and_flat_bottom() {
        // flat top: the first row spans both top vertices
        let top = filled([(0, 0), (10, 0), (5, 10)]);
        assert_eq!(top.ops[0], Op::Fill(0, 0, 11, 1, Rgb565::RED));
        assert_eq!(*top.ops.last().unwrap(), Op::Fill(5, 10, 1, 1, Rgb565::RED));
        // flat bottom: the last row spans both bottom vertices
        let bottom = filled([(5, 0), (0, 10), (10, 10)]);
        assert_eq!(bottom.ops[0], Op::Fill(5, 0, 1, 1, Rgb565::RED));
        assert_eq!(*bottom.ops.last().unwrap(), Op::Fill(0, 10, 11, 1, Rgb565::RED));
    }

    #[test]
    fn test_fill_contains_vertices_and_outline_hull() {
        let v = [(30, 5), (2, 40), (60, 28)];
        let fill = filled(v).touched();
        for &(x, y) in v.iter() {
            assert!(fill.contains(&(x as i32, y as i32)), "vertex {:?}", (x, y));
        }
        let mut gui = Gui::new(Recorder::new(200, 200), ());
        gui.draw_triangle(v[0].0, v[0].1, v[1].0, v[1].1, v[2].0, v[2].1);
        let outline: BTreeSet<(i32, i32)> = gui.display().touched();
        // the fill hugs the outline: every outline row has filled pixels and no filled pixel
        // lies outside the outline's horizontal extent on its row
        for y in 5..=40 {
            let out: Vec<i32> = outline.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
            let inn: Vec<i32> = fill.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
            assert!(!inn.is_empty(), "row {}", y);
            assert!(inn[0] >= out[0] - 1 && inn[inn.len() - 1] <= out[out.len() - 1] + 1, "row {}", y);
        }
    }

    #[test]
    fn test_extreme_vertices() {
        let mut gui = Gui::new(Recorder::new(320, 480), ());
        gui.fill_triangle(-32768, -32768, 32767, 32767, -32768, 32767);
        let ops = &gui.display().ops;
        assert_eq!(ops.len(), 65536);
        assert_eq!(ops[0], Op::Fill(-32768, -32768, 1, 1, Rgb565::RED));
        // the sloped edge moves one column per row
        assert_eq!(ops[32766], Op::Fill(-32768, -2, 32767, 1, Rgb565::RED));
        assert!(ops.iter().all(|op| matches!(op, Op::Fill(-32768, _, _, 1, _))));

        let mut gui = Gui::new(Recorder::new(320, 480), ());
        gui.fill_triangle(32767, -32768, -32768, 0, 32767, 32767);
        assert_eq!(gui.display().ops.len(), 65536);
    }
}
