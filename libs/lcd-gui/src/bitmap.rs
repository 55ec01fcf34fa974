use crate::{Gui, LcdHal, Rgb565};

impl<D: LcdHal, F> Gui<D, F> {
    /// Paints a `w` x `h` image of packed colors, row major, with its top left at (x, y),
    /// each source pixel blown up to a `scale` x `scale` block.
    ///
    /// At scale 1 the pixels are streamed through the address window in one push; larger
    /// scales fill one block per source pixel. Data shorter than `w * h` draws only the
    /// pixels present.
    pub fn draw_bmp(&mut self, x: i16, y: i16, w: i16, h: i16, data: &[u16], scale: i16) {
        let (x0, y0, s) = (x as i32, y as i32, scale as i32);
        let (w, h) = (w.max(0) as usize, h.max(0) as usize);
        self.hal.set_addr_window(x, y, (x0 + w as i32 * s - 1) as i16, (y0 + h as i32 * s - 1) as i16);

        let count = w * h;
        let pixels = if data.len() < count {
            log::trace!("bitmap wants {} pixels, got {}", count, data.len());
            data
        } else {
            &data[..count]
        };
        if pixels.is_empty() {
            return;
        }

        if scale == 1 {
            self.hal.push_colors(pixels, true, 0);
        } else {
            for (i, &px) in pixels.iter().enumerate() {
                let (row, col) = ((i / w) as i32, (i % w) as i32);
                self.fill(x0 + col * s, y0 + row * s, s, s, Rgb565(px));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{Op, Recorder};
    use crate::{FrameBuffer565, Gui, Rgb565};

    #[test]
    fn test_unscaled_bitmap_is_one_push() {
        let mut gui = Gui::new(Recorder::new(100, 100), ());
        let data = [1u16, 2, 3, 4, 5, 6];
        gui.draw_bmp(10, 20, 3, 2, &data, 1);
        assert_eq!(gui.display().ops, vec![Op::Window(10, 20, 12, 21), Op::Push(data.to_vec(), true, 0)]);
    }

    #[test]
    fn test_scaled_bitmap_fills_blocks() {
        let mut gui = Gui::new(Recorder::new(100, 100), ());
        gui.draw_bmp(0, 0, 2, 2, &[0xF800, 0x07E0, 0x001F, 0xFFFF], 3);
        assert_eq!(
            gui.display().ops,
            vec![
                Op::Window(0, 0, 5, 5),
                Op::Fill(0, 0, 3, 3, Rgb565::RED),
                Op::Fill(3, 0, 3, 3, Rgb565::GREEN),
                Op::Fill(0, 3, 3, 3, Rgb565::BLUE),
                Op::Fill(3, 3, 3, 3, Rgb565::WHITE),
            ]
        );
    }

    #[test]
    fn test_short_data_is_clipped() {
        let mut gui = Gui::new(Recorder::new(100, 100), ());
        gui.draw_bmp(0, 0, 4, 4, &[7, 8, 9], 1);
        gui.draw_bmp(0, 0, 4, 4, &[], 2);
        assert_eq!(
            gui.display().ops,
            vec![Op::Window(0, 0, 3, 3), Op::Push(vec![7, 8, 9], true, 0), Op::Window(0, 0, 7, 7)]
        );
    }

    #[test]
    fn test_bitmap_lands_on_frame_buffer() {
        let mut fb = FrameBuffer565::new(8, 8);
        {
            let mut gui = Gui::new(&mut fb, ());
            gui.draw_bmp(2, 3, 2, 2, &[0x1111, 0x2222, 0x3333, 0x4444], 1);
            gui.draw_bmp(4, 5, 1, 1, &[0x5555], 2);
        }
        assert_eq!(fb.pixel(2, 3), Some(Rgb565(0x1111)));
        assert_eq!(fb.pixel(3, 3), Some(Rgb565(0x2222)));
        assert_eq!(fb.pixel(2, 4), Some(Rgb565(0x3333)));
        assert_eq!(fb.pixel(3, 4), Some(Rgb565(0x4444)));
        for (x, y) in [(4, 5), (5, 5), (4, 6), (5, 6)] {
            assert_eq!(fb.pixel(x, y), Some(Rgb565(0x5555)));
        }
        assert_eq!(fb.pixel(6, 5), Some(Rgb565::BLACK));
    }
}
