use lcd_gui::{FrameBuffer565, LcdHal, Rgb565};
use minifb::{Key, Window, WindowOptions};

use super::Backend;
use crate::platform::{HEIGHT, MAX_FPS, WIDTH};

/// Preview of the panel in a desktop window. Drawing lands in an RGB565 frame buffer;
/// `redraw` widens it to the window's 0RGB pixels.
pub struct HostedDisplay {
    fb: FrameBuffer565,
    native_buffer: Vec<u32>,
    window: Window,
}

impl HostedDisplay {
    pub fn new() -> HostedDisplay {
        let (w, h) = (WIDTH as usize, HEIGHT as usize);
        let mut window = Window::new(
            "lcd-gui",
            w,
            h,
            WindowOptions {
                scale_mode: minifb::ScaleMode::AspectRatioStretch,
                resize: true,
                ..WindowOptions::default()
            },
        )
        .unwrap_or_else(|e| {
            panic!("{}", e);
        });

        // Limit the maximum refresh rate
        window.set_target_fps(MAX_FPS as usize);

        let native_buffer = vec![0u32; w * h];
        if let Err(e) = window.update_with_buffer(&native_buffer, w, h) {
            log::warn!("initial preview update failed: {}", e);
        }
        HostedDisplay { fb: FrameBuffer565::new(WIDTH, HEIGHT), native_buffer, window }
    }

    fn emulated_to_native(&mut self) {
        for (dest, &src) in self.native_buffer.iter_mut().zip(self.fb.as_slice().iter()) {
            *dest = Rgb565(src).to_rgb888();
        }
    }
}

impl LcdHal for HostedDisplay {
    fn draw_pixel(&mut self, x: i16, y: i16, color: Rgb565) { self.fb.draw_pixel(x, y, color) }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565) {
        self.fb.fill_rect(x, y, w, h, color)
    }

    fn set_addr_window(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) {
        self.fb.set_addr_window(x1, y1, x2, y2)
    }

    fn push_colors(&mut self, block: &[u16], first: bool, flags: u8) {
        self.fb.push_colors(block, first, flags)
    }

    fn read_gram(&mut self, x: i16, y: i16, block: &mut [u16], w: i16, h: i16) -> i16 {
        self.fb.read_gram(x, y, block, w, h)
    }

    fn width(&self) -> i16 { self.fb.width() }

    fn height(&self) -> i16 { self.fb.height() }
}

impl Backend for HostedDisplay {
    fn redraw(&mut self) {
        self.emulated_to_native();
        let (w, h) = self.fb.native_size();
        if let Err(e) = self.window.update_with_buffer(&self.native_buffer, w as usize, h as usize) {
            log::warn!("preview update failed: {}", e);
        }
    }

    fn is_open(&self) -> bool { self.window.is_open() && !self.window.is_key_down(Key::Escape) }
}
