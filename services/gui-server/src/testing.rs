//! A demo screen exercising every primitive, used by the binary and handy for eyeballing a
//! new backend.

use lcd_gui::{Point, Rgb565, TextMode, TextX};

use crate::api::GfxError;
use crate::Gfx;

/// Draws the demo screen for animation step `frame` and flushes it. Returns `false` once
/// the panel has been closed.
pub fn test_pattern(gfx: &Gfx, frame: u32) -> Result<bool, GfxError> {
    let size = gfx.screen_size()?;
    let (w, h) = (size.x, size.y);
    gfx.clear(Rgb565::BLACK)?;

    // frame and title bar
    gfx.set_color(Rgb565::WHITE)?;
    gfx.draw_rectangle(Point::new(0, 0), Point::new(w - 1, h - 1))?;
    gfx.set_color(Rgb565::BLUE)?;
    gfx.fill_rectangle(Point::new(1, 1), Point::new(w - 2, 20))?;
    gfx.set_text_mode(TextMode::Transparent)?;
    gfx.set_text_color(Rgb565::WHITE)?;
    gfx.set_text_size(2)?;
    gfx.draw_str("lcd-gui", TextX::Center, 4)?;

    // shapes
    gfx.set_color(Rgb565::RED)?;
    let (tl, br) = (Point::new(10, 30), Point::new(w / 2 - 5, 90));
    gfx.draw_rounded_rectangle(tl, br, 8)?;
    gfx.fill_rounded_rectangle(tl + Point::new(6, 6), br - Point::new(6, 6), 6)?;
    gfx.set_color(Rgb565::GREEN)?;
    gfx.fill_circle(Point::new(w * 3 / 4, 60), 28)?;
    gfx.set_color(Rgb565::YELLOW)?;
    gfx.draw_circle(Point::new(w * 3 / 4, 60), 32)?;
    gfx.set_color(Rgb565::CYAN)?;
    gfx.fill_triangle(Point::new(20, 170), Point::new(w / 2 - 10, 100), Point::new(w / 2 - 10, 170))?;
    gfx.set_color(Rgb565::MAGENTA)?;
    gfx.draw_triangle(Point::new(w / 2 + 10, 170), Point::new(w - 20, 100), Point::new(w - 20, 170))?;

    // a rotating spoke
    let angle = (frame % 360) as f64 * std::f64::consts::PI / 180.0;
    let (cx, cy, r) = (w / 2, 230, 40.0);
    let tip = Point::new(cx + (r * angle.cos()) as i16, cy + (r * angle.sin()) as i16);
    gfx.set_color(Rgb565::WHITE)?;
    gfx.draw_line(Point::new(cx, cy), tip)?;

    // numbers
    gfx.set_text_size(1)?;
    gfx.set_text_mode(TextMode::Opaque)?;
    gfx.set_text_background(Rgb565::BLACK)?;
    gfx.draw_int(frame as i32, 10, 290, 6, b'0', 10)?;
    gfx.draw_int(frame as i32, TextX::Center, 290, 0, b' ', 16)?;
    gfx.draw_float(frame as f64 / 7.0, 3, TextX::Right, 290, b',', 10, b' ')?;

    // color ramp bitmap, scaled up
    let ramp: Vec<u16> =
        (0..32u16).map(|i| Rgb565::from_rgb((i * 8) as u8, 0, 255 - (i * 8) as u8).0).collect();
    gfx.draw_bmp(Point::new(10, 310), 32, 1, &ramp, 4)?;

    gfx.flush()
}

#[cfg(test)]
mod tests {
    use lcd_gui::FrameBuffer565;

    use super::*;
    use crate::fonts::Ascii5x7;
    use crate::platform::{HEIGHT, WIDTH};

    #[test]
    fn test_pattern_on_headless_panel() {
        let (gfx, server) = crate::start(|| FrameBuffer565::new(WIDTH, HEIGHT), Ascii5x7).unwrap();
        assert_eq!(test_pattern(&gfx, 0), Ok(true));
        assert_eq!(test_pattern(&gfx, 45), Ok(true));
        gfx.quit().unwrap();
        let fb = server.join().unwrap();
        assert_eq!(fb.pixel(0, 0), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(5, 5), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(10, 310), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(WIDTH * 3 / 4, 60), Some(Rgb565::GREEN));
    }
}
