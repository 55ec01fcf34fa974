use lcd_gui::{FrameBuffer565, LcdHal};

#[cfg(all(feature = "hosted", any(windows, unix)))]
mod minifb;
#[cfg(all(feature = "hosted", any(windows, unix)))]
pub use crate::backend::minifb::*;

/// A panel the server can present to. Drawing goes through [`LcdHal`]; `redraw` makes
/// the result visible on panels that need an explicit push.
pub trait Backend: LcdHal {
    fn redraw(&mut self) {}

    /// `false` once the panel has gone away, for example when a preview window is closed.
    fn is_open(&self) -> bool { true }
}

/// Headless panel: the frame buffer is the display.
impl Backend for FrameBuffer565 {}
