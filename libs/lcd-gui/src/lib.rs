#![cfg_attr(not(feature = "std"), no_std)]

//! Drawing primitives for small display controllers.
//!
//! Everything here is reduced to the handful of calls a panel driver provides through
//! [`LcdHal`]: set a pixel, fill a rectangle, stream colors into an address window, and
//! read pixels back. Shapes, glyphs and bitmaps are decomposed by [`Gui`] into sequences
//! of those calls; the driver does the rest.

extern crate alloc;

mod bitmap;
pub mod color;
pub use color::*;
pub mod font;
pub use font::*;
pub mod framebuffer;
pub use framebuffer::FrameBuffer565;
mod gui;
pub use gui::*;
pub mod hal;
pub use hal::*;
pub mod minigfx;
pub use minigfx::*;
pub mod numfmt;
pub mod state;
pub use state::*;
mod text;
pub use text::*;

#[cfg(test)]
pub(crate) mod testing;
