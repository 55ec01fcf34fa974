//! A graphics service for one RGB565 panel.
//!
//! The server thread owns the [`lcd_gui::Gui`] and its display; clients hold [`Gfx`]
//! handles and send it drawing requests over a channel. Small requests travel as scalar
//! messages with points and colors packed into `usize` slots, strings and bitmaps as rkyv
//! archives.

pub mod api;
pub use api::*;
pub mod backend;
pub mod fonts;
mod gfx;
pub use gfx::Gfx;
pub mod platform;
mod server;
pub use server::{connect, serve, start};
pub mod testing;
