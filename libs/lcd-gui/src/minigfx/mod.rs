//! Shape rasterizers. Every shape ends up as pixel sets and rectangle fills on the
//! canvas's [`crate::LcdHal`]; nothing here touches pixel memory directly.

pub mod circle;
pub use circle::*;
pub mod line;
pub mod point;
pub use point::*;
pub mod rect;
pub mod triangle;
