use crate::{Point, Rgb565};

/// How glyph cells treat the pixels their bitmap leaves clear.
#[cfg_attr(feature = "derive-rkyv", derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextMode {
    /// Clear pixels are painted with the text background color.
    #[default]
    Opaque,
    /// Clear pixels are left untouched.
    Transparent,
}

/// `true` selects transparent text, matching the flag drivers usually expose.
impl From<bool> for TextMode {
    fn from(transparent: bool) -> Self { if transparent { TextMode::Transparent } else { TextMode::Opaque } }
}

impl From<TextMode> for bool {
    fn from(mode: TextMode) -> bool { mode == TextMode::Transparent }
}

/// Drawing state owned by one canvas.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CanvasState {
    /// Color for pixels, lines, and shapes
    pub draw_color: Rgb565,
    pub text_color: Rgb565,
    pub text_bg: Rgb565,
    /// Glyph scale factor. 0 is accepted and yields zero-sized glyph cells.
    pub text_size: u8,
    pub text_mode: TextMode,
    pub cursor: Point,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            draw_color: Rgb565::RED,
            text_color: Rgb565::GREEN,
            text_bg: Rgb565::RED,
            text_size: 1,
            text_mode: TextMode::Opaque,
            cursor: Point::zero(),
        }
    }
}
