/// Packs 8-bit channels into a 5/6/5 color word. The low bits of each channel are dropped.
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3)
}

/// Type wrapper for packed 5/6/5 colors, the only color format the drawing layer understands.
#[cfg_attr(feature = "derive-rkyv", derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const BLUE: Rgb565 = Rgb565(0x001F);
    pub const RED: Rgb565 = Rgb565(0xF800);
    pub const GREEN: Rgb565 = Rgb565(0x07E0);
    pub const CYAN: Rgb565 = Rgb565(0x07FF);
    pub const MAGENTA: Rgb565 = Rgb565(0xF81F);
    pub const YELLOW: Rgb565 = Rgb565(0xFFE0);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self { Rgb565(color565(r, g, b)) }

    /// Expands the packed channels back to 8 bits each. The dropped low bits come back as
    /// zero, so packing the result again yields the same word.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let r = ((self.0 >> 11) & 0x1F) as u8;
        let g = ((self.0 >> 5) & 0x3F) as u8;
        let b = (self.0 & 0x1F) as u8;
        (r << 3, g << 2, b << 3)
    }

    /// 0x00RRGGBB, the layout most desktop frame buffers want.
    pub const fn to_rgb888(self) -> u32 {
        let (r, g, b) = self.to_rgb();
        // replicate the high bits into the empty low bits so full scale stays full scale
        let r = (r | (r >> 5)) as u32;
        let g = (g | (g >> 6)) as u32;
        let b = (b | (b >> 5)) as u32;
        (r << 16) | (g << 8) | b
    }
}

impl From<u16> for Rgb565 {
    fn from(value: u16) -> Self { Rgb565(value) }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> u16 { color.0 }
}

impl From<usize> for Rgb565 {
    fn from(value: usize) -> Self { Rgb565(value as u16) }
}

impl From<Rgb565> for usize {
    fn from(color: Rgb565) -> usize { color.0 as usize }
}

impl From<(u8, u8, u8)> for Rgb565 {
    fn from(rgb: (u8, u8, u8)) -> Self { Rgb565::from_rgb(rgb.0, rgb.1, rgb.2) }
}
