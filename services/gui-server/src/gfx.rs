use std::sync::mpsc::{channel, Sender};

use lcd_gui::{Point, Rgb565, TextMode, TextX};
use num_traits::ToPrimitive;

use crate::api::*;

/// Client handle to a running gui server. Cloning is cheap; every clone talks to the same
/// server, and requests from one handle are drawn in the order they were sent.
#[derive(Debug, Clone)]
pub struct Gfx {
    conn: Sender<Envelope>,
}

impl Gfx {
    pub(crate) fn new(conn: Sender<Envelope>) -> Self { Gfx { conn } }

    pub fn conn(&self) -> &Sender<Envelope> { &self.conn }

    fn send(&self, opcode: GfxOpcode, body: MessageBody) -> Result<(), GfxError> {
        let opcode = opcode.to_usize().unwrap_or(usize::MAX);
        self.conn.send(Envelope { opcode, body }).map_err(|_| GfxError::ServerGone)
    }

    fn scalar(
        &self,
        opcode: GfxOpcode,
        arg1: usize,
        arg2: usize,
        arg3: usize,
        arg4: usize,
    ) -> Result<(), GfxError> {
        self.send(opcode, MessageBody::Scalar([arg1, arg2, arg3, arg4]))
    }

    fn blocking_scalar(
        &self,
        opcode: GfxOpcode,
        arg1: usize,
        arg2: usize,
        arg3: usize,
        arg4: usize,
    ) -> Result<[usize; 2], GfxError> {
        let (tx, rx) = channel();
        self.send(opcode, MessageBody::BlockingScalar([arg1, arg2, arg3, arg4], tx))?;
        rx.recv().map_err(|_| GfxError::NoReply)
    }

    fn buffer<T>(&self, opcode: GfxOpcode, request: &T, blocking: bool) -> Result<usize, GfxError>
    where
        T: for<'a> rkyv::Serialize<
                rkyv::api::high::HighSerializer<
                    rkyv::util::AlignedVec,
                    rkyv::ser::allocator::ArenaHandle<'a>,
                    rkyv::rancor::Error,
                >,
            >,
    {
        let buf = rkyv::to_bytes::<rkyv::rancor::Error>(request).map_err(|e| {
            log::error!("couldn't serialize {:?} request: {}", opcode, e);
            GfxError::SerializeFailed
        })?;
        if !blocking {
            return self.send(opcode, MessageBody::Buffer(buf, None)).map(|_| 0);
        }
        let (tx, rx) = channel();
        self.send(opcode, MessageBody::Buffer(buf, Some(tx)))?;
        match rx.recv().map_err(|_| GfxError::NoReply)? {
            [value, REPLY_OK] => Ok(value),
            _ => Err(GfxError::DeserializeFailed),
        }
    }

    /// Pushes everything drawn so far to the panel. Returns `false` once the panel has been
    /// closed (the hosted preview window, for example).
    pub fn flush(&self) -> Result<bool, GfxError> {
        self.blocking_scalar(GfxOpcode::Flush, 0, 0, 0, 0).map(|ret| ret[0] != 0)
    }

    pub fn clear(&self, color: Rgb565) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::Clear, color.into(), 0, 0, 0)
    }

    pub fn set_color(&self, color: Rgb565) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::SetColor, color.into(), 0, 0, 0)
    }

    pub fn set_text_color(&self, color: Rgb565) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::SetTextColor, color.into(), 0, 0, 0)
    }

    pub fn set_text_background(&self, color: Rgb565) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::SetTextBackground, color.into(), 0, 0, 0)
    }

    pub fn set_text_size(&self, size: u8) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::SetTextSize, size as usize, 0, 0, 0)
    }

    pub fn set_text_mode(&self, mode: TextMode) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::SetTextMode, bool::from(mode) as usize, 0, 0, 0)
    }

    pub fn set_cursor(&self, at: Point) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::SetCursor, at.into(), 0, 0, 0)
    }

    pub fn cursor(&self) -> Result<Point, GfxError> {
        self.blocking_scalar(GfxOpcode::GetCursor, 0, 0, 0, 0).map(|ret| Point::from(ret[0]))
    }

    pub fn draw_pixel(&self, at: Point) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::Pixel, at.into(), 0, 0, 0)
    }

    pub fn pixel(&self, at: Point) -> Result<Rgb565, GfxError> {
        self.blocking_scalar(GfxOpcode::GetPixel, at.into(), 0, 0, 0).map(|ret| Rgb565::from(ret[0]))
    }

    pub fn draw_line(&self, start: Point, end: Point) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::Line, start.into(), end.into(), 0, 0)
    }

    pub fn draw_h_line(&self, start: Point, w: i16) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::HLine, start.into(), w as u16 as usize, 0, 0)
    }

    pub fn draw_v_line(&self, start: Point, h: i16) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::VLine, start.into(), h as u16 as usize, 0, 0)
    }

    pub fn draw_rectangle(&self, tl: Point, br: Point) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::Rectangle, tl.into(), br.into(), 0, 0)
    }

    pub fn fill_rectangle(&self, tl: Point, br: Point) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::FillRectangle, tl.into(), br.into(), 0, 0)
    }

    pub fn draw_rounded_rectangle(&self, tl: Point, br: Point, radius: i16) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::RoundedRectangle, tl.into(), br.into(), radius as u16 as usize, 0)
    }

    pub fn fill_rounded_rectangle(&self, tl: Point, br: Point, radius: i16) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::FillRoundedRectangle, tl.into(), br.into(), radius as u16 as usize, 0)
    }

    pub fn draw_circle(&self, center: Point, radius: i16) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::Circle, center.into(), radius as u16 as usize, 0, 0)
    }

    pub fn fill_circle(&self, center: Point, radius: i16) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::FillCircle, center.into(), radius as u16 as usize, 0, 0)
    }

    pub fn draw_triangle(&self, v0: Point, v1: Point, v2: Point) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::Triangle, v0.into(), v1.into(), v2.into(), 0)
    }

    pub fn fill_triangle(&self, v0: Point, v1: Point, v2: Point) -> Result<(), GfxError> {
        self.scalar(GfxOpcode::FillTriangle, v0.into(), v1.into(), v2.into(), 0)
    }

    /// Prints `text` in the current text style. Returns the number of bytes drawn, which
    /// stops short at the first NUL.
    pub fn print(&self, text: &str, x: impl Into<TextX>, y: i16) -> Result<usize, GfxError> {
        let request = TextRequest { text: text.to_string(), x: x.into(), y };
        self.buffer(GfxOpcode::String, &request, true)
    }

    /// Like [`Gfx::print`] without waiting for the count.
    pub fn draw_str(&self, text: &str, x: impl Into<TextX>, y: i16) -> Result<(), GfxError> {
        let request = TextRequest { text: text.to_string(), x: x.into(), y };
        self.buffer(GfxOpcode::String, &request, false).map(|_| ())
    }

    pub fn draw_int(
        &self,
        num: i32,
        x: impl Into<TextX>,
        y: i16,
        length: i16,
        filler: u8,
        base: u32,
    ) -> Result<(), GfxError> {
        let request = IntRequest { num, x: x.into(), y, length, filler, base };
        self.buffer(GfxOpcode::Int, &request, false).map(|_| ())
    }

    pub fn draw_float(
        &self,
        num: f64,
        dec: u8,
        x: impl Into<TextX>,
        y: i16,
        divider: u8,
        length: i16,
        filler: u8,
    ) -> Result<(), GfxError> {
        let request = FloatRequest { num, dec, x: x.into(), y, divider, length, filler };
        self.buffer(GfxOpcode::Float, &request, false).map(|_| ())
    }

    /// Paints a `w` x `h` bitmap of packed colors at `tl`, each pixel `scale` x `scale`.
    pub fn draw_bmp(&self, tl: Point, w: i16, h: i16, data: &[u16], scale: i16) -> Result<(), GfxError> {
        let request = BitmapRequest { x: tl.x, y: tl.y, w, h, scale, data: data.to_vec() };
        self.buffer(GfxOpcode::Bitmap, &request, false).map(|_| ())
    }

    pub fn screen_size(&self) -> Result<Point, GfxError> {
        self.blocking_scalar(GfxOpcode::ScreenSize, 0, 0, 0, 0)
            .map(|ret| Point::new(ret[0] as i16, ret[1] as i16))
    }

    /// Stops the server. Requests already queued are drawn first.
    pub fn quit(&self) -> Result<(), GfxError> { self.scalar(GfxOpcode::Quit, 0, 0, 0, 0) }
}
