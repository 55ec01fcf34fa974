use std::sync::mpsc::{channel, Receiver};
use std::thread::JoinHandle;

use lcd_gui::{Font, Gui, Point, Rgb565, TextMode};
use num_traits::FromPrimitive;

use crate::api::*;
use crate::backend::Backend;
use crate::Gfx;

/// Decodes the archive carried by a buffer message, logging why when it can't.
macro_rules! decode_buffer {
    ($buf:expr, $t:ty, $opcode:expr) => {
        match $buf.as_deref().map(|bytes| rkyv::from_bytes::<$t, rkyv::rancor::Error>(bytes)) {
            Some(Ok(request)) => Some(request),
            Some(Err(e)) => {
                log::warn!("{:?}: couldn't decode buffer: {}", $opcode, e);
                None
            }
            None => {
                log::warn!("{:?} needs a buffer message", $opcode);
                None
            }
        }
    };
}

/// Creates a request channel: the client handle and the receiving end for [`serve`].
pub fn connect() -> (Gfx, Receiver<Envelope>) {
    let (tx, rx) = channel();
    (Gfx::new(tx), rx)
}

/// Starts the server on its own thread and returns a client handle to it.
///
/// The display is built by `make_display` on the server thread. The join handle yields
/// the display back once the server quits. Displays that can't leave the thread that
/// created them (desktop windows, mostly) run [`serve`] directly instead.
pub fn start<D, F, M>(make_display: M, font: F) -> std::io::Result<(Gfx, JoinHandle<D>)>
where
    D: Backend + Send + 'static,
    F: Font + Send + 'static,
    M: FnOnce() -> D + Send + 'static,
{
    let (gfx, rx) = connect();
    let handle = std::thread::Builder::new()
        .name(SERVER_NAME_GUI.into())
        .spawn(move || serve(make_display(), font, rx))?;
    Ok((gfx, handle))
}

/// Runs the server loop on the calling thread until [`Gfx::quit`] arrives or every client
/// handle is dropped, then hands the display back.
pub fn serve<D: Backend, F: Font>(display: D, font: F, rx: Receiver<Envelope>) -> D {
    let mut gui = Gui::new(display, font);
    log::info!("gui server started, {}x{}", gui.width(), gui.height());
    gui.display_mut().redraw();

    loop {
        let msg = match rx.recv() {
            Ok(msg) => msg,
            Err(_) => {
                log::info!("all clients disconnected");
                break;
            }
        };
        let opcode: Option<GfxOpcode> = FromPrimitive::from_usize(msg.opcode);
        log::trace!("{:?}", opcode);
        let Some(opcode) = opcode else {
            log::error!("couldn't convert opcode: {}", msg.opcode);
            continue;
        };
        let (args, reply, buf) = match msg.body {
            MessageBody::Scalar(args) => (args, None, None),
            MessageBody::BlockingScalar(args, reply) => (args, Some(reply), None),
            MessageBody::Buffer(buf, reply) => ([0; 4], reply, Some(buf)),
        };

        let ret: Option<[usize; 2]> = match opcode {
            GfxOpcode::Flush => {
                gui.display_mut().redraw();
                Some([gui.display().is_open() as usize, REPLY_OK])
            }
            GfxOpcode::Clear => {
                gui.background(Rgb565::from(args[0]));
                None
            }
            GfxOpcode::SetColor => {
                gui.set_color(Rgb565::from(args[0]));
                None
            }
            GfxOpcode::SetTextColor => {
                gui.set_text_color(Rgb565::from(args[0]));
                None
            }
            GfxOpcode::SetTextBackground => {
                gui.set_text_background(Rgb565::from(args[0]));
                None
            }
            GfxOpcode::SetTextSize => {
                gui.set_text_size(args[0] as u8);
                None
            }
            GfxOpcode::SetTextMode => {
                gui.set_text_mode(TextMode::from(args[0] != 0));
                None
            }
            GfxOpcode::SetCursor => {
                let at = Point::from(args[0]);
                gui.set_cursor(at.x, at.y);
                None
            }
            GfxOpcode::GetCursor => Some([gui.cursor().into(), REPLY_OK]),
            GfxOpcode::Pixel => {
                let at = Point::from(args[0]);
                gui.set_pixel(at.x, at.y);
                None
            }
            GfxOpcode::GetPixel => {
                let at = Point::from(args[0]);
                Some([gui.get_pixel(at.x, at.y).into(), REPLY_OK])
            }
            GfxOpcode::Line => {
                let (p1, p2) = (Point::from(args[0]), Point::from(args[1]));
                gui.draw_line(p1.x, p1.y, p2.x, p2.y);
                None
            }
            GfxOpcode::HLine => {
                let at = Point::from(args[0]);
                gui.draw_h_line(at.x, at.y, args[1] as u16 as i16);
                None
            }
            GfxOpcode::VLine => {
                let at = Point::from(args[0]);
                gui.draw_v_line(at.x, at.y, args[1] as u16 as i16);
                None
            }
            GfxOpcode::Rectangle => {
                let (tl, br) = (Point::from(args[0]), Point::from(args[1]));
                gui.draw_rect(tl.x, tl.y, br.x, br.y);
                None
            }
            GfxOpcode::FillRectangle => {
                let (tl, br) = (Point::from(args[0]), Point::from(args[1]));
                gui.fill_rect(tl.x, tl.y, br.x, br.y);
                None
            }
            GfxOpcode::RoundedRectangle => {
                let (tl, br) = (Point::from(args[0]), Point::from(args[1]));
                gui.draw_round_rect(tl.x, tl.y, br.x, br.y, args[2] as u16 as i16);
                None
            }
            GfxOpcode::FillRoundedRectangle => {
                let (tl, br) = (Point::from(args[0]), Point::from(args[1]));
                gui.fill_round_rect(tl.x, tl.y, br.x, br.y, args[2] as u16 as i16);
                None
            }
            GfxOpcode::Circle => {
                let center = Point::from(args[0]);
                gui.draw_circle(center.x, center.y, args[1] as u16 as i16);
                None
            }
            GfxOpcode::FillCircle => {
                let center = Point::from(args[0]);
                gui.fill_circle(center.x, center.y, args[1] as u16 as i16);
                None
            }
            GfxOpcode::Triangle => {
                let (v0, v1, v2) = (Point::from(args[0]), Point::from(args[1]), Point::from(args[2]));
                gui.draw_triangle(v0.x, v0.y, v1.x, v1.y, v2.x, v2.y);
                None
            }
            GfxOpcode::FillTriangle => {
                let (v0, v1, v2) = (Point::from(args[0]), Point::from(args[1]), Point::from(args[2]));
                gui.fill_triangle(v0.x, v0.y, v1.x, v1.y, v2.x, v2.y);
                None
            }
            GfxOpcode::String => match decode_buffer!(buf, TextRequest, opcode) {
                Some(req) => Some([gui.print(req.text.as_bytes(), req.x, req.y), REPLY_OK]),
                None => Some([0, REPLY_BAD_BUFFER]),
            },
            GfxOpcode::Int => match decode_buffer!(buf, IntRequest, opcode) {
                Some(req) => {
                    gui.draw_int(req.num, req.x, req.y, req.length, req.filler, req.base);
                    None
                }
                None => Some([0, REPLY_BAD_BUFFER]),
            },
            GfxOpcode::Float => match decode_buffer!(buf, FloatRequest, opcode) {
                Some(req) => {
                    gui.draw_float(req.num, req.dec, req.x, req.y, req.divider, req.length, req.filler);
                    None
                }
                None => Some([0, REPLY_BAD_BUFFER]),
            },
            GfxOpcode::Bitmap => match decode_buffer!(buf, BitmapRequest, opcode) {
                Some(req) => {
                    gui.draw_bmp(req.x, req.y, req.w, req.h, &req.data, req.scale);
                    None
                }
                None => Some([0, REPLY_BAD_BUFFER]),
            },
            GfxOpcode::ScreenSize => Some([gui.width() as usize, gui.height() as usize]),
            GfxOpcode::Quit => {
                if let Some(reply) = reply {
                    reply.send([0, REPLY_OK]).ok();
                }
                log::info!("quit requested");
                break;
            }
        };

        // blocking callers always get an answer, even from opcodes that return nothing
        if let Some(reply) = reply {
            if reply.send(ret.unwrap_or([0, REPLY_OK])).is_err() {
                log::debug!("{:?}: caller went away before the reply", opcode);
            }
        }
    }
    gui.into_parts().0
}
