use std::sync::mpsc::Sender;

use lcd_gui::TextX;

/// Name given to the server thread.
pub const SERVER_NAME_GUI: &str = "_LCD gui_";

/// Requests understood by the server. Scalar opcodes carry their arguments in the four
/// `usize` slots of [`MessageBody::Scalar`], with points packed by `Point`'s `usize`
/// conversion; buffer opcodes carry an rkyv archive of the matching request struct.
#[derive(Debug, Copy, Clone, PartialEq, Eq, num_derive::FromPrimitive, num_derive::ToPrimitive)]
pub enum GfxOpcode {
    /// Push the canvas to the panel. Blocking; returns 1 while the panel is still open.
    Flush,

    /// Fill the canvas with a color, leaving the draw color alone
    Clear,

    /// Drawing state
    SetColor,
    SetTextColor,
    SetTextBackground,
    SetTextSize,
    SetTextMode,
    SetCursor,
    /// Blocking; returns the packed cursor point
    GetCursor,

    /// Set one pixel in the draw color
    Pixel,
    /// Blocking; returns the packed color of one pixel
    GetPixel,

    /// Arbitrary line between two points
    Line,
    HLine,
    VLine,

    /// Rectangles by two corners
    Rectangle,
    FillRectangle,
    /// Rounded rectangles by two corners and a radius
    RoundedRectangle,
    FillRoundedRectangle,

    /// Circles by center and radius
    Circle,
    FillCircle,

    /// Triangles by three vertices
    Triangle,
    FillTriangle,

    /// Buffer: [`TextRequest`]. Returns the byte count when sent blocking.
    String,
    /// Buffer: [`IntRequest`]
    Int,
    /// Buffer: [`FloatRequest`]
    Float,
    /// Buffer: [`BitmapRequest`]
    Bitmap,

    /// Blocking; returns width and height of the canvas
    ScreenSize,

    /// Exit the server loop and hand the display back
    Quit,
}

/// Reply status slot: the request was carried out.
pub const REPLY_OK: usize = 0;
/// Reply status slot: the request's buffer could not be decoded.
pub const REPLY_BAD_BUFFER: usize = 1;

pub enum MessageBody {
    /// Fire and forget
    Scalar([usize; 4]),
    /// The server answers with two `usize`s on the channel
    BlockingScalar([usize; 4], Sender<[usize; 2]>),
    /// An rkyv archive, with an optional reply channel
    Buffer(rkyv::util::AlignedVec, Option<Sender<[usize; 2]>>),
}

pub struct Envelope {
    pub opcode: usize,
    pub body: MessageBody,
}

#[derive(Debug, Clone, PartialEq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct TextRequest {
    pub text: String,
    pub x: TextX,
    pub y: i16,
}

#[derive(Debug, Clone, PartialEq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct IntRequest {
    pub num: i32,
    pub x: TextX,
    pub y: i16,
    pub length: i16,
    pub filler: u8,
    pub base: u32,
}

#[derive(Debug, Clone, PartialEq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct FloatRequest {
    pub num: f64,
    pub dec: u8,
    pub x: TextX,
    pub y: i16,
    pub divider: u8,
    pub length: i16,
    pub filler: u8,
}

#[derive(Debug, Clone, PartialEq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct BitmapRequest {
    pub x: i16,
    pub y: i16,
    pub w: i16,
    pub h: i16,
    pub scale: i16,
    /// Row-major packed colors
    pub data: Vec<u16>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GfxError {
    /// The server thread has exited
    ServerGone,
    /// The server dropped a blocking request without answering
    NoReply,
    SerializeFailed,
    /// The server could not decode the request buffer
    DeserializeFailed,
}

impl std::fmt::Display for GfxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GfxError::ServerGone => write!(f, "gui server is not running"),
            GfxError::NoReply => write!(f, "gui server did not reply"),
            GfxError::SerializeFailed => write!(f, "could not serialize request"),
            GfxError::DeserializeFailed => write!(f, "gui server could not decode request"),
        }
    }
}

impl std::error::Error for GfxError {}
