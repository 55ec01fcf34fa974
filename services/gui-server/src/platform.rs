//! Panel geometry for the default build.

/// Panel width in pixels, native orientation
pub const WIDTH: i16 = 320;
/// Panel height in pixels, native orientation
pub const HEIGHT: i16 = 480;

/// Upper bound on preview window refreshes per second
pub const MAX_FPS: u64 = 30;
