//! Fixed-capacity number formatting for on-screen text.
//!
//! Output never exceeds [`SCRATCH_LEN`] bytes. Anything that would not fit is clipped; nothing
//! here allocates or fails.

use core::fmt;

/// Usable bytes of a formatting scratch buffer.
pub const SCRATCH_LEN: usize = 26;
/// Integers are cut to their lowest this many digits.
pub const MAX_INT_DIGITS: usize = 10;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A formatted number: up to [`SCRATCH_LEN`] ASCII bytes held inline.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Scratch {
    buf: [u8; SCRATCH_LEN],
    len: usize,
}

impl Scratch {
    pub const fn new() -> Self { Scratch { buf: [0; SCRATCH_LEN], len: 0 } }

    pub fn as_bytes(&self) -> &[u8] { &self.buf[..self.len] }

    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    fn push(&mut self, b: u8) -> bool {
        if self.len >= SCRATCH_LEN {
            return false;
        }
        self.buf[self.len] = b;
        self.len += 1;
        true
    }
}

impl Default for Scratch {
    fn default() -> Self { Scratch::new() }
}

/// Writes past the capacity are dropped, so `write!` into a `Scratch` always succeeds.
impl fmt::Write for Scratch {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &b in s.as_bytes() {
            if !self.push(b) {
                break;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Scratch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match core::str::from_utf8(self.as_bytes()) {
            Ok(s) => write!(f, "Scratch({:?})", s),
            Err(_) => write!(f, "Scratch({:?})", self.as_bytes()),
        }
    }
}

/// Formats `num` in `base` with digits `0-9A-Z`.
///
/// At most [`MAX_INT_DIGITS`] digits are kept (the least significant ones). When `length`
/// is longer than digits plus sign, the number is padded on the left with `filler` up to
/// `length` bytes, clipped to the scratch capacity. A minus sign stays in front of a
/// non-space filler (`-0042`) and behind a space filler (`  -42`). Bases outside `2..=36`
/// are clamped into range.
pub fn format_int(num: i32, length: i16, filler: u8, base: u32) -> Scratch {
    let radix = base.clamp(2, 36) as i64;
    if radix != base as i64 {
        log::warn!("base {} out of range, using {}", base, radix);
    }

    // digits come out least significant first
    let mut digits = [0u8; MAX_INT_DIGITS];
    let mut count = 0;
    let negative = num < 0;
    let mut n = (num as i64).abs();
    if n == 0 {
        digits[0] = b'0';
        count = 1;
    }
    while n > 0 && count < MAX_INT_DIGITS {
        digits[count] = DIGITS[(n % radix) as usize];
        n /= radix;
        count += 1;
    }

    let body = count + negative as usize;
    let pad = if length > 0 && length as usize > body {
        (length as usize).min(SCRATCH_LEN) - body
    } else {
        0
    };

    let mut out = Scratch::new();
    if negative && filler != b' ' {
        out.push(b'-');
    }
    for _ in 0..pad {
        out.push(filler);
    }
    if negative && filler == b' ' {
        out.push(b'-');
    }
    for &d in digits[..count].iter().rev() {
        out.push(d);
    }
    out
}

/// Formats `num` with `dec` decimals (clamped to `1..=5`) in a field `length` bytes wide,
/// right-justified, or left-justified when `length` is negative.
///
/// The decimal point is replaced with `divider`. A `filler` other than a space takes the
/// place of the padding: for negative numbers the sign is moved to the first byte and every
/// space or sign after it becomes `filler`. The result is clipped to the scratch capacity.
pub fn format_float(num: f64, dec: u8, length: i16, divider: u8, filler: u8) -> Scratch {
    use core::fmt::Write;

    let dec = dec.clamp(1, 5) as usize;
    let width = (length.unsigned_abs() as usize).min(SCRATCH_LEN);
    let mut out = Scratch::new();
    if length < 0 {
        write!(out, "{:<width$.dec$}", num, width = width, dec = dec).ok();
    } else {
        write!(out, "{:>width$.dec$}", num, width = width, dec = dec).ok();
    }

    let len = out.len;
    let text = &mut out.buf[..len];
    if divider != b'.' {
        text.iter_mut().filter(|b| **b == b'.').for_each(|b| *b = divider);
    }
    if filler != b' ' && !text.is_empty() {
        if num < 0.0 {
            text[0] = b'-';
            text[1..].iter_mut().filter(|b| **b == b' ' || **b == b'-').for_each(|b| *b = filler);
        } else {
            text.iter_mut().filter(|b| **b == b' ').for_each(|b| *b = filler);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(num: i32, length: i16, filler: u8, base: u32) -> std::string::String {
        std::string::String::from_utf8(format_int(num, length, filler, base).as_bytes().to_vec()).unwrap()
    }

    fn float(num: f64, dec: u8, length: i16, divider: u8, filler: u8) -> std::string::String {
        std::string::String::from_utf8(format_float(num, dec, length, divider, filler).as_bytes().to_vec())
            .unwrap()
    }

    #[test]
    fn test_int_examples() {
        assert_eq!(int(0, 1, b'0', 10), "0");
        assert_eq!(int(-42, 5, b'0', 10), "-0042");
        assert_eq!(int(255, 0, b' ', 16), "FF");
    }

    #[test]
    fn test_int_padding() {
        assert_eq!(int(7, 4, b' ', 10), "   7");
        assert_eq!(int(-7, 4, b' ', 10), "  -7");
        assert_eq!(int(-7, 4, b'*', 10), "-**7");
        // no padding when the number already fills the field
        assert_eq!(int(12345, 3, b'0', 10), "12345");
        assert_eq!(int(-12, 3, b'0', 10), "-12");
        assert_eq!(int(12, -8, b'0', 10), "12");
    }

    #[test]
    fn test_int_clipping() {
        assert_eq!(int(5, 100, b'0', 10).len(), SCRATCH_LEN);
        assert!(int(5, 100, b'0', 10).ends_with("005"));
        // only the low ten digits survive
        assert_eq!(int(i32::MAX, 0, b' ', 2), "1111111111");
        assert_eq!(int(i32::MIN, 0, b' ', 10), "-2147483648");
        assert_eq!(int(i32::MIN, 0, b' ', 16), "-80000000");
    }

    #[test]
    fn test_int_bases() {
        assert_eq!(int(35, 0, b' ', 36), "Z");
        assert_eq!(int(10, 0, b' ', 2), "1010");
        // clamped to base 36 and base 2
        assert_eq!(int(35, 0, b' ', 99), "Z");
        assert_eq!(int(2, 0, b' ', 0), "10");
    }

    #[test]
    fn test_float_basic() {
        assert_eq!(float(3.14159, 2, 0, b'.', b' '), "3.14");
        assert_eq!(float(2.5, 0, 0, b'.', b' '), "2.5");
        assert_eq!(float(1.0, 9, 0, b'.', b' '), "1.00000");
        assert_eq!(float(2.5, 1, 6, b'.', b' '), "   2.5");
        assert_eq!(float(2.5, 1, -6, b'.', b' '), "2.5   ");
    }

    #[test]
    fn test_float_divider_and_filler() {
        assert_eq!(float(2.5, 2, 7, b',', b' '), "   2,50");
        assert_eq!(float(2.5, 2, 7, b'.', b'0'), "0002.50");
        assert_eq!(float(-3.5, 2, 7, b'.', b'0'), "-003.50");
        assert_eq!(float(-3.5, 2, 7, b',', b'#'), "-##3,50");
    }

    #[test]
    fn test_float_clipping() {
        assert_eq!(float(1.5, 1, 40, b'.', b' ').len(), SCRATCH_LEN);
        assert_eq!(float(1e30, 5, 0, b'.', b' ').len(), SCRATCH_LEN);
    }
}
