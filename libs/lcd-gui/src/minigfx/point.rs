use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A pixel coordinate. (0, 0) is the top left of the canvas; y grows downward.
#[cfg_attr(feature = "derive-rkyv", derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Hash)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Point { Point { x, y } }

    /// Creates a point with X and Y equal to zero.
    pub const fn zero() -> Self { Point { x: 0, y: 0 } }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) { *self = *self + other; }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x.wrapping_sub(other.x), self.y.wrapping_sub(other.y))
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Point) { *self = *self - other; }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output { Point::new(self.x.wrapping_neg(), self.y.wrapping_neg()) }
}

impl From<(i16, i16)> for Point {
    fn from(other: (i16, i16)) -> Self { Point::new(other.0, other.1) }
}

impl From<Point> for (i16, i16) {
    fn from(other: Point) -> (i16, i16) { (other.x, other.y) }
}

// x in the upper half-word, y in the lower; both keep their two's complement bits so
// negative coordinates survive a trip through a message scalar.
impl From<Point> for usize {
    fn from(point: Point) -> usize { (point.x as u16 as usize) << 16 | (point.y as u16 as usize) }
}

impl From<usize> for Point {
    fn from(p: usize) -> Point {
        Point { x: (p >> 16 & 0xffff) as u16 as i16, y: (p & 0xffff) as u16 as i16 }
    }
}
