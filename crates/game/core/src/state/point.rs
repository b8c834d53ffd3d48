use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::error::{ErrorSeverity, GameError};
use crate::position::{Arg, ops};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PointError {
    #[error("coordinates 'x' and 'y' must be of type 'int' (got '{x}' and '{y}')")]
    InvalidCoordinateType { x: &'static str, y: &'static str },

    #[error("coordinates ({x}, {y}) are outside the grid range")]
    CoordinateOutOfRange { x: i64, y: i64 },
}

impl GameError for PointError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCoordinateType { .. } => "POINT_INVALID_COORDINATE_TYPE",
            Self::CoordinateOutOfRange { .. } => "POINT_COORDINATE_OUT_OF_RANGE",
        }
    }
}

/// Discrete grid position expressed in squares.
///
/// One unit is the game's base square (five feet in D&D, see
/// [`GridConfig`](crate::GridConfig)). Coordinates are fixed at construction;
/// every arithmetic operation returns a new point.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Builds a point from two run-time argument values.
    ///
    /// Only `int` values are accepted; floats are rejected rather than
    /// truncated, even when they hold a whole number.
    pub fn try_from_args(x: &Arg, y: &Arg) -> Result<Self, PointError> {
        match (x, y) {
            (Arg::Int(x), Arg::Int(y)) => Self::try_from_ints(*x, *y),
            _ => Err(PointError::InvalidCoordinateType {
                x: x.type_name(),
                y: y.type_name(),
            }),
        }
    }

    /// Builds a point from wide integers, rejecting values outside `i32`.
    pub fn try_from_ints(x: i64, y: i64) -> Result<Self, PointError> {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => Ok(Self::new(x, y)),
            _ => Err(PointError::CoordinateOutOfRange { x, y }),
        }
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Movement cost from the origin to this point.
    ///
    /// Every second diagonal step costs 2 and every other step costs 1, which
    /// works out to `max + min / 2` over the absolute axis offsets. Ties take
    /// the `dx` branch.
    pub fn grid_distance(self) -> u32 {
        let dx = self.x.unsigned_abs();
        let dy = self.y.unsigned_abs();
        if dx < dy { dy + dx / 2 } else { dx + dy / 2 }
    }

    /// Movement cost between two points.
    ///
    /// Panics on overflow like integer arithmetic; see
    /// [`checked_distance_to`](Self::checked_distance_to).
    pub fn distance_to(self, other: impl Into<Point>) -> u32 {
        (self - other.into()).grid_distance()
    }

    /// Movement cost between two points, `None` if it does not fit in `u32`.
    pub fn checked_distance_to(self, other: impl Into<Point>) -> Option<u32> {
        let other = other.into();
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        let distance = if dx < dy { dy + dx / 2 } else { dx + dy / 2 };
        u32::try_from(distance).ok()
    }

    /// Scales both axes by `factor`, rounding half to even on each axis.
    ///
    /// The float-to-int conversion saturates; use
    /// [`checked_scale`](Self::checked_scale) to reject such factors.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(
            (f64::from(self.x) * factor).round_ties_even() as i32,
            (f64::from(self.y) * factor).round_ties_even() as i32,
        )
    }

    /// Like [`scale`](Self::scale), but `None` when `factor` is not finite or
    /// a rounded axis falls outside `i32`.
    pub fn checked_scale(self, factor: f64) -> Option<Self> {
        if !factor.is_finite() {
            return None;
        }
        let axis = |value: i32| {
            let scaled = (f64::from(value) * factor).round_ties_even();
            (f64::from(i32::MIN)..=f64::from(i32::MAX))
                .contains(&scaled)
                .then_some(scaled as i32)
        };
        Some(Self::new(axis(self.x)?, axis(self.y)?))
    }

    /// Integer scaling, `None` on overflow.
    pub fn checked_mul(self, factor: i64) -> Option<Self> {
        let x = i64::from(self.x).checked_mul(factor)?;
        let y = i64::from(self.y).checked_mul(factor)?;
        Self::try_from_ints(x, y).ok()
    }

    pub fn checked_add(self, rhs: impl Into<Point>) -> Option<Self> {
        let rhs = rhs.into();
        Some(Self::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    pub fn checked_sub(self, rhs: impl Into<Point>) -> Option<Self> {
        let rhs = rhs.into();
        Some(Self::new(self.x.checked_sub(rhs.x)?, self.y.checked_sub(rhs.y)?))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl<T: Into<Point>> Add<T> for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: T) -> Point {
        let rhs = rhs.into();
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Into<Point>> Sub<T> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: T) -> Point {
        let rhs = rhs.into();
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Point> for (i32, i32) {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::from(self) + rhs
    }
}

// The tuple becomes the left operand; order is kept, not negated.
impl Sub<Point> for (i32, i32) {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::from(self) - rhs
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        self.scale(rhs)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs.scale(self)
    }
}

impl Mul<Point> for i32 {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl PartialEq<Option<Point>> for Point {
    fn eq(&self, other: &Option<Point>) -> bool {
        other.is_some_and(|other| *self == other)
    }
}

impl PartialEq<(i32, i32)> for Point {
    fn eq(&self, other: &(i32, i32)) -> bool {
        *self == Point::from(*other)
    }
}

impl PartialEq<Arg> for Point {
    fn eq(&self, other: &Arg) -> bool {
        ops::equals(*self, vec![other.clone()])
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}
