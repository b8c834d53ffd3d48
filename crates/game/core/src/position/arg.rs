use crate::state::Point;

/// Run-time value of a single call argument.
///
/// Front-ends that receive untyped input (command lines, scripting hooks)
/// build a `Vec<Arg>` and hand it to the normalizer, which turns whichever
/// shape was used for a position into a canonical [`Point`].
#[derive(Clone, Debug, PartialEq, strum::IntoStaticStr)]
pub enum Arg {
    /// No position supplied. Always accepted where a position is optional.
    #[strum(serialize = "absent")]
    Absent,
    #[strum(serialize = "Point")]
    Point(Point),
    /// Wider than a coordinate so out-of-range values are reported, not reshaped.
    #[strum(serialize = "int")]
    Int(i64),
    #[strum(serialize = "float")]
    Float(f64),
    #[strum(serialize = "str")]
    Str(String),
    #[strum(serialize = "tuple")]
    Tuple(Vec<Arg>),
    #[strum(serialize = "list")]
    List(Vec<Arg>),
}

impl Arg {
    /// Name of the run-time type, as reported in error messages.
    pub fn type_name(&self) -> &'static str {
        self.into()
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Point> for Arg {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Option<Point>> for Arg {
    fn from(point: Option<Point>) -> Self {
        point.map_or(Self::Absent, Self::Point)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<(i32, i32)> for Arg {
    fn from((x, y): (i32, i32)) -> Self {
        Self::Tuple(vec![Self::from(x), Self::from(y)])
    }
}

/// Typed position accepted at call boundaries.
///
/// This is the statically checked counterpart of the shapes the normalizer
/// accepts: a canonical point, an integer pair, or nothing at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PositionArg {
    Point(Point),
    Pair(i32, i32),
    #[default]
    Absent,
}

impl PositionArg {
    /// Resolves to the canonical form, `None` when no position was given.
    pub fn resolve(self) -> Option<Point> {
        match self {
            Self::Point(point) => Some(point),
            Self::Pair(x, y) => Some(Point::new(x, y)),
            Self::Absent => None,
        }
    }
}

impl From<Point> for PositionArg {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<(i32, i32)> for PositionArg {
    fn from((x, y): (i32, i32)) -> Self {
        Self::Pair(x, y)
    }
}

impl From<[i32; 2]> for PositionArg {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::Pair(x, y)
    }
}

impl From<Option<Point>> for PositionArg {
    fn from(point: Option<Point>) -> Self {
        point.map_or(Self::Absent, Self::Point)
    }
}

impl From<PositionArg> for Arg {
    fn from(position: PositionArg) -> Self {
        match position {
            PositionArg::Point(point) => Self::Point(point),
            PositionArg::Pair(x, y) => Self::from((x, y)),
            PositionArg::Absent => Self::Absent,
        }
    }
}
