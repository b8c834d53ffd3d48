//! Coercion of position-shaped call arguments into [`Point`]s.
//!
//! A position may arrive as a `Point`, as a two-element tuple, as two bare
//! integers in consecutive slots, or not at all. [`normalize_position_at`]
//! rewrites one slot of an argument list into the canonical form, and
//! [`position_argument_at`] wraps an operation so that happens before it runs.

use crate::error::{ErrorSeverity, GameError};
use crate::position::Arg;
use crate::state::{Point, PointError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error(transparent)]
    InvalidCoordinate(#[from] PointError),

    #[error("unsupported type for a position argument: '{found}'")]
    UnsupportedPositionShape { found: &'static str },

    /// A bare integer sits in the last slot, so there is no partner to pair
    /// it with. This is an out-of-bounds read, not a shape rejection.
    #[error("argument index {index} out of range while pairing a bare integer position")]
    MissingLookaheadArgument { index: usize },
}

impl GameError for PositionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidCoordinate(err) => err.severity(),
            Self::UnsupportedPositionShape { .. } => ErrorSeverity::Validation,
            Self::MissingLookaheadArgument { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate(err) => err.error_code(),
            Self::UnsupportedPositionShape { .. } => "POSITION_UNSUPPORTED_SHAPE",
            Self::MissingLookaheadArgument { .. } => "POSITION_MISSING_LOOKAHEAD",
        }
    }
}

enum Rewrite {
    Keep,
    Replace(Point),
    Merge(Point),
}

/// Rewrites the argument at `index` into a canonical [`Point`].
///
/// - a missing slot, a `Point` or `Absent` is forwarded untouched
/// - a two-element tuple becomes `Point(t[0], t[1])`
/// - a bare `int` followed by another `int` becomes one point, and the
///   following slot is removed
///
/// A bare `int` in the last slot is read past the end of the list and fails
/// with [`PositionError::MissingLookaheadArgument`]. An `int` followed by
/// anything else, and every other shape, fails with
/// [`PositionError::UnsupportedPositionShape`].
pub fn normalize_position_at(mut args: Vec<Arg>, index: usize) -> Result<Vec<Arg>, PositionError> {
    let rewrite = match args.get(index) {
        None | Some(Arg::Point(_)) | Some(Arg::Absent) => Rewrite::Keep,
        Some(Arg::Tuple(items)) if items.len() == 2 => {
            Rewrite::Replace(Point::try_from_args(&items[0], &items[1])?)
        }
        Some(Arg::Int(x)) => match args.get(index + 1) {
            None => return Err(PositionError::MissingLookaheadArgument { index: index + 1 }),
            Some(Arg::Int(y)) => Rewrite::Merge(Point::try_from_ints(*x, *y)?),
            Some(_) => return Err(PositionError::UnsupportedPositionShape { found: "int" }),
        },
        Some(other) => {
            return Err(PositionError::UnsupportedPositionShape {
                found: other.type_name(),
            });
        }
    };

    match rewrite {
        Rewrite::Keep => {
            tracing::trace!(index, "position argument already canonical");
        }
        Rewrite::Replace(point) => {
            tracing::trace!(index, %point, "normalized tuple position");
            args[index] = Arg::Point(point);
        }
        Rewrite::Merge(point) => {
            tracing::trace!(index, %point, "merged two bare integers into a position");
            args[index] = Arg::Point(point);
            args.remove(index + 1);
        }
    }

    Ok(args)
}

/// Wraps `op` so the argument at `index` is normalized before each call.
///
/// Any error type that can absorb a [`PositionError`] works, so the wrapped
/// operation keeps its own error enum.
pub fn position_argument_at<F, R, E>(index: usize, op: F) -> impl Fn(Vec<Arg>) -> Result<R, E>
where
    F: Fn(Vec<Arg>) -> Result<R, E>,
    E: From<PositionError>,
{
    move |args: Vec<Arg>| -> Result<R, E> { op(normalize_position_at(args, index)?) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Arg {
        Arg::Point(Point::new(x, y))
    }

    #[test]
    fn forwards_points_unchanged() {
        let args = vec![p(0, 0), p(1, 2)];
        assert_eq!(normalize_position_at(args.clone(), 1).unwrap(), args);
    }

    #[test]
    fn forwards_absent_unchanged() {
        let args = vec![p(0, 0), Arg::Absent];
        assert_eq!(normalize_position_at(args.clone(), 1).unwrap(), args);
    }

    #[test]
    fn forwards_when_slot_is_missing() {
        let args = vec![p(0, 0)];
        assert_eq!(normalize_position_at(args.clone(), 1).unwrap(), args);
        assert_eq!(normalize_position_at(Vec::new(), 0).unwrap(), Vec::new());
    }

    #[test]
    fn converts_pairs() {
        let args = vec![p(0, 0), Arg::from((2, 3)), Arg::from("tail")];
        assert_eq!(
            normalize_position_at(args, 1).unwrap(),
            vec![p(0, 0), p(2, 3), Arg::from("tail")]
        );
    }

    #[test]
    fn pair_with_non_integral_member_is_a_coordinate_error() {
        let args = vec![Arg::Tuple(vec![Arg::Float(1.0), Arg::Int(2)])];
        assert_eq!(
            normalize_position_at(args, 0).unwrap_err(),
            PositionError::InvalidCoordinate(PointError::InvalidCoordinateType {
                x: "float",
                y: "int"
            })
        );
    }

    #[test]
    fn merges_two_bare_integers() {
        let args = vec![p(0, 0), Arg::Int(2), Arg::Int(3), Arg::Int(9)];
        assert_eq!(
            normalize_position_at(args, 1).unwrap(),
            vec![p(0, 0), p(2, 3), Arg::Int(9)]
        );
    }

    #[test]
    fn bare_integers_outside_coordinate_range_are_rejected() {
        let args = vec![Arg::Int(i64::from(i32::MAX) + 1), Arg::Int(0)];
        assert_eq!(
            normalize_position_at(args, 0).unwrap_err(),
            PositionError::InvalidCoordinate(PointError::CoordinateOutOfRange {
                x: i64::from(i32::MAX) + 1,
                y: 0
            })
        );
    }

    #[test]
    fn integer_followed_by_other_shape_is_rejected() {
        let args = vec![Arg::Int(2), Arg::Float(3.0)];
        assert_eq!(
            normalize_position_at(args, 0).unwrap_err(),
            PositionError::UnsupportedPositionShape { found: "int" }
        );
    }

    #[test]
    fn trailing_integer_reads_past_the_end() {
        let err = normalize_position_at(vec![p(0, 0), Arg::Int(2)], 1).unwrap_err();
        assert_eq!(err, PositionError::MissingLookaheadArgument { index: 2 });
        assert_eq!(err.severity(), ErrorSeverity::Internal);
    }

    #[test]
    fn rejects_other_shapes_by_type_name() {
        let cases = [
            (Arg::from("a1"), "str"),
            (Arg::Float(1.5), "float"),
            (Arg::List(vec![Arg::Int(1), Arg::Int(2)]), "list"),
            (Arg::Tuple(vec![Arg::Int(1)]), "tuple"),
            (Arg::Tuple(vec![Arg::Int(1), Arg::Int(2), Arg::Int(3)]), "tuple"),
        ];
        for (arg, found) in cases {
            let err = normalize_position_at(vec![arg], 0).unwrap_err();
            assert_eq!(err, PositionError::UnsupportedPositionShape { found });
            assert!(err.to_string().contains(&format!("'{found}'")));
        }
    }

    #[test]
    fn wrapper_normalizes_before_calling() {
        let first = position_argument_at(0, |args: Vec<Arg>| -> Result<Arg, PositionError> {
            Ok(args.into_iter().next().unwrap_or(Arg::Absent))
        });

        assert_eq!(first(vec![Arg::Int(4), Arg::Int(5)]).unwrap(), p(4, 5));
        assert_eq!(first(vec![Arg::from((4, 5))]).unwrap(), p(4, 5));
        assert_eq!(first(vec![Arg::Absent]).unwrap(), Arg::Absent);
        assert!(first(vec![Arg::from("x")]).is_err());
    }
}
