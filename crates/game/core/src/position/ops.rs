//! Point operations callable with untyped argument lists.
//!
//! Each operation takes the receiving [`Point`] and the remaining call
//! arguments. The receiver sits in slot 0 and the position operand in slot 1,
//! so the operand may be given as a `Point`, a pair, two bare integers, or
//! (where optional) be absent.

use crate::error::{ErrorSeverity, GameError};
use crate::position::{Arg, PositionError, normalize_position_at, position_argument_at};
use crate::state::Point;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error(transparent)]
    Position(#[from] PositionError),

    #[error("missing position operand at argument {index}")]
    MissingOperand { index: usize },

    #[error("expected {expected} argument(s), got {found}")]
    UnexpectedArguments { expected: usize, found: usize },

    #[error("scale factor must be a number, got '{found}'")]
    InvalidScalar { found: &'static str },

    #[error("scale factor must be finite")]
    NonFiniteScalar,

    #[error("result of `{operation}` is outside the coordinate range")]
    CoordinateOverflow { operation: &'static str },
}

impl GameError for OperationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Position(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Position(err) => err.error_code(),
            Self::MissingOperand { .. } => "OPERATION_MISSING_OPERAND",
            Self::UnexpectedArguments { .. } => "OPERATION_UNEXPECTED_ARGUMENTS",
            Self::InvalidScalar { .. } => "OPERATION_INVALID_SCALAR",
            Self::NonFiniteScalar => "OPERATION_NON_FINITE_SCALAR",
            Self::CoordinateOverflow { .. } => "OPERATION_COORDINATE_OVERFLOW",
        }
    }
}

/// Position slot used by every binary operation below.
const OPERAND: usize = 1;

/// Normalizes slot 0 and splits the receiver from the remaining arguments.
pub fn receiver(args: Vec<Arg>) -> Result<(Point, Vec<Arg>), OperationError> {
    let mut args = normalize_position_at(args, 0)?;
    if args.is_empty() {
        return Err(OperationError::MissingOperand { index: 0 });
    }
    match args.remove(0) {
        Arg::Point(point) => Ok((point, args)),
        _ => Err(OperationError::MissingOperand { index: 0 }),
    }
}

fn call(receiver: Point, args: Vec<Arg>) -> Vec<Arg> {
    let mut call = Vec::with_capacity(args.len() + 1);
    call.push(Arg::Point(receiver));
    call.extend(args);
    call
}

/// Extracts the single, already normalized operand from `[receiver, operand]`.
fn operand(args: Vec<Arg>) -> Result<Option<Point>, OperationError> {
    match <[Arg; 2]>::try_from(args) {
        Ok([_, Arg::Point(point)]) => Ok(Some(point)),
        // Normalization leaves only `Point` or `Absent` in the slot.
        Ok(_) => Ok(None),
        Err(args) if args.len() < 2 => Ok(None),
        Err(args) => Err(OperationError::UnexpectedArguments {
            expected: 1,
            found: args.len() - 1,
        }),
    }
}

fn required(point: Option<Point>) -> Result<Point, OperationError> {
    point.ok_or(OperationError::MissingOperand { index: OPERAND })
}

fn in_range<T>(value: Option<T>, operation: &'static str) -> Result<T, OperationError> {
    value.ok_or(OperationError::CoordinateOverflow { operation })
}

/// `receiver + operand`.
pub fn add(receiver: Point, args: Vec<Arg>) -> Result<Point, OperationError> {
    let op = position_argument_at(OPERAND, |args| -> Result<Point, OperationError> {
        let rhs = required(operand(args)?)?;
        in_range(receiver.checked_add(rhs), "add")
    });
    op(call(receiver, args))
}

/// `operand + receiver`, the operand being built first.
pub fn reflected_add(receiver: Point, args: Vec<Arg>) -> Result<Point, OperationError> {
    let op = position_argument_at(OPERAND, |args| -> Result<Point, OperationError> {
        let lhs = required(operand(args)?)?;
        in_range(lhs.checked_add(receiver), "reflected_add")
    });
    op(call(receiver, args))
}

/// `receiver - operand`.
pub fn subtract(receiver: Point, args: Vec<Arg>) -> Result<Point, OperationError> {
    let op = position_argument_at(OPERAND, |args| -> Result<Point, OperationError> {
        let rhs = required(operand(args)?)?;
        in_range(receiver.checked_sub(rhs), "subtract")
    });
    op(call(receiver, args))
}

/// `operand - receiver`.
///
/// The operand is converted to a point and stays on the left; this is not
/// `-(receiver - operand)` computed with swapped arguments.
pub fn reflected_subtract(receiver: Point, args: Vec<Arg>) -> Result<Point, OperationError> {
    let op = position_argument_at(OPERAND, |args| -> Result<Point, OperationError> {
        let lhs = required(operand(args)?)?;
        in_range(lhs.checked_sub(receiver), "reflected_subtract")
    });
    op(call(receiver, args))
}

/// Grid distance from `receiver` to the operand, or to the origin when the
/// operand is absent or not given.
pub fn distance(receiver: Point, args: Vec<Arg>) -> Result<u32, OperationError> {
    let op = position_argument_at(OPERAND, |args| -> Result<u32, OperationError> {
        let other = operand(args)?.unwrap_or(Point::ORIGIN);
        in_range(receiver.checked_distance_to(other), "distance")
    });
    op(call(receiver, args))
}

/// Scales `receiver` by a single `int` or `float` factor.
///
/// The factor is a scalar, so it does not go through position normalization.
/// Non-finite factors and results outside the coordinate range are rejected
/// instead of being saturated.
pub fn scale(receiver: Point, args: Vec<Arg>) -> Result<Point, OperationError> {
    match args.as_slice() {
        [Arg::Int(factor)] => in_range(receiver.checked_mul(*factor), "scale"),
        [Arg::Float(factor)] if !factor.is_finite() => Err(OperationError::NonFiniteScalar),
        [Arg::Float(factor)] => in_range(receiver.checked_scale(*factor), "scale"),
        [other] => Err(OperationError::InvalidScalar {
            found: other.type_name(),
        }),
        _ => Err(OperationError::UnexpectedArguments {
            expected: 1,
            found: args.len(),
        }),
    }
}

/// Structural equality that never fails.
///
/// Absent operands, unsupported shapes, and malformed calls all compare as
/// not equal.
pub fn equals(receiver: Point, args: Vec<Arg>) -> bool {
    let op = position_argument_at(OPERAND, |args| -> Result<bool, OperationError> {
        Ok(operand(args)?.is_some_and(|other| other == receiver))
    });
    match op(call(receiver, args)) {
        Ok(equal) => equal,
        Err(err) => {
            tracing::trace!(%err, "comparison degraded to not equal");
            false
        }
    }
}
