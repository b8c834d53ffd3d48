//! Position arguments at call boundaries.
//!
//! - [`PositionArg`] is the typed boundary: conversions resolve to a point or
//!   to nothing.
//! - [`Arg`] plus [`normalize_position_at`] is the untyped boundary used by
//!   front-ends that only see raw values.
//! - [`ops`] exposes the point operations over untyped argument lists.
mod arg;
mod normalize;
pub mod ops;

pub use arg::{Arg, PositionArg};
pub use normalize::{PositionError, normalize_position_at, position_argument_at};
