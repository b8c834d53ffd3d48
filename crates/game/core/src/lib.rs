//! Grid coordinates for tabletop battle maps.
//!
//! `tabletop-core` defines the [`Point`] value type with its arithmetic and
//! the diagonal-aware grid distance, plus the position-argument normalization
//! that lets callers pass a point, a pair, two bare integers, or nothing.
//! Everything here is pure and synchronous; front-ends own all I/O.
pub mod config;
pub mod error;
pub mod position;
pub mod state;

pub use config::GridConfig;
pub use error::{ErrorSeverity, GameError};
pub use position::ops::OperationError;
pub use position::{Arg, PositionArg, PositionError, normalize_position_at, position_argument_at};
pub use state::{AbilityScores, Character, Point, PointError};
