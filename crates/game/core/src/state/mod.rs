//! Value types held by game logic: grid points and character stat blocks.
mod character;
mod point;

pub use character::{AbilityScores, Character};
pub use point::{Point, PointError};
