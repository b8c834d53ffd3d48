/// Grid configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Real-world length of one grid square, in feet.
    pub feet_per_square: u32,
}

impl GridConfig {
    /// One square is five feet in D&D.
    pub const DEFAULT_FEET_PER_SQUARE: u32 = 5;

    /// Creates a configuration using the D&D square size.
    pub fn new() -> Self {
        Self {
            feet_per_square: Self::DEFAULT_FEET_PER_SQUARE,
        }
    }

    /// Creates a configuration with a custom square size, in feet.
    pub fn with_feet_per_square(feet_per_square: u32) -> Self {
        Self { feet_per_square }
    }

    /// Converts a grid distance (in squares) into feet.
    pub fn to_feet(&self, squares: u32) -> u32 {
        squares.saturating_mul(self.feet_per_square)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}
