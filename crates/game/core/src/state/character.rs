use std::fmt;

use crate::position::PositionArg;
use crate::state::Point;

/// Ability modifiers of a character sheet.
///
/// Stored as modifiers rather than raw scores; missing entries default to 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

/// A combatant's stat block and (optional) place on the battle grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub max_hp: u32,
    pub hp: u32,
    pub ac: u32,
    pub abilities: AbilityScores,
    position: Option<Point>,
}

impl Character {
    pub const DEFAULT_AC: u32 = 10;

    /// Creates a character at full health with default armor class and modifiers.
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            hp: max_hp,
            ac: Self::DEFAULT_AC,
            abilities: AbilityScores::default(),
            position: None,
        }
    }

    #[must_use]
    pub fn with_ac(mut self, ac: u32) -> Self {
        self.ac = ac;
        self
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = abilities;
        self
    }

    /// Identifier-friendly name: lower case, spaces replaced by underscores.
    pub fn global_name(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    /// Bonus added to the initiative roll.
    pub fn initiative_bonus(&self) -> i32 {
        self.abilities.dexterity
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Places the character on the grid, or takes it off with an absent position.
    pub fn place_at(&mut self, position: impl Into<PositionArg>) {
        self.position = position.into().resolve();
    }

    /// Grid distance to `target`, `None` if either side is off the grid.
    pub fn distance_to(&self, target: impl Into<PositionArg>) -> Option<u32> {
        let target = target.into().resolve()?;
        Some(self.position?.distance_to(target))
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.name, self.hp, self.max_hp)
    }
}
