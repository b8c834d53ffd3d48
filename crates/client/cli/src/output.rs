//! Rendering of operation results.
use console::style;
use serde::Serialize;
use tabletop_core::Point;

use crate::config::OutputFormat;

/// Result of one CLI operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Point { point: Point },
    Distance { squares: u32, feet: u32 },
    Equality { equal: bool },
}

impl Outcome {
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string(self)?,
            OutputFormat::Text => self.to_text(),
        })
    }

    fn to_text(&self) -> String {
        match self {
            Self::Point { point } => point.to_string(),
            Self::Distance { squares, feet } => {
                format!("{} squares ({} ft)", style(squares).bold(), feet)
            }
            Self::Equality { equal } => equal.to_string(),
        }
    }
}
