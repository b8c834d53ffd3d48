//! CLI configuration read from the environment.
use std::env;

use tabletop_core::GridConfig;

/// How results are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Front-end configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub grid: GridConfig,
    pub output: OutputFormat,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLETOP_FEET_PER_SQUARE` - Length of one square in feet (default: 5)
    /// - `TABLETOP_OUTPUT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(feet) = parse::<u32>(lookup("TABLETOP_FEET_PER_SQUARE")) {
            if feet > 0 {
                config.grid = GridConfig::with_feet_per_square(feet);
            }
        }

        if let Some(output) = parse::<OutputFormat>(lookup("TABLETOP_OUTPUT")) {
            config.output = output;
        }

        config
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, json: bool, feet_per_square: Option<u32>) -> Self {
        if json {
            self.output = OutputFormat::Json;
        }
        if let Some(feet) = feet_per_square {
            self.grid = GridConfig::with_feet_per_square(feet);
        }
        self
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.grid.feet_per_square, 5);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn reads_environment() {
        let config = config_from(&[
            ("TABLETOP_FEET_PER_SQUARE", "10"),
            ("TABLETOP_OUTPUT", "JSON"),
        ]);
        assert_eq!(config.grid.feet_per_square, 10);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn ignores_invalid_values() {
        let config = config_from(&[
            ("TABLETOP_FEET_PER_SQUARE", "0"),
            ("TABLETOP_OUTPUT", "yaml"),
        ]);
        assert_eq!(config, CliConfig::default());

        let config = config_from(&[("TABLETOP_FEET_PER_SQUARE", "five")]);
        assert_eq!(config.grid.feet_per_square, 5);
    }

    #[test]
    fn flags_override_environment() {
        let config = config_from(&[("TABLETOP_FEET_PER_SQUARE", "10")]).with_overrides(true, Some(3));
        assert_eq!(config.grid.feet_per_square, 3);
        assert_eq!(config.output, OutputFormat::Json);
    }
}
