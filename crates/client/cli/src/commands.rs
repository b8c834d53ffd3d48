//! Subcommands that forward raw tokens to the core point operations.
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tabletop_core::position::ops;
use tabletop_core::{Arg, GameError, GridConfig, OperationError, Point};

use crate::input;
use crate::output::Outcome;

/// Receiver position followed by the operation's arguments.
///
/// Positions may be written as `(x, y)`, as two integers, or as `none`.
#[derive(Args, Debug)]
pub struct Tokens {
    #[arg(required = true, allow_hyphen_values = true, value_name = "ARG")]
    pub tokens: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a position to the receiver
    Add(Tokens),

    /// Add the receiver to a position
    Radd(Tokens),

    /// Subtract a position from the receiver
    Sub(Tokens),

    /// Subtract the receiver from a position
    Rsub(Tokens),

    /// Compare the receiver with a position
    Eq(Tokens),

    /// Grid distance from the receiver to a position (or to the origin)
    Distance(Tokens),

    /// Scale the receiver by a number
    Scale(Tokens),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Radd(_) => "radd",
            Self::Sub(_) => "sub",
            Self::Rsub(_) => "rsub",
            Self::Eq(_) => "eq",
            Self::Distance(_) => "distance",
            Self::Scale(_) => "scale",
        }
    }

    pub fn execute(self, grid: &GridConfig) -> Result<Outcome> {
        let name = self.name();
        let (Self::Add(tokens)
        | Self::Radd(tokens)
        | Self::Sub(tokens)
        | Self::Rsub(tokens)
        | Self::Eq(tokens)
        | Self::Distance(tokens)
        | Self::Scale(tokens)) = &self;

        let args = input::parse_tokens(&tokens.tokens);
        tracing::debug!(command = name, ?args, "parsed arguments");

        self.run(args, grid)
            .map_err(|err| {
                tracing::debug!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "operation rejected"
                );
                err
            })
            .with_context(|| format!("`{name}` failed"))
    }

    fn run(&self, args: Vec<Arg>, grid: &GridConfig) -> Result<Outcome, OperationError> {
        let (receiver, rest) = ops::receiver(args)?;

        let point = |point: Point| Outcome::Point { point };
        Ok(match self {
            Self::Add(_) => point(ops::add(receiver, rest)?),
            Self::Radd(_) => point(ops::reflected_add(receiver, rest)?),
            Self::Sub(_) => point(ops::subtract(receiver, rest)?),
            Self::Rsub(_) => point(ops::reflected_subtract(receiver, rest)?),
            Self::Scale(_) => point(ops::scale(receiver, rest)?),
            Self::Eq(_) => Outcome::Equality {
                equal: ops::equals(receiver, rest),
            },
            Self::Distance(_) => {
                let squares = ops::distance(receiver, rest)?;
                Outcome::Distance {
                    squares,
                    feet: grid.to_feet(squares),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Tokens {
        Tokens {
            tokens: raw.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn run(command: Command) -> Result<Outcome> {
        command.execute(&GridConfig::default())
    }

    #[test]
    fn add_with_every_shape() {
        let expected = Outcome::Point {
            point: Point::new(3, 4),
        };
        assert_eq!(run(Command::Add(tokens(&["1", "1", "2", "3"]))).unwrap(), expected);
        assert_eq!(run(Command::Add(tokens(&["(1, 1)", "(2, 3)"]))).unwrap(), expected);
        assert_eq!(run(Command::Radd(tokens(&["(1,1)", "2", "3"]))).unwrap(), expected);
    }

    #[test]
    fn reflected_subtraction() {
        assert_eq!(
            run(Command::Rsub(tokens(&["1", "1", "(5, 5)"]))).unwrap(),
            Outcome::Point {
                point: Point::new(4, 4)
            }
        );
        assert_eq!(
            run(Command::Sub(tokens(&["1", "1", "(5, 5)"]))).unwrap(),
            Outcome::Point {
                point: Point::new(-4, -4)
            }
        );
    }

    #[test]
    fn distance_reports_feet() {
        assert_eq!(
            run(Command::Distance(tokens(&["(0, 0)", "4", "2"]))).unwrap(),
            Outcome::Distance {
                squares: 5,
                feet: 25
            }
        );
        assert_eq!(
            run(Command::Distance(tokens(&["3", "3"]))).unwrap(),
            Outcome::Distance {
                squares: 4,
                feet: 20
            }
        );
    }

    #[test]
    fn equality_never_errors() {
        assert_eq!(
            run(Command::Eq(tokens(&["(0, 0)", "none"]))).unwrap(),
            Outcome::Equality { equal: false }
        );
        assert_eq!(
            run(Command::Eq(tokens(&["(0, 0)", "0"]))).unwrap(),
            Outcome::Equality { equal: false }
        );
    }

    #[test]
    fn scale_by_float() {
        assert_eq!(
            run(Command::Scale(tokens(&["(1, 3)", "1.5"]))).unwrap(),
            Outcome::Point {
                point: Point::new(2, 4)
            }
        );
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let err = run(Command::Add(tokens(&["2147483647", "0", "1", "0"]))).unwrap_err();
        assert_eq!(
            err.downcast_ref::<OperationError>(),
            Some(&OperationError::CoordinateOverflow { operation: "add" })
        );
    }

    #[test]
    fn out_of_range_tokens_are_range_errors() {
        let err = run(Command::Distance(tokens(&["3000000000", "0"]))).unwrap_err();
        assert!(format!("{err:#}").contains("outside the grid range"));
    }

    #[test]
    fn scale_rejects_nan_and_huge_factors() {
        let err = run(Command::Scale(tokens(&["(1, 1)", "nan"]))).unwrap_err();
        assert_eq!(
            err.downcast_ref::<OperationError>(),
            Some(&OperationError::NonFiniteScalar)
        );

        let err = run(Command::Scale(tokens(&["(1, 1)", "1e12"]))).unwrap_err();
        assert_eq!(
            err.downcast_ref::<OperationError>(),
            Some(&OperationError::CoordinateOverflow { operation: "scale" })
        );
    }

    #[test]
    fn rejected_calls_carry_context() {
        let err = run(Command::Add(tokens(&["(0, 0)", "north"]))).unwrap_err();
        assert_eq!(err.to_string(), "`add` failed");
        assert!(format!("{err:#}").contains("unsupported type for a position argument: 'str'"));

        let err = run(Command::Add(tokens(&["(0, 0)", "7"]))).unwrap_err();
        assert!(err.downcast_ref::<OperationError>().is_some());
    }
}
