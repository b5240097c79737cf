//! Command-line steps
//!
//! Each positional argument is one step, e.g. `inc`, `dec`, `sum:5`, `reset`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One thing to do to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
    Double,
    Sum(i64),
    Reset,
    Noop,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepParseError {
    #[error("Unknown step `{0}` (expected inc, dec, double, sum:N, reset or noop)")]
    Unknown(String),

    #[error("Invalid sum value `{0}`")]
    InvalidSum(String),
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(value) = s.strip_prefix("sum:") {
            return value
                .trim()
                .parse()
                .map(Step::Sum)
                .map_err(|_| StepParseError::InvalidSum(value.to_string()));
        }

        match s {
            "inc" | "increment" => Ok(Step::Increment),
            "dec" | "decrement" => Ok(Step::Decrement),
            "double" => Ok(Step::Double),
            "reset" => Ok(Step::Reset),
            "noop" => Ok(Step::Noop),
            other => Err(StepParseError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Increment => write!(f, "inc"),
            Step::Decrement => write!(f, "dec"),
            Step::Double => write!(f, "double"),
            Step::Sum(n) => write!(f, "sum:{}", n),
            Step::Reset => write!(f, "reset"),
            Step::Noop => write!(f, "noop"),
        }
    }
}
