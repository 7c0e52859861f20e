use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Whether the objective function is maximized or minimized
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Max,
    Min,
}

/// Comparison operator in a constraint row
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relation {
    /// Less than or equal (<=)
    #[cfg_attr(feature = "serde", serde(rename = "<="))]
    #[default]
    Le,
    /// Equal (=)
    #[cfg_attr(feature = "serde", serde(rename = "="))]
    Eq,
    /// Greater than or equal (>=)
    #[cfg_attr(feature = "serde", serde(rename = ">="))]
    Ge,
}

#[derive(Error, Debug, Clone)]
pub enum FieldParseError {
    #[error("unknown direction: {0}")]
    Direction(String),
    #[error("unknown relation: {0}")]
    Relation(String),
}

impl FromStr for Direction {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "max" | "maximize" => Ok(Direction::Max),
            "min" | "minimize" => Ok(Direction::Min),
            other => Err(FieldParseError::Direction(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Max => write!(f, "max"),
            Direction::Min => write!(f, "min"),
        }
    }
}

impl FromStr for Relation {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<=" | "≤" => Ok(Relation::Le),
            "=" => Ok(Relation::Eq),
            ">=" | "≥" => Ok(Relation::Ge),
            other => Err(FieldParseError::Relation(other.to_string())),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Le => write!(f, "<="),
            Relation::Eq => write!(f, "="),
            Relation::Ge => write!(f, ">="),
        }
    }
}

/// One linear constraint: coeffs . x {<=,=,>=} rhs
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRow {
    /// Coefficients for each variable
    pub coeffs: Vec<f64>,
    /// Comparison operator
    pub relation: Relation,
    /// Right-hand side value
    pub rhs: f64,
}

impl ConstraintRow {
    /// A zero row over `num_vars` variables: 0 . x <= 0
    pub fn zeroed(num_vars: usize) -> Self {
        Self {
            coeffs: vec![0.0; num_vars],
            relation: Relation::Le,
            rhs: 0.0,
        }
    }
}

/// The request body sent to the solver service.
///
/// Field names are the wire contract; non-finite coefficients serialize
/// as JSON `null`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolveRequest {
    pub problem_type: Direction,
    pub num_vars: usize,
    pub objective_coeffs: Vec<f64>,
    pub constraints: Vec<ConstraintRow>,
}

/// The response body returned by the solver service
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResponse {
    pub status: String,
    pub optimal_value: f64,
    pub variables: Vec<VariableValue>,
}

/// One variable assignment in a solution
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VariableValue {
    pub name: String,
    pub value: f64,
}
