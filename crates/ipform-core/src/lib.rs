pub mod form;
pub mod problem;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use form::ProblemForm;
pub use problem::{
    ConstraintRow, Direction, FieldParseError, Relation, SolveRequest, SolveResponse,
    VariableValue,
};
