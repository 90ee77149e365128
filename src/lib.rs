//! valtype: the type algebra of tensor values
//!
//! A value is a scalar (`double`) or a tensor whose dimensions are named and
//! either indexed (`x[3]`) or mapped (`y{}`). This crate computes the types
//! produced by combining values (`join`, `concat`, `reduce`, `rename`,
//! `either`) without touching any cells. Failures are the `error` type.
//!
//! The textual form of a type is its spec, e.g. `tensor(x[3],y{})`:
//!
//! ```
//! use valtype::ValueType;
//!
//! let lhs = ValueType::from_spec("tensor(x[3])");
//! let rhs = ValueType::from_spec("tensor(y{})");
//! assert_eq!(ValueType::join(&lhs, &rhs).to_spec(), "tensor(x[3],y{})");
//! ```

pub mod ast;
pub mod dimension;
pub mod error;
mod expr;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod pretty;
pub mod repl;
pub mod value_type;

pub use ast::{TypeExpr, TypeSpec};
pub use dimension::{Dimension, DimensionSize};
pub use error::{SpecError, TypeError};
pub use pretty::describe;
pub use value_type::{DimensionList, TypeKind, ValueType};

/// Parse a type spec, keeping diagnostics for malformed text.
///
/// Well-formed specs of invalid types (such as duplicate dimensions) parse
/// successfully and yield the error type.
pub fn parse_spec(input: &str) -> Result<ValueType, SpecError> {
    parser::parse_type_spec(input).map(|spec| spec.to_value_type())
}

/// Parse a type expression such as `join(tensor(x[3]),tensor(y{}))`.
pub fn parse_expr(input: &str) -> Result<TypeExpr, SpecError> {
    parser::parse_type_expr(input)
}
