//! Type checking for type expressions.
//!
//! `infer` follows the algebra exactly and lets the error type propagate.
//! `check` stops at the first failure and says which operation caused it.

use tracing::debug;

use crate::ast::{TypeExpr, TypeSpec};
use crate::error::TypeError;
use crate::value_type::ValueType;

impl TypeExpr {
    /// Result type of the expression, `ValueType::Error` if any step fails.
    pub fn infer(&self) -> ValueType {
        match self {
            TypeExpr::Type(spec) => spec.to_value_type(),
            TypeExpr::Join(lhs, rhs) => ValueType::join(&lhs.infer(), &rhs.infer()),
            TypeExpr::Either(lhs, rhs) => ValueType::either(&lhs.infer(), &rhs.infer()),
            TypeExpr::Concat(lhs, rhs, dim) => ValueType::concat(&lhs.infer(), &rhs.infer(), dim),
            TypeExpr::Reduce(inner, dims) => inner.infer().reduce(dims.as_slice()),
            TypeExpr::Rename { inner, from, to } => {
                inner.infer().rename(from.as_slice(), to.as_slice())
            }
        }
    }

    /// Result type of the expression.
    ///
    /// Operands are checked first, so the error names the innermost
    /// operation whose operands were valid but whose result is not.
    pub fn check(&self) -> Result<ValueType, TypeError> {
        match self {
            TypeExpr::Type(TypeSpec::Error) => Err(TypeError::ErrorType),
            TypeExpr::Type(spec) => spec.to_value_type().check().map_err(|_| TypeError::InvalidLiteral {
                spec: spec.to_string(),
            }),
            TypeExpr::Join(lhs, rhs) => {
                let (lhs, rhs) = (lhs.check()?, rhs.check()?);
                self.result(ValueType::join(&lhs, &rhs), &[&lhs, &rhs])
            }
            TypeExpr::Either(lhs, rhs) => {
                let (lhs, rhs) = (lhs.check()?, rhs.check()?);
                self.result(ValueType::either(&lhs, &rhs), &[&lhs, &rhs])
            }
            TypeExpr::Concat(lhs, rhs, dim) => {
                let (lhs, rhs) = (lhs.check()?, rhs.check()?);
                self.result(ValueType::concat(&lhs, &rhs, dim), &[&lhs, &rhs])
            }
            TypeExpr::Reduce(inner, dims) => {
                let inner = inner.check()?;
                self.result(inner.reduce(dims.as_slice()), &[&inner])
            }
            TypeExpr::Rename { inner, from, to } => {
                let inner = inner.check()?;
                self.result(inner.rename(from.as_slice(), to.as_slice()), &[&inner])
            }
        }
    }

    fn result(&self, result: ValueType, operands: &[&ValueType]) -> Result<ValueType, TypeError> {
        if !result.is_error() {
            return Ok(result);
        }
        let operands: Vec<String> = operands.iter().map(|ty| ty.to_spec()).collect();
        debug!(op = self.op_name(), expr = %self, ?operands, "type check failed");
        Err(TypeError::Operation {
            op: self.op_name(),
            expr: self.to_string(),
            operands,
        })
    }
}
