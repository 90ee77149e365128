//! AST for type specs and type expressions

use crate::dimension::Dimension;
use crate::value_type::ValueType;

/// A parsed type spec, before normalization.
///
/// Dimensions appear in source order and may still be invalid (duplicate
/// names, zero extents); [`TypeSpec::to_value_type`] runs them through
/// [`ValueType::tensor_type`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeSpec {
    /// `error`
    Error,
    /// `double`
    Double,
    /// `tensor(x[3],y{})`
    Tensor(Vec<Dimension>),
}

impl TypeSpec {
    pub fn to_value_type(&self) -> ValueType {
        match self {
            TypeSpec::Error => ValueType::Error,
            TypeSpec::Double => ValueType::Scalar,
            TypeSpec::Tensor(dims) => ValueType::tensor_type(dims.clone()),
        }
    }
}

impl From<&ValueType> for TypeSpec {
    fn from(ty: &ValueType) -> Self {
        match ty {
            ValueType::Error => TypeSpec::Error,
            ValueType::Scalar => TypeSpec::Double,
            ValueType::Tensor(dims) => TypeSpec::Tensor(dims.to_vec()),
        }
    }
}

/// A type expression: type literals combined by the value-type operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    /// A type literal
    Type(TypeSpec),
    /// `join(a, b)`
    Join(Box<TypeExpr>, Box<TypeExpr>),
    /// `concat(a, b, dim)`
    Concat(Box<TypeExpr>, Box<TypeExpr>, String),
    /// `reduce(a, dim...)`; no dimensions reduces everything
    Reduce(Box<TypeExpr>, Vec<String>),
    /// `rename(a, from, to)`
    Rename {
        inner: Box<TypeExpr>,
        from: Vec<String>,
        to: Vec<String>,
    },
    /// `either(a, b)`
    Either(Box<TypeExpr>, Box<TypeExpr>),
}

impl TypeExpr {
    /// Name of the outermost operation (`"type"` for literals)
    pub fn op_name(&self) -> &'static str {
        match self {
            TypeExpr::Type(_) => "type",
            TypeExpr::Join(..) => "join",
            TypeExpr::Concat(..) => "concat",
            TypeExpr::Reduce(..) => "reduce",
            TypeExpr::Rename { .. } => "rename",
            TypeExpr::Either(..) => "either",
        }
    }
}
