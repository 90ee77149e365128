//! Value types
//!
//! Every value handled by the evaluator is either a scalar (`double`), a
//! tensor with named dimensions, or the error type. The error type is a
//! sentinel: operations never fail, they produce `ValueType::Error`, and
//! every operation given an error operand produces an error again.
//!
//! # Invariants
//!
//! A `ValueType::Tensor` always holds a [`DimensionList`] that is
//! - non-empty,
//! - sorted by dimension name,
//! - free of duplicate names,
//! - free of zero-sized indexed dimensions.
//!
//! [`ValueType::tensor_type`] is the only way to produce a `DimensionList`,
//! so the invariants hold for every value reachable through the public API.
//!
//! # Architecture
//!
//! - **mod** (this file): the type, construction and structural queries
//! - **algebra**: `reduce`, `rename`, `join`, `concat`, `either`

mod algebra;

use std::fmt;
use std::ops::Deref;

use crate::dimension::Dimension;
use crate::error::TypeError;

/// Discriminant of a [`ValueType`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Error,
    Scalar,
    Tensor,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Error => write!(f, "error"),
            TypeKind::Scalar => write!(f, "scalar"),
            TypeKind::Tensor => write!(f, "tensor"),
        }
    }
}

/// A normalized, non-empty list of dimensions (sorted, unique names).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DimensionList(Vec<Dimension>);

impl DimensionList {
    pub fn as_slice(&self) -> &[Dimension] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Dimension> {
        self.0
    }
}

impl Deref for DimensionList {
    type Target = [Dimension];

    fn deref(&self) -> &[Dimension] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DimensionList {
    type Item = &'a Dimension;
    type IntoIter = std::slice::Iter<'a, Dimension>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The type of a value: error, scalar or tensor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The error sentinel
    Error,
    /// Zero-dimensional `double`
    Scalar,
    /// Tensor with at least one dimension
    Tensor(DimensionList),
}

impl ValueType {
    pub const fn error() -> Self {
        ValueType::Error
    }

    pub const fn scalar() -> Self {
        ValueType::Scalar
    }

    /// Build a type from an unordered list of dimensions.
    ///
    /// An empty list is the scalar type. Otherwise the list is sorted by name
    /// and rejected (`Error`) if it holds a zero-sized indexed dimension or
    /// two dimensions with the same name.
    pub fn tensor_type(mut dimensions: Vec<Dimension>) -> Self {
        if dimensions.is_empty() {
            return ValueType::Scalar;
        }
        dimensions.sort_by(|a, b| a.name.cmp(&b.name));
        if !verify_dimensions(&dimensions) {
            return ValueType::Error;
        }
        ValueType::Tensor(DimensionList(dimensions))
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            ValueType::Error => TypeKind::Error,
            ValueType::Scalar => TypeKind::Scalar,
            ValueType::Tensor(_) => TypeKind::Tensor,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ValueType::Error)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, ValueType::Scalar)
    }

    pub fn is_tensor(&self) -> bool {
        matches!(self, ValueType::Tensor(_))
    }

    /// Dimensions in name order; empty for scalar and error types.
    pub fn dimensions(&self) -> &[Dimension] {
        match self {
            ValueType::Tensor(dims) => dims.as_slice(),
            ValueType::Error | ValueType::Scalar => &[],
        }
    }

    /// True for tensors whose dimensions are all mapped
    pub fn is_sparse(&self) -> bool {
        self.is_tensor() && self.dimensions().iter().all(Dimension::is_mapped)
    }

    /// True for tensors whose dimensions are all indexed
    pub fn is_dense(&self) -> bool {
        self.is_tensor() && self.dimensions().iter().all(Dimension::is_indexed)
    }

    pub fn count_indexed_dimensions(&self) -> usize {
        self.dimensions().iter().filter(|d| d.is_indexed()).count()
    }

    pub fn count_mapped_dimensions(&self) -> usize {
        self.dimensions().iter().filter(|d| d.is_mapped()).count()
    }

    pub fn indexed_dimensions(&self) -> Vec<&Dimension> {
        self.dimensions().iter().filter(|d| d.is_indexed()).collect()
    }

    pub fn mapped_dimensions(&self) -> Vec<&Dimension> {
        self.dimensions().iter().filter(|d| d.is_mapped()).collect()
    }

    /// Number of cells in one dense subspace: the product of all indexed
    /// extents. `None` if the product overflows.
    pub fn dense_subspace_size(&self) -> Option<usize> {
        self.dimensions()
            .iter()
            .filter(|d| d.is_indexed())
            .try_fold(1usize, |acc, d| acc.checked_mul(d.size()))
    }

    /// Position of the named dimension.
    pub fn dimension_index(&self, name: &str) -> Option<usize> {
        dimension_index(self.dimensions(), name)
    }

    pub fn find_dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimension_index(name).map(|idx| &self.dimensions()[idx])
    }

    pub fn dimension_names(&self) -> Vec<&str> {
        self.dimensions().iter().map(Dimension::name).collect()
    }

    /// Turn the error sentinel into a `TypeError` for callers that want `?`.
    pub fn check(self) -> Result<Self, TypeError> {
        match self {
            ValueType::Error => Err(TypeError::ErrorType),
            other => Ok(other),
        }
    }
}

pub(crate) fn dimension_index(dimensions: &[Dimension], name: &str) -> Option<usize> {
    dimensions.iter().position(|d| d.name == name)
}

/// Check a name-sorted dimension list.
fn verify_dimensions(dimensions: &[Dimension]) -> bool {
    for (i, dim) in dimensions.iter().enumerate() {
        if dim.is_empty_indexed() {
            return false;
        }
        if i > 0 && dimensions[i - 1].name == dim.name {
            return false;
        }
    }
    true
}
