//! Operations over value types.
//!
//! All operations are total: a failed type check yields `ValueType::Error`,
//! and an error operand always yields `ValueType::Error`.

use super::{dimension_index, ValueType};
use crate::dimension::{Dimension, DimensionSize};

/// Sorted merge of two name-sorted dimension lists.
///
/// Names present on one side are copied. Names present on both sides must be
/// equal dimensions, except `axis`, which is taken from `lhs` unchecked.
/// Returns `None` on a mismatch.
fn merge_dimensions(lhs: &[Dimension], rhs: &[Dimension], axis: Option<&str>) -> Option<Vec<Dimension>> {
    let mut result = Vec::with_capacity(lhs.len() + rhs.len());
    let mut rhs_iter = rhs.iter().peekable();
    for dim in lhs {
        while let Some(other) = rhs_iter.next_if(|other| other.name < dim.name) {
            result.push(other.clone());
        }
        match rhs_iter.next_if(|other| other.name == dim.name) {
            Some(other) if dim == other || axis == Some(dim.name.as_str()) => {
                result.push(dim.clone())
            }
            Some(_) => return None,
            None => result.push(dim.clone()),
        }
    }
    result.extend(rhs_iter.cloned());
    Some(result)
}

impl ValueType {
    /// Remove the named dimensions.
    ///
    /// An empty name list reduces over everything and yields the scalar type.
    /// Every name must match exactly one dimension.
    pub fn reduce<S: AsRef<str>>(&self, dimensions: &[S]) -> ValueType {
        if self.is_error() {
            return ValueType::Error;
        }
        if dimensions.is_empty() {
            return ValueType::Scalar;
        }
        let (removed, kept): (Vec<&Dimension>, Vec<&Dimension>) = self
            .dimensions()
            .iter()
            .partition(|dim| dimensions.iter().any(|name| name.as_ref() == dim.name));
        if removed.len() != dimensions.len() {
            return ValueType::Error;
        }
        ValueType::tensor_type(kept.into_iter().cloned().collect())
    }

    /// Rename dimensions: `from[i]` becomes `to[i]`.
    ///
    /// Every name in `from` must match a dimension of this type.
    pub fn rename<S: AsRef<str>, T: AsRef<str>>(&self, from: &[S], to: &[T]) -> ValueType {
        if from.is_empty() || from.len() != to.len() {
            return ValueType::Error;
        }
        let mut matched = 0usize;
        let renamed: Vec<Dimension> = self
            .dimensions()
            .iter()
            .map(|dim| match from.iter().position(|name| name.as_ref() == dim.name) {
                Some(i) => {
                    matched += 1;
                    Dimension {
                        name: to[i].as_ref().to_string(),
                        size: dim.size,
                    }
                }
                None => dim.clone(),
            })
            .collect();
        if matched != from.len() {
            return ValueType::Error;
        }
        ValueType::tensor_type(renamed)
    }

    /// Type of combining two values cell by cell.
    ///
    /// The scalar type is the identity. Shared dimensions must be identical.
    pub fn join(lhs: &ValueType, rhs: &ValueType) -> ValueType {
        match (lhs, rhs) {
            (ValueType::Error, _) | (_, ValueType::Error) => ValueType::Error,
            (ValueType::Scalar, other) | (other, ValueType::Scalar) => other.clone(),
            (ValueType::Tensor(a), ValueType::Tensor(b)) => match merge_dimensions(a, b, None) {
                Some(dims) => ValueType::tensor_type(dims),
                None => ValueType::Error,
            },
        }
    }

    /// Type of concatenating two values along `dimension`.
    ///
    /// A side without the dimension contributes a single slice. The
    /// dimension must be indexed wherever it exists; all other dimensions
    /// unify as in [`ValueType::join`].
    pub fn concat(lhs: &ValueType, rhs: &ValueType, dimension: &str) -> ValueType {
        if lhs.is_error() || rhs.is_error() {
            return ValueType::Error;
        }
        let Some(mut dims) = merge_dimensions(lhs.dimensions(), rhs.dimensions(), Some(dimension))
        else {
            return ValueType::Error;
        };
        let lhs_dim = lhs.find_dimension(dimension);
        let rhs_dim = rhs.find_dimension(dimension);
        if lhs_dim.is_some_and(Dimension::is_mapped) || rhs_dim.is_some_and(Dimension::is_mapped) {
            return ValueType::Error;
        }
        let extent = |dim: Option<&Dimension>| dim.map_or(1, Dimension::size);
        let Some(size) = extent(lhs_dim).checked_add(extent(rhs_dim)) else {
            return ValueType::Error;
        };
        match dimension_index(&dims, dimension) {
            Some(idx) => dims[idx].size = DimensionSize::Indexed(size),
            None => dims.push(Dimension::indexed(dimension, size)),
        }
        ValueType::tensor_type(dims)
    }

    /// Common type of two branches; they must be identical.
    pub fn either(one: &ValueType, other: &ValueType) -> ValueType {
        if one != other {
            return ValueType::Error;
        }
        one.clone()
    }
}
