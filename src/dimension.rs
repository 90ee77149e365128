//! Tensor dimensions
//!
//! A dimension is a name plus a size discriminator. Indexed dimensions have a
//! fixed extent; mapped dimensions are keyed by labels and have no extent.

use std::fmt;

/// Size discriminator of a [`Dimension`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DimensionSize {
    /// Sparse dimension with unbounded labels
    Mapped,
    /// Dense dimension with the given extent
    Indexed(usize),
}

/// A named tensor dimension.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub name: String,
    pub size: DimensionSize,
}

impl Dimension {
    /// Create a dimension using the numeric convention: `0` means mapped,
    /// anything else is an indexed extent.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        if size == 0 {
            Self::mapped(name)
        } else {
            Self::indexed(name, size)
        }
    }

    pub fn mapped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: DimensionSize::Mapped,
        }
    }

    /// Create an indexed dimension. A zero extent is representable here but
    /// rejected when the dimension is used to build a type.
    pub fn indexed(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size: DimensionSize::Indexed(size),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric size: the extent for indexed dimensions, `0` for mapped ones.
    pub fn size(&self) -> usize {
        match self.size {
            DimensionSize::Mapped => 0,
            DimensionSize::Indexed(size) => size,
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.size, DimensionSize::Mapped)
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self.size, DimensionSize::Indexed(_))
    }

    /// Indexed with extent zero (never valid inside a type)
    pub(crate) fn is_empty_indexed(&self) -> bool {
        self.size == DimensionSize::Indexed(0)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            DimensionSize::Mapped => write!(f, "{}{{}}", self.name),
            DimensionSize::Indexed(size) => write!(f, "{}[{}]", self.name, size),
        }
    }
}
