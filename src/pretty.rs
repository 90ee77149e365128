//! Pretty-printer for types and type expressions
//!
//! `to_spec` renders the canonical single-line spec that `from_spec` reads
//! back. `describe` renders a multi-line summary for interactive use.

use std::fmt;

use crate::ast::{TypeExpr, TypeSpec};
use crate::dimension::Dimension;
use crate::value_type::ValueType;

fn write_dimensions(f: &mut fmt::Formatter<'_>, dims: &[Dimension]) -> fmt::Result {
    write!(f, "tensor(")?;
    for (i, dim) in dims.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", dim)?;
    }
    write!(f, ")")
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Error => write!(f, "error"),
            ValueType::Scalar => write!(f, "double"),
            ValueType::Tensor(dims) => write_dimensions(f, dims),
        }
    }
}

impl ValueType {
    /// Canonical spec string, e.g. `tensor(x[3],y{})`
    pub fn to_spec(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Error => write!(f, "error"),
            TypeSpec::Double => write!(f, "double"),
            TypeSpec::Tensor(dims) => write_dimensions(f, dims),
        }
    }
}

fn write_names(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    if names.len() == 1 {
        write!(f, "{}", names[0])
    } else {
        write!(f, "({})", names.join(","))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Type(spec) => write!(f, "{}", spec),
            TypeExpr::Join(lhs, rhs) => write!(f, "join({},{})", lhs, rhs),
            TypeExpr::Either(lhs, rhs) => write!(f, "either({},{})", lhs, rhs),
            TypeExpr::Concat(lhs, rhs, dim) => write!(f, "concat({},{},{})", lhs, rhs, dim),
            TypeExpr::Reduce(inner, dims) => {
                write!(f, "reduce({}", inner)?;
                for dim in dims {
                    write!(f, ",{}", dim)?;
                }
                write!(f, ")")
            }
            TypeExpr::Rename { inner, from, to } => {
                write!(f, "rename({},", inner)?;
                write_names(f, from)?;
                write!(f, ",")?;
                write_names(f, to)?;
                write!(f, ")")
            }
        }
    }
}

/// Pretty-print configuration
pub struct PrettyConfig {
    pub indent: usize,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// A pretty-printer with indentation tracking
pub struct Pretty {
    output: String,
    indent_level: usize,
    config: PrettyConfig,
}

impl Default for Pretty {
    fn default() -> Self {
        Self::new()
    }
}

impl Pretty {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config: PrettyConfig::default(),
        }
    }

    pub fn with_config(config: PrettyConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn indent(&mut self) {
        for _ in 0..(self.indent_level * self.config.indent) {
            self.output.push(' ');
        }
    }

    fn line(&mut self, s: &str) {
        self.indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn inc_indent(&mut self) {
        self.indent_level += 1;
    }

    fn dec_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }
}

/// Short classification: `dense`, `sparse`, `mixed`, `scalar` or `error`
pub fn classify(ty: &ValueType) -> &'static str {
    match ty {
        ValueType::Error => "error",
        ValueType::Scalar => "scalar",
        ValueType::Tensor(_) if ty.is_dense() => "dense",
        ValueType::Tensor(_) if ty.is_sparse() => "sparse",
        ValueType::Tensor(_) => "mixed",
    }
}

impl Pretty {
    pub fn value_type(&mut self, ty: &ValueType) {
        self.line(&ty.to_spec());
        self.inc_indent();
        self.line(&format!("kind: {} ({})", ty.kind(), classify(ty)));
        if ty.is_tensor() {
            self.line("dimensions:");
            self.inc_indent();
            for (idx, dim) in ty.dimensions().iter().enumerate() {
                let size = if dim.is_mapped() {
                    "mapped".to_string()
                } else {
                    format!("indexed [{}]", dim.size())
                };
                self.line(&format!("{}: {} {}", idx, dim.name(), size));
            }
            self.dec_indent();
            match ty.dense_subspace_size() {
                Some(size) => self.line(&format!("dense subspace size: {}", size)),
                None => self.line("dense subspace size: overflow"),
            }
        }
        self.dec_indent();
    }
}

/// Multi-line description of a type
pub fn describe(ty: &ValueType) -> String {
    let mut pretty = Pretty::new();
    pretty.value_type(ty);
    pretty.finish()
}
