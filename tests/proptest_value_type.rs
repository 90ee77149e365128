//! Property tests for the value type algebra
//!
//! Tests algebraic properties of the type operations using proptest.


use generators::{
    arb_consistent_triple, arb_raw_dimensions, arb_shuffled_dimensions, arb_tensor_type,
    arb_valid_type, arb_value_type, check_type_invariants, FRESH,
};
use proptest::prelude::*;
use valtype::{Dimension, ValueType};

// ============================================================================
// Construction
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    /// Construction always yields a normalized type or the error type
    #[test]
    fn construction_is_normalized(dims in arb_raw_dimensions()) {
        let ty = ValueType::tensor_type(dims);
        prop_assert!(check_type_invariants(&ty).is_ok(), "{:?}", check_type_invariants(&ty));
    }

    /// Construction rejects exactly the lists with duplicate names or
    /// zero-sized indexed dimensions
    #[test]
    fn construction_rejects_invalid(dims in arb_raw_dimensions()) {
        let mut names: Vec<&str> = dims.iter().map(Dimension::name).collect();
        names.sort_unstable();
        let has_duplicate = names.windows(2).any(|pair| pair[0] == pair[1]);
        let has_zero = dims.iter().any(|d| d.is_indexed() && d.size() == 0);
        let ty = ValueType::tensor_type(dims.clone());
        prop_assert_eq!(ty.is_error(), has_duplicate || has_zero);
        prop_assert_eq!(ty.is_scalar(), dims.is_empty());
    }

    /// Input order does not matter
    #[test]
    fn construction_ignores_order((dims, shuffled) in arb_shuffled_dimensions()) {
        prop_assert_eq!(ValueType::tensor_type(dims), ValueType::tensor_type(shuffled));
    }

    /// Rebuilding from a type's own dimensions yields the same type
    #[test]
    fn construction_is_idempotent(ty in arb_tensor_type()) {
        prop_assert_eq!(ValueType::tensor_type(ty.dimensions().to_vec()), ty.clone());
        let names = ty.dimension_names();
        prop_assert_eq!(ty.rename(names.as_slice(), names.as_slice()), ty);
    }

    /// Dimension names are sorted
    #[test]
    fn dimension_names_sorted(ty in arb_value_type()) {
        let names = ty.dimension_names();
        prop_assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    /// Every dimension is found at its own position
    #[test]
    fn dimension_index_matches_position(ty in arb_value_type()) {
        for (idx, dim) in ty.dimensions().iter().enumerate() {
            prop_assert_eq!(ty.dimension_index(dim.name()), Some(idx));
        }
        prop_assert_eq!(ty.dimension_index(FRESH), None);
    }

    /// Classification is exclusive and matches the dimensions
    #[test]
    fn classification(ty in arb_value_type()) {
        prop_assert!(!(ty.is_dense() && ty.is_sparse()));
        if ty.is_tensor() {
            prop_assert_eq!(ty.is_dense(), ty.count_mapped_dimensions() == 0);
            prop_assert_eq!(ty.is_sparse(), ty.count_indexed_dimensions() == 0);
        } else {
            prop_assert!(!ty.is_dense() && !ty.is_sparse());
        }
    }
}

// ============================================================================
// Join
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    /// The scalar type is the identity of join
    #[test]
    fn join_identity(ty in arb_value_type()) {
        prop_assert_eq!(ValueType::join(&ValueType::Scalar, &ty), ty.clone());
        prop_assert_eq!(ValueType::join(&ty, &ValueType::Scalar), ty);
    }

    /// Join is commutative, including failures
    #[test]
    fn join_commutative(a in arb_value_type(), b in arb_value_type()) {
        prop_assert_eq!(ValueType::join(&a, &b), ValueType::join(&b, &a));
    }

    /// Join is associative over consistent types
    #[test]
    fn join_associative_consistent((a, b, c) in arb_consistent_triple()) {
        let left = ValueType::join(&ValueType::join(&a, &b), &c);
        let right = ValueType::join(&a, &ValueType::join(&b, &c));
        prop_assert!(!left.is_error());
        prop_assert_eq!(left, right);
    }

    /// Join is associative for arbitrary types, including failures
    #[test]
    fn join_associative(a in arb_value_type(), b in arb_value_type(), c in arb_value_type()) {
        let left = ValueType::join(&ValueType::join(&a, &b), &c);
        let right = ValueType::join(&a, &ValueType::join(&b, &c));
        prop_assert_eq!(left, right);
    }

    /// A successful join contains every operand dimension
    #[test]
    fn join_contains_operands(a in arb_valid_type(), b in arb_valid_type()) {
        let joined = ValueType::join(&a, &b);
        prop_assert!(check_type_invariants(&joined).is_ok());
        if !joined.is_error() {
            for dim in a.dimensions().iter().chain(b.dimensions()) {
                prop_assert_eq!(joined.find_dimension(dim.name()), Some(dim));
            }
        }
    }

    /// Join of a type with itself is the type
    #[test]
    fn join_idempotent(ty in arb_value_type()) {
        prop_assert_eq!(ValueType::join(&ty, &ty), ty);
    }
}

// ============================================================================
// Reduce and Rename
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    /// Reducing no dimensions yields the scalar type
    #[test]
    fn reduce_nothing_is_scalar(ty in arb_valid_type()) {
        prop_assert_eq!(ty.reduce::<&str>(&[]), ValueType::Scalar);
    }

    /// Reducing all dimensions yields the scalar type
    #[test]
    fn reduce_everything_is_scalar(ty in arb_tensor_type()) {
        prop_assert_eq!(ty.reduce(ty.dimension_names().as_slice()), ValueType::Scalar);
    }

    /// Reducing an unknown dimension fails
    #[test]
    fn reduce_unknown_fails(ty in arb_valid_type()) {
        prop_assert!(ty.reduce(&[FRESH]).is_error());
    }

    /// Reducing one dimension removes exactly that dimension
    #[test]
    fn reduce_one(ty in arb_tensor_type(), pick in any::<prop::sample::Index>()) {
        let dims = ty.dimensions();
        let removed = &dims[pick.index(dims.len())];
        let reduced = ty.reduce(&[removed.name()]);
        prop_assert_eq!(reduced.dimensions().len(), dims.len() - 1);
        prop_assert_eq!(reduced.dimension_index(removed.name()), None);
    }

    /// Renaming to a fresh name and back is the identity
    #[test]
    fn rename_roundtrip(ty in arb_tensor_type(), pick in any::<prop::sample::Index>()) {
        let dims = ty.dimensions();
        let name = dims[pick.index(dims.len())].name().to_string();
        let renamed = ty.rename(&[name.as_str()], &[FRESH]);
        prop_assert!(!renamed.is_error());
        prop_assert!(!renamed.dimension_names().contains(&name.as_str()));
        prop_assert_eq!(renamed.rename(&[FRESH], &[name.as_str()]), ty);
    }

    /// Renaming a name the type does not have fails
    #[test]
    fn rename_unmatched_fails(ty in arb_value_type()) {
        prop_assert!(ty.rename(&[FRESH], &["other"]).is_error());
    }
}

// ============================================================================
// Concat and Either
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    /// Concat adds the extents along the axis, counting absence as one
    #[test]
    fn concat_sizes(
        a in arb_valid_type(),
        b in arb_valid_type(),
        axis in prop::sample::select(generators::NAMES),
    ) {
        let result = ValueType::concat(&a, &b, axis);
        prop_assert!(check_type_invariants(&result).is_ok());

        let mapped_axis = [&a, &b]
            .iter()
            .any(|t| t.find_dimension(axis).is_some_and(Dimension::is_mapped));
        let others_agree =
            !ValueType::join(&a.reduce_if_present(axis), &b.reduce_if_present(axis)).is_error();

        if mapped_axis || !others_agree {
            prop_assert!(result.is_error());
        } else {
            let extent = |t: &ValueType| t.find_dimension(axis).map_or(1, Dimension::size);
            let dim = result.find_dimension(axis);
            prop_assert_eq!(dim, Some(&Dimension::indexed(axis, extent(&a) + extent(&b))));
        }
    }

    /// Either accepts exactly identical types
    #[test]
    fn either_strict(a in arb_value_type(), b in arb_value_type()) {
        let result = ValueType::either(&a, &b);
        if a == b {
            prop_assert_eq!(result, a);
        } else {
            prop_assert!(result.is_error());
        }
    }
}

// ============================================================================
// Error Absorption
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every operation with an error operand yields the error type
    #[test]
    fn error_absorbs(ty in arb_value_type(), axis in prop::sample::select(generators::NAMES)) {
        let error = ValueType::Error;
        prop_assert!(ValueType::join(&error, &ty).is_error());
        prop_assert!(ValueType::join(&ty, &error).is_error());
        prop_assert!(ValueType::concat(&error, &ty, axis).is_error());
        prop_assert!(ValueType::concat(&ty, &error, axis).is_error());
        prop_assert!(ValueType::either(&error, &ty).is_error());
        prop_assert!(ValueType::either(&ty, &error).is_error());
        prop_assert!(error.reduce::<&str>(&[]).is_error());
        prop_assert!(error.reduce(&[axis]).is_error());
        prop_assert!(error.rename(&[axis], &[FRESH]).is_error());
    }
}

/// Reduce away `name` if the type has it
trait ReduceIfPresent {
    fn reduce_if_present(&self, name: &str) -> ValueType;
}

impl ReduceIfPresent for ValueType {
    fn reduce_if_present(&self, name: &str) -> ValueType {
        if self.dimension_index(name).is_some() {
            self.reduce(&[name])
        } else {
            self.clone()
        }
    }
}
