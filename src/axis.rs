//! Deciding which values of an axis map are axes.
//!
//! An entry takes part in the product only when its value is a non-empty
//! ordered sequence. The [`AsAxis`] trait expresses that capability: sequence
//! types expose their elements, everything else exposes an empty slice and is
//! dropped from the enumeration.

use serde_json::Value;

/// A value that may be an ordered sequence of candidate values.
///
/// Returning an empty slice means "not an axis". There is no way to tell an
/// empty sequence apart from a non-sequence, and nothing needs to.
pub trait AsAxis {
    type Item;

    fn as_axis(&self) -> &[Self::Item];

    /// Whether this value contributes a dimension to the product.
    fn is_axis(&self) -> bool {
        !self.as_axis().is_empty()
    }
}

impl<T> AsAxis for Vec<T> {
    type Item = T;

    fn as_axis(&self) -> &[T] {
        self
    }
}

impl<T> AsAxis for [T] {
    type Item = T;

    fn as_axis(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AsAxis for [T; N] {
    type Item = T;

    fn as_axis(&self) -> &[T] {
        self
    }
}

impl<A: AsAxis> AsAxis for Option<A> {
    type Item = A::Item;

    fn as_axis(&self) -> &[A::Item] {
        match self {
            Some(axis) => axis.as_axis(),
            None => &[],
        }
    }
}

impl<A: AsAxis + ?Sized> AsAxis for &A {
    type Item = A::Item;

    fn as_axis(&self) -> &[A::Item] {
        (**self).as_axis()
    }
}

impl AsAxis for Value {
    type Item = Value;

    fn as_axis(&self) -> &[Value] {
        match self {
            Value::Array(values) => values,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AsAxis;
    use serde_json::json;

    #[test]
    fn sequences() {
        assert_eq!(vec![1, 2, 3].as_axis(), &[1, 2, 3]);
        assert_eq!(["a"].as_axis(), &["a"]);
        assert!(Vec::<u8>::new().as_axis().is_empty());
        assert!(!Vec::<u8>::new().is_axis());
    }

    #[test]
    fn options() {
        assert!(!None::<Vec<u8>>.is_axis());
        assert_eq!(Some(vec![4]).as_axis(), &[4]);
    }

    #[test]
    fn json_values() {
        assert_eq!(json!([1, "x"]).as_axis().len(), 2);
        assert!(!json!([]).is_axis());
        assert!(!json!(null).is_axis());
        assert!(!json!("this is not an array").is_axis());
        assert!(!json!(3.5).is_axis());
        assert!(!json!({"a": 0}).is_axis());
    }

    #[test]
    fn references() {
        let axis = vec![true, false];
        let borrowed: &Vec<bool> = &axis;
        assert_eq!(borrowed.as_axis(), &[true, false]);
    }
}
