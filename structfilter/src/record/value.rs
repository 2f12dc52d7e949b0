//! Type-erased field values.

use std::{any::Any, fmt};

/// A field value that can be inspected, copied and reset without knowing its
/// concrete type.
///
/// Blanket-implemented for every `T: Any + Clone + Default + Debug`, so any
/// such type can be used as a record field. The zero value of a field is its
/// type's `Default`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a record field",
    note = "record fields must be `Clone + Default + Debug + 'static`"
)]
pub trait FieldValue: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clones the value into a new box.
    fn clone_value(&self) -> Box<dyn FieldValue>;

    /// Overwrites `self` with a clone of `value` if both have the same type.
    ///
    /// Returns `false`, leaving `self` untouched, on a type mismatch.
    fn assign(&mut self, value: &dyn FieldValue) -> bool;

    /// Resets the value to its zero value in place.
    fn reset(&mut self);

    /// The concrete Rust type name, as reported by `std::any::type_name`.
    fn value_type_name(&self) -> &'static str;
}

impl<T> FieldValue for T
where
    T: Any + Clone + Default + fmt::Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_value(&self) -> Box<dyn FieldValue> {
        Box::new(self.clone())
    }

    fn assign(&mut self, value: &dyn FieldValue) -> bool {
        match value.as_any().downcast_ref::<T>() {
            Some(value) => {
                self.clone_from(value);
                true
            }
            None => false,
        }
    }

    fn reset(&mut self) {
        *self = T::default();
    }

    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl dyn FieldValue {
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Whether both values have the identical concrete type.
    pub fn same_type(&self, other: &dyn FieldValue) -> bool {
        self.as_any().type_id() == other.as_any().type_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_copies_only_between_identical_types() {
        let mut target: Box<dyn FieldValue> = Box::new(String::from("old"));
        assert!(target.assign(&String::from("new")));
        assert_eq!(target.downcast_ref::<String>().unwrap(), "new");

        assert!(!target.assign(&7_i32));
        assert_eq!(target.downcast_ref::<String>().unwrap(), "new");
    }

    #[test]
    fn reset_uses_default() {
        let mut value: Box<dyn FieldValue> = Box::new(vec![1_u8, 2, 3]);
        value.reset();
        assert!(value.downcast_ref::<Vec<u8>>().unwrap().is_empty());
    }

    #[test]
    fn same_type_compares_concrete_types() {
        let a: &dyn FieldValue = &1_i64;
        let b: &dyn FieldValue = &2_i64;
        let c: &dyn FieldValue = &2_i32;
        assert!(a.same_type(b));
        assert!(!a.same_type(c));
        assert!(a.is::<i64>());
        assert_eq!(c.value_type_name(), "i32");
    }

    #[test]
    fn clone_value_is_independent() {
        let original = String::from("shared");
        let mut copy = original.clone_value();
        copy.downcast_mut::<String>().unwrap().push('!');
        assert_eq!(original, "shared");
        assert_eq!(copy.downcast_ref::<String>().unwrap(), "shared!");
    }
}
