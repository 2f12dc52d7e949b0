//! Core record traits.
//!
//! - [`DynRecord`]: object-safe access to a record's shape and field values
//! - [`Record`]: statically-typed records with a `'static` shape
//!
//! Both are implemented by `#[derive(Record)]`.

use std::{any::Any, fmt};

use super::{descriptor::RecordType, value::FieldValue};

// =============================================================================
// DynRecord - object-safe record access
// =============================================================================

/// A record whose fields can be enumerated and accessed by name.
///
/// This is what every operation in the crate works against. Field lookups are
/// by exact name; unknown names yield `None`/`false` rather than errors.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `DynRecord`",
    label = "this type does not describe its fields",
    note = "use `#[derive(Record)]` on a struct with named fields"
)]
pub trait DynRecord: Any + fmt::Debug {
    /// Returns the shape of this record.
    fn record_type(&self) -> &RecordType;

    /// Returns the value of the field called `name`.
    fn field(&self, name: &str) -> Option<&dyn FieldValue>;

    /// Returns the value of the field called `name` mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn FieldValue>;

    /// Clones the record behind a new box.
    fn clone_record(&self) -> Box<dyn DynRecord>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Overwrites the field called `name` with a clone of `value`.
    ///
    /// Returns `false` when there is no such field or when `value` has a
    /// different type than the field.
    fn set_field(&mut self, name: &str, value: &dyn FieldValue) -> bool {
        self.field_mut(name).is_some_and(|slot| slot.assign(value))
    }

    /// Resets the field called `name` to its zero value.
    ///
    /// Returns `false` when there is no such field.
    fn reset_field(&mut self, name: &str) -> bool {
        match self.field_mut(name) {
            Some(slot) => {
                slot.reset();
                true
            }
            None => false,
        }
    }

    /// Returns the JSON rendering of the field called `name`.
    ///
    /// Records opt in with `#[record(json)]`; the default renders nothing.
    #[cfg(feature = "json")]
    fn field_json(&self, name: &str) -> Option<serde_json::Value> {
        let _ = name;
        None
    }
}

// =============================================================================
// Record - statically-typed records
// =============================================================================

/// A concrete record type with a shape known at compile time.
pub trait Record: DynRecord + Clone {
    /// Returns the shape shared by every value of this type.
    fn descriptor() -> &'static RecordType;
}

impl Clone for Box<dyn DynRecord> {
    fn clone(&self) -> Self {
        self.clone_record()
    }
}

impl dyn DynRecord {
    pub fn is<R: Any>(&self) -> bool {
        self.as_any().is::<R>()
    }

    pub fn downcast_ref<R: Any>(&self) -> Option<&R> {
        self.as_any().downcast_ref::<R>()
    }

    pub fn downcast_mut<R: Any>(&mut self) -> Option<&mut R> {
        self.as_any_mut().downcast_mut::<R>()
    }

    /// Returns the value of `name` if it exists and has type `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.field(name)?.downcast_ref::<T>()
    }
}
