//! Projected record values.
//!
//! A [`FilteredRecord`] is the value produced by projection: it owns a record
//! type synthesized from the source's descriptors and one value per retained
//! field. Fields that were filtered out are absent, not zeroed.

use std::{any::Any, fmt};

use super::{
    descriptor::{FieldDescriptor, RecordType},
    traits::DynRecord,
    value::FieldValue,
};

/// A record value whose shape was built at run time.
///
/// The field order matches the source record's declaration order. Values are
/// independent clones of the source's values.
pub struct FilteredRecord {
    record_type: RecordType,
    values: Vec<Box<dyn FieldValue>>,
}

impl FilteredRecord {
    /// Pairs a record type with its values, which must follow the type's
    /// field order.
    pub(crate) fn from_parts(record_type: RecordType, values: Vec<Box<dyn FieldValue>>) -> Self {
        debug_assert_eq!(record_type.len(), values.len());
        Self {
            record_type,
            values,
        }
    }

    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.record_type.field_names()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.record_type.contains(name)
    }

    /// Returns the value of `name` if it exists and has type `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        let index = self.record_type.position(name)?;
        self.values[index].downcast_ref::<T>()
    }

    pub fn get_mut<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        let index = self.record_type.position(name)?;
        self.values[index].downcast_mut::<T>()
    }

    /// Iterates over `(descriptor, value)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldDescriptor, &dyn FieldValue)> {
        self.record_type
            .fields()
            .iter()
            .zip(self.values.iter().map(Box::as_ref))
    }
}

impl Clone for FilteredRecord {
    fn clone(&self) -> Self {
        Self {
            record_type: self.record_type.clone(),
            values: self.values.iter().map(|value| value.clone_value()).collect(),
        }
    }
}

impl fmt::Debug for FilteredRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct(self.record_type.name());
        for (field, value) in self.iter() {
            debug.field(field.name(), &value);
        }
        debug.finish()
    }
}

impl DynRecord for FilteredRecord {
    fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    fn field(&self, name: &str) -> Option<&dyn FieldValue> {
        let index = self.record_type.position(name)?;
        Some(self.values[index].as_ref())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn FieldValue> {
        let index = self.record_type.position(name)?;
        Some(self.values[index].as_mut())
    }

    fn clone_record(&self) -> Box<dyn DynRecord> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
