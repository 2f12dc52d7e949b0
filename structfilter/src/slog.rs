//! Adapters for emitting filtered records through `slog`.
//!
//! [`FilteredJson`] is emitted as nested structured JSON. Only fields selected
//! by the policy reach the serializer.

use slog::{Key, Record as SlogRecord, Result as SlogResult, Serializer, Value as SlogValue};

pub use crate::json::FilteredJson;
use crate::{
    json::filtered_json,
    policy::Policy,
    record::{DynRecord, FilteredRecord},
};

impl SlogValue for FilteredJson {
    fn serialize(
        &self,
        record: &SlogRecord<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogValue for FilteredRecord {
    fn serialize(
        &self,
        _record: &SlogRecord<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_arguments(key, &format_args!("{self:?}"))
    }
}

/// Extension trait for logging the selected fields of a record with slog.
///
/// ## Example
/// ```ignore
/// use structfilter::{Policy, slog::SlogFilteredExt};
///
/// info!(logger, "answered"; "question" => question.slog_filtered(&Policy::keeping(["public"])));
/// ```
pub trait SlogFilteredExt: DynRecord {
    fn slog_filtered(&self, policy: &Policy) -> FilteredJson {
        filtered_json(self, policy)
    }
}

impl<T: DynRecord + ?Sized> SlogFilteredExt for T {}
