//! JSON rendering of selected fields.
//!
//! Records opt in with `#[record(json)]`, which renders each field through its
//! `Serialize` impl. Fields whose record does not render JSON are omitted.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::{diag::debug_event, policy::Policy, record::DynRecord};

/// A JSON object holding the fields of a record selected by a policy.
#[derive(Clone, Debug, PartialEq)]
pub struct FilteredJson {
    value: JsonValue,
}

impl FilteredJson {
    pub fn new(value: JsonValue) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    pub fn into_value(self) -> JsonValue {
        self.value
    }
}

impl fmt::Display for FilteredJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl Serialize for FilteredJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Renders the fields of `record` selected by `policy` as a JSON object.
pub fn filtered_json<R: DynRecord + ?Sized>(record: &R, policy: &Policy) -> FilteredJson {
    let record_type = record.record_type();
    let object: Map<String, JsonValue> = record_type
        .fields()
        .iter()
        .filter(|field| policy.matches(field))
        .filter_map(|field| {
            record
                .field_json(field.name())
                .map(|value| (field.name().to_owned(), value))
        })
        .collect();
    debug_event!(
        record = record_type.name(),
        rendered = object.len(),
        "rendered filtered json"
    );
    FilteredJson::new(JsonValue::Object(object))
}

/// Extension trait rendering a record's selected fields as JSON.
///
/// ```rust
/// use structfilter::{FilteredJsonExt, Policy, Record};
///
/// #[derive(Clone, Debug, Default, Record)]
/// #[record(json)]
/// struct Player {
///     #[tags(filter = "public")]
///     name: String,
///     #[tags(filter = "admin")]
///     ip: String,
/// }
///
/// let player = Player { name: "ada".into(), ip: "10.0.0.1".into() };
/// let json = player.filtered_json(&Policy::keeping(["public"]));
/// assert_eq!(json.to_string(), r#"{"name":"ada"}"#);
/// ```
pub trait FilteredJsonExt: DynRecord {
    fn filtered_json(&self, policy: &Policy) -> FilteredJson {
        filtered_json(self, policy)
    }
}

impl<T: DynRecord + ?Sized> FilteredJsonExt for T {}
