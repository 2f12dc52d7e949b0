//! Field classification over record types.
//!
//! Classification reads metadata only; no field value is touched.

use std::collections::BTreeMap;

use crate::{
    diag::debug_event,
    policy::{Policy, TagPolicy, field_matches_policy},
    record::{DynRecord, RecordType},
};

/// How classified field names are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NameCase {
    /// Names as declared.
    #[default]
    Preserve,
    /// Names lower-cased.
    Lower,
}

impl NameCase {
    fn apply(self, name: &str) -> String {
        match self {
            Self::Preserve => name.to_owned(),
            Self::Lower => name.to_lowercase(),
        }
    }
}

/// Returns the names of the fields of `record_type` that satisfy `keep`, in
/// declaration order.
///
/// ```rust
/// use structfilter::{FieldDescriptor, NameCase, RecordType, Tag, TagPolicy,
///     field_names_matching_policy};
///
/// static SHAPE: RecordType = RecordType::new("Shape", &[
///     FieldDescriptor::new("Id", "String", &[Tag::new("filter", "public")]),
///     FieldDescriptor::new("Secret", "String", &[]),
/// ]);
///
/// let names = field_names_matching_policy(&SHAPE, &TagPolicy::filter(["public"]), NameCase::Lower);
/// assert_eq!(names, ["id"]);
/// ```
pub fn field_names_matching_policy(
    record_type: &RecordType,
    keep: &TagPolicy,
    case: NameCase,
) -> Vec<String> {
    collect_names(record_type, keep, &TagPolicy::new(), case)
}

/// Like [`field_names_matching_policy`], also excluding fields that satisfy the
/// policy's remove half.
pub fn field_names_matching(record_type: &RecordType, policy: &Policy, case: NameCase) -> Vec<String> {
    collect_names(record_type, policy.keep(), policy.remove(), case)
}

fn collect_names(
    record_type: &RecordType,
    keep: &TagPolicy,
    remove: &TagPolicy,
    case: NameCase,
) -> Vec<String> {
    let names: Vec<String> = record_type
        .fields()
        .iter()
        .filter(|field| field_matches_policy(field, keep, remove))
        .map(|field| case.apply(field.name()))
        .collect();
    debug_event!(
        record = record_type.name(),
        total = record_type.len(),
        matched = names.len(),
        "classified record fields"
    );
    names
}

/// Returns every field name of `record`, in declaration order.
pub fn all_field_names<R: DynRecord + ?Sized>(record: &R) -> Vec<&'static str> {
    record.record_type().field_names().collect()
}

/// Returns a map from field name to declared type name.
pub fn all_field_names_and_types<R: DynRecord + ?Sized>(
    record: &R,
) -> BTreeMap<&'static str, &'static str> {
    record
        .record_type()
        .fields()
        .iter()
        .map(|field| (field.name(), field.type_name()))
        .collect()
}
