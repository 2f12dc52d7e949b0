//! Projection: building a sparse view of a record.
//!
//! The projected type keeps the source's descriptors for every selected field,
//! in declaration order. Values are cloned, so the view never aliases owned
//! source data.

use crate::{
    diag::debug_event,
    policy::{FILTER_TAG, Policy, TagPolicy},
    record::{DynRecord, FieldValue, FilteredRecord, RecordType},
};

/// Synthesizes the record type containing the fields of `record_type` selected
/// by `policy`.
///
/// The same input type and policy always yield equal record types.
pub fn derive_record_type(record_type: &RecordType, policy: &Policy) -> RecordType {
    let fields = record_type
        .fields()
        .iter()
        .filter(|field| policy.matches(field))
        .copied()
        .collect();
    RecordType::from_fields(record_type.name(), fields)
}

/// Projects `source` onto the fields selected by `policy`.
///
/// ```rust
/// use structfilter::{Policy, Record, project_record};
///
/// #[derive(Clone, Debug, Record)]
/// struct Account {
///     #[tags(filter = "public")]
///     handle: String,
///     #[tags(filter = "admin")]
///     email: String,
/// }
///
/// let account = Account { handle: "ada".into(), email: "ada@example.com".into() };
/// let view = project_record(&account, &Policy::keeping(["public"]));
/// assert_eq!(view.get::<String>("handle").unwrap(), "ada");
/// assert!(!view.contains("email"));
/// ```
pub fn project_record<R: DynRecord + ?Sized>(source: &R, policy: &Policy) -> FilteredRecord {
    let record_type = source.record_type();
    let (fields, values): (Vec<_>, Vec<Box<dyn FieldValue>>) = record_type
        .fields()
        .iter()
        .filter(|field| policy.matches(field))
        .filter_map(|field| {
            source
                .field(field.name())
                .map(|value| (*field, value.clone_value()))
        })
        .unzip();
    debug_event!(
        record = record_type.name(),
        total = record_type.len(),
        kept = fields.len(),
        "projected record"
    );
    FilteredRecord::from_parts(RecordType::from_fields(record_type.name(), fields), values)
}

/// Projects `source` using keep and remove label lists on the `filter` tag.
///
/// Both lists are always applied: an empty `keep` list selects nothing.
pub fn project_record_with<R, S>(source: &R, keep: &[S], remove: &[S]) -> FilteredRecord
where
    R: DynRecord + ?Sized,
    S: AsRef<str>,
{
    let policy = Policy::new(
        TagPolicy::new().with(FILTER_TAG, keep.iter().map(AsRef::as_ref)),
        TagPolicy::new().with(FILTER_TAG, remove.iter().map(AsRef::as_ref)),
    );
    project_record(source, &policy)
}
