//! Copying records and resetting fields by name.

use crate::{
    diag::debug_event,
    policy::TagPolicy,
    record::{DynRecord, Record},
};

use super::classify::{NameCase, field_names_matching_policy};

/// Returns an independent copy of `record`.
///
/// Owned field data is cloned. Shared handles such as `Rc` and `Arc` are
/// cloned as handles and keep pointing at the same allocation.
pub fn copy_record<R: Record>(record: &R) -> R {
    record.clone()
}

/// Returns an independent copy of an erased record, boxed as the same
/// concrete type.
pub fn copy_dyn_record(record: &dyn DynRecord) -> Box<dyn DynRecord> {
    record.clone_record()
}

/// Resets every field of `record` named in `names` to its zero value.
///
/// Unknown names are ignored. Returns the number of fields reset; a name
/// listed twice counts twice.
pub fn reset_fields_by_name<R, S>(record: &mut R, names: &[S]) -> usize
where
    R: DynRecord + ?Sized,
    S: AsRef<str>,
{
    let reset = names
        .iter()
        .filter(|name| record.reset_field(name.as_ref()))
        .count();
    debug_event!(
        record = record.record_type().name(),
        requested = names.len(),
        reset,
        "reset fields by name"
    );
    reset
}

/// Returns a copy of `record` with every field satisfying `keep` reset to its
/// zero value. `record` itself is left untouched.
///
/// ```rust
/// use structfilter::{Record, TagPolicy, empty_filtered_fields};
///
/// #[derive(Clone, Debug, Record)]
/// struct Question {
///     #[tags(filter = "public")]
///     text: String,
///     #[tags(filter = "spoiler")]
///     answer: String,
/// }
///
/// let question = Question { text: "2 + 2?".into(), answer: "4".into() };
/// let blanked = empty_filtered_fields(&question, &TagPolicy::filter(["spoiler"]));
/// assert_eq!(blanked.answer, "");
/// assert_eq!(question.answer, "4");
/// ```
pub fn empty_filtered_fields<R: Record>(record: &R, keep: &TagPolicy) -> R {
    let names = field_names_matching_policy(record.record_type(), keep, NameCase::Preserve);
    let mut copy = copy_record(record);
    reset_fields_by_name(&mut copy, &names);
    copy
}

/// Erased form of [`empty_filtered_fields`].
pub fn empty_filtered_fields_dyn(record: &dyn DynRecord, keep: &TagPolicy) -> Box<dyn DynRecord> {
    let names = field_names_matching_policy(record.record_type(), keep, NameCase::Preserve);
    let mut copy = copy_dyn_record(record);
    reset_fields_by_name(copy.as_mut(), &names);
    copy
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Debug, Default, Record)]
    struct Session {
        #[tags(filter = "public")]
        user: String,
        #[tags(filter = "secret")]
        token: String,
        #[tags(filter = "secret, admin")]
        scopes: Vec<String>,
        shared: Rc<String>,
    }

    fn session() -> Session {
        Session {
            user: "ada".into(),
            token: "t-123".into(),
            scopes: vec!["read".into(), "write".into()],
            shared: Rc::new("cache".into()),
        }
    }

    #[test]
    fn copy_is_independent_for_owned_data() {
        let original = session();
        let mut copy = copy_record(&original);
        copy.scopes.push("admin".into());
        assert_eq!(original.scopes.len(), 2);
        assert!(Rc::ptr_eq(&original.shared, &copy.shared));
    }

    #[test]
    fn reset_ignores_unknown_names() {
        let mut record = session();
        let reset = reset_fields_by_name(&mut record, &["token", "missing"]);
        assert_eq!(reset, 1);
        assert_eq!(record.token, "");
        assert_eq!(record.user, "ada");
    }

    #[test]
    fn empty_filtered_fields_leaves_source_untouched() {
        let original = session();
        let blanked = empty_filtered_fields(&original, &TagPolicy::filter(["secret"]));
        assert_eq!(blanked.token, "");
        assert!(blanked.scopes.is_empty());
        assert_eq!(blanked.user, "ada");
        assert_eq!(original.token, "t-123");
    }

    #[test]
    fn empty_filtered_fields_is_idempotent() {
        let keep = TagPolicy::filter(["admin"]);
        let once = empty_filtered_fields(&session(), &keep);
        let twice = empty_filtered_fields(&once, &keep);
        assert_eq!(format!("{once:?}"), format!("{twice:?}"));
    }

    #[test]
    fn dyn_variant_keeps_the_concrete_type() {
        let original = session();
        let blanked = empty_filtered_fields_dyn(&original, &TagPolicy::filter(["public"]));
        let blanked = blanked.downcast_ref::<Session>().unwrap();
        assert_eq!(blanked.user, "");
        assert_eq!(blanked.token, "t-123");
    }
}
