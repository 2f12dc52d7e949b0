//! Label matching for tag values.
//!
//! A tag value is a comma-separated label list. Labels are trimmed and compared
//! case-insensitively. An absent or empty tag is matched only by the empty
//! label `""`, which is how policies select untagged fields.

use super::tag_policy::TagPolicy;
use crate::record::FieldDescriptor;

/// Returns whether `tag_value` contains `label`.
///
/// ```rust
/// use structfilter::field_has_label;
///
/// assert!(field_has_label("private, Admin", "admin"));
/// assert!(field_has_label("", ""));
/// assert!(!field_has_label("public", ""));
/// // an empty segment is an empty label
/// assert!(field_has_label("public,", ""));
/// ```
pub fn field_has_label(tag_value: &str, label: &str) -> bool {
    if tag_value.is_empty() {
        return label.is_empty();
    }
    tag_value
        .split(',')
        .any(|segment| eq_ignore_case(segment.trim(), label))
}

/// Returns whether the field's tag under `key` contains `label`.
pub fn field_has_tag_label(field: &FieldDescriptor, key: &str, label: &str) -> bool {
    field_has_label(field.tag(key), label)
}

/// Returns whether `field` satisfies `keep` and does not satisfy `remove`.
///
/// `keep` requires, for every key, at least one matching label; an empty
/// `keep` is satisfied by every field. `remove` rejects the field when any
/// label under any key matches.
pub fn field_matches_policy(field: &FieldDescriptor, keep: &TagPolicy, remove: &TagPolicy) -> bool {
    let kept = keep.iter().all(|(key, labels)| matches_any(field, key, labels));
    kept && !remove.iter().any(|(key, labels)| matches_any(field, key, labels))
}

fn matches_any(field: &FieldDescriptor, key: &str, labels: &[String]) -> bool {
    labels
        .iter()
        .any(|label| field_has_tag_label(field, key, label))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Tag;

    const PUBLIC_USER: FieldDescriptor =
        FieldDescriptor::new("field3", "bool", &[Tag::new("filter", "public,user")]);
    const UNTAGGED: FieldDescriptor = FieldDescriptor::new("field4", "bool", &[]);
    const MULTI: FieldDescriptor = FieldDescriptor::new(
        "id",
        "String",
        &[Tag::new("filter", "public"), Tag::new("audit", "pii")],
    );

    #[test]
    fn labels_are_trimmed_and_case_insensitive() {
        assert!(field_has_label(" Public ,  USER", "user"));
        assert!(field_has_label("public, user", "PUBLIC"));
        assert!(!field_has_label("public", "pub"));
        assert!(field_has_label("ÄDMIN", "ädmin"));
    }

    #[test]
    fn empty_label_matches_only_missing_tags() {
        assert!(field_has_label("", ""));
        assert!(!field_has_label("", "public"));
        assert!(!field_has_label("public", ""));
        assert!(field_has_tag_label(&UNTAGGED, "filter", ""));
    }

    #[test]
    fn trailing_comma_yields_an_empty_label() {
        assert!(field_has_label("public,", ""));
        assert!(field_has_label("public, ,admin", ""));
        assert!(!field_has_label("public", ""));

        const TRAILING: FieldDescriptor =
            FieldDescriptor::new("Trailing", "String", &[Tag::new("filter", "public,")]);
        let keep = TagPolicy::filter([""]);
        assert!(field_matches_policy(&TRAILING, &keep, &TagPolicy::new()));
    }

    #[test]
    fn keep_requires_every_key() {
        let keep = TagPolicy::filter(["public"]).with("audit", ["pii"]);
        assert!(field_matches_policy(&MULTI, &keep, &TagPolicy::new()));
        assert!(!field_matches_policy(&PUBLIC_USER, &keep, &TagPolicy::new()));
    }

    #[test]
    fn empty_keep_is_vacuously_true() {
        assert!(field_matches_policy(&UNTAGGED, &TagPolicy::new(), &TagPolicy::new()));
    }

    #[test]
    fn key_with_no_labels_matches_nothing() {
        let keep = TagPolicy::filter(Vec::<String>::new());
        assert!(!field_matches_policy(&MULTI, &keep, &TagPolicy::new()));
        assert!(!field_matches_policy(&UNTAGGED, &keep, &TagPolicy::new()));
    }

    #[test]
    fn remove_rejects_on_any_match() {
        let keep = TagPolicy::filter(["public"]);
        let remove = TagPolicy::new().with("audit", ["secret", "pii"]);
        assert!(!field_matches_policy(&MULTI, &keep, &remove));
        assert!(field_matches_policy(&PUBLIC_USER, &keep, &remove));
    }
}
