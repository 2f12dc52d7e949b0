//! Tag policies and the label evaluator.
//!
//! This module provides:
//!
//! - **Labels** (`labels`): predicates deciding whether a field's tag carries a
//!   label, and whether a field satisfies a keep/remove policy.
//!
//! - **Policies** (`tag_policy`): [`TagPolicy`] (tag key → labels) and
//!   [`Policy`] (keep + remove).
//!
//! # Example
//!
//! ```rust
//! use structfilter::{FieldDescriptor, Policy, Tag, field_matches_policy};
//!
//! const FIELD: FieldDescriptor =
//!     FieldDescriptor::new("hint", "String", &[Tag::new("filter", "public, nospoiler")]);
//!
//! let policy = Policy::keeping(["public"]).removing(["spoiler"]);
//! assert!(field_matches_policy(&FIELD, policy.keep(), policy.remove()));
//! ```

pub mod labels;
pub mod tag_policy;

pub use labels::{field_has_label, field_has_tag_label, field_matches_policy};
pub use tag_policy::{FILTER_TAG, Policy, TagPolicy};

impl Policy {
    /// Returns whether `field` is selected by this policy.
    pub fn matches(&self, field: &crate::record::FieldDescriptor) -> bool {
        field_matches_policy(field, self.keep(), self.remove())
    }
}
