//! Tag-driven field filtering for structs.
//!
//! Fields carry *tags*: per-field string annotations holding comma-separated
//! classification labels such as `public`, `admin` or `spoiler`. This crate
//! uses those labels to:
//! - classify fields against keep/remove policies
//! - project a record onto the fields a policy selects
//! - reset ("empty") fields by label on a copy of a record
//! - copy same-name, same-type fields between differently shaped records
//!
//! What it does not do:
//! - traverse nested records (only direct fields are considered)
//! - validate tag syntax beyond splitting on commas
//!
//! The `Record` derive macro lives in `structfilter-derive` and is re-exported
//! from this crate.
//!
//! ```rust
//! use structfilter::{Policy, Record, TagPolicy, empty_filtered_fields, project_record};
//!
//! #[derive(Clone, Debug, Default, Record)]
//! struct SourceStruct {
//!     #[tags(filter = "public")]
//!     field1: String,
//!     #[tags(filter = "private, admin")]
//!     field2: i32,
//!     #[tags(filter = "public, user")]
//!     field3: bool,
//!     field4: bool,
//! }
//!
//! let source = SourceStruct { field1: "public".into(), field2: 2, field3: true, field4: true };
//!
//! let view = project_record(&source, &Policy::keeping(["public"]));
//! assert_eq!(view.field_names().collect::<Vec<_>>(), ["field1", "field3"]);
//!
//! let emptied = empty_filtered_fields(&source, &TagPolicy::filter(["admin"]));
//! assert_eq!(emptied.field2, 0);
//! assert_eq!(source.field2, 2);
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate self as structfilter;

// Module declarations
mod diag;
mod error;
#[cfg(feature = "filter")]
mod filter;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "policy")]
pub mod policy;
pub mod record;
#[cfg(feature = "registry")]
mod registry;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use error::{FilterError, Result};
// Re-exports from record module (the `Record` derive travels with the trait)
#[cfg(feature = "filter")]
pub use record::FilteredRecord;
pub use record::{DynRecord, FieldDescriptor, FieldValue, Record, RecordType, Tag};
// Re-exports from policy module
#[cfg(feature = "policy")]
pub use policy::{
    FILTER_TAG, Policy, TagPolicy, field_has_label, field_has_tag_label, field_matches_policy,
};
// Re-exports from filter module
#[cfg(feature = "filter")]
pub use filter::{
    NameCase, all_field_names, all_field_names_and_types, copy_dyn_record, copy_matching_fields,
    copy_record, derive_record_type, empty_filtered_fields, empty_filtered_fields_dyn,
    field_names_matching, field_names_matching_policy, project_record, project_record_with,
    reset_fields_by_name,
};
#[cfg(feature = "json")]
pub use json::{FilteredJson, FilteredJsonExt, filtered_json};
#[cfg(feature = "registry")]
pub use registry::Registry;
#[cfg(feature = "slog")]
pub use slog::SlogFilteredExt;
#[cfg(feature = "tracing")]
pub use tracing::TracingFilteredExt;

/// Items used by code generated from `#[derive(Record)]`. Not public API.
#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "json")]
    pub use serde;
    #[cfg(feature = "json")]
    pub use serde_json;
}
