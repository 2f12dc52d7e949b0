//! Tag-driven record transformations.
//!
//! - **Classification** (`classify`): which fields satisfy a policy.
//! - **Projection** (`project`): sparse views holding only selected fields.
//! - **Mutation** (`mutate`): copies and by-name resets, including redaction
//!   by label via [`empty_filtered_fields`].
//! - **Field copying** (`copy`): moving values between differently shaped
//!   records.

mod classify;
mod copy;
mod mutate;
mod project;

pub use classify::{
    NameCase, all_field_names, all_field_names_and_types, field_names_matching,
    field_names_matching_policy,
};
pub use copy::copy_matching_fields;
pub use mutate::{
    copy_dyn_record, copy_record, empty_filtered_fields, empty_filtered_fields_dyn,
    reset_fields_by_name,
};
pub use project::{derive_record_type, project_record, project_record_with};
