//! Adapters for emitting filtered records through `tracing`.
//!
//! # Example
//!
//! ```ignore
//! use structfilter::{Policy, tracing::TracingFilteredExt};
//!
//! tracing::info!(question = %question.tracing_filtered(&Policy::keeping(["public"])));
//! ```

use tracing::field::{DisplayValue, display};

use crate::{filter::project_record, policy::Policy, record::DynRecord};

/// Extension trait for logging the selected fields of a record as a display
/// string.
pub trait TracingFilteredExt: DynRecord {
    /// Projects `self` with `policy` and wraps the debug rendering of the
    /// projection for `tracing`.
    fn tracing_filtered(&self, policy: &Policy) -> DisplayValue<String> {
        display(format!("{:?}", project_record(self, policy)))
    }
}

impl<T: DynRecord + ?Sized> TracingFilteredExt for T {}
