//! Record metadata and the traits records implement.
//!
//! - **`descriptor`**: Static shape data (`Tag`, `FieldDescriptor`, `RecordType`)
//! - **`value`**: Type-erased field values (`FieldValue`)
//! - **`traits`**: Record access (`DynRecord`, `Record`)
//! - **`filtered`**: Records built at run time by projection (`FilteredRecord`)

mod descriptor;
#[cfg(feature = "filter")]
mod filtered;
mod traits;
mod value;

pub use descriptor::{FieldDescriptor, RecordType, Tag};
#[cfg(feature = "filter")]
pub use filtered::FilteredRecord;
pub use structfilter_derive::Record;
pub use traits::{DynRecord, Record};
pub use value::FieldValue;
