//! Errors returned by the dynamic entry points.
//!
//! Typed operations cannot fail: their inputs are checked by the compiler. The
//! [`Registry`](crate::Registry) accepts erased values and reports
//! precondition failures through [`FilterError`].

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The input is neither a registered record nor a box holding one.
    #[error("source must be a pointer")]
    NotAPointerToStruct,

    /// No input was supplied.
    #[error("source is nil")]
    NilSource,

    /// The input is a box, but what it holds is not a registered record.
    #[error("source must be a struct")]
    NotAStruct,
}

pub type Result<T> = std::result::Result<T, FilterError>;
