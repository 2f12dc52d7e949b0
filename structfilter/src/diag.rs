//! Internal diagnostics.

/// Emits a `tracing` debug event when the `tracing` feature is enabled and
/// expands to nothing otherwise.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}

pub(crate) use debug_event;
