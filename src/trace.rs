//! Crate-internal logging macros.
//!
//! With the `tracing` feature enabled these forward to [`tracing`] under the
//! `sllist` target. Without it they expand to nothing, so call sites never need
//! their own `cfg` attributes.

#[cfg(feature = "tracing")]
macro_rules! list_trace {
    ($($argument:tt)*) => {
        ::tracing::trace!(target: "sllist", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! list_trace {
    ($($argument:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! list_debug {
    ($($argument:tt)*) => {
        ::tracing::debug!(target: "sllist", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! list_debug {
    ($($argument:tt)*) => {};
}

pub(crate) use list_debug;
pub(crate) use list_trace;

/// Logs a rejected operation and hands the error back to the caller.
#[inline]
pub(crate) fn rejected(operation: &'static str, error: crate::ListError) -> crate::ListError {
    list_debug!(operation, %error, "list operation rejected");
    #[cfg(not(feature = "tracing"))]
    let _ = operation;
    error
}
