//! Process-wide trace hook for pattern operations.
//!
//! Every operation in this crate (singleton construction, policy management,
//! attach, detach, notify, delivery) reports a [`PatternEvent`]. Events are
//! always logged through `tracing` at debug level and are additionally handed
//! to the user-supplied callback, if one is set.
//!
//! # Examples
//!
//! ```
//! use access_patterns::{clear_trace_callback, set_trace_callback};
//!
//! set_trace_callback(|event| println!("{event}"));
//! // ... run pattern operations ...
//! clear_trace_callback();
//! ```

use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;

use crate::PatternEvent;

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `PatternEvent` every time a pattern
/// component does something observable. It must be thread-safe because the hook
/// is globally shared.
pub type TraceCallback = dyn Fn(&PatternEvent) + Send + Sync + 'static;

/// Holds an optional user-defined tracing callback.
static TRACE_CALLBACK: LazyLock<Mutex<Option<Arc<TraceCallback>>>> =
    LazyLock::new(|| Mutex::new(None));

/// Sets a tracing callback that will be invoked for every pattern event.
///
/// Replaces any previously set callback. Call `clear_trace_callback` to disable it.
///
/// # Safety Restrictions
///
/// The callback runs while a singleton is being constructed. It must NOT call
/// `instance()` on that same singleton type: re-entering the one-time
/// initializer blocks forever.
pub fn set_trace_callback(callback: impl Fn(&PatternEvent) + Send + Sync + 'static) {
    *TRACE_CALLBACK.lock() = Some(Arc::new(callback));
}

/// Clears the tracing callback.
///
/// Events are still logged through `tracing` afterwards.
pub fn clear_trace_callback() {
    *TRACE_CALLBACK.lock() = None;
}

/// Emits an event to `tracing` and to the current callback.
///
/// The callback lock is released before the callback runs, so a callback may
/// replace or clear itself.
pub(crate) fn emit_event(event: &PatternEvent) {
    tracing::debug!(event = %event, "pattern event");

    let callback = TRACE_CALLBACK.lock().clone();
    if let Some(callback) = callback {
        callback(event);
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
