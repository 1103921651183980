//! Core trait defining singleton behavior.
//!
//! This module provides the `Singleton` trait with default implementations for
//! lazy, one-time construction of a process-wide instance.
//!
//! Each implementing type owns exactly one `OnceLock` cell. The first call to
//! `instance()` constructs the value; every later call, from any thread, returns
//! a reference to that same value. The instance is never dropped.

use std::sync::OnceLock;

use crate::trace::emit_event;
use crate::PatternEvent;

/// Core trait defining singleton behavior.
///
/// Provides default implementations for all singleton operations, requiring only
/// two methods (`cell` and `construct`) from the implementor. Most types get
/// those from the [`define_singleton!`](crate::define_singleton) macro.
///
/// # Concurrency
///
/// Construction goes through `OnceLock::get_or_init`, so racing first calls
/// build the instance exactly once and all callers observe the same address.
pub trait Singleton: Sized + Send + Sync + 'static {
    /// Access the storage cell for the instance.
    ///
    /// This method must be implemented to provide the type's dedicated static.
    fn cell() -> &'static OnceLock<Self>;

    /// Build the instance. Called at most once per process.
    fn construct() -> Self;

    /// Return the shared instance, constructing it on the first call only.
    ///
    /// Emits [`PatternEvent::SingletonCreated`] when the instance is built.
    ///
    /// # Panics
    ///
    /// If `construct` (or the trace callback it triggers) calls `instance()` on
    /// the same type, the initializer is re-entered, which blocks or panics.
    fn instance() -> &'static Self {
        Self::cell().get_or_init(|| {
            emit_event(&PatternEvent::SingletonCreated {
                type_name: std::any::type_name::<Self>(),
            });
            Self::construct()
        })
    }

    /// Check whether the instance has been constructed yet.
    fn is_initialized() -> bool {
        Self::cell().get().is_some()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::Singleton;
    use crate::{clear_trace_callback, set_trace_callback, PatternEvent};

    use parking_lot::Mutex;
    use serial_test::serial;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier, OnceLock};
    use std::thread;

    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    struct Counter {
        serial: usize,
    }

    impl Singleton for Counter {
        fn cell() -> &'static OnceLock<Self> {
            static CELL: OnceLock<Counter> = OnceLock::new();
            &CELL
        }

        fn construct() -> Self {
            Counter {
                serial: CONSTRUCTED.fetch_add(1, Ordering::SeqCst),
            }
        }
    }

    struct Lazy;

    impl Singleton for Lazy {
        fn cell() -> &'static OnceLock<Self> {
            static CELL: OnceLock<Lazy> = OnceLock::new();
            &CELL
        }

        fn construct() -> Self {
            Lazy
        }
    }

    #[test]
    fn test_instance_identity() {
        let a = Counter::instance();
        let b = Counter::instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.serial, b.serial);
    }

    #[test]
    fn test_constructed_once_across_threads() {
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    Counter::instance() as *const Counter as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[serial]
    fn test_lazy_construction_emits_once() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        set_trace_callback(move |e| events_clone.lock().push(e.clone()));

        assert!(!Lazy::is_initialized());
        let _ = Lazy::instance();
        assert!(Lazy::is_initialized());
        let _ = Lazy::instance();

        clear_trace_callback();

        // Other tests may construct their own singletons concurrently
        let created: Vec<_> = events
            .lock()
            .iter()
            .filter(|e| {
                matches!(e, PatternEvent::SingletonCreated { type_name } if type_name.ends_with("::Lazy"))
            })
            .cloned()
            .collect();
        assert_eq!(created.len(), 1);
    }
}
