//! Observers and the subject that broadcasts events to them.
//!
//! A [`Subject`] keeps its observers in attachment order and delivers each
//! event to all of them synchronously, in that order. Observers are held as
//! shared `Arc` handles: detaching drops the subject's handle, not the
//! observer itself.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::trace::emit_event;
use crate::{PatternError, PatternEvent};

/// Receiver of events broadcast by a [`Subject`].
///
/// Both methods are required. An observer that cannot handle updates does
/// not compile:
///
/// ```compile_fail
/// use access_patterns::Observer;
///
/// struct Silent;
///
/// impl Observer<String> for Silent {
///     fn name(&self) -> &str {
///         "silent"
///     }
/// }
/// ```
pub trait Observer<E>: Send + Sync {
    /// Name used in trace output and error messages.
    fn name(&self) -> &str;

    fn update(&self, event: &E);
}

/// Observer that reports every event it receives.
///
/// Each delivery emits [`PatternEvent::EventReceived`].
#[derive(Debug)]
pub struct ConcreteObserver {
    name: String,
    received: AtomicUsize,
}

impl ConcreteObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            received: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of events delivered to this observer so far.
    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }
}

impl<E: fmt::Display> Observer<E> for ConcreteObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, event: &E) {
        self.received.fetch_add(1, Ordering::SeqCst);
        emit_event(&PatternEvent::EventReceived {
            observer: self.name.clone(),
            event: event.to_string(),
        });
    }
}

/// Ordered registry of observers that broadcasts events to them.
///
/// Attach, detach and notify may be called from several threads; the
/// observer list is guarded by a read-write lock.
///
/// # Examples
///
/// ```
/// use access_patterns::{ConcreteObserver, Subject};
/// use std::sync::Arc;
///
/// let subject: Subject<String> = Subject::new();
/// let obs1 = Arc::new(ConcreteObserver::new("Observer1"));
/// let obs2 = Arc::new(ConcreteObserver::new("Observer2"));
///
/// subject.attach(obs1.clone());
/// subject.attach(obs2.clone());
/// assert_eq!(subject.notify(&"Event occurred!".to_string()), 2);
///
/// subject.detach(&obs1).unwrap();
/// assert_eq!(subject.notify(&"Another event occurred!".to_string()), 1);
/// assert_eq!((obs1.received(), obs2.received()), (1, 2));
/// ```
pub struct Subject<E> {
    observers: RwLock<Vec<Arc<dyn Observer<E>>>>,
}

impl<E: 'static> Subject<E> {
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Append an observer. Attaching the same observer twice delivers every
    /// later event to it twice.
    pub fn attach(&self, observer: Arc<dyn Observer<E>>) {
        let name = observer.name().to_string();
        self.observers.write().push(observer);
        emit_event(&PatternEvent::ObserverAttached { name });
    }

    /// Remove the first attached entry that is the same allocation as `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::ObserverNotFound`] if `observer` is not attached.
    pub fn detach<O>(&self, observer: &Arc<O>) -> Result<(), PatternError>
    where
        O: Observer<E> + ?Sized,
    {
        let removed = {
            let mut observers = self.observers.write();
            let index = observers
                .iter()
                .position(|o| std::ptr::addr_eq(Arc::as_ptr(o), Arc::as_ptr(observer)));
            index.map(|index| observers.remove(index))
        };

        match removed {
            Some(removed) => {
                emit_event(&PatternEvent::ObserverDetached {
                    name: removed.name().to_string(),
                });
                Ok(())
            }
            None => {
                tracing::warn!(observer = observer.name(), "detach of unattached observer");
                Err(PatternError::ObserverNotFound {
                    name: observer.name().to_string(),
                })
            }
        }
    }

    /// Deliver `event` to every attached observer, in attachment order.
    ///
    /// The observer list is snapshotted first, so observers may attach or
    /// detach from inside `update`; such changes apply to the next `notify`.
    /// Returns the number of deliveries made.
    pub fn notify(&self, event: &E) -> usize
    where
        E: fmt::Display,
    {
        let observers = self.observers.read().clone();

        emit_event(&PatternEvent::Notify {
            event: event.to_string(),
            subscribers: observers.len(),
        });

        for observer in &observers {
            observer.update(event);
        }

        observers.len()
    }

    /// Number of attached entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }

    /// Names of attached observers, in delivery order.
    pub fn observer_names(&self) -> Vec<String> {
        self.observers
            .read()
            .iter()
            .map(|o| o.name().to_string())
            .collect()
    }
}

impl<E: 'static> Default for Subject<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Subject<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .observers
            .read()
            .iter()
            .map(|o| o.name().to_string())
            .collect();
        f.debug_struct("Subject").field("observers", &names).finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
