//! Macros for declaring singletons.

/// Implements [`Singleton`](crate::Singleton) for a type with a single macro invocation.
///
/// The macro generates:
/// - A private `OnceLock` static holding the instance
/// - A `Singleton` impl whose `construct` evaluates the given expression
///
/// The expression is evaluated lazily, on the first call to `instance()`.
///
/// # Examples
///
/// ```rust
/// use access_patterns::{define_singleton, Singleton};
///
/// struct AuditLog {
///     target: &'static str,
/// }
///
/// define_singleton!(AuditLog, AuditLog { target: "stdout" });
///
/// let a = AuditLog::instance();
/// let b = AuditLog::instance();
/// assert!(std::ptr::eq(a, b));
/// assert_eq!(a.target, "stdout");
/// ```
///
/// The type must be `Send + Sync + 'static`:
///
/// ```compile_fail
/// use access_patterns::define_singleton;
/// use std::rc::Rc;
///
/// struct NotShareable(Rc<u8>);
///
/// define_singleton!(NotShareable, NotShareable(Rc::new(0)));
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($ty:ty, $init:expr) => {
        impl $crate::Singleton for $ty {
            fn cell() -> &'static ::std::sync::OnceLock<Self> {
                // Storage for the instance (private to this impl)
                static CELL: ::std::sync::OnceLock<$ty> = ::std::sync::OnceLock::new();
                &CELL
            }

            fn construct() -> Self {
                $init
            }
        }
    };
}
