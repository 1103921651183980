//! # Access Patterns
//!
//! Three classic object-oriented design patterns, expressed with Rust traits
//! and set in a small access-control domain:
//!
//! - **Singleton**: [`AccessPolicyManager`] is built lazily and shared by the
//!   whole process.
//! - **Factory method**: [`RoleUserFactory`] maps a role tag to a [`User`]
//!   variant, falling back to a visitor for unknown tags.
//! - **Observer**: [`Subject`] broadcasts events to attached [`Observer`]s in
//!   attachment order.
//!
//! The access-policy naming is illustrative only; nothing here enforces a
//! security policy.
//!
//! ## Quick Start
//!
//! ```rust
//! use access_patterns::{AccessPolicyManager, ConcreteObserver, RoleUserFactory, Subject};
//! use std::sync::Arc;
//!
//! let manager = AccessPolicyManager::get_instance();
//! assert!(std::ptr::eq(manager, AccessPolicyManager::get_instance()));
//!
//! let admin = RoleUserFactory::create_user("ADMIN", 1);
//! assert_eq!(admin.get_role(), "Admin user 1");
//!
//! let subject: Subject<String> = Subject::new();
//! subject.attach(Arc::new(ConcreteObserver::new("Observer1")));
//! assert_eq!(subject.notify(&"Event occurred!".to_string()), 1);
//! ```
//!
//! ## Tracing
//!
//! Every operation reports a [`PatternEvent`]. Events are logged with the
//! `tracing` crate at debug level and are passed to the callback installed
//! with [`set_trace_callback`].
//!
//! ## Main Items
//!
//! - [`Singleton`] / [`define_singleton!`] - Lazy process-wide instances
//! - [`AccessPolicyManager`] - The shared manager
//! - [`RoleUserFactory`] - Role-tag driven user creation
//! - [`Subject`] - Ordered observer registry and broadcaster
//! - [`demo::run`] - The end-to-end demonstration script

mod macros;

pub mod demo;
mod observer;
mod pattern_error;
mod pattern_event;
mod policy_manager;
mod singleton;
mod trace;
mod user;

// Re-export the main public API
pub use observer::{ConcreteObserver, Observer, Subject};
pub use pattern_error::PatternError;
pub use pattern_event::PatternEvent;
pub use policy_manager::AccessPolicyManager;
pub use singleton::Singleton;
pub use trace::{clear_trace_callback, set_trace_callback, TraceCallback};
pub use user::{AdminUser, LecturerUser, Role, RoleUserFactory, StudentUser, User, VisitorUser};
