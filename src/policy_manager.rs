//! The process-wide access-policy manager.
//!
//! `AccessPolicyManager` is constructed lazily on the first call to
//! [`AccessPolicyManager::get_instance`] and lives until the process exits.
//! It enforces nothing; `manage_policy` only reports that it ran.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::trace::emit_event;
use crate::{define_singleton, PatternEvent, Singleton};

/// Single shared manager of access policies.
///
/// There is no public constructor; all handles come from `get_instance`.
///
/// ```
/// use access_patterns::AccessPolicyManager;
///
/// let manager1 = AccessPolicyManager::get_instance();
/// let manager2 = AccessPolicyManager::get_instance();
/// assert!(std::ptr::eq(manager1, manager2));
/// ```
#[derive(Debug)]
pub struct AccessPolicyManager {
    policies_managed: AtomicU64,
}

define_singleton!(
    AccessPolicyManager,
    AccessPolicyManager {
        policies_managed: AtomicU64::new(0),
    }
);

impl AccessPolicyManager {
    /// Return the shared manager, constructing it on the first call.
    pub fn get_instance() -> &'static AccessPolicyManager {
        Self::instance()
    }

    /// Run a policy-management pass.
    ///
    /// Emits [`PatternEvent::PolicyManaged`] and returns how many passes this
    /// manager has run so far, including this one.
    pub fn manage_policy(&self) -> u64 {
        let count = self.policies_managed.fetch_add(1, Ordering::SeqCst) + 1;
        emit_event(&PatternEvent::PolicyManaged);
        count
    }

    /// Number of `manage_policy` passes run so far.
    pub fn policies_managed(&self) -> u64 {
        self.policies_managed.load(Ordering::SeqCst)
    }
}
