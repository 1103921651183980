/// Events emitted by the pattern components during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// Their `Display` form is the human-readable trace line for the operation.
///
/// # Examples
///
/// ```rust
/// use access_patterns::PatternEvent;
///
/// let event = PatternEvent::ObserverAttached {
///     name: "Observer1".to_string(),
/// };
/// assert_eq!(event.to_string(), "Attached observer: Observer1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternEvent {
    /// A singleton was constructed on first access.
    SingletonCreated {
        /// Full type name of the singleton (e.g., "access_patterns::policy_manager::AccessPolicyManager")
        type_name: &'static str,
    },

    /// `manage_policy` was invoked on the access-policy manager.
    PolicyManaged,

    /// An observer was appended to a subject.
    ObserverAttached { name: String },

    /// An observer was removed from a subject.
    ObserverDetached { name: String },

    /// A subject started broadcasting an event.
    Notify {
        /// Rendered event payload
        event: String,
        /// How many observers the event is about to be delivered to
        subscribers: usize,
    },

    /// A concrete observer received an event.
    EventReceived { observer: String, event: String },
}

impl PatternEvent {
    /// Last path segment of a `std::any::type_name` string.
    fn short_type_name(type_name: &str) -> &str {
        type_name.rsplit("::").next().unwrap_or(type_name)
    }
}

impl std::fmt::Display for PatternEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternEvent::SingletonCreated { type_name } => {
                write!(
                    f,
                    "Creating the {} instance",
                    Self::short_type_name(type_name)
                )
            }
            PatternEvent::PolicyManaged => write!(f, "Managing access policy"),
            PatternEvent::ObserverAttached { name } => write!(f, "Attached observer: {}", name),
            PatternEvent::ObserverDetached { name } => write!(f, "Detached observer: {}", name),
            PatternEvent::Notify { event, .. } => {
                write!(f, "Notifying observers about event: {}", event)
            }
            PatternEvent::EventReceived { observer, event } => {
                write!(f, "Observer {} received event: {}", observer, event)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_event_display() {
        let event = PatternEvent::SingletonCreated {
            type_name: "access_patterns::policy_manager::AccessPolicyManager",
        };
        assert_eq!(
            event.to_string(),
            "Creating the AccessPolicyManager instance"
        );

        assert_eq!(
            PatternEvent::PolicyManaged.to_string(),
            "Managing access policy"
        );

        let event = PatternEvent::ObserverDetached {
            name: "Observer1".to_string(),
        };
        assert_eq!(event.to_string(), "Detached observer: Observer1");

        let event = PatternEvent::Notify {
            event: "Event occurred!".to_string(),
            subscribers: 2,
        };
        assert_eq!(
            event.to_string(),
            "Notifying observers about event: Event occurred!"
        );

        let event = PatternEvent::EventReceived {
            observer: "Observer2".to_string(),
            event: "Another event occurred!".to_string(),
        };
        assert_eq!(
            event.to_string(),
            "Observer Observer2 received event: Another event occurred!"
        );
    }

    #[test]
    fn test_unqualified_type_name() {
        let event = PatternEvent::SingletonCreated { type_name: "Config" };
        assert_eq!(event.to_string(), "Creating the Config instance");
    }

    #[test]
    fn test_pattern_event_clone() {
        let event = PatternEvent::ObserverAttached {
            name: "Observer1".to_string(),
        };
        let cloned = event.clone();
        assert_eq!(event, cloned);
    }
}
