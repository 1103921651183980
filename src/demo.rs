//! Demonstration driver exercising the three patterns in a fixed script.
//!
//! Section headers, the singleton identity check and the role descriptions are
//! written to `out`. Everything the components themselves report (construction,
//! attach, detach, notify, delivery) goes through the trace hook; install a
//! callback with [`set_trace_callback`](crate::set_trace_callback) to see it.

use std::io::Write;
use std::sync::Arc;

use crate::{AccessPolicyManager, ConcreteObserver, PatternError, RoleUserFactory, Subject};

/// Run the full demonstration.
///
/// # Errors
///
/// Fails if writing to `out` fails, or if detaching an observer reports it
/// missing (which the script never does).
pub fn run(out: &mut impl Write) -> Result<(), PatternError> {
    singleton_section(out)?;
    factory_section(out)?;
    observer_section(out)?;
    Ok(())
}

fn singleton_section(out: &mut impl Write) -> Result<(), PatternError> {
    writeln!(out, "Demonstrating Singleton Pattern:")?;

    let manager1 = AccessPolicyManager::get_instance();
    let manager2 = AccessPolicyManager::get_instance();
    writeln!(
        out,
        "Are both instances the same? {}",
        std::ptr::eq(manager1, manager2)
    )?;
    manager1.manage_policy();

    Ok(())
}

fn factory_section(out: &mut impl Write) -> Result<(), PatternError> {
    writeln!(out, "\nDemonstrating Factory Method Pattern:")?;

    let users = [
        RoleUserFactory::create_user("ADMIN", 1),
        RoleUserFactory::create_user("LECTURER", 2),
        RoleUserFactory::create_user("STUDENT", 3),
        RoleUserFactory::create_user("GUEST", 4),
    ];
    for user in &users {
        writeln!(out, "{}", user.get_role())?;
    }

    Ok(())
}

fn observer_section(out: &mut impl Write) -> Result<(), PatternError> {
    writeln!(out, "\nDemonstrating Observer Pattern:")?;

    let subject: Subject<String> = Subject::new();
    let obs1 = Arc::new(ConcreteObserver::new("Observer1"));
    let obs2 = Arc::new(ConcreteObserver::new("Observer2"));

    subject.attach(obs1.clone());
    subject.attach(obs2.clone());
    subject.notify(&"Event occurred!".to_string());

    subject.detach(&obs1)?;
    subject.notify(&"Another event occurred!".to_string());

    Ok(())
}
