//! Users and the role-keyed factory that creates them.
//!
//! [`RoleUserFactory::create_user`] maps a role tag to one of four user
//! variants. Tags are matched exactly and case-sensitively; anything that is
//! not `"ADMIN"`, `"LECTURER"` or `"STUDENT"` produces a visitor.

use std::fmt;

/// Closed set of roles a user can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Lecturer,
    Student,
    Visitor,
}

impl Role {
    /// Resolve a role tag, falling back to `Visitor` for unknown tags.
    ///
    /// ```
    /// use access_patterns::Role;
    ///
    /// assert_eq!(Role::from_tag("ADMIN"), Role::Admin);
    /// assert_eq!(Role::from_tag("admin"), Role::Visitor);
    /// assert_eq!(Role::from_tag("GUEST"), Role::Visitor);
    /// ```
    pub fn from_tag(tag: &str) -> Role {
        match tag {
            "ADMIN" => Role::Admin,
            "LECTURER" => Role::Lecturer,
            "STUDENT" => Role::Student,
            _ => Role::Visitor,
        }
    }

    /// Human-readable label used in role descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Lecturer => "Lecturer",
            Role::Student => "Student",
            Role::Visitor => "Visitor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Capability shared by every user variant.
///
/// All methods are required; there is no fallback description. A variant that
/// does not describe its role does not compile:
///
/// ```compile_fail
/// use access_patterns::{Role, User};
///
/// #[derive(Debug)]
/// struct Anonymous;
///
/// impl User for Anonymous {
///     fn user_id(&self) -> i64 {
///         0
///     }
///
///     fn role(&self) -> Role {
///         Role::Visitor
///     }
/// }
/// ```
pub trait User: fmt::Debug + Send + Sync {
    fn user_id(&self) -> i64;

    fn role(&self) -> Role;

    /// Describe the user, e.g. `"Admin user 1"`.
    fn get_role(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    user_id: i64,
}

impl AdminUser {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

impl User for AdminUser {
    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn role(&self) -> Role {
        Role::Admin
    }

    fn get_role(&self) -> String {
        format!("Admin user {}", self.user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LecturerUser {
    user_id: i64,
}

impl LecturerUser {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

impl User for LecturerUser {
    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn role(&self) -> Role {
        Role::Lecturer
    }

    fn get_role(&self) -> String {
        format!("Lecturer user {}", self.user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentUser {
    user_id: i64,
}

impl StudentUser {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

impl User for StudentUser {
    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn role(&self) -> Role {
        Role::Student
    }

    fn get_role(&self) -> String {
        format!("Student user {}", self.user_id)
    }
}

/// Default variant for any tag the factory does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorUser {
    user_id: i64,
}

impl VisitorUser {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

impl User for VisitorUser {
    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn role(&self) -> Role {
        Role::Visitor
    }

    fn get_role(&self) -> String {
        format!("Visitor user {}", self.user_id)
    }
}

/// Creates users from a role tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleUserFactory;

impl RoleUserFactory {
    /// Create the user variant matching `role`.
    ///
    /// Never fails: unrecognized tags, including the empty string and
    /// lower-case spellings, yield a [`VisitorUser`]. Ids are not checked for
    /// uniqueness.
    ///
    /// ```
    /// use access_patterns::{Role, RoleUserFactory};
    ///
    /// let visitor = RoleUserFactory::create_user("GUEST", 4);
    /// assert_eq!(visitor.role(), Role::Visitor);
    /// assert_eq!(visitor.get_role(), "Visitor user 4");
    /// ```
    pub fn create_user(role: &str, user_id: i64) -> Box<dyn User> {
        match Role::from_tag(role) {
            Role::Admin => Box::new(AdminUser::new(user_id)),
            Role::Lecturer => Box::new(LecturerUser::new(user_id)),
            Role::Student => Box::new(StudentUser::new(user_id)),
            Role::Visitor => {
                if role != "VISITOR" {
                    tracing::debug!(tag = role, user_id, "unrecognized role tag, creating visitor");
                }
                Box::new(VisitorUser::new(user_id))
            }
        }
    }
}
