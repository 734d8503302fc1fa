//! User types.

use accent_commerce::ids::UserId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::AuthError;

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Store administrator with dashboard access.
    Admin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" | "user" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            other => Err(AuthError::Validation(format!("unknown role: {}", other))),
        }
    }
}

/// Where a freshly logged-in user is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Landing {
    /// Product discovery page.
    Explore,
    /// Admin dashboard.
    Dashboard,
}

impl Landing {
    /// Route path for the landing page.
    pub fn path(&self) -> &'static str {
        match self {
            Landing::Explore => "/explore",
            Landing::Dashboard => "/dashboard",
        }
    }
}

/// An authenticated user as issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// E-mail address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role claim.
    pub role: Role,
}

impl User {
    /// Create a new user.
    pub fn new(id: UserId, email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            role,
        }
    }

    /// Check if the user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Page to show after login.
    pub fn landing(&self) -> Landing {
        if self.is_admin() {
            Landing::Dashboard
        } else {
            Landing::Explore
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("user".parse::<Role>().unwrap(), Role::Customer);
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_landing() {
        let admin = User::new(UserId::new("1"), "admin@accenthubs.com", "admin", Role::Admin);
        let shopper = User::new(UserId::new("2"), "jo@example.com", "jo", Role::Customer);
        assert_eq!(admin.landing(), Landing::Dashboard);
        assert_eq!(shopper.landing().path(), "/explore");
    }
}
