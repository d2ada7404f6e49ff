//! User roles governing menu visibility.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Permission level of the logged-in user.
///
/// Roles form a total order (`Staff < Manager < Admin`), so an entry that
/// requires `Manager` is visible to managers and admins alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Default role for every authenticated user without elevated rights.
    #[default]
    Staff,
    Manager,
    Admin,
}

impl Role {
    /// Parse a role name as supplied by the session layer.
    ///
    /// Unknown names fall back to [`Role::Staff`] rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "manager" => Role::Manager,
            "staff" => Role::Staff,
            other => {
                debug!(role = %other, "unrecognized role, using staff");
                Role::Staff
            }
        }
    }

    /// Machine name, as used in template suggestions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    /// Human-readable label shown in the sidebar header.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Staff => "Staff",
            Role::Manager => "Manager",
            Role::Admin => "Administrator",
        }
    }

    /// Whether this role satisfies a minimum-role requirement.
    ///
    /// `None` means the entry is visible to everyone.
    pub fn satisfies(&self, min_role: Option<Role>) -> bool {
        min_role.is_none_or(|required| *self >= required)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::from_name(name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Menu files go through the same lenient parsing as session input.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Role::from_name(&name))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!(Role::from_name("admin"), Role::Admin);
        assert_eq!(Role::from_name("manager"), Role::Manager);
        assert_eq!(Role::from_name("staff"), Role::Staff);
    }

    #[test]
    fn parsing_is_case_and_whitespace_insensitive() {
        assert_eq!(Role::from_name("  Admin "), Role::Admin);
        assert_eq!(Role::from_name("MANAGER"), Role::Manager);
    }

    #[test]
    fn unknown_role_is_least_privileged() {
        assert_eq!(Role::from_name("superuser"), Role::Staff);
        assert_eq!(Role::from_name(""), Role::Staff);
        assert_eq!(Role::from("cashier"), Role::Staff);
    }

    #[test]
    fn ordering_is_monotonic() {
        assert!(Role::Admin > Role::Manager);
        assert!(Role::Manager > Role::Staff);
    }

    #[test]
    fn satisfies_minimum_role() {
        assert!(Role::Staff.satisfies(None));
        assert!(!Role::Staff.satisfies(Some(Role::Manager)));
        assert!(Role::Manager.satisfies(Some(Role::Manager)));
        assert!(!Role::Manager.satisfies(Some(Role::Admin)));
        assert!(Role::Admin.satisfies(Some(Role::Manager)));
        assert!(Role::Admin.satisfies(Some(Role::Admin)));
    }

    #[test]
    fn deserializes_leniently() {
        let role: Role = serde_json::from_str("\"Manager\"").unwrap();
        assert_eq!(role, Role::Manager);
        let role: Role = serde_json::from_str("\"guest\"").unwrap();
        assert_eq!(role, Role::Staff);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
