//! Staff Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Staff role
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum StaffRole {
    Manager,
    #[default]
    Waiter,
    Chef,
}

impl StaffRole {
    pub const ALL: [StaffRole; 3] = [StaffRole::Manager, StaffRole::Waiter, StaffRole::Chef];

    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Manager => "manager",
            StaffRole::Waiter => "waiter",
            StaffRole::Chef => "chef",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown role string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStaffRole(pub String);

impl fmt::Display for UnknownStaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown staff role: {}", self.0)
    }
}

impl std::error::Error for UnknownStaffRole {}

impl FromStr for StaffRole {
    type Err = UnknownStaffRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StaffRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownStaffRole(s.to_string()))
    }
}

/// Staff member entity
///
/// The PIN is stored and compared as plain text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: StaffRole,
    pub pin: String,
}

/// Create staff payload; `role` is parsed by the handler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub id: Option<String>,
    pub name: String,
    pub role: String,
    pub pin: String,
}

/// Login payload; both fields are checked by the handler so missing ones yield 400
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffLogin {
    pub name: Option<String>,
    pub pin: Option<String>,
}

/// Successful login result (no PIN)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StaffSession {
    pub id: String,
    pub name: String,
    pub role: StaffRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde() {
        assert_eq!(
            serde_json::to_string(&StaffRole::Manager).unwrap(),
            "\"manager\""
        );
        let role: StaffRole = serde_json::from_str("\"chef\"").unwrap();
        assert_eq!(role, StaffRole::Chef);
        assert!(serde_json::from_str::<StaffRole>("\"owner\"").is_err());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("manager".parse::<StaffRole>(), Ok(StaffRole::Manager));
        assert_eq!(
            "Manager".parse::<StaffRole>(),
            Err(UnknownStaffRole("Manager".to_string()))
        );
    }
}
