use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// Account role; the shell routes traders and guests to different home
/// screens after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Guest,
    Trader,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Trader => "Trader",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Guest" => Ok(Role::Guest),
            "Trader" => Ok(Role::Trader),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// A stored account. The password hash stays in the database layer and is
/// never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Registration input. Consumed by the auth service, which stores only a
/// salted hash of `password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

/// One line of the conversion audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: i64,
    pub amount: String,
    pub from_currency: Currency,
    pub to_currency: Currency,
    pub converted_amount: String,
    pub timestamp: String,
}
