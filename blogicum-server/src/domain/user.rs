use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::limits::validate_positive_i64;

/// Reference to an account owned by the identity subsystem.
///
/// Only the fields needed to render a byline are carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
}

impl User {
    pub(crate) fn new(
        id: i64,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        let username = normalize_username(&username.into())?;
        let first_name: String = first_name.into();
        let last_name: String = last_name.into();

        Ok(Self {
            id,
            username,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        })
    }

    pub(crate) fn display_name(&self) -> String {
        let full_name = format!("{} {}", self.first_name, self.last_name);
        let full_name = full_name.trim();
        if full_name.is_empty() {
            self.username.clone()
        } else {
            full_name.to_string()
        }
    }
}

fn normalize_username(username: &str) -> Result<String, DomainError> {
    let username = username.trim();
    if username.is_empty() || username.chars().count() > 150 {
        return Err(DomainError::Validation {
            field: "username",
            message: "must be 1..150 chars",
        });
    }
    Ok(username.to_string())
}
