//! Select menu events and user id resolution

use serde::{Deserialize, Serialize};

use crate::dom::DEFAULT_OPTION;

/// User shown when the default option (or nothing) is selected
pub const DEFAULT_USER_ID: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Change,
    Input,
    Focus,
    Click,
}

/// An event fired by the select menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectEvent {
    pub kind: EventKind,
    /// Value of the selected option
    pub value: Option<String>,
}

impl SelectEvent {
    pub fn change(value: Option<&str>) -> Self {
        Self {
            kind: EventKind::Change,
            value: value.map(str::to_string),
        }
    }

    pub fn is_change(&self) -> bool {
        self.kind == EventKind::Change
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid user id: {0:?}")]
    InvalidUserId(String),
}

/// Map a select menu value to a user id
///
/// The default option and an empty or missing value select user 1.
pub fn resolve_user_id(value: Option<&str>) -> Result<u64, SelectionError> {
    let value = value.map(str::trim).unwrap_or_default();

    if value.is_empty() || value == DEFAULT_OPTION {
        return Ok(DEFAULT_USER_ID);
    }

    value
        .parse::<u64>()
        .map_err(|_| SelectionError::InvalidUserId(value.to_string()))
}
