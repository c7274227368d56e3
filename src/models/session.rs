use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Who is driving the current invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { user_id: String, name: String },
}

/// Actions that move a session between states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Login { user_id: String, name: String },
    Logout,
}

/// User ids name the per-user log file, so they are limited to a
/// file-name-safe set.
pub fn is_valid_user_id(user_id: &str) -> bool {
    !user_id.is_empty()
        && !user_id.starts_with('.')
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

impl Session {
    /// Transition table:
    ///
    /// | from          | event  | to                         |
    /// |---------------|--------|----------------------------|
    /// | Anonymous     | Login  | Authenticated              |
    /// | Anonymous     | Logout | Anonymous                  |
    /// | Authenticated | Logout | Anonymous                  |
    /// | Authenticated | Login  | error: AlreadyAuthenticated |
    pub fn apply(self, event: SessionEvent) -> AppResult<Session> {
        match (self, event) {
            (Session::Anonymous, SessionEvent::Login { user_id, name }) => {
                if user_id.trim().is_empty() || name.trim().is_empty() {
                    return Err(AppError::InvalidInput(
                        "Please enter both a user id and a name.".into(),
                    ));
                }
                let user_id = user_id.trim();
                if !is_valid_user_id(user_id) {
                    return Err(AppError::InvalidInput(format!(
                        "user id '{user_id}' may only contain letters, digits, '.', '_' and '-', \
                         and must not start with '.'"
                    )));
                }
                Ok(Session::Authenticated {
                    user_id: user_id.to_string(),
                    name: name.trim().to_string(),
                })
            }
            (Session::Anonymous, SessionEvent::Logout) => Ok(Session::Anonymous),
            (Session::Authenticated { .. }, SessionEvent::Logout) => Ok(Session::Anonymous),
            (Session::Authenticated { user_id, .. }, SessionEvent::Login { .. }) => {
                Err(AppError::AlreadyAuthenticated(user_id))
            }
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Session::Authenticated { user_id, .. } => Some(user_id),
            Session::Anonymous => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Session::Authenticated { name, .. } => Some(name),
            Session::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Returns `(user_id, name)` or `NotAuthenticated`.
    pub fn require_user(&self) -> AppResult<(&str, &str)> {
        match self {
            Session::Authenticated { user_id, name } => Ok((user_id, name)),
            Session::Anonymous => Err(AppError::NotAuthenticated),
        }
    }
}
