use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::users::{create_user, find_user, user_exists};
use crate::errors::{AppError, AppResult};
use crate::models::session::is_valid_user_id;
use crate::models::{Session, SessionEvent};
use crate::ui::messages::{info, success};
use std::fs;
use std::path::Path;

/// Login / logout and session persistence between invocations.
pub struct SessionLogic;

impl SessionLogic {
    /// Read the persisted session; a missing file means anonymous.
    pub fn load(path: &Path) -> AppResult<Session> {
        if !path.is_file() {
            return Ok(Session::Anonymous);
        }
        let content = fs::read_to_string(path)?;
        let session: Session = serde_yaml::from_str(&content)?;
        if let Some(user_id) = session.user_id()
            && !is_valid_user_id(user_id)
        {
            return Err(AppError::InvalidInput(format!(
                "session file {} names an invalid user id '{user_id}'",
                path.display()
            )));
        }
        Ok(session)
    }

    pub fn save(path: &Path, session: &Session) -> AppResult<()> {
        match session {
            Session::Anonymous => {
                if path.exists() {
                    fs::remove_file(path)?;
                }
            }
            Session::Authenticated { .. } => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, serde_yaml::to_string(session)?)?;
            }
        }
        Ok(())
    }

    /// Register the user when unknown, then authenticate.
    pub fn login(
        pool: &mut DbPool,
        session_file: &Path,
        user_id: &str,
        name: &str,
    ) -> AppResult<Session> {
        let current = Self::load(session_file)?;
        let next = current.apply(SessionEvent::Login {
            user_id: user_id.to_string(),
            name: name.to_string(),
        })?;

        let (user_id, name) = next.require_user()?;

        if user_exists(&pool.conn, user_id)? {
            success(format!("Welcome back, {name}!"));
            ttlog_or_warn(&pool.conn, "login", user_id, "User logged in");
        } else {
            create_user(&pool.conn, user_id, name)?;
            success(format!("New user created: {name}"));
            ttlog_or_warn(&pool.conn, "login", user_id, "User registered");
        }

        Self::save(session_file, &next)?;
        Ok(next)
    }

    pub fn logout(pool: &mut DbPool, session_file: &Path) -> AppResult<Session> {
        let current = Self::load(session_file)?;
        let previous = current.user_id().map(str::to_string);
        let next = current.apply(SessionEvent::Logout)?;

        match previous {
            Some(user_id) => {
                ttlog_or_warn(&pool.conn, "logout", &user_id, "User logged out");
                success(format!("Logged out {user_id}."));
            }
            None => info("No active session."),
        }

        Self::save(session_file, &next)?;
        Ok(next)
    }

    /// Session for this invocation: an explicit `--user` (which must be
    /// registered) wins over the persisted session.
    pub fn resolve(
        pool: &mut DbPool,
        session_file: &Path,
        user_override: Option<&str>,
    ) -> AppResult<Session> {
        match user_override {
            Some(user_id) => {
                let user = find_user(&pool.conn, user_id)?
                    .ok_or_else(|| AppError::UnknownUser(user_id.to_string()))?;
                Ok(Session::Authenticated {
                    user_id: user.user_id,
                    name: user.name,
                })
            }
            None => Self::load(session_file),
        }
    }
}
