//! Registry of known user ids.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub created_at: String,
}

pub fn user_exists(conn: &Connection, user_id: &str) -> AppResult<bool> {
    Ok(find_user(conn, user_id)?.is_some())
}

pub fn find_user(conn: &Connection, user_id: &str) -> AppResult<Option<User>> {
    let mut stmt =
        conn.prepare_cached("SELECT user_id, name, created_at FROM users WHERE user_id = ?1")?;

    let user = stmt
        .query_row([user_id], |row| {
            Ok(User {
                user_id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
            })
        })
        .optional()?;

    Ok(user)
}

pub fn create_user(conn: &Connection, user_id: &str, name: &str) -> AppResult<User> {
    let created_at = crate::utils::date::now_timestamp();

    conn.execute(
        "INSERT INTO users (user_id, name, created_at) VALUES (?1, ?2, ?3)",
        params![user_id, name, created_at],
    )?;

    Ok(User {
        user_id: user_id.to_string(),
        name: name.to_string(),
        created_at,
    })
}
