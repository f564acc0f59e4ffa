use std::sync::Arc;

use rusqlite::Row;

use cohort_types::{SearchFilter, User};

use crate::error::Result;
use crate::{Database, contains_pattern};

/// Multi-field substring search over the user catalog.
///
/// Read-only by design: the `users` table belongs to the user subsystem,
/// nothing here writes to it.
#[derive(Clone)]
pub struct UserSearchIndex {
    db: Arc<Database>,
}

impl UserSearchIndex {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Users whose `filter.field` column contains `filter.param`, matched
    /// case-insensitively, in user-id order. An empty param matches every
    /// user; full tokens and partial fragments take the same path.
    pub fn search(&self, filter: &SearchFilter) -> Result<Vec<User>> {
        // The column name comes from the closed enum, never from caller
        // input; only the needle is bound as a parameter.
        let sql = format!(
            "SELECT user_id, email, first_name, last_name, phone, password
             FROM users
             WHERE {} LIKE ?1 ESCAPE '\\'
             ORDER BY user_id",
            filter.field.column(),
        );
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let users = stmt
                .query_map([contains_pattern(&filter.param)], user_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(users)
        })
    }
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        user_id: row.get(0)?,
        email: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        phone: row.get(4)?,
        password: row.get(5)?,
    })
}
