use rusqlite::Connection;
use tracing::info;

use crate::error::Result;

/// Bring the schema up to the current version. Safe to call on every open;
/// already-applied versions are skipped.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |r| r.get(0),
    )?;

    if version < 1 {
        info!("Course DB: running migration v1 (initial schema)");
        conn.execute_batch(
            "
            CREATE TABLE users (
                user_id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                password TEXT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                phone TEXT NOT NULL
            );

            CREATE TABLE courses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                start TEXT NOT NULL,
                finished INTEGER NOT NULL DEFAULT 0,
                price TEXT NOT NULL CHECK (CAST(price AS REAL) >= 0.0),
                teacher_name TEXT,
                schedule TEXT,
                notes TEXT
            );

            CREATE TABLE course_users (
                course_id INTEGER NOT NULL REFERENCES courses(id),
                user_id INTEGER NOT NULL REFERENCES users(user_id),
                email TEXT NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                phone TEXT NOT NULL,
                PRIMARY KEY (course_id, user_id)
            );

            CREATE INDEX idx_course_users_user ON course_users(user_id);

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
    }

    Ok(())
}
