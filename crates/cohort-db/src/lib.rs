//! SQLite storage for courses, users, and the enrollment relation.
//!
//! One writer connection behind a mutex, a small round-robin pool of
//! read-only connections, WAL journaling. Repositories borrow connections
//! through [`Database::with_conn`] / [`Database::with_conn_mut`] and never
//! hold one across calls.

pub mod courses;
pub mod enrollments;
pub mod error;
pub mod migrations;
pub mod users;

pub use courses::CourseRepository;
pub use enrollments::EnrollmentRepository;
pub use error::{Result, StorageError};
pub use users::UserSearchIndex;

use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rusqlite::Connection;
use tracing::info;

const READER_POOL_SIZE: usize = 4;

/// Course database with reader/writer split.
pub struct Database {
    writer: Mutex<Connection>,
    readers: Vec<Mutex<Connection>>,
    reader_idx: AtomicUsize,
}

impl Database {
    /// Open (creating if needed) the database at `path` and bring its
    /// schema up to date.
    pub fn open(path: &Path) -> Result<Self> {
        let writer = Connection::open(path)?;
        writer.pragma_update(None, "journal_mode", "WAL")?;
        writer.pragma_update(None, "foreign_keys", "ON")?;

        migrations::run(&writer)?;

        let mut readers = Vec::with_capacity(READER_POOL_SIZE);
        for _ in 0..READER_POOL_SIZE {
            let conn = Connection::open_with_flags(
                path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?;
            conn.pragma_update(None, "journal_mode", "WAL")?;
            readers.push(Mutex::new(conn));
        }

        info!(
            "Course DB opened at {} (1 writer + {} readers)",
            path.display(),
            READER_POOL_SIZE
        );
        Ok(Self {
            writer: Mutex::new(writer),
            readers,
            reader_idx: AtomicUsize::new(0),
        })
    }

    /// Run `f` on one of the read-only connections.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let idx = self.reader_idx.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let conn = self.readers[idx]
            .lock()
            .map_err(|_| StorageError::Unavailable("reader lock poisoned".into()))?;
        f(&conn)
    }

    /// Run `f` on the writer connection.
    pub fn with_conn_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .writer
            .lock()
            .map_err(|_| StorageError::Unavailable("writer lock poisoned".into()))?;
        f(&conn)
    }
}

/// Build a `LIKE` pattern that matches rows containing `needle` literally.
///
/// `%`, `_` and `\` in the needle are escaped (with `ESCAPE '\'` in the
/// query) so the caller's text is always a substring match, never a
/// wildcard. An empty needle yields `%%`, which matches every row.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_wraps_plain_text() {
        assert_eq!(contains_pattern("fiona"), "%fiona%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn contains_pattern_escapes_like_metacharacters() {
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c\\d"), "%c\\\\d%");
    }
}
