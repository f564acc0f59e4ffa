use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Failure taxonomy of the storage layer.
///
/// `Unavailable` covers connectivity and lock trouble and is safe to retry.
/// `Integrity` is a constraint violation and is not. `DuplicateEnrollment`
/// is the expected outcome of assigning an already-assigned pair and is
/// produced only by [`crate::EnrollmentRepository::assign`].
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("data integrity violation: {0}")]
    Integrity(String),
    #[error("user {user_id} is already assigned to course {course_id}")]
    DuplicateEnrollment { course_id: i64, user_id: i64 },
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StorageError::Integrity(e.to_string())
            }
            _ => StorageError::Unavailable(e.to_string()),
        }
    }
}

/// True for the exact constraint SQLite raises when a second row with the
/// same composite primary key is inserted. Other constraint failures
/// (foreign keys, checks) stay on the `Integrity` path.
pub(crate) fn is_pair_conflict(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(extended_code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(extended_code), None)
    }

    #[test]
    fn constraint_failures_map_to_integrity() {
        let e = StorageError::from(sqlite_failure(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY));
        assert!(matches!(e, StorageError::Integrity(_)));
    }

    #[test]
    fn other_failures_map_to_unavailable() {
        let e = StorageError::from(sqlite_failure(rusqlite::ffi::SQLITE_BUSY));
        assert!(matches!(e, StorageError::Unavailable(_)));
    }

    #[test]
    fn pair_conflict_is_only_the_primary_key_code() {
        assert!(is_pair_conflict(&sqlite_failure(
            rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
        )));
        assert!(!is_pair_conflict(&sqlite_failure(
            rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        )));
        assert!(!is_pair_conflict(&sqlite_failure(rusqlite::ffi::SQLITE_BUSY)));
    }
}
