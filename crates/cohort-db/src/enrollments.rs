use std::sync::Arc;

use rusqlite::{Row, params};

use cohort_types::Enrollment;

use crate::Database;
use crate::error::{Result, StorageError, is_pair_conflict};

/// Storage-backed access to the course/user join relation. Sole writer of
/// the `course_users` table.
#[derive(Clone)]
pub struct EnrollmentRepository {
    db: Arc<Database>,
}

impl EnrollmentRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Current enrollments for a course in user-id order. A course with no
    /// enrollments and an unknown course id both yield an empty vec; course
    /// existence is the caller's concern.
    pub fn list_assigned(&self, course_id: i64) -> Result<Vec<Enrollment>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT course_id, user_id, email, first_name, last_name, phone
                 FROM course_users
                 WHERE course_id = ?1
                 ORDER BY user_id",
            )?;
            let rows = stmt
                .query_map([course_id], enrollment_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }

    /// Insert a new enrollment row.
    ///
    /// The composite primary key arbitrates racing calls: of two concurrent
    /// assigns for one pair, exactly one insert lands and the other comes
    /// back as [`StorageError::DuplicateEnrollment`]. There is no
    /// check-then-insert window here.
    pub fn assign(&self, enrollment: &Enrollment) -> Result<()> {
        self.db.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO course_users (course_id, user_id, email, first_name, last_name, phone)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    enrollment.course_id,
                    enrollment.user_id,
                    enrollment.email,
                    enrollment.first_name,
                    enrollment.last_name,
                    enrollment.phone,
                ],
            )
            .map_err(|e| {
                if is_pair_conflict(&e) {
                    StorageError::DuplicateEnrollment {
                        course_id: enrollment.course_id,
                        user_id: enrollment.user_id,
                    }
                } else {
                    e.into()
                }
            })?;
            Ok(())
        })
    }

    /// Delete the row if present. Removing an absent pair is a no-op.
    pub fn remove(&self, course_id: i64, user_id: i64) -> Result<()> {
        self.db.with_conn_mut(|conn| {
            conn.execute(
                "DELETE FROM course_users WHERE course_id = ?1 AND user_id = ?2",
                [course_id, user_id],
            )?;
            Ok(())
        })
    }

    pub fn is_assigned(&self, course_id: i64, user_id: i64) -> Result<bool> {
        self.db.with_conn(|conn| {
            let exists = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM course_users WHERE course_id = ?1 AND user_id = ?2)",
                [course_id, user_id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }
}

fn enrollment_from_row(row: &Row<'_>) -> rusqlite::Result<Enrollment> {
    Ok(Enrollment {
        course_id: row.get(0)?,
        user_id: row.get(1)?,
        email: row.get(2)?,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
        phone: row.get(5)?,
    })
}
