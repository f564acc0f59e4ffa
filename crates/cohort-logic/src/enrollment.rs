use std::sync::Arc;

use tracing::debug;

use cohort_db::{Database, EnrollmentRepository, Result, UserSearchIndex};
use cohort_types::{Enrollment, SearchFilter, User};

/// Candidate search and enrollment changes for one course at a time.
///
/// Assignment is deliberately not idempotent: a second assign of the same
/// pair surfaces [`cohort_db::StorageError::DuplicateEnrollment`]. Removal
/// is idempotent. Callers wanting idempotent assignment probe
/// `is_assigned` on the repository first and accept the race that implies.
#[derive(Clone)]
pub struct EnrollmentService {
    users: UserSearchIndex,
    enrollments: EnrollmentRepository,
}

impl EnrollmentService {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            users: UserSearchIndex::new(db.clone()),
            enrollments: EnrollmentRepository::new(db),
        }
    }

    /// Users matching `filter` that are not yet assigned to `course_id`,
    /// in search order.
    pub fn find_eligible_candidates(
        &self,
        course_id: i64,
        filter: &SearchFilter,
    ) -> Result<Vec<User>> {
        debug!("searching assignment candidates for course {}", course_id);
        let mut eligible = Vec::new();
        for user in self.users.search(filter)? {
            if !self.enrollments.is_assigned(course_id, user.user_id)? {
                eligible.push(user);
            }
        }
        Ok(eligible)
    }

    /// Snapshot the user's current contact fields into a new enrollment.
    pub fn assign_user(&self, course_id: i64, user: &User) -> Result<()> {
        debug!("assigning user {} to course {}", user.user_id, course_id);
        self.enrollments.assign(&Enrollment::snapshot(course_id, user))
    }

    /// Drop the user from the course. Succeeds whether or not the pair was
    /// assigned.
    pub fn remove_user(&self, course_id: i64, user_id: i64) -> Result<()> {
        debug!("removing user {} from course {}", user_id, course_id);
        self.enrollments.remove(course_id, user_id)
    }
}
