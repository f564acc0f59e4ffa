use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub start: NaiveDate,
    pub finished: bool,
    /// Tuition in currency units. Zero marks a department-funded course.
    pub price: Decimal,
    pub teacher_name: Option<String>,
    pub schedule: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// Stored in the legacy encoded form, never as plaintext.
    pub password: Option<String>,
}

/// One row of the course/user join relation.
///
/// Contact fields are copied from the user at assignment time and stay
/// frozen afterwards; later edits to the user do not reach back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub course_id: i64,
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl Enrollment {
    /// Capture `user`'s current contact fields for `course_id`.
    pub fn snapshot(course_id: i64, user: &User) -> Self {
        Self {
            course_id,
            user_id: user.user_id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
        }
    }
}
