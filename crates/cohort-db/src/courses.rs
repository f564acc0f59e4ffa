use std::sync::Arc;

use rusqlite::{OptionalExtension, Row, params};
use rust_decimal::Decimal;

use cohort_types::Course;

use crate::error::Result;
use crate::{Database, contains_pattern};

/// Storage-backed access to course rows. Sole writer of the `courses` table.
#[derive(Clone)]
pub struct CourseRepository {
    db: Arc<Database>,
}

impl CourseRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a course and return the storage-assigned id. The id carried
    /// by `course` is ignored.
    pub fn create(&self, course: &Course) -> Result<i64> {
        self.db.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO courses (name, start, finished, price, teacher_name, schedule, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    course.name,
                    course.start,
                    course.finished,
                    course.price.to_string(),
                    course.teacher_name,
                    course.schedule,
                    course.notes,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// `None` when the id is unknown; absence is not an error.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.db.with_conn(|conn| {
            let course = conn
                .query_row(
                    "SELECT id, name, start, finished, price, teacher_name, schedule, notes
                     FROM courses WHERE id = ?1",
                    [id],
                    course_from_row,
                )
                .optional()?;
            Ok(course)
        })
    }

    /// Update every column except `price`. Succeeds without effect when the
    /// id does not exist; callers needing confirmation go through
    /// [`CourseRepository::get_by_id`] first.
    pub fn update_except_price(&self, course: &Course) -> Result<()> {
        self.db.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE courses
                 SET name = ?1, start = ?2, finished = ?3, teacher_name = ?4,
                     schedule = ?5, notes = ?6
                 WHERE id = ?7",
                params![
                    course.name,
                    course.start,
                    course.finished,
                    course.teacher_name,
                    course.schedule,
                    course.notes,
                    course.id,
                ],
            )?;
            Ok(())
        })
    }

    /// Case-insensitive substring match on name plus an exact match on the
    /// finished flag, in creation (id) order.
    pub fn search_by_name_and_status(&self, name: &str, finished: bool) -> Result<Vec<Course>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, start, finished, price, teacher_name, schedule, notes
                 FROM courses
                 WHERE name LIKE ?1 ESCAPE '\\' AND finished = ?2
                 ORDER BY id",
            )?;
            let courses = stmt
                .query_map(params![contains_pattern(name), finished], course_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(courses)
        })
    }

    /// Courses with a positive price, in creation order. Department-funded
    /// courses carry price zero and are left out.
    pub fn all_with_department(&self) -> Result<Vec<Course>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, start, finished, price, teacher_name, schedule, notes
                 FROM courses
                 WHERE CAST(price AS REAL) > 0.0
                 ORDER BY id",
            )?;
            let courses = stmt
                .query_map([], course_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(courses)
        })
    }

    pub fn count(&self) -> Result<i64> {
        self.db.with_conn(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM courses", [], |r| r.get(0))?)
        })
    }
}

/// Price travels as TEXT so currency amounts survive untouched by float
/// representation; it is parsed back to a decimal here.
fn course_from_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    let price: String = row.get(4)?;
    let price = price.parse::<Decimal>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Course {
        id: row.get(0)?,
        name: row.get(1)?,
        start: row.get(2)?,
        finished: row.get(3)?,
        price,
        teacher_name: row.get(5)?,
        schedule: row.get(6)?,
        notes: row.get(7)?,
    })
}
