//! Business layer over the storage crate.
//!
//! Thin on purpose: operations compose repository calls and add no locking
//! of their own. Consistency under concurrent callers comes from the
//! storage constraints underneath.

pub mod enrollment;

pub use enrollment::EnrollmentService;
