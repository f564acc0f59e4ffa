//! Shared domain types for the course administration backend.
//!
//! Kept dependency-light on purpose: storage and logic crates both build on
//! these definitions, so nothing here may know about SQL or services.

pub mod models;
pub mod search;

pub use models::{Course, Enrollment, User};
pub use search::{SearchField, SearchFilter};
