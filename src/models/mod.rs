//! Domain models and request payloads

pub mod book;
pub mod loan;
pub mod student;
pub mod user;
