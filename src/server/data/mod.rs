//! Database repository layer for the student graph.
//!
//! Repositories handle CRUD and query operations for each entity. They are
//! generic over `ConnectionTrait` so the service layer can run them on a
//! `DatabaseTransaction` while tests run them directly on a connection.
//!
//! Versioned writes are conditional on the version the caller read
//! (`WHERE id = ? AND version = ?`) and report a lost race as `Ok(None)`
//! rather than an error, leaving the service to decide how to surface it.

pub mod address;
pub mod phone;
pub mod project;
pub mod student;

#[cfg(test)]
mod test;
