//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of conversion and validation logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::student::entity();
//! let stale = fixture::student::entity_builder().version(7).build();
//! ```

pub mod address;
pub mod phone;
pub mod project;
pub mod student;
