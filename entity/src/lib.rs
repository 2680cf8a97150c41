//! SeaORM entity definitions for the student registry schema.
//!
//! The schema is a small entity graph rooted at `student`:
//!
//! - `address` - optional 1:1, owned through a unique `student_id` foreign key
//! - `phone` - 1:N, owned through a non-null `student_id` foreign key
//! - `project` - N:M, shared across students through the `student_project` junction
//!
//! Every entity table except the junction carries a `version` column used for
//! optimistic concurrency.

pub mod prelude;

pub mod address;
pub mod phone;
pub mod project;
pub mod student;
pub mod student_project;
