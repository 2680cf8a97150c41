//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! directly through SeaORM and bypass the service layer, so they are the way to set up
//! persisted state (including specific versions) before exercising the code under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_student(&db).await?;
//! let phone = factory::create_phone(&db, student.id).await?;
//! let project = factory::create_project(&db).await?;
//! factory::link_project(&db, student.id, project.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `student` - Create student entities
//! - `address` - Create address entities owned by a student
//! - `phone` - Create phone entities owned by a student
//! - `project` - Create project entities
//! - `helpers` - Junction rows and whole student graphs

pub mod address;
pub mod helpers;
pub mod phone;
pub mod project;
pub mod student;

pub use address::create_address;
pub use helpers::{create_student_graph, link_project};
pub use phone::create_phone;
pub use project::create_project;
pub use student::create_student;
