//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Each nested entity also has a
//! `*Fields` type holding exactly the columns a write touches, and a `*Params`
//! type carrying an incoming payload entry (optional id and version plus fields).

pub mod address;
pub mod phone;
pub mod project;
pub mod student;
