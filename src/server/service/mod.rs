//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They reconcile nested student payloads against the persisted graph,
//! apply the optimistic concurrency checks and own the transaction boundary
//! of each operation. They work with domain models rather than DTOs or entity
//! models.

pub mod project;
pub mod student;

#[cfg(test)]
mod test;
