//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database
//! operations, and follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Payload reconciliation and transaction boundaries
//! - **Data Layer** (`data/`) - Repositories and the join query layer
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database connection)
//! - **Startup** (`startup`) - Tracing, database connection and HTTP layers
//! - **Router** (`router`) - Route table, OpenAPI document and Swagger UI
//! - **Util** (`util/`) - The optimistic concurrency check
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** converts the DTO to params and calls the service
//! 3. **Service** opens a transaction, checks versions and reconciles the graph
//! 4. **Data** queries the database through the transaction
//! 5. **Controller** converts the domain model to a DTO for the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
