use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Kind of entity in the student graph, used to label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Student,
    Address,
    Phone,
    Project,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Student => "Student",
            Self::Address => "Address",
            Self::Phone => "Phone",
            Self::Project => "Project",
        };
        f.write_str(name)
    }
}

/// Failures raised by the reconciliation logic.
///
/// Each of these aborts the enclosing transaction, so none of the payload is
/// persisted when one is returned.
#[derive(Error, Debug)]
pub enum DomainError {
    /// An id in the request does not resolve to a persisted entity.
    ///
    /// Results in 404 Not Found.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: i32 },

    /// The version supplied by the caller does not match the persisted version,
    /// or a versioned write lost a race with another writer.
    ///
    /// Results in 409 Conflict.
    #[error("{0}")]
    VersionConflict(String),

    /// A field required by the operation is missing.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(kind: EntityKind, id: i32) -> Self {
        Self::NotFound { kind, id }
    }
}

/// Converts domain errors into HTTP responses.
///
/// Messages are safe to return verbatim: they only mention entity kinds, ids
/// and versions the caller already knows about.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `VersionConflict`
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::VersionConflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
