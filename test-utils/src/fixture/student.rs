//! Student fixtures for creating in-memory test data.

use entity::student;

pub const DEFAULT_ID: i32 = 1;
pub const DEFAULT_FIRST_NAME: &str = "Grace";
pub const DEFAULT_LAST_NAME: &str = "Hopper";
pub const DEFAULT_EMAIL: &str = "grace@example.com";
pub const DEFAULT_VERSION: i32 = 0;

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - first_name: `"Grace"`
/// - last_name: `"Hopper"`
/// - email: `"grace@example.com"`
/// - version: `0`
pub fn entity() -> student::Model {
    entity_builder().build()
}

/// Creates a student entity builder for customization.
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder {
        model: student::Model {
            id: DEFAULT_ID,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            version: DEFAULT_VERSION,
        },
    }
}

/// Builder for in-memory student entity models.
pub struct StudentEntityBuilder {
    model: student::Model,
}

impl StudentEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.model.email = email.into();
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.model.version = version;
        self
    }

    pub fn build(self) -> student::Model {
        self.model
    }
}
