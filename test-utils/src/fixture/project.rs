//! Project fixtures for creating in-memory test data.

use entity::project;

/// Creates a project entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Compiler"`
/// - version: `0`
pub fn entity() -> project::Model {
    project::Model {
        id: 1,
        name: Some("Compiler".to_string()),
        version: 0,
    }
}
