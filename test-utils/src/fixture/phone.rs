//! Phone fixtures for creating in-memory test data.

use entity::phone;

/// Creates a phone entity model owned by student `1`.
///
/// # Default Values
/// - id: `1`
/// - student_id: `1`
/// - model: `"Pixel"`
/// - number: `"555-0100"`
/// - version: `0`
pub fn entity() -> phone::Model {
    phone::Model {
        id: 1,
        student_id: 1,
        model: Some("Pixel".to_string()),
        number: Some("555-0100".to_string()),
        version: 0,
    }
}
