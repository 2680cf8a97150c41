//! Address fixtures for creating in-memory test data.

use entity::address;

/// Creates an address entity model owned by student `1`.
///
/// # Default Values
/// - id: `1`
/// - student_id: `1`
/// - house_name: `"Rose Cottage"`
/// - street_no: `"12"`
/// - city: `"Arlington"`
/// - state: `"Virginia"`
/// - country: `"USA"`
/// - version: `0`
pub fn entity() -> address::Model {
    address::Model {
        id: 1,
        student_id: 1,
        house_name: Some("Rose Cottage".to_string()),
        street_no: Some("12".to_string()),
        city: Some("Arlington".to_string()),
        state: Some("Virginia".to_string()),
        country: Some("USA".to_string()),
        version: 0,
    }
}
