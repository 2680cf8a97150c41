use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct AddressDto {
    pub id: Option<i32>,
    pub version: Option<i32>,
    pub house_name: Option<String>,
    pub street_no: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct PhoneDto {
    pub id: Option<i32>,
    pub version: Option<i32>,
    pub model: Option<String>,
    pub number: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ProjectDto {
    pub id: Option<i32>,
    pub version: Option<i32>,
    pub name: Option<String>,
}

/// Student representation returned by the API.
///
/// Associations are omitted from the JSON when they were not loaded for the
/// request (plain fetches), and present when the full graph was loaded.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub version: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<PhoneDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectDto>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateStudentDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressDto>,
    pub phones: Option<Vec<PhoneDto>>,
    pub projects: Option<Vec<ProjectDto>>,
}

/// Body shared by PUT and PATCH; the student id comes from the path.
///
/// `version` is required for PUT and optional for PATCH.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateStudentDto {
    pub version: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressDto>,
    pub phones: Option<Vec<PhoneDto>>,
    pub projects: Option<Vec<ProjectDto>>,
}
