pub use super::address::Entity as Address;
pub use super::phone::Entity as Phone;
pub use super::project::Entity as Project;
pub use super::student::Entity as Student;
pub use super::student_project::Entity as StudentProject;
