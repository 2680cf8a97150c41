mod phone;
mod project;
mod student;
