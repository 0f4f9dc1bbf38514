pub mod applications;
pub mod auth;
pub mod dashboard;
pub mod scholarships;
pub mod students;
pub mod users;
