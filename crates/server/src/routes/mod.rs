pub mod association;
pub mod course;
pub mod course_content;
pub mod health;
pub mod lecturer;
pub mod root;
pub mod term;
