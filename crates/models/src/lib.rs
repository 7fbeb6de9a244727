pub mod association;
pub mod course;
pub mod lecturer;
pub mod term;
pub mod validation;
