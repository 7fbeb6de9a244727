pub mod association;
pub mod course;
pub mod lecturer;
pub mod pagination;
pub mod term;
