pub mod course;
pub mod course_description;
pub mod course_lecturer;
pub mod course_note;
pub mod course_offering_term;
pub mod lecturer;
pub mod term;
