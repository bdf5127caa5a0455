mod error;
pub mod layout;
mod quiz;
mod summary;

pub use error::draw_load_error;
pub use layout::calculate_quiz_chunks;
pub use quiz::draw_quiz;
pub use summary::draw_review;
