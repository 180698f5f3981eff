pub mod performance;
pub mod resume;
