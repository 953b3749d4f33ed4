pub mod feedback_log;

pub use feedback_log::write_feedback_log;
