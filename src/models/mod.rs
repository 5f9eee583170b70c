pub mod analytics;
pub mod crowd;
pub mod error;
pub mod prediction;
pub mod station;
