pub mod dates;
pub mod training_stats;
