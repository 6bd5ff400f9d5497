pub mod generation_stats;
pub mod loop_fn;
pub mod train_config;
pub mod trainer;

pub use generation_stats::GenerationStats;
pub use loop_fn::train_loop;
pub use train_config::TrainConfig;
pub use trainer::run_generation;
