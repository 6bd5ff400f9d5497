pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod eval;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::sigmoid;
pub use network::layout::LayerLayout;
pub use network::params::NetworkParams;
pub use network::buffer::ActivationBuffer;
pub use loss::sse::SseLoss;
pub use eval::cost::{forward, grid_cost, GRID_SIZE};
pub use optim::sgd::Sgd;
pub use train::trainer::run_generation;
pub use train::loop_fn::train_loop;
pub use train::train_config::TrainConfig;
pub use train::generation_stats::GenerationStats;
