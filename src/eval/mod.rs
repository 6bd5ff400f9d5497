pub mod cost;

pub use cost::{forward, grid_cost, target, GRID_SIZE};
