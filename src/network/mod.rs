pub mod buffer;
pub mod layout;
pub mod params;

pub use buffer::ActivationBuffer;
pub use layout::LayerLayout;
pub use params::NetworkParams;
