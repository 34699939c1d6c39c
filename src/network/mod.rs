pub mod config;
pub mod network;
pub mod spec;

pub use config::{NetworkConfig, NetworkConfigBuilder};
pub use network::Network;
pub use spec::{LayerSpec, NetworkSpec};
