//! Scoped network handles over a pluggable inference engine.
//!
//! ```no_run
//! use dsstne::NetworkConfig;
//!
//! # fn main() -> dsstne::Result<()> {
//! let config = NetworkConfig::with().network_file_path("models/gl.json").build()?;
//! let network = dsstne::load(config)?;
//! for layer in network.input_layers() {
//!     println!("Found input layer: {}", layer);
//! }
//! for layer in network.output_layers() {
//!     println!("Found output layer: {}", layer);
//! }
//! network.close();
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod layers;
pub mod network;

// Convenience re-exports
pub use engine::{load, load_with, Backend, JsonBackend, LoadedNetwork};
pub use error::{Error, ErrorKind, Result};
pub use layers::{Attribute, Dimensions, Layer, LayerAttributes, LayerKind};
pub use network::{LayerSpec, Network, NetworkConfig, NetworkConfigBuilder, NetworkSpec};
