use tracing::debug;

use crate::engine::backend::{Backend, LoadedNetwork};
use crate::error::Result;
use crate::layers::layer::Layer;
use crate::network::config::NetworkConfig;
use crate::network::spec::NetworkSpec;

/// Backend that reads JSON network descriptions written by
/// [`NetworkSpec::save_json`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend;

impl Backend for JsonBackend {
    fn open(&self, config: &NetworkConfig) -> Result<Box<dyn LoadedNetwork>> {
        let spec = NetworkSpec::load_json(config.network_file_path())?;
        let layers = spec.to_layers()?;
        debug!(network = %spec.name, layers = layers.len(), "parsed network description");
        Ok(Box::new(JsonNetwork { name: spec.name, layers }))
    }
}

#[derive(Debug)]
struct JsonNetwork {
    name: String,
    layers: Vec<Layer>,
}

impl LoadedNetwork for JsonNetwork {
    fn name(&self) -> &str {
        &self.name
    }

    fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn release(&mut self) {
        // Everything is heap memory; drop it now rather than with the handle.
        self.layers = Vec::new();
    }
}
