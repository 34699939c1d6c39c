use tracing::{debug, warn};

use crate::engine::backend::LoadedNetwork;
use crate::error::{Error, Result};
use crate::layers::kind::LayerKind;
use crate::layers::layer::Layer;
use crate::network::config::NetworkConfig;

/// An open handle to a network loaded by an engine backend.
///
/// The handle owns the engine state. It is released exactly once: either by
/// [`close`](Network::close), which consumes the handle, or when the handle is
/// dropped on any other exit path (early `?` return, panic unwind).
///
/// Layer views are computed once, at load time, and copied out of the engine,
/// so repeated calls return the same layers in the same order.
pub struct Network {
    inner: Box<dyn LoadedNetwork>,
    name: String,
    batch_size: u32,
    layers: Vec<Layer>,
    input_layers: Vec<Layer>,
    output_layers: Vec<Layer>,
    released: bool,
}

impl Network {
    /// Wraps engine state in a handle. If the network lacks input or output
    /// layers the engine state is released before the error is returned.
    pub(crate) fn open(mut inner: Box<dyn LoadedNetwork>, config: &NetworkConfig) -> Result<Network> {
        let name = inner.name().to_string();
        let layers = inner.layers().to_vec();
        let select = |kind: LayerKind| -> Vec<Layer> {
            layers.iter().filter(|l| l.kind() == kind).cloned().collect()
        };
        let input_layers = select(LayerKind::Input);
        let output_layers = select(LayerKind::Output);

        for (kind, view) in [(LayerKind::Input, &input_layers), (LayerKind::Output, &output_layers)] {
            if view.is_empty() {
                warn!(network = %name, %kind, "network has no layers of required kind");
                inner.release();
                return Err(Error::NoLayers { kind, network: name });
            }
        }

        Ok(Network {
            inner,
            name,
            batch_size: config.batch_size(),
            layers,
            input_layers,
            output_layers,
            released: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }

    /// Layers the engine designates as network inputs, in declaration order.
    pub fn input_layers(&self) -> &[Layer] {
        &self.input_layers
    }

    /// Layers the engine designates as network outputs, in declaration order.
    pub fn output_layers(&self) -> &[Layer] {
        &self.output_layers
    }

    /// Every layer, in declaration order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_of(&self, kind: LayerKind) -> impl Iterator<Item = &Layer> + '_ {
        self.layers.iter().filter(move |l| l.kind() == kind)
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    /// Releases the engine resources. Dropping the handle does the same.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        debug!(network = %self.name, "releasing network");
        self.inner.release();
    }
}

impl Drop for Network {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Network")
            .field("name", &self.name)
            .field("batch_size", &self.batch_size)
            .field("layers", &self.layers)
            .finish()
    }
}
