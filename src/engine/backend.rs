use crate::error::Result;
use crate::layers::layer::Layer;
use crate::network::config::NetworkConfig;

/// Engine-side state for one loaded network.
///
/// A `LoadedNetwork` is owned by exactly one [`Network`](crate::Network)
/// handle, which calls [`release`](LoadedNetwork::release) once when the
/// handle is closed or dropped.
pub trait LoadedNetwork: Send {
    /// Name the engine reports for this network.
    fn name(&self) -> &str;

    /// Every layer of the network, in declaration order.
    fn layers(&self) -> &[Layer];

    /// Frees the engine resources backing this network.
    fn release(&mut self);
}

/// An inference engine able to open network files.
pub trait Backend {
    /// Opens the network named by `config`. On error nothing is left to release.
    fn open(&self, config: &NetworkConfig) -> Result<Box<dyn LoadedNetwork>>;
}
