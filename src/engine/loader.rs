use tracing::{debug, info};

use crate::engine::backend::Backend;
use crate::engine::json::JsonBackend;
use crate::error::Result;
use crate::network::config::NetworkConfig;
use crate::network::network::Network;

/// Loads the network described by `config` from a JSON network file.
pub fn load(config: NetworkConfig) -> Result<Network> {
    load_with(&JsonBackend, config)
}

/// Loads the network described by `config` through `backend`.
///
/// Blocks until the engine has opened the file. The returned handle must be
/// closed or dropped to free engine resources; on error nothing needs freeing.
pub fn load_with<B: Backend + ?Sized>(backend: &B, config: NetworkConfig) -> Result<Network> {
    debug!(
        path = %config.network_file_path().display(),
        batch_size = config.batch_size(),
        "loading network"
    );
    let inner = backend.open(&config)?;
    let network = Network::open(inner, &config)?;
    info!(
        network = %network.name(),
        inputs = network.input_layers().len(),
        outputs = network.output_layers().len(),
        "loaded network"
    );
    Ok(network)
}
