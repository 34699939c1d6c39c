use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layers::kind::{Attribute, LayerKind};
use crate::layers::layer::{Dimensions, Layer};

/// Describes one layer in a network file.
///
/// Fields:
/// - `name`       — unique name of the layer within the network
/// - `kind`       — role of the layer (`input`, `hidden`, `output`, `target`)
/// - `dimensions` — 1 to 4 axis sizes, none of them zero
/// - `attributes` — optional flags (`sparse`, `denoising`, `batch_normalization`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub name: String,
    pub kind: LayerKind,
    pub dimensions: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl LayerSpec {
    pub fn new(name: impl Into<String>, kind: LayerKind, dimensions: Vec<u32>) -> LayerSpec {
        LayerSpec { name: name.into(), kind, dimensions, attributes: Vec::new() }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> LayerSpec {
        self.attributes = attributes;
        self
    }
}

/// A serializable description of a network's layer structure.
///
/// This is the on-disk format read by the JSON engine backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable network name; appears in error messages and logs.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered list of layer descriptions, in declaration order.
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// Serializes the spec to a pretty-printed JSON file.
    ///
    /// The document is rendered in memory first, so write failures surface as
    /// `Error::Io` instead of being lost when a buffered writer is dropped.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_vec_pretty(self)
            .map_err(|e| Error::Serialize { path: path.to_path_buf(), source: e })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkSpec> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound { path: path.to_path_buf(), source: e },
            _ => Error::Io(e),
        })?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| Error::Parse { path: path.to_path_buf(), source: e })
    }

    /// Checks the structure and converts every layer into a descriptor,
    /// keeping declaration order.
    pub fn to_layers(&self) -> Result<Vec<Layer>> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid(&self.name, "network name must not be empty"));
        }
        if self.layers.is_empty() {
            return Err(Error::invalid(&self.name, "network declares no layers"));
        }

        let mut seen = HashSet::new();
        let mut layers = Vec::with_capacity(self.layers.len());
        for spec in &self.layers {
            if spec.name.trim().is_empty() {
                return Err(Error::invalid(&self.name, "layer name must not be empty"));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(Error::invalid(&self.name, format!("duplicate layer name '{}'", spec.name)));
            }
            let dimensions = Dimensions::from_axes(&spec.dimensions).ok_or_else(|| {
                Error::invalid(
                    &self.name,
                    format!(
                        "layer '{}' must declare 1 to {} non-zero dimensions, got {:?}",
                        spec.name,
                        Dimensions::MAX_AXES,
                        spec.dimensions
                    ),
                )
            })?;
            let attributes = spec.attributes.iter().copied().collect();
            layers.push(Layer::new(spec.name.clone(), spec.kind, attributes, dimensions));
        }
        Ok(layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn spec(layers: Vec<LayerSpec>) -> NetworkSpec {
        NetworkSpec { name: "gl".to_string(), description: None, layers }
    }

    #[test]
    fn test_to_layers_keeps_order() {
        let spec = spec(vec![
            LayerSpec::new("input", LayerKind::Input, vec![128]).with_attributes(vec![Attribute::Sparse]),
            LayerSpec::new("hidden", LayerKind::Hidden, vec![64]),
            LayerSpec::new("output", LayerKind::Output, vec![128]),
        ]);
        let layers = spec.to_layers().unwrap();
        let names: Vec<&str> = layers.iter().map(Layer::name).collect();
        assert_eq!(names, ["input", "hidden", "output"]);
        assert!(layers[0].is_sparse());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let spec = spec(vec![
            LayerSpec::new("a", LayerKind::Input, vec![4]),
            LayerSpec::new("a", LayerKind::Output, vec![4]),
        ]);
        let err = spec.to_layers().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_NETWORK");
        assert!(err.to_string().contains("duplicate layer name 'a'"));
    }

    #[test]
    fn test_bad_dimensions_rejected() {
        let zero = spec(vec![LayerSpec::new("a", LayerKind::Input, vec![4, 0])]);
        assert_eq!(zero.to_layers().unwrap_err().kind(), ErrorKind::Io);

        let none = spec(vec![LayerSpec::new("a", LayerKind::Input, vec![])]);
        assert!(none.to_layers().is_err());
    }

    #[test]
    fn test_empty_network_rejected() {
        assert!(spec(vec![]).to_layers().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gl.json");
        let saved = spec(vec![
            LayerSpec::new("in", LayerKind::Input, vec![2, 3]).with_attributes(vec![Attribute::Denoising]),
            LayerSpec::new("out", LayerKind::Output, vec![6]),
        ]);
        saved.save_json(&path).unwrap();

        let loaded = NetworkSpec::load_json(&path).unwrap();
        assert_eq!(loaded.to_layers().unwrap(), saved.to_layers().unwrap());
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = spec(vec![]).save_json(dir.path().join("missing").join("gl.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_save_to_full_device_reports_write_failure() {
        let err = spec(vec![LayerSpec::new("in", LayerKind::Input, vec![1])])
            .save_json("/dev/full")
            .unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }

    #[test]
    fn test_parse_from_str() {
        let json = r#"{
            "name": "gl",
            "layers": [
                { "name": "in",  "kind": "input",  "dimensions": [10, 10], "attributes": ["denoising"] },
                { "name": "out", "kind": "output", "dimensions": [3] }
            ]
        }"#;
        let spec: NetworkSpec = serde_json::from_str(json).unwrap();
        assert!(spec.description.is_none());
        let layers = spec.to_layers().unwrap();
        assert!(layers[0].is_denoising());
        assert_eq!(layers[0].dimensions().count(), 2);
        assert!(layers[1].attributes().is_empty());
    }
}
