use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layers::kind::{LayerAttributes, LayerKind};

/// Extent of a layer along up to four axes. Undeclared axes are 1.
///
/// Always holds 1..=4 declared axes, none of them zero. Serialized as the
/// list of declared axes and validated through [`Dimensions::from_axes`]
/// when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Dimensions {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
    count: u32,
}

impl Dimensions {
    pub const MAX_AXES: usize = 4;

    /// Builds dimensions from the declared axis sizes.
    /// Returns `None` unless 1..=4 axes are given and none of them is zero.
    pub fn from_axes(axes: &[u32]) -> Option<Dimensions> {
        if axes.is_empty() || axes.len() > Self::MAX_AXES || axes.contains(&0) {
            return None;
        }
        let at = |i: usize| axes.get(i).copied().unwrap_or(1);
        Some(Dimensions { x: at(0), y: at(1), z: at(2), w: at(3), count: axes.len() as u32 })
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn z(&self) -> u32 {
        self.z
    }

    pub fn w(&self) -> u32 {
        self.w
    }

    /// Number of declared axes (1..=4).
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The declared axes only.
    pub fn axes(&self) -> Vec<u32> {
        [self.x, self.y, self.z, self.w].into_iter().take(self.count as usize).collect()
    }

    /// Total number of units in the layer, or `None` if it does not fit in a `u64`.
    pub fn size(&self) -> Option<u64> {
        [self.x, self.y, self.z, self.w]
            .into_iter()
            .try_fold(1u64, |acc, axis| acc.checked_mul(axis as u64))
    }
}

impl TryFrom<Vec<u32>> for Dimensions {
    type Error = String;

    fn try_from(axes: Vec<u32>) -> Result<Self, Self::Error> {
        Dimensions::from_axes(&axes).ok_or_else(|| {
            format!("expected 1 to {} non-zero dimensions, got {:?}", Dimensions::MAX_AXES, axes)
        })
    }
}

impl From<Dimensions> for Vec<u32> {
    fn from(dimensions: Dimensions) -> Vec<u32> {
        dimensions.axes()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axes: Vec<String> = self.axes().iter().map(u32::to_string).collect();
        f.write_str(&axes.join("x"))
    }
}

/// Read-only description of one layer of a loaded network.
///
/// A `Layer` is a plain value copied out of the engine at load time; it holds
/// no reference back to the network it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    name: String,
    kind: LayerKind,
    attributes: LayerAttributes,
    dimensions: Dimensions,
}

impl Layer {
    pub fn new(name: impl Into<String>, kind: LayerKind, attributes: LayerAttributes, dimensions: Dimensions) -> Layer {
        Layer { name: name.into(), kind, attributes, dimensions }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn attributes(&self) -> LayerAttributes {
        self.attributes
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn is_sparse(&self) -> bool {
        self.attributes.contains(LayerAttributes::SPARSE)
    }

    pub fn is_denoising(&self) -> bool {
        self.attributes.contains(LayerAttributes::DENOISING)
    }

    pub fn is_batch_normalized(&self) -> bool {
        self.attributes.contains(LayerAttributes::BATCH_NORMALIZATION)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (kind={}, dims={}, attributes={})",
            self.name, self.kind, self.dimensions, self.attributes
        )
    }
}
