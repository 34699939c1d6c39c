use std::fmt;

use serde::{Deserialize, Serialize};

/// The role a layer plays inside a network.
///
/// - `Input`  — receives data fed to the network
/// - `Hidden` — internal layer, never exposed as an input or output view
/// - `Output` — produces the network's predictions
/// - `Target` — holds expected values during training
///
/// Ordinals match the engine's numbering (see [`LayerKind::ordinal`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Input,
    Hidden,
    Output,
    Target,
}

impl LayerKind {
    pub const ALL: [LayerKind; 4] = [LayerKind::Input, LayerKind::Hidden, LayerKind::Output, LayerKind::Target];

    pub fn ordinal(self) -> u32 {
        match self {
            LayerKind::Input => 0,
            LayerKind::Hidden => 1,
            LayerKind::Output => 2,
            LayerKind::Target => 3,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<LayerKind> {
        LayerKind::ALL.get(ordinal as usize).copied()
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LayerKind::Input => "Input",
            LayerKind::Hidden => "Hidden",
            LayerKind::Output => "Output",
            LayerKind::Target => "Target",
        };
        f.write_str(s)
    }
}

/// One named layer attribute, as written in network files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Sparse,
    Denoising,
    BatchNormalization,
}

impl Attribute {
    fn bit(self) -> u32 {
        match self {
            Attribute::Sparse => LayerAttributes::SPARSE.0,
            Attribute::Denoising => LayerAttributes::DENOISING.0,
            Attribute::BatchNormalization => LayerAttributes::BATCH_NORMALIZATION.0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Attribute::Sparse => "sparse",
            Attribute::Denoising => "denoising",
            Attribute::BatchNormalization => "batch_normalization",
        }
    }
}

const ATTRIBUTES: [Attribute; 3] = [Attribute::Sparse, Attribute::Denoising, Attribute::BatchNormalization];

/// Bit set of layer attributes, using the engine's bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerAttributes(u32);

impl LayerAttributes {
    pub const NONE: LayerAttributes = LayerAttributes(0x0);
    pub const SPARSE: LayerAttributes = LayerAttributes(0x1);
    pub const DENOISING: LayerAttributes = LayerAttributes(0x2);
    pub const BATCH_NORMALIZATION: LayerAttributes = LayerAttributes(0x4);

    pub fn from_bits(bits: u32) -> LayerAttributes {
        LayerAttributes(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: LayerAttributes) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Attributes present in this set, in bit order.
    pub fn iter(self) -> impl Iterator<Item = Attribute> {
        ATTRIBUTES.into_iter().filter(move |a| self.0 & a.bit() != 0)
    }
}

impl FromIterator<Attribute> for LayerAttributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        LayerAttributes(iter.into_iter().fold(0, |bits, a| bits | a.bit()))
    }
}

impl std::ops::BitOr for LayerAttributes {
    type Output = LayerAttributes;

    fn bitor(self, rhs: LayerAttributes) -> LayerAttributes {
        LayerAttributes(self.0 | rhs.0)
    }
}

impl fmt::Display for LayerAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(Attribute::name).collect();
        f.write_str(&names.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        for kind in LayerKind::ALL {
            assert_eq!(LayerKind::from_ordinal(kind.ordinal()), Some(kind));
        }
        assert_eq!(LayerKind::from_ordinal(4), None);
    }

    #[test]
    fn test_attributes_from_names() {
        let attrs: LayerAttributes = vec![Attribute::Sparse, Attribute::BatchNormalization].into_iter().collect();
        assert_eq!(attrs.bits(), 0x5);
        assert!(attrs.contains(LayerAttributes::SPARSE));
        assert!(!attrs.contains(LayerAttributes::DENOISING));
        assert_eq!(attrs.to_string(), "sparse|batch_normalization");
        assert_eq!(LayerAttributes::NONE.to_string(), "none");
    }

    #[test]
    fn test_kind_serde_names() {
        let kind: LayerKind = serde_json::from_str("\"target\"").unwrap();
        assert_eq!(kind, LayerKind::Target);
        let attr: Attribute = serde_json::from_str("\"batch_normalization\"").unwrap();
        assert_eq!(attr, Attribute::BatchNormalization);
    }
}
