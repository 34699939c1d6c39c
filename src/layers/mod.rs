pub mod kind;
pub mod layer;

pub use kind::{Attribute, LayerAttributes, LayerKind};
pub use layer::{Dimensions, Layer};
