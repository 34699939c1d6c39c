pub mod backend;
pub mod json;
pub mod loader;

pub use backend::{Backend, LoadedNetwork};
pub use json::JsonBackend;
pub use loader::{load, load_with};
