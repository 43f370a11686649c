pub mod essay;
pub mod export;
pub mod lighthouse;
pub mod loader;
pub mod resource;
pub mod validate;
pub mod verify;

pub use verify::verify_dataset;
