//! Data module - dataset download, parsing, and typed records

mod dataset;
mod loader;

pub use dataset::{LaunchDataset, LaunchRecord};
pub use loader::{DataLoader, LoaderError, DATA_URL};
