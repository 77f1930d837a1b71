/// Command-line interface
pub mod cli;
/// Geometry constants and default paths
pub mod configuration;
/// Error types
pub mod error;
/// Raster loading, saving and pasting
pub mod image;
/// Progress display
pub mod progress;
/// Palette and color table persistence
pub mod store;
