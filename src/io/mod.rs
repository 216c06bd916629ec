/// Command-line parsing and output orchestration
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error type shared by the harness
pub mod error;
/// PNG export
pub mod image;
/// Fill and outline colors
pub mod palette;
/// Progress bars for long generations
pub mod progress;
/// Scanline rasterizer
pub mod raster;
/// Renderer abstraction over output surfaces
pub mod render;
/// SVG export
pub mod svg;
/// Per-generation animation capture
pub mod visualization;
