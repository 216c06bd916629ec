//! Runtime defaults and limits

// Reference surface
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 960;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 540;

// Tile counts grow roughly 3.4x per generation without effective deduplication
/// Default number of deflations
pub const DEFAULT_GENERATIONS: u32 = 7;
/// Maximum accepted number of deflations
pub const MAX_GENERATIONS: u32 = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Decimal digits kept by quantized deduplication unless overridden
pub const DEFAULT_QUANTIZATION_DIGITS: u32 = 6;

// Output settings
/// Output written when no path is given
pub const DEFAULT_OUTPUT: &str = "penrose.png";
/// Delay between generation frames in animations
pub const GIF_FRAME_DELAY_MS: u32 = 1000;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// The last animation frame is held this many times longer
pub const FINAL_FRAME_HOLD_FACTOR: u32 = 3;

/// Outline width in pixels for raster and vector output
pub const OUTLINE_WIDTH: f64 = 1.0;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
