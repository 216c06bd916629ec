//! Command-line interface for rendering tilings to PNG, SVG and animated GIF

use crate::algorithm::cache::{TilingCache, TilingKey};
use crate::algorithm::dedup::{DedupStrategy, MAX_QUANTIZATION_DIGITS};
use crate::algorithm::deflation::Deflator;
use crate::algorithm::seeding::seed_prototiles;
use crate::io::configuration::{
    DEFAULT_GENERATIONS, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_QUANTIZATION_DIGITS,
    DEFAULT_WIDTH, GIF_FRAME_DELAY_MS, MAX_CANVAS_DIMENSION, MAX_GENERATIONS,
};
use crate::io::error::{Result, invalid_parameter, unsupported_format};
use crate::io::image::export_png;
use crate::io::palette::{Palette, PaletteName};
use crate::io::progress::ProgressManager;
use crate::io::svg::export_svg;
use crate::io::visualization::GenerationCapture;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Duplicate matching selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DedupMode {
    /// Exact floating-point match
    #[default]
    Exact,
    /// Match after rounding to `--digits` decimal digits
    Quantized,
}

#[derive(Parser)]
#[command(name = "kitedart")]
#[command(
    author,
    version,
    about = "Generate Penrose kite and dart tilings by recursive deflation"
)]
/// Command-line arguments for the tiling generator
pub struct Cli {
    /// Output file; repeat for several. The extension selects PNG, SVG or animated GIF
    #[arg(short, long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub outputs: Vec<PathBuf>,

    /// Canvas width in pixels
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Number of deflations applied to the sun
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u32,

    /// How duplicate tiles are matched after each generation. Exact matching keeps
    /// tiles that differ only by rounding error, so deep tilings draw many tiles twice;
    /// pick quantized to merge them
    #[arg(short, long, value_enum, default_value_t = DedupMode::Exact)]
    pub dedup: DedupMode,

    /// Decimal digits kept by quantized matching
    #[arg(long, default_value_t = DEFAULT_QUANTIZATION_DIGITS)]
    pub digits: u32,

    /// Fill and outline colors
    #[arg(short, long, value_enum, default_value_t = PaletteName::Classic)]
    pub palette: PaletteName,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write outputs even if they already exist
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Deduplication strategy selected by `--dedup` and `--digits`
    pub const fn dedup_strategy(&self) -> DedupStrategy {
        match self.dedup {
            DedupMode::Exact => DedupStrategy::Exact,
            DedupMode::Quantized => DedupStrategy::Quantized {
                digits: self.digits,
            },
        }
    }

    /// Colors selected by `--palette`
    pub const fn palette(&self) -> Palette {
        Palette::named(self.palette)
    }

    /// Check dimensions, generation count and deduplication settings
    ///
    /// # Errors
    ///
    /// Returns an error naming the first parameter out of range
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
                ));
            }
        }

        if self.generations > MAX_GENERATIONS {
            return Err(invalid_parameter(
                "generations",
                &self.generations,
                &format!("must be at most {MAX_GENERATIONS}"),
            ));
        }

        if self.dedup == DedupMode::Quantized
            && !(1..=MAX_QUANTIZATION_DIGITS).contains(&self.digits)
        {
            return Err(invalid_parameter(
                "digits",
                &self.digits,
                &format!("must be between 1 and {MAX_QUANTIZATION_DIGITS}"),
            ));
        }

        Ok(())
    }

    /// Cache key for the final tiling
    pub const fn tiling_key(&self) -> TilingKey {
        TilingKey::new(
            self.width as f64,
            self.height as f64,
            self.generations as i32,
            self.dedup_strategy(),
        )
    }
}

/// File formats recognised by extension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raster image of the final generation
    Png,
    /// Vector image of the final generation
    Svg,
    /// Animation with one frame per generation
    Gif,
}

impl OutputFormat {
    /// Format for `path`, by case-insensitive extension
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is missing or not png, svg or gif
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            Some("gif") => Ok(Self::Gif),
            _ => Err(unsupported_format(path)),
        }
    }
}

/// Orchestrates tiling generation and export with progress tracking
pub struct TilingProcessor {
    cli: Cli,
    cache: TilingCache,
    progress_manager: Option<ProgressManager>,
}

impl TilingProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            cache: TilingCache::new(),
            progress_manager,
        }
    }

    /// Tilings computed so far
    pub const fn cache(&self) -> &TilingCache {
        &self.cache
    }

    /// Generate and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, format detection or any export fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let outputs = self.collect_outputs()?;

        if outputs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(outputs.len());
        }

        for (index, (path, format)) in outputs.iter().enumerate() {
            self.process_output(index, path, *format)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        tracing::debug!(
            hits = self.cache.stats.hits,
            misses = self.cache.stats.misses,
            "tiling cache usage"
        );

        Ok(())
    }

    fn collect_outputs(&self) -> Result<Vec<(PathBuf, OutputFormat)>> {
        let mut outputs = Vec::with_capacity(self.cli.outputs.len());

        for path in &self.cli.outputs {
            let format = OutputFormat::from_path(path)?;
            if self.should_write(path) {
                outputs.push((path.clone(), format));
            }
        }

        Ok(outputs)
    }

    fn should_write(&self, path: &Path) -> bool {
        if self.cli.skip_existing() && path.exists() {
            tracing::warn!(path = %path.display(), "skipping output that already exists");
            false
        } else {
            true
        }
    }

    fn process_output(&mut self, index: usize, path: &Path, format: OutputFormat) -> Result<()> {
        let start_time = Instant::now();
        let generations = self.cli.generations as usize;
        let (width, height) = (self.cli.width, self.cli.height);
        let palette = self.cli.palette();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_output(index, path, generations);
        }

        let progress = &mut self.progress_manager;
        let mut report_generation = |generation: usize| {
            if let Some(pm) = progress.as_mut() {
                pm.update_generation(index, generation);
            }
        };

        let tile_count = match format {
            OutputFormat::Png | OutputFormat::Svg => {
                let tiles = self
                    .cache
                    .tiling_with(self.cli.tiling_key(), |report| {
                        report_generation(report.generation);
                    });

                if format == OutputFormat::Png {
                    export_png(tiles, width, height, &palette, path)?;
                } else {
                    export_svg(tiles, width, height, &palette, path)?;
                }
                tiles.len()
            }
            OutputFormat::Gif => {
                let deflator = Deflator::new(self.cli.dedup_strategy());
                let mut capture = GenerationCapture::new(width, height, palette);
                capture.capture_generations(
                    &deflator,
                    seed_prototiles(f64::from(width), f64::from(height)),
                    self.cli.generations,
                    &mut report_generation,
                );
                capture.export_gif(path, self.cli.frame_delay)?;
                capture.frame_count()
            }
        };

        let elapsed = start_time.elapsed();
        tracing::info!(
            path = %path.display(),
            ?format,
            count = tile_count,
            elapsed_ms = elapsed.as_millis(),
            "wrote output"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_output(index, elapsed);
        }

        Ok(())
    }
}
