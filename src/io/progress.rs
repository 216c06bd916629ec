//! Per-output progress tracking with automatic batching for many outputs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Outputs: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// State of one output being produced
#[derive(Clone, Debug, Default)]
struct OutputState {
    name: String,
    generation: usize,
    generations: usize,
}

/// Coordinates progress display while outputs are generated
///
/// Shows one bar per output for small requests and adds a batch bar once the
/// output count exceeds the individual bar limit, keeping the most recent outputs
/// visible.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    output_bars: Vec<ProgressBar>,
    outputs: Vec<OutputState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            output_bars: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Initialize progress bars based on output count
    pub fn initialize(&mut self, output_count: usize) {
        if output_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(output_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..output_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(GENERATION_STYLE.clone());
            self.output_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Begin tracking an output that needs `generations` deflations
    pub fn start_output(&mut self, index: usize, path: &Path, generations: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.outputs.len() {
            self.outputs.resize(index + 1, OutputState::default());
        }
        if let Some(state) = self.outputs.get_mut(index) {
            *state = OutputState {
                name,
                generation: 0,
                generations,
            };
        }
        self.update_bars();
    }

    /// Report that `generation` deflations are complete
    pub fn update_generation(&mut self, index: usize, generation: usize) {
        if let Some(state) = self.outputs.get_mut(index) {
            state.generation = generation;
        }
        self.update_bars();
    }

    /// Mark output as written and advance the batch bar
    pub fn complete_output(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.outputs.get_mut(index) {
            state.name = format!("✓ {} ({:.2?})", state.name, elapsed);
            state.generation = state.generations;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All outputs written");
        }
        let _ = self.multi_progress.clear();
    }

    fn update_bars(&self) {
        let active: Vec<&OutputState> = self
            .outputs
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.output_bars.iter().zip(visible) {
            bar.set_length(state.generations as u64);
            bar.set_position(state.generation as u64);
            let max_width = state.generations.to_string().len();
            bar.set_message(format!(
                "gen {:>max_width$}/{}",
                state.generation, state.generations
            ));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.output_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
