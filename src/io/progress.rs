//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Display state of one matrix file
#[derive(Debug, Clone, Default)]
struct FileState {
    name: String,
    iteration: usize,
    limit: usize,
    finished: Option<Duration>,
}

/// Coordinates progress display while solving a batch of matrix files
///
/// Shows one bar per file, bounded by the solver's iteration budget, for
/// the most recent files. Large batches add an overall files bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ITERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Matrices: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Create progress bars for the given number of files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(ITERATION_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register a file about to be solved with its iteration budget
    pub fn start_file(&mut self, index: usize, path: &Path, iteration_limit: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.files.len() {
            self.files.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.files.get_mut(index) {
            *state = FileState {
                name,
                iteration: 0,
                limit: iteration_limit,
                finished: None,
            };
        }
        self.refresh();
    }

    /// Report the solver's current iteration for a file
    pub fn update_iteration(&mut self, index: usize, iteration: usize) {
        if let Some(state) = self.files.get_mut(index) {
            state.iteration = iteration;
        }
        self.refresh();
    }

    /// Mark a file as solved
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.files.get_mut(index) {
            state.finished = Some(elapsed);
        }
        self.refresh();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All matrices solved");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recent files on the available bars
    fn refresh(&self) {
        let active: Vec<&FileState> = self
            .files
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let start = active.len().saturating_sub(self.file_bars.len());
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_index, bar) in self.file_bars.iter().enumerate() {
            match visible.get(bar_index) {
                Some(state) => {
                    bar.set_length(state.limit as u64);
                    bar.set_position(state.iteration as u64);
                    let message = match state.finished {
                        Some(elapsed) => format!("✓ {} iter {}ms", state.iteration, elapsed.as_millis()),
                        None => format!("{} iter", state.iteration),
                    };
                    bar.set_message(message);
                    bar.set_prefix(state.name.clone());
                }
                None => {
                    bar.set_length(0);
                    bar.set_position(0);
                    bar.set_message(String::new());
                    bar.set_prefix(String::new());
                }
            }
        }
    }
}
