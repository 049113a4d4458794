//! Terminal progress display for a running simulation and its live stats

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_COMPLETE, STAT_BAR_WIDTH};
use crate::simulation::metrics::DisplayMetrics;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>18}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos:>3}}% {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STAT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>18}} [{{bar:{STAT_BAR_WIDTH}.green/white}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar plus the three live stat bars of the demo view
pub struct SimulationProgress {
    multi_progress: MultiProgress,
    progress_bar: ProgressBar,
    memory_bar: ProgressBar,
    cpu_bar: ProgressBar,
    quality_bar: ProgressBar,
    label: String,
}

impl Default for SimulationProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationProgress {
    /// Create bars drawing to stderr
    pub fn new() -> Self {
        Self::with_multi_progress(MultiProgress::new())
    }

    /// Create bars that are never drawn
    pub fn hidden() -> Self {
        Self::with_multi_progress(MultiProgress::with_draw_target(ProgressDrawTarget::hidden()))
    }

    fn with_multi_progress(multi_progress: MultiProgress) -> Self {
        let progress_bar = Self::add_bar(&multi_progress, &PROGRESS_STYLE, "Progress");
        let memory_bar = Self::add_bar(&multi_progress, &STAT_STYLE, "Memory Usage");
        let cpu_bar = Self::add_bar(&multi_progress, &STAT_STYLE, "CPU Usage");
        let quality_bar = Self::add_bar(&multi_progress, &STAT_STYLE, "Solution Quality");

        Self {
            multi_progress,
            progress_bar,
            memory_bar,
            cpu_bar,
            quality_bar,
            label: String::new(),
        }
    }

    fn add_bar(
        multi_progress: &MultiProgress,
        style: &ProgressStyle,
        label: &'static str,
    ) -> ProgressBar {
        let bar = multi_progress.add(ProgressBar::new(u64::from(PROGRESS_COMPLETE)));
        bar.set_style(style.clone());
        bar.set_prefix(label);
        bar
    }

    /// Label the run being displayed
    pub fn start(&mut self, algorithm_name: &str, input_size: u32) {
        self.label = format!("{algorithm_name} (n = {input_size})");
        self.progress_bar.set_message(self.label.clone());
    }

    /// Redraw every bar from a metrics snapshot
    pub fn update(&self, metrics: &DisplayMetrics) {
        self.progress_bar
            .set_position(u64::from(metrics.progress_percent));
        let performance = metrics
            .current_performance_ms
            .map_or_else(|| "-- ms".to_string(), |ms| format!("{ms} ms"));
        self.progress_bar.set_message(format!(
            "{} • Step {} • {performance}",
            self.label, metrics.step_count
        ));

        Self::set_stat(&self.memory_bar, metrics.memory_usage_mb, "MB");
        Self::set_stat(&self.cpu_bar, metrics.cpu_usage_percent, "%");
        Self::set_stat(&self.quality_bar, metrics.solution_quality_percent, "%");
    }

    fn set_stat(bar: &ProgressBar, value: f64, unit: &str) {
        bar.set_position(value.round() as u64);
        bar.set_message(format!("{value}{unit}"));
    }

    /// Mark the run as paused without clearing the bars
    pub fn pause(&self) {
        self.progress_bar
            .set_message(format!("{} • paused", self.label));
    }

    /// Finish and clear all bars
    pub fn finish(&self) {
        for bar in [
            &self.progress_bar,
            &self.memory_bar,
            &self.cpu_bar,
            &self.quality_bar,
        ] {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    /// Current position of the main progress bar
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }
}
