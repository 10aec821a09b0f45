use std::fmt::Write;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};

const TEMPLATE: &str = "PROGRESS|{bar:40}| {pos:>4}/{len:<4} ( {percent1}% )";

/// Completion as a percentage with one decimal, e.g. `33.3`.
fn percent_label(fraction: f32) -> String {
    format!("{:.1}", fraction * 100.0)
}

/// Per-size-group progress line. Purely observational.
pub struct Progress {
    visible: bool,
    bar: Option<ProgressBar>,
}

impl Progress {
    pub fn new(visible: bool) -> Self {
        Self { visible, bar: None }
    }

    pub fn hidden() -> Self {
        Self::new(false)
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(TEMPLATE)
            .map(|style| {
                style
                    .with_key("percent1", |state: &ProgressState, w: &mut dyn Write| {
                        let _ = w.write_str(&percent_label(state.fraction()));
                    })
                    .progress_chars("█ ")
            })
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    /// Starts a fresh bar for a group of `total` files, finishing any bar
    /// left open by the previous group.
    pub fn start_group(&mut self, total: usize) {
        self.finish();
        let target = if self.visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(Some(total as u64), target);
        bar.set_style(Self::style());
        self.bar = Some(bar);
    }

    pub fn set(&self, current: usize) {
        if let Some(bar) = &self.bar {
            bar.set_position(current as u64);
        }
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Leaves the completed line on screen and moves to the next one.
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }

    /// Runs `f` with the bar cleared so its output lands on its own line.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match &self.bar {
            Some(bar) => bar.suspend(f),
            None => f(),
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.finish();
    }
}
