use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Step-by-step spinner for interactive runs.
///
/// In non-interactive contexts (piped stderr or `--quiet`) every method is
/// a no-op, so command code can report progress unconditionally.
pub struct Progress {
    enabled: bool,
    bar: Option<ProgressBar>,
    step: u8,
    total_steps: u8,
    step_start: Instant,
}

impl Progress {
    pub fn new(enabled: bool, total_steps: u8) -> Self {
        Self {
            enabled,
            bar: None,
            step: 0,
            total_steps,
            step_start: Instant::now(),
        }
    }

    pub fn step(&mut self, description: &str) {
        if !self.enabled {
            return;
        }

        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        self.step += 1;
        self.step_start = Instant::now();

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_message(format!(
            "[{}/{}] {}...",
            self.step, self.total_steps, description
        ));

        self.bar = Some(bar);
    }

    pub fn complete_step(&mut self, description: &str) {
        if !self.enabled {
            return;
        }

        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        let elapsed = self.step_start.elapsed();
        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>6.2}s",
            description,
            elapsed.as_secs_f64()
        );
    }

    pub fn finish(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
