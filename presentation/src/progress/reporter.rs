//! Progress reporting for campaign execution

use chorus_application::ProgressNotifier;
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;

/// Reports campaign progress with one bar per adapter
///
/// Each bar is seeded from the worker's already-completed run count, so a
/// resumed campaign starts partly filled. Bars stall visibly while a worker
/// sits in a cool-down.
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<String, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_worker_start(&self, adapter: &str, completed: u64, total: u64) {
        let pb = self.multi.add(ProgressBar::new(total));
        pb.set_style(Self::bar_style());
        pb.set_prefix(adapter.to_string());
        pb.set_position(completed);

        self.bars
            .lock()
            .unwrap()
            .insert(adapter.to_string(), pb);
    }

    fn on_query_complete(&self, adapter: &str) {
        if let Some(pb) = self.bars.lock().unwrap().get(adapter) {
            pb.inc(1);
        }
    }

    fn on_worker_finish(&self, adapter: &str) {
        if let Some(pb) = self.bars.lock().unwrap().remove(adapter) {
            pb.finish_with_message("done".green().to_string());
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_worker_start(&self, adapter: &str, completed: u64, total: u64) {
        println!(
            "{} {} ({}/{} runs already satisfied)",
            "->".cyan(),
            adapter.bold(),
            completed,
            total
        );
    }

    fn on_query_complete(&self, adapter: &str) {
        println!("  {} {}", "v".green(), adapter);
    }

    fn on_worker_finish(&self, adapter: &str) {
        println!("  {} {} finished", "*".cyan(), adapter);
    }
}
