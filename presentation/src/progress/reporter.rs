//! Progress reporting for consultation runs

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use council_application::ConsultationProgress;
use council_domain::{Provider, RoundResult};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Progress bar per round on stderr.
///
/// With `print_rounds` set, each finished round is also written to stdout.
pub struct ProgressReporter {
    multi: MultiProgress,
    round_bar: Mutex<Option<ProgressBar>>,
    print_rounds: bool,
}

impl ProgressReporter {
    pub fn new(print_rounds: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            round_bar: Mutex::new(None),
            print_rounds,
        }
    }

    fn round_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl ConsultationProgress for ProgressReporter {
    fn on_round_start(&self, round: u32, total_rounds: u32, participants: usize) {
        let pb = self.multi.add(ProgressBar::new(participants as u64));
        pb.set_style(Self::round_style());
        pb.set_prefix(format!("Round {}/{}", round, total_rounds));
        pb.set_message("Waiting for answers...");

        if let Ok(mut slot) = self.round_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_provider_complete(&self, _round: u32, provider: &Provider, success: bool) {
        if let Ok(slot) = self.round_bar.lock() {
            if let Some(pb) = slot.as_ref() {
                let status = if success {
                    format!("{} {}", "v".green(), provider.name)
                } else {
                    format!("{} {}", "x".red(), provider.name)
                };
                pb.set_message(status);
                pb.inc(1);
            }
        }
    }

    fn on_round_complete(&self, result: &RoundResult) {
        let bar = self.round_bar.lock().ok().and_then(|mut slot| slot.take());
        if let Some(pb) = bar {
            pb.finish_and_clear();
        }
        if self.print_rounds {
            print!("{}", ConsoleFormatter::format_round(result));
        }
    }
}

/// Plain text progress (no bars): prints each round once it completes
pub struct SimpleProgress;

impl ConsultationProgress for SimpleProgress {
    fn on_round_start(&self, _round: u32, _total_rounds: u32, _participants: usize) {}

    fn on_provider_complete(&self, _round: u32, _provider: &Provider, _success: bool) {}

    fn on_round_complete(&self, result: &RoundResult) {
        print!("{}", ConsoleFormatter::format_round(result));
    }
}
