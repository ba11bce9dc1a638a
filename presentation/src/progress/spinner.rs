//! Spinner over the in-flight generation request

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use scope_application::ports::progress::ScopingProgress;
use scope_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while the generation request is in flight, then announces
/// the question count before answer collection starts.
pub struct GenerationSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl GenerationSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

impl Default for GenerationSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopingProgress for GenerationSpinner {
    fn on_generation_start(&self, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Generating follow-up questions with {}...", model));
        pb.enable_steady_tick(Duration::from_millis(120));

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_generation_complete(&self, question_count: usize) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_and_clear();
        }

        if question_count > 0 {
            println!(
                "{}",
                "To better understand your research needs, please answer these follow-up questions:"
                    .bold()
            );
        } else {
            println!("{}", "The query is already clear - no follow-up questions.".dimmed());
        }
    }
}
