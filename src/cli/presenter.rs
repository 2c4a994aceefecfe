//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::history::HistoryEntry;
use crate::domain::transcript::{parse_transcript, SummaryAndActions, TranscriptionResult};

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the actual result output)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Render a transcription result: summary, action items, then the
    /// speaker-attributed transcript.
    pub fn render_result(&self, result: &TranscriptionResult) {
        let parsed = SummaryAndActions::parse(result.summary_and_actions());

        if !parsed.summary().is_empty() {
            println!("{}", "Summary".bold().underline());
            println!("{}", parsed.summary());
            println!();
        }

        if parsed.has_action_items() {
            println!("{}", "Action Items".bold().underline());
            for item in parsed.action_items() {
                println!("  {} {}", "☐".cyan(), item);
            }
            println!();
        }

        if !result.transcription().trim().is_empty() {
            println!("{}", "Transcript".bold().underline());
            for line in parse_transcript(result.transcription()) {
                match line.timestamp() {
                    Some(ts) => println!("{} {}", ts.dimmed(), line.text()),
                    None => println!("{}", line.text()),
                }
            }
        }
    }

    /// Render a single history entry header
    pub fn render_history_entry(&self, index: usize, entry: &HistoryEntry) {
        println!(
            "{} {} {}",
            format!("{}.", index + 1).cyan(),
            entry.filename.bold(),
            entry.timestamp.dimmed()
        );
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_result_does_not_panic_on_empty() {
        let presenter = Presenter::new();
        let result = TranscriptionResult::new("", "");
        presenter.render_result(&result);
    }

    #[test]
    fn render_result_with_full_payload() {
        let presenter = Presenter::new();
        let result = TranscriptionResult::new(
            "[00:00:01] Alice: Hello everyone.\n[00:00:05] Bob: Hi.",
            "Quick sync about the release.\nAction Items:\n- Alice to tag the build",
        );
        presenter.render_result(&result);
    }
}
