//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MeetingScribe - meeting transcription with speaker identification
#[derive(Parser, Debug)]
#[command(name = "meeting-scribe")]
#[command(version = "0.1.0")]
#[command(about = "Record or upload meeting audio and get a transcription with summary and action items")]
#[command(long_about = None)]
pub struct Cli {
    /// Base URL of the transcription service (e.g. https://1234-56-78-910.ngrok.io)
    #[arg(long, value_name = "URL", global = true, env = "MEETING_SCRIBE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record from the microphone and transcribe (press Enter to stop)
    Record,
    /// Upload an audio file for transcription
    Transcribe {
        /// Path to the audio file
        file: PathBuf,
    },
    /// Enroll named speakers with voice samples
    Enroll {
        /// Speaker name (repeat once per speaker, order-aligned with --sample)
        #[arg(short = 'n', long = "name", required = true)]
        names: Vec<String>,

        /// Path to a voice sample (repeat once per speaker)
        #[arg(short = 's', long = "sample", required = true)]
        samples: Vec<PathBuf>,
    },
    /// List past transcriptions
    History,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["base_url", "timeout_secs"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_record() {
        let cli = Cli::parse_from(["meeting-scribe", "record"]);
        assert!(cli.base_url.is_none());
        assert!(matches!(cli.command, Commands::Record));
    }

    #[test]
    fn cli_parses_transcribe_with_file() {
        let cli = Cli::parse_from(["meeting-scribe", "transcribe", "standup.mp3"]);
        if let Commands::Transcribe { file } = cli.command {
            assert_eq!(file, PathBuf::from("standup.mp3"));
        } else {
            panic!("Expected Transcribe command");
        }
    }

    #[test]
    fn cli_parses_global_base_url() {
        let cli = Cli::parse_from([
            "meeting-scribe",
            "history",
            "--base-url",
            "http://localhost:5000",
        ]);
        assert_eq!(cli.base_url, Some("http://localhost:5000".to_string()));
    }

    #[test]
    fn cli_parses_enroll_names_and_samples() {
        let cli = Cli::parse_from([
            "meeting-scribe",
            "enroll",
            "-n",
            "Alice",
            "-s",
            "alice.wav",
            "-n",
            "Bob",
            "-s",
            "bob.wav",
        ]);
        if let Commands::Enroll { names, samples } = cli.command {
            assert_eq!(names, ["Alice", "Bob"]);
            assert_eq!(samples, [PathBuf::from("alice.wav"), PathBuf::from("bob.wav")]);
        } else {
            panic!("Expected Enroll command");
        }
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from([
            "meeting-scribe",
            "config",
            "set",
            "base_url",
            "http://localhost:5000",
        ]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "base_url");
            assert_eq!(value, "http://localhost:5000");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("base_url"));
        assert!(is_valid_config_key("timeout_secs"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
