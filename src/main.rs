//! MeetingScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;

use meeting_scribe::cli::{
    app::{load_merged_config, run_enroll, run_history, run_record, run_transcribe_file, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use meeting_scribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        // Config management doesn't need a merged config
        Commands::Config { action } => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        command => {
            let config = load_merged_config(cli.base_url).await;
            match command {
                Commands::Record => run_record(config).await,
                Commands::Transcribe { file } => run_transcribe_file(config, &file).await,
                Commands::Enroll { names, samples } => run_enroll(config, names, samples).await,
                Commands::History => run_history(config).await,
                Commands::Config { .. } => unreachable!(), // Handled above
            }
        }
    }
}
