//! Command runners wiring adapters to use cases

use std::path::Path;
use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::ConfigStore;
use crate::application::{EnrollSpeakersUseCase, FetchHistoryUseCase, SessionController};
use crate::domain::config::AppConfig;
use crate::domain::enrollment::EnrollmentForm;
use crate::domain::session::{Session, SessionStatus};
use crate::infrastructure::{FfmpegMicRecorder, HttpBackend, NullRecorder, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load and merge configuration from file and CLI.
/// The base URL flag also reads MEETING_SCRIBE_URL, so env is covered.
pub async fn load_merged_config(cli_base_url: Option<String>) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    let cli_config = AppConfig {
        base_url: cli_base_url.filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

fn backend_from(config: &AppConfig) -> HttpBackend {
    HttpBackend::with_timeout(config.base_url_or_default(), config.timeout_or_default())
}

/// Record from the microphone until Enter is pressed, then transcribe
pub async fn run_record(config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();
    let recorder = FfmpegMicRecorder::new();
    let backend = backend_from(&config);
    let mut controller = SessionController::new(recorder, backend);

    if let Err(e) = controller.start_recording().await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.info("Recording... press Enter to stop, Ctrl-C to cancel");

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut line = String::new();

    tokio::select! {
        _ = stdin.read_line(&mut line) => {}
        _ = tokio::signal::ctrl_c() => {
            if let Err(e) = controller.cancel_recording().await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            presenter.info("Recording cancelled");
            return ExitCode::from(EXIT_SUCCESS);
        }
    }

    presenter.start_spinner("Transcribing...");
    let outcome = controller.stop_and_transcribe().await;
    presenter.stop_spinner();

    if let Err(e) = outcome {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    report_session_outcome(&mut presenter, controller.session())
}

/// Upload a file for transcription
pub async fn run_transcribe_file(config: AppConfig, path: &Path) -> ExitCode {
    let mut presenter = Presenter::new();

    let data = match tokio::fs::read(path).await {
        Ok(data) => data,
        Err(e) => {
            presenter.error(&format!("Could not read {}: {}", path.display(), e));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload");

    let backend = backend_from(&config);
    let mut controller = SessionController::new(NullRecorder::new(), backend);

    presenter.start_spinner("Transcribing...");
    let outcome = controller.transcribe_file(data, filename).await;
    presenter.stop_spinner();

    if let Err(e) = outcome {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    report_session_outcome(&mut presenter, controller.session())
}

/// Enroll speakers from name/sample pairs
pub async fn run_enroll(config: AppConfig, names: Vec<String>, samples: Vec<std::path::PathBuf>) -> ExitCode {
    let mut presenter = Presenter::new();

    if names.len() != samples.len() {
        presenter.error(&format!(
            "Got {} names but {} samples; each speaker needs exactly one of each",
            names.len(),
            samples.len()
        ));
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let mut form = EnrollmentForm::new(names.len());
    for (i, (name, sample_path)) in names.iter().zip(&samples).enumerate() {
        let sample = match tokio::fs::read(sample_path).await {
            Ok(data) => data,
            Err(e) => {
                presenter.error(&format!("Could not read {}: {}", sample_path.display(), e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        };
        if form.set_name(i, name).is_err() || form.attach_sample(i, sample).is_err() {
            presenter.error("Internal error building enrollment form");
            return ExitCode::from(EXIT_ERROR);
        }
    }

    let use_case = EnrollSpeakersUseCase::new(backend_from(&config));

    presenter.start_spinner("Enrolling speakers...");
    let outcome = use_case.execute(&form).await;
    presenter.stop_spinner();

    match outcome {
        Ok(message) => {
            presenter.success(&message);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// List past transcriptions
pub async fn run_history(config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();
    let use_case = FetchHistoryUseCase::new(backend_from(&config));

    presenter.start_spinner("Fetching history...");
    let outcome = use_case.execute().await;
    presenter.stop_spinner();

    match outcome {
        Ok(entries) if entries.is_empty() => {
            presenter.info("No transcriptions yet");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                presenter.render_history_entry(index, entry);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print the session's terminal state: the result on success, its fixed
/// error message on failure.
fn report_session_outcome(presenter: &mut Presenter, session: &Session) -> ExitCode {
    match session.status() {
        SessionStatus::Succeeded => {
            if let Some(result) = session.result() {
                presenter.render_result(result);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        SessionStatus::Failed => {
            presenter.error(session.error_message().unwrap_or("Transcription failed"));
            ExitCode::from(EXIT_ERROR)
        }
        // Terminal states only; anything else means the request never resolved.
        _ => {
            presenter.error("Transcription did not complete");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
