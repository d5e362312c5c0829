//! One-shot command runners

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::{AudioCue, AudioRecorder, ConfigStore, Transcriber};
use crate::application::{CaptureOutcome, CaptureTaskUseCase, TaskViewController, ToggleOutcome};
use crate::domain::config::AppConfig;
use crate::domain::recording::Duration;
use crate::domain::task::TaskId;
use crate::infrastructure::{
    CpalRecorder, HttpTaskApi, HttpTranscriber, RodioAudioCue, XdgConfigStore,
};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Fully resolved runtime options
pub struct RunOptions {
    pub base_url: String,
    pub max_duration: Duration,
    pub audio_cue: bool,
}

/// Load and merge configuration: defaults < file < env/CLI.
/// The env layer rides in on the CLI config (Clap reads VOICETASK_BASE_URL).
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Turn merged config into runtime options.
/// An unparseable max_duration is a usage error, not a silent fallback.
pub fn resolve_options(config: &AppConfig) -> Result<RunOptions, String> {
    let max_duration = match config.max_duration.as_ref() {
        Some(s) => s
            .parse::<Duration>()
            .map_err(|e| format!("Invalid max-duration: {}", e))?,
        None => Duration::default_max_duration(),
    };

    Ok(RunOptions {
        base_url: config.base_url_or_default().to_string(),
        max_duration,
        audio_cue: config.audio_cue_or_default(),
    })
}

fn view_for(options: &RunOptions) -> TaskViewController<HttpTaskApi> {
    TaskViewController::new(HttpTaskApi::new(&options.base_url))
}

/// Fetch and print the task list
pub async fn run_list(options: &RunOptions) -> ExitCode {
    let presenter = Presenter::new();
    let mut view = view_for(options);

    match view.load_tasks().await {
        Ok(()) => {
            presenter.task_list(view.rows());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Create a task and print the refreshed list
pub async fn run_add(options: &RunOptions, description: &str) -> ExitCode {
    let presenter = Presenter::new();
    let mut view = view_for(options);

    match view.add_task(description).await {
        Ok(()) => {
            presenter.success(&format!("Task added: {}", description));
            presenter.task_list(view.rows());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Flip a task's completed state
pub async fn run_toggle(options: &RunOptions, id: TaskId) -> ExitCode {
    let presenter = Presenter::new();
    let mut view = view_for(options);

    if let Err(e) = view.load_tasks().await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    match view.toggle_task(id).await {
        Ok(ToggleOutcome::Toggled { completed }) => {
            let state = if completed { "done" } else { "pending" };
            presenter.success(&format!("Task {} marked {}", id, state));
            presenter.task_list(view.rows());
            ExitCode::from(EXIT_SUCCESS)
        }
        // One-shot rows are never in edit mode; kept for completeness
        Ok(ToggleOutcome::SkippedEditing) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Replace a task's description
pub async fn run_edit(options: &RunOptions, id: TaskId, description: &str) -> ExitCode {
    let presenter = Presenter::new();
    let mut view = view_for(options);

    if let Err(e) = view.load_tasks().await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    let result = async {
        view.start_edit(id)?;
        view.set_draft(id, description)?;
        view.save_task(id).await
    }
    .await;

    match result {
        Ok(()) => {
            presenter.success(&format!("Task {} updated", id));
            presenter.task_list(view.rows());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Delete a task
pub async fn run_delete(options: &RunOptions, id: TaskId) -> ExitCode {
    let presenter = Presenter::new();
    let mut view = view_for(options);

    match view.delete_task(id).await {
        Ok(()) => {
            presenter.success(&format!("Task {} deleted", id));
            presenter.task_list(view.rows());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Record a voice memo, transcribe it, and create a task from the text.
/// Recording stops on Enter or when the duration cap elapses.
pub async fn run_record(options: &RunOptions) -> ExitCode {
    let mut presenter = Presenter::new();
    let mut view = view_for(options);

    let recorder = CpalRecorder::new(options.max_duration);
    let transcriber = HttpTranscriber::new(&options.base_url);
    let cue = RodioAudioCue::new();
    let mut capture = CaptureTaskUseCase::new(recorder, transcriber, cue, options.audio_cue);

    if let Err(e) = capture.toggle(&mut view).await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.info(&format!(
        "Recording... press Enter to stop (cap {})",
        options.max_duration
    ));
    presenter.show_recording_progress("Recording...");

    wait_for_stop(&presenter, &capture, options.max_duration).await;

    presenter.stop_spinner();
    presenter.start_spinner("Transcribing...");
    match capture.toggle(&mut view).await {
        Ok(CaptureOutcome::TaskCreated { description }) => {
            presenter.spinner_success(&format!("Task added: {}", description));
            presenter.task_list(view.rows());
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(CaptureOutcome::NothingTranscribed) => {
            presenter.stop_spinner();
            presenter.warn("Nothing transcribed; no task created");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(CaptureOutcome::Started) => {
            // Unreachable: the session was recording when we toggled
            presenter.stop_spinner();
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Block until the user presses Enter or the cap elapses, updating the
/// recording progress bar meanwhile. The recorder enforces the cap itself;
/// the loop here only unblocks the prompt once it has been reached.
async fn wait_for_stop<R, T, C>(
    presenter: &Presenter,
    capture: &CaptureTaskUseCase<R, T, C>,
    max_duration: Duration,
) where
    R: AudioRecorder,
    T: Transcriber,
    C: AudioCue,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(std::time::Duration::from_millis(200));
    let max_ms = max_duration.as_millis();

    loop {
        tokio::select! {
            _ = lines.next_line() => break,
            _ = ticker.tick() => {
                let elapsed = capture.elapsed_ms();
                presenter.update_recording_progress(elapsed, max_ms);
                if elapsed >= max_ms {
                    break;
                }
            }
        }
    }
}
