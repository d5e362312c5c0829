//! Interactive shell mode
//!
//! The shell is the closest analogue of the original single-page view: one
//! long-lived controller whose row model is re-rendered after every action,
//! plus a record toggle bound to the same session the one-shot mode uses.

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::{CaptureOutcome, CaptureTaskUseCase, TaskViewController, ToggleOutcome};
use crate::domain::task::TaskId;
use crate::infrastructure::{CpalRecorder, HttpTaskApi, HttpTranscriber, RodioAudioCue};

use super::app::{RunOptions, EXIT_SUCCESS};
use super::presenter::Presenter;

const HELP: &str = "\
Commands:
  list              Fetch and show the task list
  add <text>        Create a task
  record            Start recording; 'record' again stops and creates a task
  toggle <id>       Flip a task's completed state
  edit <id>         Put a task into edit mode
  set <id> <text>   Replace the draft of an editing task
  save <id>         Save the draft as the new description
  cancel <id>       Discard the draft and leave edit mode
  delete <id>       Delete a task
  help              Show this help
  quit              Exit the shell";

/// Parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    List,
    Add(String),
    Record,
    Toggle(TaskId),
    Edit(TaskId),
    Set(TaskId, String),
    Save(TaskId),
    Cancel(TaskId),
    Delete(TaskId),
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Self::Empty);
        }

        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (trimmed, ""),
        };

        match command {
            "list" | "ls" => Ok(Self::List),
            "add" => {
                if rest.is_empty() {
                    Err("Usage: add <text>".to_string())
                } else {
                    Ok(Self::Add(rest.to_string()))
                }
            }
            "record" | "rec" => Ok(Self::Record),
            "toggle" => Ok(Self::Toggle(parse_id(command, rest)?)),
            "edit" => Ok(Self::Edit(parse_id(command, rest)?)),
            "set" => {
                let (id_text, text) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "Usage: set <id> <text>".to_string())?;
                let id = id_text
                    .parse::<TaskId>()
                    .map_err(|_| format!("Invalid task id '{}'", id_text))?;
                Ok(Self::Set(id, text.trim().to_string()))
            }
            "save" => Ok(Self::Save(parse_id(command, rest)?)),
            "cancel" => Ok(Self::Cancel(parse_id(command, rest)?)),
            "delete" | "rm" => Ok(Self::Delete(parse_id(command, rest)?)),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help'.", other)),
        }
    }
}

fn parse_id(command: &str, rest: &str) -> Result<TaskId, String> {
    if rest.is_empty() {
        return Err(format!("Usage: {} <id>", command));
    }
    rest.parse::<TaskId>()
        .map_err(|_| format!("Invalid task id '{}'", rest))
}

/// Run the interactive shell until quit or EOF
pub async fn run_shell(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();

    let api = HttpTaskApi::new(&options.base_url);
    let mut view = TaskViewController::new(api);

    let recorder = CpalRecorder::new(options.max_duration);
    let transcriber = HttpTranscriber::new(&options.base_url);
    let cue = RodioAudioCue::new();
    let mut capture = CaptureTaskUseCase::new(recorder, transcriber, cue, options.audio_cue);

    presenter.info(&format!("Connected to {}", options.base_url));

    // First render; a dead backend still gets a usable (empty) shell
    match view.load_tasks().await {
        Ok(()) => presenter.task_list(view.rows()),
        Err(e) => presenter.warn(&format!("Could not fetch tasks: {}", e)),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let prompt = if capture.is_recording() {
            "recording> "
        } else {
            "> "
        };
        presenter.output_inline(prompt);

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            // EOF or broken stdin ends the session
            Ok(None) | Err(_) => break,
        };

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                presenter.error(&message);
                continue;
            }
        };

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Help => presenter.output(HELP),
            ShellCommand::Quit => {
                if capture.is_recording() {
                    // Leaving mid-capture discards the recording
                    let _ = capture.cancel().await;
                }
                break;
            }
            ShellCommand::List => match view.load_tasks().await {
                Ok(()) => presenter.task_list(view.rows()),
                Err(e) => presenter.error(&e.to_string()),
            },
            ShellCommand::Add(text) => match view.add_task(&text).await {
                Ok(()) => {
                    presenter.success(&format!("Task added: {}", text));
                    presenter.task_list(view.rows());
                }
                Err(e) => presenter.error(&e.to_string()),
            },
            ShellCommand::Record => match capture.toggle(&mut view).await {
                Ok(CaptureOutcome::Started) => {
                    presenter.info(&format!(
                        "Recording... 'record' again to stop (cap {})",
                        options.max_duration
                    ));
                }
                Ok(CaptureOutcome::TaskCreated { description }) => {
                    presenter.success(&format!("Task added: {}", description));
                    presenter.task_list(view.rows());
                }
                Ok(CaptureOutcome::NothingTranscribed) => {
                    presenter.warn("Nothing transcribed; no task created");
                }
                Err(e) => presenter.error(&e.to_string()),
            },
            ShellCommand::Toggle(id) => match view.toggle_task(id).await {
                Ok(ToggleOutcome::Toggled { completed }) => {
                    let state = if completed { "done" } else { "pending" };
                    presenter.success(&format!("Task {} marked {}", id, state));
                    presenter.task_list(view.rows());
                }
                Ok(ToggleOutcome::SkippedEditing) => {
                    presenter.warn(&format!(
                        "Task {} is being edited; save or cancel first",
                        id
                    ));
                }
                Err(e) => presenter.error(&e.to_string()),
            },
            ShellCommand::Edit(id) => match view.start_edit(id) {
                Ok(()) => {
                    if let Some(task) = view.task(id) {
                        presenter.info(&format!("Editing task {}: {}", id, task.description));
                    }
                    presenter.info(&format!(
                        "'set {} <text>' then 'save {}' or 'cancel {}'",
                        id, id, id
                    ));
                    presenter.task_list(view.rows());
                }
                Err(e) => presenter.error(&e.to_string()),
            },
            ShellCommand::Set(id, text) => match view.set_draft(id, &text) {
                Ok(()) => presenter.task_list(view.rows()),
                Err(e) => presenter.error(&e.to_string()),
            },
            ShellCommand::Save(id) => match view.save_task(id).await {
                Ok(()) => {
                    presenter.success(&format!("Task {} updated", id));
                    presenter.task_list(view.rows());
                }
                Err(e) => presenter.error(&e.to_string()),
            },
            ShellCommand::Cancel(id) => match view.cancel_edit(id).await {
                Ok(()) => presenter.task_list(view.rows()),
                Err(e) => presenter.error(&e.to_string()),
            },
            ShellCommand::Delete(id) => match view.delete_task(id).await {
                Ok(()) => {
                    presenter.success(&format!("Task {} deleted", id));
                    presenter.task_list(view.rows());
                }
                Err(e) => presenter.error(&e.to_string()),
            },
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
