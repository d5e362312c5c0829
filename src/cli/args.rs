//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::task::TaskId;

/// VoiceTask - voice-driven task list client
#[derive(Parser, Debug)]
#[command(name = "voicetask")]
#[command(version = "0.1.0")]
#[command(about = "Record voice memos, transcribe them, and manage a remote task list")]
#[command(long_about = None)]
pub struct Cli {
    /// Backend origin (e.g. http://127.0.0.1:5000)
    #[arg(short = 'u', long, value_name = "URL", env = "VOICETASK_BASE_URL")]
    pub base_url: Option<String>,

    /// Max recording duration (e.g. 30s, 2m)
    #[arg(long, value_name = "TIME")]
    pub max_duration: Option<String>,

    /// Play audio cues when recording starts and stops
    #[arg(short = 'a', long)]
    pub audio_cue: bool,

    /// Subcommand; without one, an interactive shell starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and print the task list
    List,
    /// Create a task with the given description
    Add {
        /// Task description (words are joined with spaces)
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Record a voice memo and create a task from its transcription
    Record,
    /// Flip a task's completed state
    Toggle {
        /// Task id
        id: TaskId,
    },
    /// Replace a task's description
    Edit {
        /// Task id
        id: TaskId,
        /// New description (words are joined with spaces)
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: TaskId,
    },
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
pub const VALID_CONFIG_KEYS: &[&str] = &["base_url", "max_duration", "audio_cue"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
