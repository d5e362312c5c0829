//! VoiceTask CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voicetask::cli::{
    app::{
        load_merged_config, resolve_options, run_add, run_delete, run_edit, run_list, run_record,
        run_toggle, EXIT_ERROR, EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    shell::run_shell,
};
use voicetask::domain::config::AppConfig;
use voicetask::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Config commands never need a merged config
    let command = match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        command => command,
    };

    // Build CLI config from args; VOICETASK_BASE_URL rides in via Clap
    let cli_config = AppConfig {
        base_url: cli.base_url.clone(),
        max_duration: cli.max_duration.clone(),
        audio_cue: if cli.audio_cue { Some(true) } else { None },
    };

    let config = load_merged_config(cli_config).await;

    let options = match resolve_options(&config) {
        Ok(options) => options,
        Err(message) => {
            presenter.error(&message);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    match command {
        Some(Commands::List) => run_list(&options).await,
        Some(Commands::Add { description }) => run_add(&options, &description.join(" ")).await,
        Some(Commands::Record) => run_record(&options).await,
        Some(Commands::Toggle { id }) => run_toggle(&options, id).await,
        Some(Commands::Edit { id, description }) => {
            run_edit(&options, id, &description.join(" ")).await
        }
        Some(Commands::Delete { id }) => run_delete(&options, id).await,
        Some(Commands::Config { .. }) => unreachable!(), // Handled above
        None => run_shell(options).await,
    }
}
