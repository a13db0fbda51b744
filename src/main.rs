use clap::Parser;
use tinker::api::client::DeepSeekApi;
use tinker::api::config::SYSTEM_PROMPT;
use tinker::cli::args::{Args, Commands};
use tinker::cli::display::CliDisplayManager;
use tinker::errors::AppError;
use tinker::file_processing::{paths, reader, writer};
use tinker::file_processing::writer::DiffOutcome;
use tinker::interpreter;
use tinker::session::Conversation;
use tinker::utils::config::{read_config, resolve_api_key, validate_config, write_config};
use tinker::utils::logger;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if let Some(command) = args.command {
        return handle_config_subcommand(command);
    }

    let config = read_config()?;
    logger::setup_logger(&config);
    let api_key = resolve_api_key(&config)?;
    let api = DeepSeekApi::new(api_key, config.model.clone(), config.temperature);

    let mut display = CliDisplayManager::new();
    display.print_header();

    let mut conversation = Conversation::new(SYSTEM_PROMPT);

    loop {
        let line = match display.read_user_input() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::warn!("stdin read failed: {}", e);
                break;
            }
        };
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if let Some(path) = input.strip_prefix("/add ") {
            handle_add_command(&mut conversation, &display, path.trim());
            continue;
        }

        run_model_turn(&api, &mut conversation, &mut display, input).await;
    }

    display.print_goodbye();
    Ok(())
}

/// Reads a file and inserts it into the conversation (`/add <path>`).
fn handle_add_command(conversation: &mut Conversation, display: &CliDisplayManager, path: &str) {
    if path.is_empty() {
        display.print_add_failed(path, "no path given");
        return;
    }
    match reader::ensure_file_in_context(conversation, path) {
        Ok(canonical) => display.print_file_added(&canonical.to_string_lossy()),
        Err(e) => display.print_add_failed(path, &e.to_string()),
    }
}

/// Best-effort scan of the user's message for file mentions, pulling each
/// readable one into context before the model sees the message. Unreadable
/// candidates are skipped.
fn resolve_file_references(
    conversation: &mut Conversation,
    display: &CliDisplayManager,
    message: &str,
) {
    for candidate in reader::scan_for_file_references(message) {
        let already_known = paths::normalize_path(&candidate)
            .map(|canonical| conversation.has_file(&canonical))
            .unwrap_or(false);
        match reader::ensure_file_in_context(conversation, &candidate) {
            Ok(canonical) if !already_known => {
                display.print_file_added(&canonical.to_string_lossy());
            }
            Ok(_) => {}
            Err(e) => log::debug!("skipping file reference candidate {}: {}", candidate, e),
        }
    }
}

/// One full turn: resolve references, stream the completion, interpret it,
/// apply creations, and gate edits behind a single confirmation. Every
/// failure path reports and returns; the session always continues.
async fn run_model_turn(
    api: &DeepSeekApi,
    conversation: &mut Conversation,
    display: &mut CliDisplayManager,
    message: &str,
) {
    resolve_file_references(conversation, display, message);
    conversation.push_user(message.to_string());

    display.start_spinner();
    let mut streaming_started = false;
    let result = api
        .stream_chat(conversation.entries(), |chunk| {
            if !streaming_started {
                streaming_started = true;
                display.stop_spinner();
                display.print_assistant_label();
            }
            display.print_stream_chunk(chunk);
        })
        .await;
    display.stop_spinner();

    let raw = match result {
        Ok(raw) => {
            if streaming_started {
                display.end_stream_line();
            }
            raw
        }
        Err(e) => {
            display.print_turn_error(&format!("DeepSeek API error: {}", e));
            return;
        }
    };

    let response = interpreter::interpret(&raw, conversation);
    conversation.push_assistant(response.reply.clone());

    if response.parse_failed {
        display.print_turn_error(&response.reply);
    }

    for rejected in &response.rejected_edits {
        display.print_rejected_edit(rejected);
    }

    for file in &response.files_to_create {
        match writer::create_file(&file.path, &file.content).await {
            Ok(()) => display.print_file_created(&file.path),
            Err(e) => display.print_turn_error(&format!("could not create {}: {}", file.path, e)),
        }
    }

    if response.files_to_edit.is_empty() {
        return;
    }

    display.print_edit_preview(&response.files_to_edit);
    let confirmed = display.prompt_confirm_edits().unwrap_or(false);
    if !confirmed {
        // All-or-nothing per turn: declining discards the whole batch.
        display.print_edits_skipped();
        return;
    }

    for edit in &response.files_to_edit {
        match writer::apply_diff_edit(edit).await {
            Ok(DiffOutcome::Applied) => display.print_edit_applied(&edit.path),
            Ok(DiffOutcome::SnippetMissing { file_content }) => {
                display.print_snippet_missing(edit, &file_content)
            }
            Ok(DiffOutcome::FileMissing) => display.print_file_missing(&edit.path),
            Err(e) => {
                display.print_turn_error(&format!("could not edit {}: {}", edit.path, e))
            }
        }
    }
}

/// Handles the config subcommand.
fn handle_config_subcommand(command: Commands) -> Result<(), AppError> {
    let Commands::Config {
        set_api_key,
        set_model,
        set_temperature,
        set_log_level,
    } = command;

    let mut config = read_config()?;

    if let Some(api_key) = set_api_key {
        config.api_key = Some(api_key);
        println!("API key set");
    }

    if let Some(model) = set_model {
        println!("Model set to {}", model);
        config.model = model;
    }

    if let Some(temperature) = set_temperature {
        config.temperature = temperature;
        println!("Temperature set to {}", temperature);
    }

    if let Some(log_level) = set_log_level {
        println!("Log level set to {}", log_level);
        config.log_level = log_level;
    }

    validate_config(&config)?;
    write_config(&config)?;
    Ok(())
}
