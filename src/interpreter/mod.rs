use crate::file_processing::reader::ensure_file_in_context;
use crate::models::{AssistantResponse, FileToCreate, FileToEdit};
use crate::session::Conversation;

/// One edit dropped during validation, with the reason it was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedEdit {
    pub path: String,
    pub reason: String,
}

/// The validated result of one assistant turn. Every edit in `files_to_edit`
/// targeted a path that was readable at filter time (no guarantee it still is
/// at apply time); everything else the model asked for is in
/// `rejected_edits`.
#[derive(Debug, Default)]
pub struct InterpretedResponse {
    pub reply: String,
    pub files_to_create: Vec<FileToCreate>,
    pub files_to_edit: Vec<FileToEdit>,
    pub rejected_edits: Vec<RejectedEdit>,
    /// True when the raw response was not valid JSON and `reply` is the
    /// synthesized failure message.
    pub parse_failed: bool,
}

impl InterpretedResponse {
    fn parse_failure(error: &serde_json::Error) -> Self {
        InterpretedResponse {
            reply: format!(
                "Error: the assistant did not return valid JSON ({}). No files were changed.",
                error
            ),
            parse_failed: true,
            ..Default::default()
        }
    }
}

/// Parses the raw response text and validates its edit requests against the
/// session. Unparseable JSON degrades to a reply that names the failure with
/// empty change lists; edits against unreadable paths are split out rather
/// than applied or silently lost. Read-through: an edit target not yet in
/// context is loaded into the conversation here, so the model's next turn
/// sees the file it just asked to change.
pub fn interpret(raw: &str, conversation: &mut Conversation) -> InterpretedResponse {
    let parsed: AssistantResponse = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("assistant response was not valid JSON: {}", e);
            return InterpretedResponse::parse_failure(&e);
        }
    };

    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for edit in parsed.files_to_edit.unwrap_or_default() {
        match ensure_file_in_context(conversation, &edit.path) {
            Ok(_) => accepted.push(edit),
            Err(e) => {
                log::debug!("dropping edit for unreadable path {}: {}", edit.path, e);
                rejected.push(RejectedEdit {
                    path: edit.path,
                    reason: e.to_string(),
                });
            }
        }
    }

    InterpretedResponse {
        reply: parsed.assistant_reply,
        files_to_create: parsed.files_to_create.unwrap_or_default(),
        files_to_edit: accepted,
        rejected_edits: rejected,
        parse_failed: false,
    }
}
