use serde::{Deserialize, Serialize};

/// A file the assistant wants written from scratch (or overwritten whole).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileToCreate {
    pub path: String,
    pub content: String,
}

/// A find/replace edit against an existing file. `original_snippet` must occur
/// verbatim in the file for the edit to apply; only the first occurrence is
/// replaced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileToEdit {
    pub path: String,
    pub original_snippet: String,
    pub new_snippet: String,
}

/// The raw shape of one assistant turn, as deserialized from the JSON the
/// model returns. Absent or `null` lists deserialize to `None`; a missing
/// `assistant_reply` becomes the empty string.
#[derive(Deserialize, Debug, Default)]
pub struct AssistantResponse {
    #[serde(default)]
    pub assistant_reply: String,
    #[serde(default)]
    pub files_to_create: Option<Vec<FileToCreate>>,
    #[serde(default)]
    pub files_to_edit: Option<Vec<FileToEdit>>,
}
