use crate::errors::AppError;
use crate::models::{FileToCreate, FileToEdit};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Outcome of one diff edit. Snippet and file misses are expected conditions
/// reported to the user, not errors; only real IO failures bubble up.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffOutcome {
    Applied,
    /// `original_snippet` does not occur in the file; carries the file's
    /// actual content so the mismatch can be shown for diagnosis.
    SnippetMissing { file_content: String },
    FileMissing,
}

/// Creates (or overwrites) the file at `path`, creating any missing parent
/// directories first. Overwrite is not atomic.
pub async fn create_file(path: &str, content: &str) -> Result<(), AppError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, content).await?;
    Ok(())
}

/// Applies one find/replace edit: reads the file fresh, replaces the first
/// occurrence of `original_snippet` with `new_snippet`, and writes the result
/// back. A textual patch only; multiple occurrences beyond the first are left
/// alone. Batches are applied in list order, so a later edit sees the file as
/// rewritten by earlier ones.
pub async fn apply_diff_edit(edit: &FileToEdit) -> Result<DiffOutcome, AppError> {
    let content = match fs::read_to_string(&edit.path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DiffOutcome::FileMissing),
        Err(e) => return Err(e.into()),
    };

    if !content.contains(&edit.original_snippet) {
        return Ok(DiffOutcome::SnippetMissing {
            file_content: content,
        });
    }

    let updated = content.replacen(&edit.original_snippet, &edit.new_snippet, 1);
    create_file(&edit.path, &updated).await?;
    Ok(DiffOutcome::Applied)
}

/// Applies the assistant's whole-file creations in order.
pub async fn create_files(files: &[FileToCreate]) -> Result<(), AppError> {
    for file in files {
        create_file(&file.path, &file.content).await?;
        log::debug!("created file {}", file.path);
    }
    Ok(())
}
