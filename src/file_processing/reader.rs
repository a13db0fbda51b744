use super::paths::normalize_path;
use crate::session::Conversation;
use std::io;
use std::path::PathBuf;

/// Extensions that mark a bare token (no separator) as a file reference.
const TEXT_EXTENSIONS: [&str; 19] = [
    "txt", "rs", "ts", "js", "go", "json", "py", "cpp", "c", "h", "hpp", "css", "html", "md",
    "yaml", "yml", "toml", "xml", "tsx",
];

/// Characters stripped from both ends of a candidate token before it is
/// treated as a path (quotes and sentence punctuation around a mention).
const TRIM_CHARS: &[char] = &['\'', '"', '`', ',', ';', ':', '!', '?', '(', ')', '[', ']', '<', '>'];

/// Returns the text content of a local file.
pub fn read_local_file(path: &str) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Scans a free-text message for tokens that look like file paths: anything
/// containing a path separator, or ending in a recognized source extension.
/// Best-effort guessing; whether a candidate actually resolves is decided by
/// the caller when it tries to read the file.
pub fn scan_for_file_references(message: &str) -> Vec<String> {
    message
        .split_whitespace()
        .filter_map(|token| {
            let trimmed = token.trim_matches(TRIM_CHARS);
            if trimmed.is_empty() {
                return None;
            }
            if looks_like_path(trimmed) {
                Some(trimmed.to_string())
            } else {
                None
            }
        })
        .collect()
}

fn looks_like_path(token: &str) -> bool {
    if token.contains('/') || token.contains('\\') {
        return true;
    }
    match token.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        }
        _ => false,
    }
}

/// Canonicalizes `raw`, reads the file, and inserts its content into the
/// conversation as a tagged system entry. Idempotent per canonical path: a
/// file already in context is not re-read or re-inserted. Returns the
/// canonical path either way.
pub fn ensure_file_in_context(
    conversation: &mut Conversation,
    raw: &str,
) -> io::Result<PathBuf> {
    let canonical = normalize_path(raw)?;
    if conversation.has_file(&canonical) {
        return Ok(canonical);
    }
    let content = read_local_file(canonical.to_string_lossy().as_ref())?;
    conversation.add_file_context(&canonical, &content);
    Ok(canonical)
}
