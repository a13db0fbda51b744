use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Who produced a conversation entry. Serialized lowercase to match the
/// chat-completions wire format.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Serialize, Debug, Clone)]
pub struct ConversationEntry {
    pub role: Role,
    pub content: String,
}

/// The append-only conversation log for one session, plus the set of canonical
/// paths whose contents have already been inserted as context. Entries are
/// never reordered or removed.
pub struct Conversation {
    entries: Vec<ConversationEntry>,
    file_context: HashSet<PathBuf>,
}

impl Conversation {
    pub fn new(system_prompt: &str) -> Self {
        Conversation {
            entries: vec![ConversationEntry {
                role: Role::System,
                content: system_prompt.to_string(),
            }],
            file_context: HashSet::new(),
        }
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn push_user(&mut self, content: String) {
        self.entries.push(ConversationEntry {
            role: Role::User,
            content,
        });
    }

    pub fn push_assistant(&mut self, content: String) {
        self.entries.push(ConversationEntry {
            role: Role::Assistant,
            content,
        });
    }

    /// Whether the file at `canonical` has already been added as context.
    pub fn has_file(&self, canonical: &Path) -> bool {
        self.file_context.contains(canonical)
    }

    /// Inserts `content` as a system entry tagged with the canonical path.
    /// Returns false (and appends nothing) if the path is already present, so
    /// repeated references never bloat the log.
    pub fn add_file_context(&mut self, canonical: &Path, content: &str) -> bool {
        if !self.file_context.insert(canonical.to_path_buf()) {
            return false;
        }
        self.entries.push(ConversationEntry {
            role: Role::System,
            content: format!("Content of file '{}':\n\n{}", canonical.display(), content),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_with_system_entry() {
        let conversation = Conversation::new("be helpful");
        assert_eq!(conversation.entries().len(), 1);
        assert_eq!(conversation.entries()[0].role, Role::System);
        assert_eq!(conversation.entries()[0].content, "be helpful");
    }

    #[test]
    fn file_context_inserted_at_most_once() {
        let mut conversation = Conversation::new("sys");
        let path = Path::new("/tmp/a.txt");

        assert!(conversation.add_file_context(path, "one"));
        assert!(!conversation.add_file_context(path, "one"));
        assert!(!conversation.add_file_context(path, "different content"));

        let tagged: Vec<_> = conversation
            .entries()
            .iter()
            .filter(|e| e.content.starts_with("Content of file '/tmp/a.txt'"))
            .collect();
        assert_eq!(tagged.len(), 1);
        assert!(conversation.has_file(path));
    }

    #[test]
    fn entries_keep_append_order() {
        let mut conversation = Conversation::new("sys");
        conversation.push_user("hello".to_string());
        conversation.push_assistant("hi".to_string());
        conversation.push_user("again".to_string());

        let roles: Vec<Role> = conversation.entries().iter().map(|e| e.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
    }

    #[test]
    fn entry_serializes_with_lowercase_role() {
        let entry = ConversationEntry {
            role: Role::Assistant,
            content: "hi".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hi");
    }
}
