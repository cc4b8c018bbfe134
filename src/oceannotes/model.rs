use serde::{Deserialize, Serialize};

/// Title assigned when input is empty or whitespace-only.
pub const UNTITLED: &str = "Untitled note";

/// A single note, the only entity the repository stores.
///
/// Serialized field names follow the persisted snapshot layout
/// (`createdAt`/`updatedAt` in camelCase, `tags` optional on read).
/// Timestamps are epoch milliseconds. `id` and `created_at` are set once
/// at creation and never change; `updated_at` moves forward on every
/// mutation and is always >= `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Trim the input; an empty result becomes [`UNTITLED`].
    ///
    /// Shared by create, update, and snapshot restoration so a note can
    /// never hold an empty or whitespace-only title.
    pub fn normalize_title(input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            UNTITLED.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Case-insensitive substring match over title, content, and tags.
    ///
    /// `query_lower` must already be lowercased and trimmed.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.content.to_lowercase().contains(query_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(query_lower))
    }
}

/// Partial fields for `create` and `update`.
///
/// Absent fields mean "default" on create and "leave unchanged" on update.
/// An `id` is never part of a draft; the repository allocates and owns ids.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Note record as read back from a persisted snapshot.
///
/// Every field except `id` is permissive: older or hand-edited snapshots
/// may omit them, and restoration fills the gaps rather than rejecting
/// the whole payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredNote {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl StoredNote {
    /// Fill missing fields: timestamps default to `now`, and a missing
    /// `updated_at` falls back to `created_at` before falling back to `now`.
    pub fn into_note(self, now: i64) -> Note {
        let created_at = self.created_at.unwrap_or(now);
        Note {
            id: self.id,
            title: Note::normalize_title(self.title.as_deref().unwrap_or("")),
            content: self.content.unwrap_or_default(),
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
            tags: self.tags.unwrap_or_default(),
        }
    }
}
