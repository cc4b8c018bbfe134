//! # Note Repository
//!
//! The repository owns the authoritative note collection. All mutations go
//! through it; everything else sees copies. After every mutating call it
//! persists the full collection as one JSON snapshot and broadcasts the
//! fresh state through a [`ChangePublisher`].
//!
//! Two contract decisions worth calling out (both match the behavior the
//! persisted format was designed around, and both are pinned by tests):
//!
//! - **Publish is unconditional.** Update/delete on an unknown id is a
//!   silent no-op for the collection, but still persists and publishes.
//! - **Durability is best-effort.** A failed save is logged and swallowed;
//!   the in-memory collection stays authoritative for the session and the
//!   caller is never interrupted.

use chrono::Utc;
use log::warn;

use crate::id::{IdGenerator, UuidGenerator};
use crate::model::{Note, NoteDraft, StoredNote};
use crate::publisher::{ChangePublisher, SubscriptionId};
use crate::store::{self, LoadResult, SnapshotStore};

const SEED_TITLE: &str = "Welcome to Ocean Notes";
const SEED_CONTENT: &str = "This is your first note. Use the editor to update content. \
Search from the sidebar. Your notes are saved locally.";
const SEED_TAG: &str = "welcome";

/// The authoritative note store: CRUD, search, persistence, notifications.
///
/// Generic over the storage backend and the id source so tests can run
/// against [`InMemoryStore`](crate::store::memory::InMemoryStore) and a
/// deterministic generator. One instance per collection; consumers receive
/// it by injection rather than through a global.
pub struct NoteRepository<S: SnapshotStore, G: IdGenerator = UuidGenerator> {
    store: S,
    ids: G,
    // Kept sorted by `updated_at` descending; stable sort makes ties
    // insertion-order stable.
    notes: Vec<Note>,
    publisher: ChangePublisher,
    // Reserved for a future remote backend; read at construction, unused.
    api_base: Option<String>,
}

impl<S: SnapshotStore> NoteRepository<S, UuidGenerator> {
    /// Open a repository with the default UUID id generator and no
    /// backend configuration.
    pub fn open(store: S) -> Self {
        Self::open_with(store, UuidGenerator, None)
    }
}

impl<S: SnapshotStore, G: IdGenerator> NoteRepository<S, G> {
    /// Open a repository, restoring persisted state or seeding a welcome
    /// note when no valid snapshot exists. Runs exactly once per instance.
    ///
    /// `api_base` is the optional remote endpoint from the environment
    /// resolver; it is recorded but not yet consulted.
    pub fn open_with(store: S, ids: G, api_base: Option<String>) -> Self {
        let mut repo = Self {
            store,
            ids,
            notes: Vec::new(),
            publisher: ChangePublisher::new(),
            api_base,
        };
        repo.load_initial();
        repo.publish();
        repo
    }

    /// Snapshot of all notes, sorted by `updated_at` descending.
    pub fn get_all(&self) -> Vec<Note> {
        self.notes.clone()
    }

    /// Look up a single note by exact id.
    pub fn get_by_id(&self, id: &str) -> Option<Note> {
        self.notes.iter().find(|n| n.id == id).cloned()
    }

    /// Create a note from the draft's fields.
    ///
    /// The title is trimmed and defaulted, content and tags default to
    /// empty, and both timestamps are set to now.
    pub fn create(&mut self, draft: NoteDraft) -> Note {
        let now = Utc::now().timestamp_millis();
        let note = Note {
            id: self.ids.new_id(),
            title: Note::normalize_title(draft.title.as_deref().unwrap_or("")),
            content: draft.content.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            tags: draft.tags.unwrap_or_default(),
        };
        self.notes.insert(0, note.clone());
        self.resort();
        self.persist();
        self.publish();
        note
    }

    /// Merge the draft over an existing note.
    ///
    /// Returns `None` when the id is unknown. The existing id and
    /// `created_at` always win; the title is re-normalized; `updated_at`
    /// moves to now.
    pub fn update(&mut self, id: &str, changes: NoteDraft) -> Option<Note> {
        let updated = self.notes.iter_mut().find(|n| n.id == id).map(|note| {
            let title_source = changes.title.unwrap_or_else(|| note.title.clone());
            note.title = Note::normalize_title(&title_source);
            if let Some(content) = changes.content {
                note.content = content;
            }
            if let Some(tags) = changes.tags {
                note.tags = tags;
            }
            note.updated_at = Utc::now().timestamp_millis();
            note.clone()
        });
        self.resort();
        self.persist();
        self.publish();
        updated
    }

    /// Remove a note. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: &str) {
        self.notes.retain(|n| n.id != id);
        self.persist();
        self.publish();
    }

    /// Case-insensitive substring search over title, content, and tags.
    ///
    /// A blank query returns the full collection, same as [`get_all`].
    /// Results keep the collection's recency order.
    ///
    /// [`get_all`]: NoteRepository::get_all
    pub fn search(&self, query: &str) -> Vec<Note> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.get_all();
        }
        self.notes
            .iter()
            .filter(|n| n.matches(&q))
            .cloned()
            .collect()
    }

    /// Attach an observer; it is called immediately with the current
    /// snapshot, then after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&[Note]) + 'static) -> SubscriptionId {
        self.publisher.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.publisher.unsubscribe(id);
    }

    /// The configured remote endpoint, if any. Currently informational.
    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }

    fn load_initial(&mut self) {
        match self.store.load() {
            LoadResult::Found(raw) => match serde_json::from_str::<Vec<StoredNote>>(&raw) {
                Ok(records) => {
                    let now = Utc::now().timestamp_millis();
                    self.notes = records.into_iter().map(|r| r.into_note(now)).collect();
                    self.resort();
                    return;
                }
                Err(err) => warn!("discarding corrupt snapshot: {}", err),
            },
            LoadResult::Missing => {}
            LoadResult::Failed => warn!("storage unavailable; starting from seed"),
        }
        self.seed();
    }

    fn seed(&mut self) {
        let now = Utc::now().timestamp_millis();
        self.notes = vec![Note {
            id: self.ids.new_id(),
            title: SEED_TITLE.to_string(),
            content: SEED_CONTENT.to_string(),
            created_at: now,
            updated_at: now,
            tags: vec![SEED_TAG.to_string()],
        }];
        self.persist();
    }

    fn resort(&mut self) {
        self.notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    }

    fn persist(&mut self) {
        let payload = match store::encode(&self.notes) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("snapshot not serializable, skipping persist: {}", err);
                return;
            }
        };
        if !self.store.save(&payload) {
            warn!("snapshot not persisted; in-memory state remains authoritative");
        }
    }

    fn publish(&mut self) {
        self.publisher.publish(&self.notes);
    }
}
