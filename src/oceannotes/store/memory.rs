use super::{LoadResult, SnapshotStore};

/// In-memory snapshot storage for testing.
///
/// Carries knobs to simulate the failure modes a browser-style local store
/// exhibits: a disabled store (every load fails) and write failure (quota
/// exceeded). Does NOT persist data beyond the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    payload: Option<String>,
    disabled: bool,
    fail_writes: bool,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing persisted payload.
    pub fn with_payload(raw: &str) -> Self {
        Self {
            payload: Some(raw.to_string()),
            ..Self::default()
        }
    }

    /// Every load reports [`LoadResult::Failed`].
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Every save fails and leaves the payload untouched.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// The currently persisted payload, if any.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> LoadResult {
        if self.disabled {
            return LoadResult::Failed;
        }
        match &self.payload {
            Some(raw) => LoadResult::Found(raw.clone()),
            None => LoadResult::Missing,
        }
    }

    fn save(&mut self, raw: &str) -> bool {
        if self.fail_writes {
            return false;
        }
        self.payload = Some(raw.to_string());
        self.save_count += 1;
        true
    }
}
