use super::{LoadResult, SnapshotStore};
use crate::error::{NotesError, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Key the snapshot is stored under when none is configured.
pub const DEFAULT_KEY: &str = "notes-app__notes";

/// File-backed snapshot storage.
///
/// The payload lives in a single file named `{key}.json` inside the root
/// directory. Read errors are reported as [`LoadResult::Failed`] and write
/// errors as a `false` return, both with a logged warning; neither is ever
/// propagated to the repository's callers.
pub struct FileStore {
    root: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            key: DEFAULT_KEY.to_string(),
        }
    }

    /// Override the storage key (useful for side-by-side collections).
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Path of the snapshot file for this store's key.
    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotesError::Io)?;
        }
        Ok(())
    }

    fn read_snapshot(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(NotesError::Io)
    }

    fn write_snapshot(&self, raw: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.snapshot_path(), raw).map_err(NotesError::Io)?;
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> LoadResult {
        let path = self.snapshot_path();
        if !path.exists() {
            return LoadResult::Missing;
        }
        match self.read_snapshot(&path) {
            Ok(raw) => LoadResult::Found(raw),
            Err(err) => {
                warn!("failed to read snapshot at {}: {}", path.display(), err);
                LoadResult::Failed
            }
        }
    }

    fn save(&mut self, raw: &str) -> bool {
        match self.write_snapshot(raw) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "failed to write snapshot at {}: {}",
                    self.snapshot_path().display(),
                    err
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reports_missing_on_fresh_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.load(), LoadResult::Missing);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        assert!(store.save("[1,2,3]"));
        assert_eq!(store.load(), LoadResult::Found("[1,2,3]".to_string()));
    }

    #[test]
    fn save_creates_missing_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("store");
        let mut store = FileStore::new(root.clone());
        assert!(store.save("[]"));
        assert!(root.exists());
    }

    #[test]
    fn snapshot_file_is_named_after_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).with_key("scratch");
        assert_eq!(
            store.snapshot_path(),
            dir.path().join("scratch.json")
        );
    }

    #[test]
    fn stores_with_distinct_keys_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = FileStore::new(dir.path().to_path_buf()).with_key("a");
        let mut b = FileStore::new(dir.path().to_path_buf()).with_key("b");
        assert!(a.save("payload-a"));
        assert!(b.save("payload-b"));
        assert_eq!(a.load(), LoadResult::Found("payload-a".to_string()));
        assert_eq!(b.load(), LoadResult::Found("payload-b".to_string()));
    }
}
