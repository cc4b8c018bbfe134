//! End-to-end tests of the repository over real file-backed storage.

use oceannotes::model::{NoteDraft, UNTITLED};
use oceannotes::repo::NoteRepository;
use oceannotes::store::fs::FileStore;

fn open(dir: &std::path::Path) -> NoteRepository<FileStore> {
    NoteRepository::open(FileStore::new(dir.to_path_buf()))
}

#[test]
fn notes_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let first_session = {
        let mut repo = open(dir.path());
        repo.create(
            NoteDraft::new()
                .title("Groceries")
                .content("milk, eggs")
                .tags(vec!["errands".to_string()]),
        );
        repo.create(NoteDraft::new().title("  "));
        repo.get_all()
    };

    let repo = open(dir.path());
    let restored = repo.get_all();
    assert_eq!(restored, first_session);
    assert_eq!(restored.len(), 3); // two created plus the seed
    assert!(restored.iter().any(|n| n.title == UNTITLED));
}

#[test]
fn first_run_writes_a_seed_snapshot_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let repo = open(dir.path());

    let store = FileStore::new(dir.path().to_path_buf());
    let raw = std::fs::read_to_string(store.snapshot_path()).unwrap();
    assert!(raw.contains("\"welcome\""));
    assert!(raw.contains("\"createdAt\""));
    assert_eq!(repo.get_all().len(), 1);
}

#[test]
fn corrupt_snapshot_on_disk_reseeds() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut repo = open(dir.path());
        repo.create(NoteDraft::new().title("Will be lost"));
    }

    let store = FileStore::new(dir.path().to_path_buf());
    std::fs::write(store.snapshot_path(), "### not json ###").unwrap();

    let repo = open(dir.path());
    let all = repo.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].tags, vec!["welcome".to_string()]);

    // Recovery state is persisted, so the next open parses cleanly.
    let again = open(dir.path());
    assert_eq!(again.get_all(), all);
}

#[test]
fn deletions_are_durable() {
    let dir = tempfile::tempdir().unwrap();
    let doomed = {
        let mut repo = open(dir.path());
        let note = repo.create(NoteDraft::new().title("temp"));
        repo.delete(&note.id);
        note
    };

    let repo = open(dir.path());
    assert_eq!(repo.get_by_id(&doomed.id), None);
}

#[test]
fn search_works_over_restored_state() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut repo = open(dir.path());
        repo.create(NoteDraft::new().title("Shopping list"));
        repo.create(
            NoteDraft::new()
                .title("Recipe")
                .content("buy milk")
                .tags(vec!["food".to_string()]),
        );
    }

    let repo = open(dir.path());
    assert_eq!(repo.search("milk").len(), 1);
    assert_eq!(repo.search("milk")[0].title, "Recipe");
    assert_eq!(repo.search("list")[0].title, "Shopping list");
}
