use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tempfile::TempDir;

use raffle_roster::{
    core::store::{RecordStore, Rejected, StoreError},
    persist::{PersistError, PersistResult, RosterSource, memory::MemoryList},
    types::{Entry, Roster},
};

fn seeded(names: &[&str]) -> RecordStore {
    RecordStore::new(Box::new(MemoryList::with_entries(names.iter().copied())))
}

fn rejection(err: StoreError) -> Rejected {
    match err {
        StoreError::Rejected(r) => r,
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn add_to_empty_roster_then_list() {
    let store = RecordStore::in_memory();
    assert_eq!(store.add("Alice").expect("add"), vec!["Alice"]);
    assert_eq!(store.list().expect("list"), vec!["Alice"]);
}

#[test]
fn add_trims_and_rejects_empty() {
    let store = RecordStore::in_memory();
    assert_eq!(store.add("  Alice\t").expect("add"), vec!["Alice"]);
    assert_eq!(rejection(store.add("   ").unwrap_err()), Rejected::EmptyName);
    assert_eq!(rejection(store.add("").unwrap_err()), Rejected::EmptyName);
    assert_eq!(store.list().expect("list"), vec!["Alice"]);
}

#[test]
fn names_with_line_breaks_are_rejected() {
    let store = seeded(&["Alice"]);

    for raw in ["Bob\nAlice", "Bob\r\nAlice", "Bob\rCarol", "  Bob\nDave "] {
        let err = rejection(store.add(raw).unwrap_err());
        assert_eq!(err, Rejected::InvalidName(raw.trim().to_string()));
    }
    assert_eq!(store.list().expect("list"), vec!["Alice"]);

    // Surrounding line breaks are trimmed like any other whitespace.
    assert_eq!(store.add("\nBob\r\n").expect("add"), vec!["Alice", "Bob"]);
    assert_eq!(store.list().expect("list"), vec!["Alice", "Bob"]);
}

#[test]
fn duplicate_add_is_rejected_and_roster_unchanged() {
    let store = seeded(&["Alice"]);
    let err = rejection(store.add("Alice").unwrap_err());
    assert_eq!(err, Rejected::Duplicate("Alice".to_string()));
    assert_eq!(rejection(store.add(" Alice ").unwrap_err()), err);
    assert_eq!(store.list().expect("list"), vec!["Alice"]);
}

#[test]
fn delete_missing_name_is_rejected_and_roster_unchanged() {
    let store = seeded(&["Alice", "Bob"]);
    let err = rejection(store.delete("Carol").unwrap_err());
    assert_eq!(err, Rejected::NotFound("Carol".to_string()));
    assert_eq!(store.list().expect("list"), vec!["Alice", "Bob"]);
}

#[test]
fn delete_preserves_order_of_remaining() {
    let store = seeded(&["Alice", "Bob", "Carol", "Dave"]);
    assert_eq!(store.delete("Bob").expect("delete"), vec!["Alice", "Carol", "Dave"]);
    assert_eq!(store.delete(" Dave ").expect("delete"), vec!["Alice", "Carol"]);
    assert_eq!(store.list().expect("list"), vec!["Alice", "Carol"]);
}

#[test]
fn draw_needs_two_entries() {
    let empty = RecordStore::in_memory();
    assert_eq!(
        rejection(empty.draw().unwrap_err()),
        Rejected::InsufficientEntries { count: 0 }
    );

    let single = seeded(&["Alice"]);
    assert_eq!(
        rejection(single.draw().unwrap_err()),
        Rejected::InsufficientEntries { count: 1 }
    );
}

#[test]
fn draw_returns_two_distinct_members() {
    let names = ["Alice", "Bob", "Carol"];
    let store = seeded(&names);
    for _ in 0..100 {
        let pair = store.draw().expect("draw");
        assert_ne!(pair.first, pair.second);
        assert!(names.contains(&pair.first.as_str()));
        assert!(names.contains(&pair.second.as_str()));
    }
    assert_eq!(store.list().expect("list"), names);
}

#[test]
fn rejection_messages_are_displayable() {
    assert_eq!(Rejected::EmptyName.to_string(), "name must not be empty");
    assert_eq!(
        Rejected::InvalidName("a\nb".into()).to_string(),
        "name \"a\\nb\" must not contain line breaks"
    );
    assert_eq!(
        Rejected::Duplicate("Alice".into()).to_string(),
        "name \"Alice\" already exists"
    );
    assert_eq!(
        Rejected::NotFound("Carol".into()).to_string(),
        "name \"Carol\" not found"
    );
    assert_eq!(
        Rejected::InsufficientEntries { count: 1 }.to_string(),
        "need at least 2 names to draw, roster has 1"
    );
}

#[test]
fn file_backed_store_survives_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("names.txt");

    {
        let store = RecordStore::open(&path).expect("open");
        assert!(path.exists());
        store.add("Alice").expect("add");
        store.add("Bob").expect("add");
        store.delete("Alice").expect("delete");
    }

    let reopened = RecordStore::open(&path).expect("reopen");
    assert_eq!(reopened.path(), Some(path.as_path()));
    assert_eq!(reopened.list().expect("list"), vec!["Bob"]);
}

#[test]
fn store_rereads_file_changed_behind_its_back() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("names.txt");
    let store = RecordStore::open(&path).expect("open");
    store.add("Alice").expect("add");

    std::fs::write(&path, "Alice\nZed\n").expect("external write");
    assert_eq!(store.list().expect("list"), vec!["Alice", "Zed"]);
}

struct FlakySource {
    inner: MemoryList,
    fail_load: bool,
    fail_save: bool,
    saves: Arc<AtomicUsize>,
}

fn io_err() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
}

impl RosterSource for FlakySource {
    fn load(&mut self) -> PersistResult<Roster> {
        if self.fail_load {
            return Err(PersistError::Read {
                path: "flaky".into(),
                source: io_err(),
            });
        }
        self.inner.load()
    }

    fn save(&mut self, entries: &[Entry]) -> PersistResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_save {
            return Err(PersistError::Write {
                path: "flaky".into(),
                source: io_err(),
            });
        }
        self.inner.save(entries)
    }
}

fn flaky(fail_load: bool, fail_save: bool) -> (RecordStore, Arc<AtomicUsize>) {
    let saves = Arc::new(AtomicUsize::new(0));
    let source = FlakySource {
        inner: MemoryList::with_entries(["Alice", "Bob"]),
        fail_load,
        fail_save,
        saves: Arc::clone(&saves),
    };
    (RecordStore::new(Box::new(source)), saves)
}

#[test]
fn load_failure_aborts_without_saving() {
    let (store, saves) = flaky(true, false);

    assert!(matches!(store.list(), Err(StoreError::Persist(PersistError::Read { .. }))));
    assert!(matches!(store.add("Carol"), Err(StoreError::Persist(_))));
    assert!(matches!(store.delete("Alice"), Err(StoreError::Persist(_))));
    assert!(matches!(store.draw(), Err(StoreError::Persist(_))));
    assert_eq!(saves.load(Ordering::SeqCst), 0);
}

#[test]
fn save_failure_is_reported_and_lock_released() {
    let (store, saves) = flaky(false, true);

    let err = store.add("Carol").unwrap_err();
    assert!(matches!(err, StoreError::Persist(PersistError::Write { .. })));
    assert!(err.rejection().is_none());
    assert_eq!(saves.load(Ordering::SeqCst), 1);

    // Lock must be free again after the failed call.
    assert_eq!(store.list().expect("list"), vec!["Alice", "Bob"]);
}

#[test]
fn rejections_never_save() {
    let (store, saves) = flaky(false, false);

    let _ = store.add("Alice").unwrap_err();
    let _ = store.add(" ").unwrap_err();
    let _ = store.delete("Nobody").unwrap_err();
    let _ = store.draw().expect("draw");
    let _ = store.list().expect("list");
    assert_eq!(saves.load(Ordering::SeqCst), 0);
}
