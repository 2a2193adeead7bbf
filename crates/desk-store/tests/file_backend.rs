//! File-backed keyed store tests.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use desk_core::entities::ArticleFields;
use desk_core::seed::ARTICLES_KEY;
use desk_store::{ArticleOps, ArticleStore, FileKeyedStore, KeyedStore, StoreError};

#[test]
fn absent_key_reads_none() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyedStore::open(dir.path()).unwrap();
    assert!(store.read_raw("missing").unwrap().is_none());
}

#[test]
fn write_creates_one_file_per_key() {
    let dir = TempDir::new().unwrap();
    let mut store = FileKeyedStore::open(dir.path()).unwrap();

    store.write_raw("alpha", "[1]").unwrap();
    store.write_raw("alpha", "[2]").unwrap();

    let contents = std::fs::read_to_string(dir.path().join("alpha.json")).unwrap();
    assert_eq!(contents, "[2]");

    let json_files = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|x| x == "json"))
        .count();
    assert_eq!(json_files, 1, "temp files must not linger as .json");
}

#[test]
fn creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut store = FileKeyedStore::open(&nested).unwrap();
    store.write_raw("k", "true").unwrap();
    assert!(nested.join("k.json").exists());
}

#[test]
fn rejects_path_like_keys() {
    let dir = TempDir::new().unwrap();
    let mut store = FileKeyedStore::open(dir.path()).unwrap();
    for key in ["", "../escape", "a/b", ".hidden"] {
        assert!(
            matches!(store.write_raw(key, "1"), Err(StoreError::InvalidKey(_))),
            "key {key:?} should be rejected"
        );
    }
}

#[test]
fn article_store_survives_reopen_on_disk() {
    let dir = TempDir::new().unwrap();

    let created = {
        let backend = FileKeyedStore::open(dir.path()).unwrap();
        let mut store = ArticleStore::open(backend, ARTICLES_KEY);
        store.delete("2").unwrap();
        store
            .add(ArticleFields {
                headline: "Persisted".into(),
                author: "Writer".into(),
                body: "On disk".into(),
                publication_date: "2025-07-01".into(),
                published: true,
                images: vec![],
            })
            .unwrap()
    };

    let backend = FileKeyedStore::open(dir.path()).unwrap();
    let store = ArticleStore::open(backend, ARTICLES_KEY);
    let ids: Vec<_> = store.articles().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, [created.id.as_str(), "1", "3"]);
}

#[test]
fn corrupt_file_falls_back_to_samples() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(format!("{ARTICLES_KEY}.json")), "{oops").unwrap();

    let store = ArticleStore::open(FileKeyedStore::open(dir.path()).unwrap(), ARTICLES_KEY);
    assert_eq!(store.articles().len(), 3);
}
