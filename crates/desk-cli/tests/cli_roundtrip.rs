//! Drives the `desk` binary against a temporary data directory.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn desk(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_desk"))
        .current_dir(dir)
        .env_remove("NEWSDESK_STORAGE__DIR")
        .env_remove("NEWSDESK_STORAGE__KEY")
        .env_remove("NEWSDESK_LOG")
        .arg("--data-dir")
        .arg(dir.join("data"))
        .args(args)
        .output()
        .expect("desk binary should run")
}

fn json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "desk failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn fresh_store_lists_samples() {
    let dir = TempDir::new().unwrap();
    let listing = json(&desk(dir.path(), &["list", "--format", "json"]));

    assert_eq!(listing["range"], "1-3 of 3");
    assert_eq!(listing["items"][0]["id"], "1");
    assert!(!dir.path().join("data").join("cms_articles.json").exists());
}

#[test]
fn add_persists_and_prepends() {
    let dir = TempDir::new().unwrap();
    let created = json(&desk(
        dir.path(),
        &[
            "add", "--format", "json", "--headline", "Harbor festival returns", "--author",
            "Mina Park", "--body", "Boats and music all weekend.", "--date", "2025-08-02",
            "--published",
        ],
    ));
    let id = created["id"].as_str().unwrap().to_string();

    let listing = json(&desk(dir.path(), &["list", "--format", "json", "--status", "published"]));
    assert_eq!(listing["items"][0]["id"], id.as_str());
    assert_eq!(listing["total_items"], 3);
    assert!(dir.path().join("data").join("cms_articles.json").exists());
}

#[test]
fn invalid_add_reports_field_errors() {
    let dir = TempDir::new().unwrap();
    let output = desk(
        dir.path(),
        &[
            "add", "--headline", " ", "--author", "Jane123", "--body", "x", "--date", "",
        ],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("desk error: article not saved"));
    assert!(stderr.contains("Headline is required"));
    assert!(stderr.contains("Author must not contain numbers"));
    assert!(stderr.contains("Publication date is required"));
}

#[test]
fn toggle_then_delete() {
    let dir = TempDir::new().unwrap();

    let toggled = json(&desk(dir.path(), &["toggle", "2", "--format", "json"]));
    assert_eq!(toggled["applied"], true);
    let listing = json(&desk(dir.path(), &["list", "--format", "json", "--status", "unpublished"]));
    assert_eq!(listing["total_items"], 0);

    let deleted = json(&desk(dir.path(), &["delete", "2", "--format", "json"]));
    assert_eq!(deleted["applied"], true);
    let again = json(&desk(dir.path(), &["delete", "2", "--format", "json"]));
    assert_eq!(again["applied"], false);
}

#[test]
fn show_renders_preview() {
    let dir = TempDir::new().unwrap();
    let output = desk(dir.path(), &["show", "3"]);
    let text = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(text.starts_with("Daily News"));
    assert!(text.contains("14/05/2025"));
    assert!(text.contains("By Carlos Mendoza"));

    let missing = desk(dir.path(), &["show", "404"]);
    assert_eq!(String::from_utf8_lossy(&missing.stdout).trim(), "Article not found.");
}

#[test]
fn edit_attaches_images_in_order() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("one.png"), b"1").unwrap();
    std::fs::write(dir.path().join("two.jpg"), b"22").unwrap();

    let edited = json(&desk(
        dir.path(),
        &[
            "edit", "1", "--format", "json", "--headline", "Park plan approved", "--image",
            "one.png", "--image", "two.jpg",
        ],
    ));

    assert_eq!(edited["headline"], "Park plan approved");
    assert_eq!(edited["images"][0]["name"], "one.png");
    assert_eq!(edited["images"][1]["name"], "two.jpg");
    assert_eq!(edited["images"][1]["sizeBytes"], 2);
}

#[test]
fn show_image_index_wraps_around_the_carousel() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("one.png"), b"1").unwrap();
    std::fs::write(dir.path().join("two.jpg"), b"22").unwrap();
    json(&desk(
        dir.path(),
        &["edit", "1", "--format", "json", "--image", "one.png", "--image", "two.jpg"],
    ));

    let huge = u64::MAX.to_string();
    let preview = json(&desk(dir.path(), &["show", "1", "--format", "json", "--image", &huge]));
    assert_eq!(preview["status"], "found");
    assert_eq!(preview["image"], "two.jpg");
    assert_eq!(preview["carousel"], true);

    let third = json(&desk(dir.path(), &["show", "1", "--format", "json", "--image", "2"]));
    assert_eq!(third["image"], "one.png");
}
