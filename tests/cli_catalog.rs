use std::path::Path;

use assert_cmd::Command;
use bookcase::BookRecord;
use predicates::prelude::*;

fn bookcase(data_dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("bookcase");
    cmd.env_remove("RUST_LOG")
        .env_remove("BOOKCASE_DATA_DIR")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn add(data_dir: &Path, title: &str, author: &str, category: &str) {
    bookcase(data_dir)
        .args(["add", "--title", title, "--author", author, "--category", category])
        .assert()
        .success();
}

#[test]
fn list_on_fresh_data_dir_prints_empty_message() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    bookcase(&temp.path().join("data"))
        .arg("list")
        .assert()
        .success()
        .stdout("No books to show.\n");
    Ok(())
}

#[test]
fn add_sort_and_filter_persist_across_invocations() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let data_dir = temp.path().join("data");

    add(&data_dir, "Emma", "Jane Austen", "Classic");
    add(&data_dir, "Dune", "Frank Herbert", "Sci-Fi");

    bookcase(&data_dir)
        .args(["sort", "asc"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Dune\n"));

    bookcase(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(
            "Dune\n  Author: Frank Herbert\n  Category: Sci-Fi\n\n\
             Emma\n  Author: Jane Austen\n  Category: Classic\n",
        );

    bookcase(&data_dir)
        .args(["list", "--filter", "Classic"])
        .assert()
        .success()
        .stdout("Emma\n  Author: Jane Austen\n  Category: Classic\n");

    bookcase(&data_dir)
        .arg("categories")
        .assert()
        .success()
        .stdout("Sci-Fi\nClassic\n");

    let snapshot = std::fs::read_to_string(data_dir.join("dombooks.json"))?;
    let records: Vec<BookRecord> = serde_json::from_str(&snapshot)?;
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "Emma"]);
    Ok(())
}

#[test]
fn add_with_blank_author_fails_and_leaves_catalog_untouched() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let data_dir = temp.path().join("data");

    bookcase(&data_dir)
        .args(["add", "--title", "Dune", "--author", "   ", "--category", "Sci-Fi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be blank"));

    assert!(!data_dir.join("dombooks.json").exists());
    Ok(())
}

#[test]
fn remove_deletes_matching_book_and_rejects_missing_one() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let data_dir = temp.path().join("data");
    add(&data_dir, "Emma", "Jane Austen", "Classic");

    let remove_args = [
        "remove",
        "--title",
        "Emma",
        "--author",
        "Jane Austen",
        "--category",
        "Classic",
    ];
    bookcase(&data_dir)
        .args(remove_args)
        .assert()
        .success()
        .stdout("removed: Emma\n");

    bookcase(&data_dir)
        .args(remove_args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no book matches"));
    Ok(())
}

#[test]
fn corrupt_snapshot_loads_as_empty_catalog() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let data_dir = temp.path().join("data");
    std::fs::create_dir_all(&data_dir)?;
    std::fs::write(data_dir.join("dombooks.json"), "{ definitely not json")?;

    bookcase(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout("No books to show.\n")
        .stderr(predicate::str::contains("discarding malformed catalog snapshot"));

    add(&data_dir, "Dune", "Frank Herbert", "Sci-Fi");
    bookcase(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));
    Ok(())
}

#[test]
fn list_html_escapes_titles() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let data_dir = temp.path().join("data");
    add(&data_dir, "<script>x</script>", "Mallory", "Hacks");

    bookcase(&data_dir)
        .args(["list", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;script&gt;x&lt;/script&gt;"))
        .stdout(predicate::str::contains("<script>").not());
    Ok(())
}

#[test]
fn data_dir_falls_back_to_environment() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let data_dir = temp.path().join("from-env");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("bookcase");
    cmd.env_remove("RUST_LOG")
        .env("BOOKCASE_DATA_DIR", &data_dir)
        .args(["add", "--title", "Emma", "--author", "Jane Austen", "--category", "Classic"])
        .assert()
        .success();

    assert!(data_dir.join("dombooks.json").exists());
    Ok(())
}

#[test]
fn rust_log_debug_emits_debug_line_to_stderr() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    bookcase(&temp.path().join("data"))
        .env("RUST_LOG", "debug")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed cli"));
    Ok(())
}

#[test]
fn mutating_commands_report_changes_on_stderr() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let data_dir = temp.path().join("data");

    bookcase(&data_dir)
        .args(["add", "--title", "Emma", "--author", "Jane Austen", "--category", "Classic"])
        .assert()
        .success()
        .stdout("added: Emma\n")
        .stderr(predicate::str::contains("book added"));

    bookcase(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn invalid_rust_log_falls_back_to_default() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    bookcase(&temp.path().join("data"))
        .env("RUST_LOG", "bookcase=notalevel")
        .arg("list")
        .assert()
        .success()
        .stdout("No books to show.\n")
        .stderr(predicate::str::contains("ignoring invalid RUST_LOG"));
    Ok(())
}
