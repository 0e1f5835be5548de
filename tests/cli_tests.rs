use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookshelf_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bookshelf"))
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    bookshelf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("book catalog"));
}

#[test]
fn test_version() {
    bookshelf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookshelf"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config_and_records() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".bookshelf.yml").exists());
    assert!(temp_dir.path().join("records.yml").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    bookshelf_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

// =============================================================================
// Listing and show (seed fallback, no init required)
// =============================================================================

#[test]
fn test_books_lists_seed_data() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .arg("books")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wind Song"))
        .stdout(predicate::str::contains("Divine Sword"));
}

#[test]
fn test_books_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = bookshelf_cmd()
        .args(["books", "--json"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let books: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let books = books.as_array().unwrap();
    assert_eq!(books.len(), 6);
    assert_eq!(books[0]["name"], "Wind Song");
    assert_eq!(books[0]["authorId"], "1");
}

#[test]
fn test_authors_lists_seed_data() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .arg("authors")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("James Kotlin"))
        .stdout(predicate::str::contains("Rose Pumpkin"));
}

#[test]
fn test_show_resolves_author() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .args(["show", "1"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wind Song"))
        .stdout(predicate::str::contains("James Kotlin"));
}

#[test]
fn test_show_unknown_id_fails() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .args(["show", "999"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_book() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .args(["add", "Dune", "Sci-Fi", "--author", "1"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"))
        .stdout(predicate::str::contains("Dune"));
}

#[test]
fn test_add_persists_after_init() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    bookshelf_cmd()
        .args(["add", "Dune", "Sci-Fi", "--author", "2"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    bookshelf_cmd()
        .arg("books")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));

    let records = std::fs::read_to_string(temp_dir.path().join("records.yml")).unwrap();
    assert!(records.contains("Dune"));
}

// =============================================================================
// GraphQL from the CLI
// =============================================================================

#[test]
fn test_query_books() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .args(["query", "{ books { id name } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wind Song"));
}

#[test]
fn test_query_bare_selection_is_wrapped() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .args(["query", "authors { name }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sweet Hunk"));
}

#[test]
fn test_query_nested_author() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .args(["query", r#"{ book(id: "2") { author { name } } }"#])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rose Pumpkin"));
}

#[test]
fn test_mutate_add_book() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .args([
            "mutate",
            r#"addBook(name: "Dune", genre: "Sci-Fi", authorId: "1") { id name author { name } }"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("James Kotlin"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .args([
            "query",
            r#"query Book($id: ID) { book(id: $id) { name } }"#,
            "--variables",
            r#"{"id": "1"}"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wind Song"));
}
