use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rolo(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("ROLO_LOG")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn delete_undo_redo_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .args(["--seed", "Alice", "--seed", "Bob"])
        .args(["-c", "delete 0", "-c", "undo", "-c", "redo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted (0): Alice"))
        .stdout(predicate::str::contains("Undid delete \"Alice\" at 0"))
        .stdout(predicate::str::contains("Redid delete \"Alice\" at 0"));
}

#[test]
fn starts_from_default_seed() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .args(["-c", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contacts"))
        .stdout(predicate::str::contains("0. Alice"))
        .stdout(predicate::str::contains("4. Eve"))
        .stdout(predicate::str::contains("undo: off  redo: off"));
}

#[test]
fn bad_requests_do_not_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .args(["--seed", "Alice", "--seed", "Bob"])
        .args(["-c", "delete 9", "-c", "delete two", "-c", "frobnicate", "-c", "add Zed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Index 9 out of range for 2 contacts"))
        .stdout(predicate::str::contains("Invalid index format: two"))
        .stdout(predicate::str::contains("Contact added (2): Zed"));
}

#[test]
fn redo_replays_oldest_undone_first() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .arg("--empty")
        .args(["-c", "add A", "-c", "add B", "-c", "undo", "-c", "undo", "-c", "redo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Redid add \"B\" at 1"));
}

#[test]
fn new_change_clears_redo() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .arg("--empty")
        .args(["-c", "add X", "-c", "undo", "-c", "add Y", "-c", "redo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to redo"));
}

#[test]
fn reads_commands_from_stdin_until_quit() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .args(["--seed", "Alice"])
        .write_stdin("add Dana\n\nsearch AN\nquit\nadd Never\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added (1): Dana"))
        .stdout(predicate::str::contains("1 result(s) for \"AN\""))
        .stdout(predicate::str::contains("Never").not());
}

#[test]
fn lookup_is_exact_and_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .args(["--seed", "Bob", "--seed", "Bobby"])
        .args(["-c", "lookup BOB", "-c", "lookup Bo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    Bob\n"))
        .stdout(predicate::str::contains("No contact named \"Bo\""));
}

#[test]
fn history_lists_pending_operations() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .arg("--empty")
        .args(["-c", "add Ann", "-c", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Undo (next first):"))
        .stdout(predicate::str::contains("\"Ann\" at 0"))
        .stdout(predicate::str::contains("(empty)"));
}

#[test]
fn config_changes_apply_to_next_session() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .args(["-c", "config seed Zoe,Yann", "-c", "config title Friends"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed set to Zoe,Yann"));

    rolo(&dir)
        .args(["-c", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Friends"))
        .stdout(predicate::str::contains("0. Zoe"))
        .stdout(predicate::str::contains("Alice").not());
}

#[test]
fn config_shows_redacted_database_urls() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .env("POSTGRES_HOST", "db.internal")
        .args(["-c", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("history-depth = 100"))
        .stdout(predicate::str::contains("@db.internal:5432/contact_db"))
        .stdout(predicate::str::contains("password123").not());
}

#[test]
fn history_depth_flag_limits_undo() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .args(["--empty", "--history-depth", "1"])
        .args(["-c", "add A", "-c", "add B", "-c", "undo", "-c", "undo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to undo"));
}

#[test]
fn insert_places_contact_and_undo_removes_it() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .args(["--seed", "Alice", "--seed", "Bob"])
        .args(["-c", "insert -1 Zed", "-c", "insert 99 Omega", "-c", "undo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added (0): Zed"))
        .stdout(predicate::str::contains("Contact added (3): Omega"))
        .stdout(predicate::str::contains("Undid add \"Omega\" at 3"));
}

#[test]
fn search_query_may_start_with_a_hyphen() {
    let dir = tempfile::tempdir().unwrap();
    rolo(&dir)
        .arg("--empty")
        .args(["-c", "add Jean-Luc", "-c", "search -Luc", "-c", "add -Ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 result(s) for \"-Luc\""))
        .stdout(predicate::str::contains("0. Jean-Luc"))
        .stdout(predicate::str::contains("Contact added (1): -Ann"));
}
