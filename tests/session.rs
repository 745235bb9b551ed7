#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use cd_inventory::{load_inventory, save_inventory, Cd, Inventory, DATA_FILE_NAME};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn inventory_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("cd-inventory"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn seed(dir: &TempDir, records: Vec<Cd>) {
    save_inventory(&dir.path().join(DATA_FILE_NAME), &Inventory::from(records)).unwrap();
}

#[test]
fn test_missing_data_file_exits_before_menu() {
    let temp = TempDir::new().unwrap();

    inventory_cmd(&temp)
        .write_stdin("x\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Menu").not())
        .stderr(predicate::str::contains(
            "You need to create a CDInventory.dat file first!",
        ));
}

#[test]
fn test_display_shows_seeded_inventory() {
    let temp = TempDir::new().unwrap();
    seed(
        &temp,
        vec![
            Cd::new(1, "Abbey Road", "The Beatles"),
            Cd::new(2, "Revolver", "The Beatles"),
        ],
    );

    inventory_cmd(&temp)
        .write_stdin("I\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tAbbey Road (by:The Beatles)"))
        .stdout(predicate::str::contains("2\tRevolver (by:The Beatles)"));
}

#[test]
fn test_add_and_save_persists_records() {
    let temp = TempDir::new().unwrap();
    seed(&temp, vec![Cd::new(1, "Abbey Road", "The Beatles")]);

    inventory_cmd(&temp)
        .write_stdin("a\n5\nThriller\nMichael Jackson\ns\ny\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("5\tThriller (by:Michael Jackson)"));

    let mut loaded = Inventory::new();
    load_inventory(&temp.path().join(DATA_FILE_NAME), &mut loaded).unwrap();
    assert_eq!(
        loaded.records(),
        &[
            Cd::new(1, "Abbey Road", "The Beatles"),
            Cd::new(5, "Thriller", "Michael Jackson"),
        ]
    );
}

#[test]
fn test_declined_save_keeps_file_bytes() {
    let temp = TempDir::new().unwrap();
    seed(&temp, vec![Cd::new(1, "Abbey Road", "The Beatles")]);
    let path = temp.path().join(DATA_FILE_NAME);
    let before = fs::read(&path).unwrap();

    inventory_cmd(&temp)
        .write_stdin("d\n1\ns\nn\n\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The CD was removed"));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_closed_input_is_an_error() {
    let temp = TempDir::new().unwrap();
    seed(&temp, Vec::new());

    inventory_cmd(&temp)
        .write_stdin("i\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("console input closed"));
}
