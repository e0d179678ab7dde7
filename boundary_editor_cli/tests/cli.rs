use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const TRIANGLE: &str =
    r#"[{"lat":30.0,"lng":31.0},{"lat":30.1,"lng":31.1},{"lat":30.2,"lng":31.0}]"#;

#[test]
fn info_command() {
    let file = assert_fs::NamedTempFile::new("boundary.json").unwrap();
    file.write_str(TRIANGLE).unwrap();

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args(["info", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vertices: 3"))
        .stdout(predicate::str::contains("Area:"));
}

#[test]
fn validate_command_accepts_good_boundary() {
    let file = assert_fs::NamedTempFile::new("boundary.json").unwrap();
    file.write_str(TRIANGLE).unwrap();

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args(["validate", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 3 vertices"));
}

#[test]
fn validate_command_rejects_malformed_boundary() {
    let file = assert_fs::NamedTempFile::new("boundary.json").unwrap();
    file.write_str("not json").unwrap();

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args(["validate", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid boundary"));
}

#[test]
fn contains_command() {
    let file = assert_fs::NamedTempFile::new("boundary.json").unwrap();
    file.write_str(TRIANGLE).unwrap();

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args(["contains", file.path().to_str().unwrap(), "30.08", "31.04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inside"));

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args(["contains", file.path().to_str().unwrap(), "31.0", "31.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outside"));
}

#[test]
fn geojson_roundtrip_commands() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("boundary.json");
    input.write_str(TRIANGLE).unwrap();
    let geojson = dir.child("boundary.geojson");
    let back = dir.child("back.json");

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args([
            "export-geojson",
            input.path().to_str().unwrap(),
            geojson.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    geojson.assert(predicate::path::exists());

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args([
            "import-geojson",
            geojson.path().to_str().unwrap(),
            back.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 vertices"));
    back.assert(predicate::str::contains("\"lat\":30.1"));

    dir.close().unwrap();
}

#[test]
fn zone_commands() {
    let dir = assert_fs::TempDir::new().unwrap();
    let db = dir.child("zones.sqlite");
    let boundary = dir.child("boundary.json");
    boundary.write_str(TRIANGLE).unwrap();

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args([
            "zone-add",
            db.path().to_str().unwrap(),
            "Downtown",
            "--boundary",
            boundary.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added zone 1: Downtown"));

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args(["zone-list", db.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downtown [active] 3 points:"));

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args(["zone-activate", db.path().to_str().unwrap(), "1", "--off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zone 1 is now inactive"));

    Command::cargo_bin("boundary_editor_cli")
        .unwrap()
        .args([
            "zone-list",
            db.path().to_str().unwrap(),
            "--active-only",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downtown").not());

    dir.close().unwrap();
}
