mod common;

use assert_cmd::Command;
use common::{TestHomeGuard, installed_record};
use predicates::prelude::*;

fn pkgsift(home: &TestHomeGuard) -> Command {
    let mut cmd = Command::cargo_bin("pkgsift").unwrap();
    cmd.env("PKGSIFT_HOME", home.path());
    cmd
}

#[test]
fn test_search_local_prints_enumeration_markers() {
    let home = TestHomeGuard::new();
    home.write_installed_index(vec![installed_record("pkg.editor", "Some Editor")]);

    // Purely local matches are not available online, so nothing is listed
    // between the markers
    pkgsift(&home)
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("Begin enumeration"))
        .stdout(predicate::str::contains("End enumeration"))
        .stdout(predicate::str::contains("available Online").not());
}

#[test]
fn test_search_json_lists_local_matches() {
    let home = TestHomeGuard::new();
    home.write_installed_index(vec![
        installed_record("pkg.editor", "Some Editor"),
        installed_record("pkg.terminal", "Some Terminal"),
    ]);

    pkgsift(&home)
        .args(["search", "editor", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"package_id\": \"pkg.editor\""))
        .stdout(predicate::str::contains("pkg.terminal").not());
}

#[test]
fn test_search_out_of_range_source_exits_with_resolution_code() {
    let home = TestHomeGuard::new();
    home.write_config(&[("ExampleSource", "https://pkgs.example.com/catalog")]);

    pkgsift(&home)
        .args(["search", "--source", "5"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_search_negative_source_selects_local() {
    let home = TestHomeGuard::new();
    home.write_installed_index(vec![installed_record("pkg.editor", "Some Editor")]);

    pkgsift(&home)
        .args(["search", "--source", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Begin enumeration"));
}

#[test]
fn test_sources_without_config_suggests_solution() {
    let home = TestHomeGuard::new();

    pkgsift(&home)
        .arg("sources")
        .assert()
        .success()
        .stdout(predicate::str::contains("No remote catalogs configured"));
}

#[test]
fn test_sources_lists_configured_catalogs() {
    let home = TestHomeGuard::new();
    home.write_config(&[
        ("ExampleSource", "https://pkgs.example.com/catalog"),
        ("MirrorSource", "https://mirror.example.com/catalog"),
    ]);

    pkgsift(&home)
        .arg("sources")
        .assert()
        .success()
        .stdout(predicate::str::contains("ExampleSource"))
        .stdout(predicate::str::contains("MirrorSource"))
        .stdout(predicate::str::contains("2 remote catalogs"));
}

#[test]
fn test_unknown_source_name_exits_with_resolution_code() {
    let home = TestHomeGuard::new();
    home.write_config(&[("ExampleSource", "https://pkgs.example.com/catalog")]);

    pkgsift(&home)
        .args(["search", "--source", "NoSuchSource"])
        .assert()
        .failure()
        .code(4);
}
