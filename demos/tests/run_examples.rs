use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Command;

fn is_numbered_rs(entry: &fs::DirEntry) -> bool {
    let path = entry.path();
    path.is_file()
        && path.extension() == Some(OsStr::new("rs"))
        && path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|n| n.starts_with(|c: char| c.is_ascii_digit()))
}

#[test]
fn run_all_demos_with_mock() {
    let demos_dir = Path::new("examples");
    let entries = fs::read_dir(demos_dir).expect("read examples dir");
    let mut found_any = false;
    for entry in entries.flatten().filter(is_numbered_rs) {
        let path = entry.path();
        let name = path
            .file_stem()
            .and_then(OsStr::to_str)
            .expect("example name")
            .to_string();
        found_any = true;
        let mut cmd = Command::new("cargo");
        cmd.arg("run").arg("--example").arg(&name);
        cmd.env("GAZZETTA_DEMOS_USE_MOCK", "1");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Using Mock Adapters"));
    }
    assert!(found_any, "no demos found to run");
}

#[test]
fn company_news_demo_drops_cross_provider_duplicate() {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--example", "01_company_news"])
        .env("GAZZETTA_DEMOS_USE_MOCK", "1");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Apple Beats Earnings Expectations"))
        .stdout(predicate::str::contains("BREAKING").not())
        .stdout(predicate::str::contains("\"imageUrl\""));
}
