use std::path::PathBuf;

use brace_balance_core::{
    render_report, BraceScanner, FileSource, OutputFormat, Scanner, SourceRepository,
};
use insta::assert_json_snapshot;
use serde_json::json;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn scan_fixture(name: &str) -> serde_json::Value {
    let fixture_path = fixture_dir().join(name);
    let source = FileSource::new(&fixture_path);
    let line_count = source
        .load_source()
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", fixture_path.display()))
        .len();

    let outcome = BraceScanner::new(source)
        .scan()
        .unwrap_or_else(|err| panic!("scan failed for fixture {}: {err:#}", name));
    let report = render_report(&outcome, OutputFormat::Human).expect("human report renders");

    json!({
        "fixture": name,
        "line_count": line_count,
        "outcome": outcome,
        "report": report,
    })
}

#[test]
fn balanced_snapshot() {
    let snapshot = scan_fixture("balanced.ts");
    assert_json_snapshot!("balanced", snapshot);
}

#[test]
fn unclosed_snapshot() {
    let snapshot = scan_fixture("unclosed.ts");
    assert_json_snapshot!("unclosed", snapshot);
}

#[test]
fn stray_close_snapshot() {
    let snapshot = scan_fixture("stray_close.ts");
    assert_json_snapshot!("stray_close", snapshot);
}

#[test]
fn empty_snapshot() {
    let snapshot = scan_fixture("empty.txt");
    assert_json_snapshot!("empty", snapshot);
}
