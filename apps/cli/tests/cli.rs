//! End-to-end tests for the `annotated` binary

use std::io::Write;
use std::process::{Command, Output};

fn annotated(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_annotated"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run annotated")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn canon_prints_canonical_text() {
    let output = annotated(&["canon", "m/s\u{00B2}"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("m\u{22C5}s\u{207B}\u{00B2}"));
}

#[test]
fn canon_json_output() {
    let output = annotated(&["canon", "--json", "km/m"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["input"], "km/m");
    assert_eq!(value[0]["canonical"]["scale"]["pow10"], 3);
    assert!(value[0]["canonical"]["dims"].as_object().unwrap().is_empty());
}

#[test]
fn equiv_exit_codes() {
    assert!(annotated(&["equiv", "m\u{22C5}s", "s\u{22C5}m"]).status.success());
    assert_eq!(annotated(&["equiv", "m", "s"]).status.code(), Some(1));
    assert_eq!(annotated(&["equiv", "m", "Xyz"]).status.code(), Some(2));
}

#[test]
fn parse_reports_position() {
    let output = annotated(&["parse", "m//s"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at byte 2"), "{stderr}");
}

#[test]
fn strict_division_flag() {
    assert!(annotated(&["parse", "m/s/s"]).status.success());
    assert_eq!(
        annotated(&["parse", "--strict-division", "m/s/s"]).status.code(),
        Some(1)
    );
}

#[test]
fn lint_reports_each_failing_line() {
    let mut tags = tempfile::NamedTempFile::new().unwrap();
    writeln!(tags, "# annotations").unwrap();
    writeln!(tags, "unit:kg\u{22C5}m/s\u{00B2}").unwrap();
    writeln!(tags, "unit:m//s").unwrap();
    writeln!(tags).unwrap();
    writeln!(tags, "currency:USD").unwrap();
    writeln!(tags, "currency:ZZZ").unwrap();
    writeln!(tags, "input:email").unwrap();

    let mut codes = tempfile::NamedTempFile::new().unwrap();
    write!(codes, r#"["USD", "EUR"]"#).unwrap();

    let output = annotated(&[
        "lint",
        tags.path().to_str().unwrap(),
        "--currencies",
        codes.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));

    let report = stdout(&output);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2, "{report}");
    // "unit:" + "m/" puts the second '/' at column 8.
    assert!(lines[0].ends_with(":3:8: invalid unit syntax at byte 2: missing operand before operator"));
    assert!(lines[1].contains(":6: currency code 'ZZZ' is not an active ISO 4217 code"));
}

#[test]
fn lint_without_registry_only_checks_shape() {
    let mut tags = tempfile::NamedTempFile::new().unwrap();
    writeln!(tags, "currency:ZZZ").unwrap();
    writeln!(tags, "unit:KiB/s").unwrap();

    let output = annotated(&["lint", tags.path().to_str().unwrap()]);
    assert!(output.status.success());
}

#[test]
fn lint_rejects_oversized_payload() {
    let mut tags = tempfile::NamedTempFile::new().unwrap();
    writeln!(tags, "unit:{}", vec!["m"; 300_000].join("\u{22C5}")).unwrap();

    let output = annotated(&["lint", tags.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("too many factors"));
}
