use assert_cmd::Command;
use ferritin_test_data::TestFile;
use std::fs;

#[test]
fn test_cli_render_json() {
    let (contacts, _tmp) = TestFile::contacts_pf00014_json().create_temp().unwrap();
    let outdir = tempfile::tempdir().unwrap();
    let output = outdir.path().join("pf00014.svg");

    let mut cmd = Command::cargo_bin("ferritin-contactmap").unwrap();
    cmd.arg("render")
        .arg("--input")
        .arg(&contacts)
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let svg = fs::read_to_string(&output).unwrap();
    // 94 contacts mirrored plus 3 legend markers
    assert_eq!(svg.matches("<circle").count(), 2 * 94 + 3);
    assert!(svg.contains("True positives"));
}

#[test]
fn test_cli_render_table_with_style() {
    let (contacts, _tmp) = TestFile::contacts_pf00014_table().create_temp().unwrap();
    let outdir = tempfile::tempdir().unwrap();
    let style = outdir.path().join("style.json");
    let output = outdir.path().join("pf00014.svg");
    fs::write(
        &style,
        r#"{"xlabel": "Kunitz sites", "ylabel": "Kunitz sites", "theme": "open"}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("ferritin-contactmap").unwrap();
    cmd.arg("render")
        .arg("-i")
        .arg(&contacts)
        .arg("-s")
        .arg(&style)
        .arg("-o")
        .arg(&output);
    cmd.assert().success();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Kunitz sites"));
    assert!(!svg.contains("PF00014 sites"));
}

#[test]
fn test_cli_style_prints_defaults() {
    let mut cmd = Command::cargo_bin("ferritin-contactmap").unwrap();
    let assert = cmd.arg("style").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let style: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(style["xlabel"], "PF00014 sites");
    assert_eq!(style["xlim"], serde_json::json!([1.0, 55.0]));
}

#[test]
fn test_cli_rejects_bad_input() {
    let outdir = tempfile::tempdir().unwrap();
    let input = outdir.path().join("bad.json");
    let output = outdir.path().join("bad.svg");
    fs::write(&input, r#"{"other_contacts": [["a", 1]]}"#).unwrap();

    let mut cmd = Command::cargo_bin("ferritin-contactmap").unwrap();
    cmd.arg("render")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output);
    cmd.assert().failure();
    assert!(!output.exists());
}
