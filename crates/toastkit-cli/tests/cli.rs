use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const PEOPLE_TILE: &str = r#"{
  "kind": "tile",
  "visual": {
    "tileWide": {
      "content": {
        "type": "people",
        "images": [{ "source": "A.png" }, { "source": "B.png" }, { "source": "C.png" }]
      }
    }
  }
}"#;

fn toastkit() -> Command {
    let mut cmd = Command::cargo_bin("toastkit").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn renders_json_from_stdin() {
    toastkit()
        .write_stdin(PEOPLE_TILE)
        .assert()
        .success()
        .stdout(concat!(
            r#"<tile><visual><binding template="TileWide" hint-presentation="people">"#,
            r#"<image src="A.png"/><image src="B.png"/><image src="C.png"/>"#,
            "</binding></visual></tile>\n"
        ));
}

#[test]
fn renders_toml_file_to_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("badge.toml");
    let output = dir.path().join("badge.xml");
    fs::write(&input, "kind = \"badge\"\nnumber = 7\n").unwrap();

    toastkit()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let xml = fs::read_to_string(&output).unwrap();
    assert_eq!(xml, "<badge value=\"7\"/>\n");
}

#[test]
fn pretty_and_declaration() {
    toastkit()
        .args(["--pretty", "--declaration"])
        .write_stdin(r#"{"kind": "toast", "visual": {"bindingGeneric": {"children": [{"type": "text", "text": "Hi"}]}}}"#)
        .assert()
        .success()
        .stdout(concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<toast>\n",
            "  <visual>\n",
            "    <binding template=\"ToastGeneric\">\n",
            "      <text>Hi</text>\n",
            "    </binding>\n",
            "  </visual>\n",
            "</toast>\n"
        ));
}

#[test]
fn pretty_with_explicit_width() {
    toastkit()
        .arg("--pretty=4")
        .write_stdin(PEOPLE_TILE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\n    <visual>\n        <binding"));
}

#[test]
fn unsupported_size_fails() {
    toastkit()
        .write_stdin(r#"{"kind": "tile", "visual": {"tileWide": {"content": {"type": "iconic", "icon": {"source": "i.png"}}}}}"#)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("iconic content is not supported on wide tiles"));
}

#[test]
fn invalid_json_fails() {
    toastkit()
        .args(["--from", "json"])
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON notification"));
}

#[test]
fn empty_stdin_fails() {
    toastkit()
        .write_stdin("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input provided on stdin"));
}

#[test]
fn unknown_extension_needs_from() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("badge.txt");
    fs::write(&input, r#"{"kind": "badge", "number": 1}"#).unwrap();

    toastkit()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not infer input format"));

    toastkit()
        .arg(&input)
        .args(["--from", "json"])
        .assert()
        .success()
        .stdout("<badge value=\"1\"/>\n");
}

#[test]
fn verbose_logs_to_stderr() {
    toastkit()
        .arg("-v")
        .write_stdin(PEOPLE_TILE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<tile>"))
        .stderr(predicate::str::contains("populated tile binding"));
}
