//! End-to-end tests for the goo-getf binary.

use assert_cmd::Command;
use predicates::prelude::*;

const PAGE: &str = r#"<html><body>
<a href="https://drive.google.com/file/d/FILE1/view">file</a>
<a href="https://drive.google.com/drive/folders/DIR1?usp=sharing">folder</a>
<a href="https://docs.google.com/document/d/DOC1/edit">doc</a>
</body></html>"#;

fn goo_getf() -> Command {
    let mut cmd = Command::cargo_bin("goo-getf").unwrap();
    cmd.env_remove("GOO_GETF_LOG");
    cmd
}

fn write_page(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_default_run() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(&dir, "page.html", PAGE);

    goo_getf()
        .arg(&page)
        .assert()
        .success()
        .stdout(
            "https://drive.usercontent.google.com/download?id=FILE1\n\
             https://docs.google.com/document/export?format=docx&id=DOC1\n",
        );
}

#[test]
fn test_folders_flag() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(&dir, "page.html", PAGE);

    goo_getf()
        .arg("-f")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://drive.google.com/drive/folders/DIR1?usp=sharing\n",
        ))
        .stdout(predicate::str::contains("id=FILE1"));
}

#[test]
fn test_folders_only_alias() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(&dir, "page.html", PAGE);

    goo_getf()
        .arg("--fo")
        .arg(&page)
        .assert()
        .success()
        .stdout("https://drive.google.com/drive/folders/DIR1?usp=sharing\n");
}

#[test]
fn test_files_in_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let second = write_page(
        &dir,
        "b.html",
        r#"<a href="https://drive.google.com/file/d/B/view">b</a>"#,
    );
    let first = write_page(
        &dir,
        "a.html",
        r#"<a href="https://drive.google.com/file/d/A/view">a</a>"#,
    );

    goo_getf()
        .args([&second, &first])
        .assert()
        .success()
        .stdout(
            "https://drive.usercontent.google.com/download?id=B\n\
             https://drive.usercontent.google.com/download?id=A\n",
        );
}

#[test]
fn test_paths_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(&dir, "page.html", PAGE);

    goo_getf()
        .write_stdin(format!("\n{}\n", page))
        .assert()
        .success()
        .stdout(predicate::str::contains("id=FILE1"));
}

#[test]
fn test_empty_path_list() {
    goo_getf()
        .write_stdin("\n  \n")
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("No files to parse specified."));
}

#[test]
fn test_options_without_files() {
    goo_getf()
        .arg("-f")
        .write_stdin("")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No files to parse specified."));
}

#[test]
fn test_output_grouped_by_rule() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(
        &dir,
        "page.html",
        r#"<a href="https://colab.research.google.com/drive/C1?usp=sharing">nb</a>
<a href="https://drive.google.com/file/d/F1/view">file</a>"#,
    );

    goo_getf()
        .arg(&page)
        .assert()
        .success()
        .stdout(
            "https://drive.usercontent.google.com/download?id=F1\n\
             https://drive.usercontent.google.com/download?id=C1\n",
        );
}

#[test]
fn test_bracketed_file_name_read_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let bracketed = write_page(
        &dir,
        "a[b].html",
        r#"<a href="https://drive.google.com/file/d/BRACKET/view">x</a>"#,
    );
    write_page(
        &dir,
        "ab.html",
        r#"<a href="https://drive.google.com/file/d/PLAIN/view">x</a>"#,
    );

    goo_getf()
        .arg(&bracketed)
        .assert()
        .success()
        .stdout("https://drive.usercontent.google.com/download?id=BRACKET\n");
}

#[test]
fn test_missing_file_does_not_abort() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(&dir, "page.html", PAGE);
    let missing = dir.path().join("missing.html");

    goo_getf()
        .arg(missing.to_str().unwrap())
        .arg(&page)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("id=FILE1"))
        .stderr(predicate::str::contains("missing.html"));
}

#[test]
fn test_bad_flag() {
    goo_getf()
        .arg("--no-such-flag")
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("Bad command-line arguments"));
}

#[test]
fn test_help() {
    goo_getf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--folders-only"));
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(&dir, "page.html", PAGE);

    let output = goo_getf().arg("--json").arg(&page).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["file"], page.as_str());
    assert_eq!(records[0]["id"], "FILE1");
    assert_eq!(records[0]["category"], "default");
    assert_eq!(records[1]["category"], "document");
}
