use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const TABLE: &str = "-,A,B,C\n1,3,9,81\n2,4,16,256\n";

fn table_file() -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", TABLE)?;
    Ok(tmp)
}

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("csvdoc-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn info_lists_counts_and_labels() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = table_file()?;
    Command::new(assert_cmd::cargo::cargo_bin!("csvdoc-cli"))
        .arg(tmp.path())
        .args(["--row-labels", "0", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rows: 2"))
        .stdout(predicate::str::contains("columns: 3"))
        .stdout(predicate::str::contains("column labels: A, B, C"))
        .stdout(predicate::str::contains("row labels: 1, 2"));
    Ok(())
}

#[test]
fn cell_by_label_and_by_index() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = table_file()?;
    let output = Command::new(assert_cmd::cargo::cargo_bin!("csvdoc-cli"))
        .arg(tmp.path())
        .args(["--row-labels", "0", "--cell", "C", "2"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "256\n");

    let output = Command::new(assert_cmd::cargo::cargo_bin!("csvdoc-cli"))
        .arg(tmp.path())
        .args(["--row-labels", "0", "--by-index", "--cell", "1", "0"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "9\n");
    Ok(())
}

#[test]
fn column_reads_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("csvdoc-cli"))
        .args(["--column", "B"])
        .write_stdin(TABLE)
        .assert()
        .success()
        .stdout("9\n16\n");
    Ok(())
}

#[test]
fn missing_label_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = table_file()?;
    Command::new(assert_cmd::cargo::cargo_bin!("csvdoc-cli"))
        .arg(tmp.path())
        .args(["--column", "Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("column not found: Z"));
    Ok(())
}

#[test]
fn output_with_new_separator_and_line_endings() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = NamedTempFile::new()?;
    write!(config, r#"{{"separator": {{"separator": 59}}}}"#)?;
    let mut input = NamedTempFile::new()?;
    write!(input, "a;b c\n1;2\n")?;
    let out = tempfile::tempdir()?;
    let out_path = out.path().join("out.csv");

    Command::new(assert_cmd::cargo::cargo_bin!("csvdoc-cli"))
        .arg(input.path())
        .arg("--config")
        .arg(config.path())
        .arg("--output")
        .arg(&out_path)
        .arg("--crlf")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&out_path)?, "a;\"b c\"\r\n1;2\r\n");
    Ok(())
}

#[test]
fn rejects_multibyte_separator() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("csvdoc-cli"))
        .args(["--separator", "ab"])
        .write_stdin(TABLE)
        .assert()
        .failure();
    Ok(())
}

#[test]
fn rust_log_enables_events_on_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = table_file()?;
    Command::new(assert_cmd::cargo::cargo_bin!("csvdoc-cli"))
        .arg(tmp.path())
        .arg("--info")
        .env("RUST_LOG", "csvdoc_cli=debug")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("rows: 2"))
        .stdout(predicate::str::contains("input ready").not())
        .stderr(predicate::str::contains("input ready"));

    Command::new(assert_cmd::cargo::cargo_bin!("csvdoc-cli"))
        .arg(tmp.path())
        .arg("--info")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("input ready").not());
    Ok(())
}
