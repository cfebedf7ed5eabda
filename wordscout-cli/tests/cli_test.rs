use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::tempdir;

fn write_word_list(dir: &tempfile::TempDir, words: &[&str]) -> Result<std::path::PathBuf> {
    let path = dir.path().join("words.txt");
    let mut file = std::fs::File::create(&path)?;
    for word in words {
        writeln!(file, "{word}")?;
    }
    Ok(path)
}

#[test]
fn finds_the_longest_compound_word() -> Result<()> {
    let dir = tempdir()?;
    let path = write_word_list(&dir, &["a", "b", "ab", "abc", "c", "bc"])?;

    Command::cargo_bin("wordscout")?
        .arg(&path)
        .args(["-j", "2", "--strategy", "step"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abc"))
        .stdout(predicate::str::contains("Found a total of 3 compound words"));
    Ok(())
}

#[test]
fn reads_the_word_list_from_stdin() -> Result<()> {
    Command::cargo_bin("wordscout")?
        .arg("-")
        .write_stdin("cat\ndog\ncatdog\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("catdog"));
    Ok(())
}

#[test]
fn json_output_is_machine_readable() -> Result<()> {
    let dir = tempdir()?;
    let path = write_word_list(&dir, &["cat", "dog", "catdog"])?;

    Command::cargo_bin("wordscout")?
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"compound_word_count\": 1"))
        .stdout(predicate::str::contains("catdog"));
    Ok(())
}

#[test]
fn reports_when_nothing_is_compound() -> Result<()> {
    let dir = tempdir()?;
    let path = write_word_list(&dir, &["cat", "dog", "bird"])?;

    Command::cargo_bin("wordscout")?
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No compound words were found"));
    Ok(())
}

#[test]
fn empty_word_list_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    let path = write_word_list(&dir, &["", "   "])?;

    Command::cargo_bin("wordscout")?
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable words"));
    Ok(())
}

#[test]
fn unknown_strategy_is_rejected() -> Result<()> {
    let dir = tempdir()?;
    let path = write_word_list(&dir, &["cat", "dog"])?;

    Command::cargo_bin("wordscout")?
        .arg(&path)
        .args(["--strategy", "stealing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown partition strategy"));
    Ok(())
}

#[test]
fn missing_word_list_is_an_error() -> Result<()> {
    Command::cargo_bin("wordscout")?
        .arg("definitely-not-a-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read word list"));
    Ok(())
}
