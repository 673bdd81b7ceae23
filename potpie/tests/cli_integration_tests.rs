// potpie/tests/cli_integration_tests.rs
//! Command-line integration tests for the `potpie` binary.
//!
//! These run the real executable with `assert_cmd`, feed it catalogs written
//! to temporary directories with `tempfile`, and check stdout, stderr, exit
//! status and the files it writes. Status messages may be coloured, so stderr
//! is passed through `strip_ansi_escapes` before comparing.

use anyhow::Result;
use assert_cmd::Command;
#[allow(unused_imports)]
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const SAMPLE_JSON: &str = r#"[
  {"source": "Hello %s"},
  {"source": "Delete <b>%d</b> files?", "target": "old"}
]"#;

const SAMPLE_PO: &str = r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

msgid "\nWelcome back\n"
msgstr ""

msgid "%(count)d item"
msgid_plural "%(count)d items"
msgstr[0] ""
msgstr[1] ""
"#;

/// A `potpie` command isolated from any configuration on the host.
fn potpie_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("potpie").unwrap();
    cmd.current_dir(config_home.path());
    cmd.env("HOME", config_home.path());
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env_remove("POTPIE_CONFIG");
    cmd.env("RUST_LOG", "debug");
    cmd
}

fn stripped(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes::strip(bytes)).into_owned()
}

fn read_json(path: &std::path::Path) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

#[test]
fn test_preview_argument_with_unicode() -> Result<()> {
    let home = TempDir::new()?;
    potpie_cmd(&home)
        .args(["preview", "--type", "unicode", "Hello %s"])
        .assert()
        .success()
        .stdout("Ħḗŀŀǿ %s\n");
    Ok(())
}

#[test]
fn test_preview_reads_stdin_line_by_line() -> Result<()> {
    let home = TempDir::new()?;
    potpie_cmd(&home)
        .args(["preview", "-t", "brackets"])
        .write_stdin("Hello\n<i>Bye</i>\n")
        .assert()
        .success()
        .stdout("[Hello]\n[<i>Bye</i>]\n");
    Ok(())
}

#[test]
fn test_preview_properties_keeps_quotes() -> Result<()> {
    let home = TempDir::new()?;
    potpie_cmd(&home)
        .args(["preview", "--type", "brackets", "--format", "properties", "\"Save\""])
        .assert()
        .success()
        .stdout("\"[Save]\"\n");
    Ok(())
}

#[test]
fn test_preview_extend_is_reproducible_with_seed() -> Result<()> {
    let home = TempDir::new()?;
    let run = |home: &TempDir| -> Result<String> {
        let output = potpie_cmd(home)
            .args(["preview", "--type", "extend", "--seed", "11", "Settings"])
            .output()?;
        assert!(output.status.success());
        Ok(String::from_utf8(output.stdout)?)
    };
    let first = run(&home)?;
    assert_eq!(first, run(&home)?);
    assert!(first.starts_with("Settings "));
    Ok(())
}

#[test]
fn test_unknown_transform_is_rejected() -> Result<()> {
    let home = TempDir::new()?;
    potpie_cmd(&home)
        .args(["preview", "--type", "pirate", "Hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pirate"));
    Ok(())
}

#[test]
fn test_translate_json_into_new_directory() -> Result<()> {
    let home = TempDir::new()?;
    let input = home.path().join("strings.json");
    fs::write(&input, SAMPLE_JSON)?;
    let output = home.path().join("build").join("xx").join("strings.json");

    let assert = potpie_cmd(&home)
        .args(["translate", "--type", "brackets"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();
    let stderr = stripped(&assert.get_output().stderr);
    assert!(stderr.contains("Pseudo-translated 2 entries (brackets)"), "stderr was: {}", stderr);

    let written = read_json(&output)?;
    assert_eq!(written[0]["target"], "[Hello %s]");
    assert_eq!(written[1]["target"], "[Delete <b>%d</b> files?]");
    Ok(())
}

#[test]
fn test_translate_po_with_validation() -> Result<()> {
    let home = TempDir::new()?;
    let input = home.path().join("app.po");
    fs::write(&input, SAMPLE_PO)?;
    let output = home.path().join("fr").join("app.po");

    potpie_cmd(&home)
        .args(["translate", "--type", "planguage", "--validate"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("do not keep their printf placeholders").not());

    let written = fs::read_to_string(&output)?;
    assert!(written.contains("%(count)d"));
    assert!(written.contains("msgstr[1]"));

    // The output must itself pass validation. The plural message is checked
    // once per form, so two messages give three pairs.
    let assert = potpie_cmd(&home).arg("validate").arg(&output).assert().success();
    let stderr = stripped(&assert.get_output().stderr);
    assert!(stderr.contains("Checking 3 source/translation pair(s)"), "stderr was: {}", stderr);
    assert!(stderr.contains("All 3 entries"), "stderr was: {}", stderr);
    Ok(())
}

#[test]
fn test_translate_quiet_prints_nothing() -> Result<()> {
    let home = TempDir::new()?;
    let input = home.path().join("strings.json");
    fs::write(&input, SAMPLE_JSON)?;
    let output = home.path().join("out.json");

    potpie_cmd(&home)
        .args(["--quiet", "translate"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout("")
        .stderr("");
    assert!(output.is_file());
    Ok(())
}

#[test]
fn test_translate_uses_config_file() -> Result<()> {
    let home = TempDir::new()?;
    let input = home.path().join("strings.json");
    fs::write(&input, SAMPLE_JSON)?;
    let output = home.path().join("out.json");

    let mut config = NamedTempFile::new()?;
    config.write_all(b"transform: unicode\n")?;

    potpie_cmd(&home)
        .args(["translate", "--config"])
        .arg(config.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .success();
    assert_eq!(read_json(&output)?[0]["target"], "Ħḗŀŀǿ %s");

    // An explicit --type wins over the configuration.
    potpie_cmd(&home)
        .args(["translate", "--type", "brackets", "--config"])
        .arg(config.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .success();
    assert_eq!(read_json(&output)?[0]["target"], "[Hello %s]");
    Ok(())
}

#[test]
fn test_translate_picks_up_local_config() -> Result<()> {
    let home = TempDir::new()?;
    fs::write(home.path().join("potpie.yaml"), "transform: brackets\n")?;
    fs::write(home.path().join("strings.json"), SAMPLE_JSON)?;

    potpie_cmd(&home)
        .args(["translate", "strings.json", "out.json"])
        .assert()
        .success();
    assert_eq!(read_json(&home.path().join("out.json"))?[0]["target"], "[Hello %s]");
    Ok(())
}

#[test]
fn test_invalid_config_fails_before_writing() -> Result<()> {
    let home = TempDir::new()?;
    let input = home.path().join("strings.json");
    fs::write(&input, SAMPLE_JSON)?;
    let output = home.path().join("out.json");

    let mut config = NamedTempFile::new()?;
    config.write_all(b"transform: pirate\n")?;

    potpie_cmd(&home)
        .args(["translate", "--config"])
        .arg(config.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_translate_unsupported_catalog_fails() -> Result<()> {
    let home = TempDir::new()?;
    let input = home.path().join("strings.xliff");
    fs::write(&input, "<xliff/>")?;

    potpie_cmd(&home)
        .arg("translate")
        .arg(&input)
        .arg(home.path().join("out.xliff"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported catalog type"));
    Ok(())
}

#[test]
fn test_validate_reports_missing_placeholders() -> Result<()> {
    let home = TempDir::new()?;
    let input = home.path().join("fr.json");
    fs::write(
        &input,
        r#"[
  {"source": "%s files", "target": "fichiers"},
  {"source": "Open", "target": "Ouvrir"},
  {"source": "Untranslated %d", "target": ""}
]"#,
    )?;

    let assert = potpie_cmd(&home).arg("validate").arg(&input).assert().failure();
    let stderr = stripped(&assert.get_output().stderr);
    assert!(stderr.contains("1 of 3 entries failed printf validation"), "stderr was: {}", stderr);
    assert!(stderr.contains("Error: "), "stderr was: {}", stderr);
    Ok(())
}

#[test]
fn test_no_arguments_prints_help() -> Result<()> {
    let home = TempDir::new()?;
    potpie_cmd(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}
