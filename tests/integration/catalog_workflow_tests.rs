/*!
 * Integration tests for the entry file to catalog file workflow
 */

use anyhow::Result;
use std::fs;
use std::path::Path;

use potwriter::app_config::Config;
use potwriter::app_controller::{Controller, FolderSummary};
use potwriter::{CatalogError, CatalogKind, LineEnding};
use crate::common;

fn controller(kind: CatalogKind, header: bool) -> Result<Controller> {
    let mut config = Config::default();
    config.catalog_kind = kind;
    config.header.enabled = header;
    config.header.language = Some("fr".to_string());
    Controller::with_config(config)
}

/// Test a template catalog written from the sample entries
#[test]
fn test_run_withTemplateKind_shouldWritePotFile() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_entries(temp_dir.path(), "messages.json")?;
    let output_dir = temp_dir.path().join("out");

    let written = controller(CatalogKind::Template, false)?
        .run(input, output_dir.clone(), false)?
        .expect("catalog should be written");

    assert_eq!(written, output_dir.join("messages.pot"));
    let content = fs::read_to_string(&written)?;

    assert_eq!(content, "\
#. Greeting on the start page
#: src/app.js:3
msgid \"Hello\"
msgstr \"\"

#: src/list.js:10
#: src/list.js:42
msgid \"One item\"
msgid_plural \"%d items\"
msgstr \"\"

msgctxt \"menu\"
msgid \"Open\"
msgstr \"\"
");

    Ok(())
}

/// Test a translated catalog with header
#[test]
fn test_run_withTranslatedKindAndHeader_shouldEmbedTranslations() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_entries(temp_dir.path(), "fr.json")?;

    let written = controller(CatalogKind::Translated, true)?
        .run(input, temp_dir.path().to_path_buf(), false)?
        .expect("catalog should be written");

    assert_eq!(written.file_name().unwrap(), "fr.po");
    let content = fs::read_to_string(&written)?;

    assert!(content.starts_with("msgid \"\"\nmsgstr \"\"\n\"Project-Id-Version: PACKAGE VERSION\\n\"\n"));
    assert!(content.contains("\"Language: fr\\n\"\n"));
    assert!(content.contains("msgid \"Hello\"\nmsgstr \"Bonjour\"\n"));
    assert!(content.contains("msgid \"Open\"\nmsgstr \"Ouvrir\"\n"));
    // Header plus three entries
    assert_eq!(content.matches("\n\n").count(), 3);

    Ok(())
}

/// Test that an entry file with its own header entry keeps it
#[test]
fn test_run_withHeaderEntryInInput_shouldNotAddSecondHeader() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        temp_dir.path(),
        "custom.json",
        r#"{ "entries": [
            { "source": "", "translation": "Project-Id-Version: custom\n" },
            { "source": "Hi" }
        ] }"#,
    )?;

    let written = controller(CatalogKind::Template, true)?
        .run(input, temp_dir.path().to_path_buf(), false)?
        .expect("catalog should be written");
    let content = fs::read_to_string(written)?;

    assert_eq!(content.matches("msgid \"\"").count(), 1);
    assert!(content.contains("Project-Id-Version: custom"));
    assert!(!content.contains("PACKAGE VERSION"));

    Ok(())
}

/// Test skipping and forcing existing outputs
#[test]
fn test_run_withExistingOutput_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_entries(temp_dir.path(), "messages.json")?;
    let existing = common::create_test_file(temp_dir.path(), "messages.pot", "old")?;
    let controller = controller(CatalogKind::Template, false)?;

    let skipped = controller.run(input.clone(), temp_dir.path().to_path_buf(), false)?;
    assert!(skipped.is_none());
    assert_eq!(fs::read_to_string(&existing)?, "old");

    let forced = controller.run(input, temp_dir.path().to_path_buf(), true)?;
    assert_eq!(forced, Some(existing.clone()));
    assert!(fs::read_to_string(&existing)?.contains("msgid \"Hello\""));

    Ok(())
}

/// Test CRLF output through the configuration
#[test]
fn test_run_withCrLfConfig_shouldWriteCrLf() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_entries(temp_dir.path(), "messages.json")?;

    let mut config = Config::default();
    config.header.enabled = false;
    config.line_ending = LineEnding::CrLf;

    let written = Controller::with_config(config)?
        .run(input, temp_dir.path().to_path_buf(), false)?
        .expect("catalog should be written");
    let content = fs::read_to_string(written)?;

    assert!(content.ends_with("msgstr \"\"\r\n"));
    assert_eq!(content.matches('\n').count(), content.matches("\r\n").count());

    Ok(())
}

/// Test invalid entry JSON maps to a typed error
#[test]
fn test_loadEntries_withInvalidJson_shouldReturnInvalidInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "broken.json", r#"{ "source": 42 }"#)?;

    let error = controller(CatalogKind::Template, false)?
        .load_entries(&input)
        .unwrap_err();

    match error.downcast_ref::<CatalogError>() {
        Some(CatalogError::InvalidInput { file, .. }) => assert_eq!(file, &input),
        other => panic!("unexpected error: {:?}", other),
    }

    Ok(())
}

/// Test both accepted input shapes
#[test]
fn test_parseEntries_withListAndObject_shouldAgree() -> Result<()> {
    let list = Controller::parse_entries(r#"[{ "source": "A" }]"#, Path::new("list.json"))?;
    let object = Controller::parse_entries(r#"{ "entries": [{ "source": "A" }] }"#, Path::new("object.json"))?;

    assert_eq!(list, object);
    assert_eq!(list[0].source, "A");
    assert!(Controller::parse_entries("[]", Path::new("empty.json"))?.is_empty());

    Ok(())
}

/// Test that null lists are read as empty lists
#[test]
fn test_parseEntries_withNullLists_shouldAcceptEntry() -> Result<()> {
    let entries = Controller::parse_entries(
        r#"[{ "positions": null, "comments": null, "source": "Hi" }]"#,
        Path::new("n.json"),
    )?;

    assert_eq!(entries.len(), 1);
    assert!(entries[0].positions.is_empty());
    assert!(entries[0].comments.is_empty());
    assert_eq!(entries[0].source, "Hi");

    Ok(())
}

/// Test that parse errors keep the JSON location for both input shapes
#[test]
fn test_parseEntries_withMalformedEntry_shouldReportLineAndColumn() {
    let inputs = [
        "[\n  { \"source\": 42 }\n]",
        "{\n  \"entries\": [{ \"source\": 42 }]\n}",
    ];

    for input in inputs {
        match Controller::parse_entries(input, Path::new("bad.json")) {
            Err(CatalogError::InvalidInput { reason, .. }) => {
                assert!(reason.contains("line 2"), "no location in: {}", reason);
                assert!(!reason.contains("untagged"), "generic message: {}", reason);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

/// Test invalid configuration is rejected by the controller
#[test]
fn test_withConfig_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();
    config.header.language = Some("notalanguage".to_string());
    assert!(Controller::with_config(config).is_err());
}

/// Test missing input file
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let result = controller(CatalogKind::Template, false)?
        .run(temp_dir.path().join("nope.json"), temp_dir.path().to_path_buf(), false);
    assert!(result.is_err());
    Ok(())
}

/// Test folder processing counts written, skipped and failed files
#[test]
fn test_runFolder_withMixedInputs_shouldContinueAfterFailures() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();

    common::create_test_entries(dir, "app.json")?;
    common::create_test_entries(dir, "nested/admin.json")?;
    common::create_test_file(dir, "broken.json", "not json")?;
    common::create_test_entries(dir, "done.json")?;
    common::create_test_file(dir, "done.pot", "keep")?;
    common::create_test_file(dir, "readme.txt", "ignored")?;

    let summary = controller(CatalogKind::Template, true)?
        .run_folder(dir.to_path_buf(), false)?;

    assert_eq!(summary, FolderSummary { written: 2, skipped: 1, failed: 1 });
    assert!(dir.join("app.pot").exists());
    assert!(dir.join("nested").join("admin.pot").exists());
    assert!(!dir.join("broken.pot").exists());
    assert_eq!(fs::read_to_string(dir.join("done.pot"))?, "keep");

    Ok(())
}

/// Test that the config file inside the walked folder is not read as entries
#[test]
fn test_runFolder_withConfigInFolder_shouldSkipConfig() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();

    common::create_test_entries(dir, "messages.json")?;
    let config_path = dir.join("conf.json");
    Config::default().save(&config_path)?;

    let summary = controller(CatalogKind::Template, true)?
        .with_skipped_file(&config_path)
        .run_folder(dir.to_path_buf(), false)?;

    assert_eq!(summary, FolderSummary { written: 1, skipped: 0, failed: 0 });
    assert!(dir.join("messages.pot").exists());
    assert!(!dir.join("conf.pot").exists());

    Ok(())
}

/// Test folder processing on a missing directory
#[test]
fn test_runFolder_withMissingDirectory_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let result = controller(CatalogKind::Template, false)?
        .run_folder(temp_dir.path().join("missing"), false);
    assert!(result.is_err());
    Ok(())
}
