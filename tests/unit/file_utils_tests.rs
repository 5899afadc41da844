/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use potwriter::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "entries.json", "[]")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(FileManager::dir_exists(temp_dir.path()));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that generate_output_path creates the correct path
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let output_path = FileManager::generate_output_path(
        Path::new("/tmp/input/messages.json"),
        Path::new("/tmp/output"),
        "pot",
    );
    assert_eq!(output_path, Path::new("/tmp/output/messages.pot"));

    let dotted = FileManager::generate_output_path(Path::new("fr.json"), Path::new("out"), ".po");
    assert_eq!(dotted, Path::new("out/fr.po"));
}

/// Test finding files by extension, recursively and sorted
#[test]
fn test_find_files_withMixedFiles_shouldReturnMatchingSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "b.json", "[]")?;
    common::create_test_file(dir, "a.JSON", "[]")?;
    common::create_test_file(dir, "notes.txt", "")?;
    common::create_test_file(dir, "nested/c.json", "[]")?;

    let files = FileManager::find_files(dir, "json")?;
    let names: Vec<String> = files.iter()
        .map(|p| p.strip_prefix(dir).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["a.JSON", "b.json", "nested/c.json"]);
    Ok(())
}

/// Test writing and reading files
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("deep").join("dir").join("out.pot");

    FileManager::write_to_file(&path, "msgid \"\"\n")?;
    assert_eq!(FileManager::read_to_string(&path)?, "msgid \"\"\n");

    Ok(())
}

/// Test reading a missing file reports the path
#[test]
fn test_read_to_string_withMissingFile_shouldFailWithContext() {
    let error = FileManager::read_to_string("missing_entries_98765.json").unwrap_err();
    assert!(error.to_string().contains("missing_entries_98765.json"));
}
