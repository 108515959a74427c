/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use yartwai::file_utils::FileManager;

use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_fileExists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "probe.md",
        "test content",
    )?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_fileExists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that dir_exists distinguishes files from directories
#[test]
fn test_dirExists_withFile_shouldReturnFalse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "probe.md", "x")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensureDir_withNestedPath_shouldCreateAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b").join("c");

    FileManager::ensure_dir(&nested)?;

    assert!(FileManager::dir_exists(&nested));

    Ok(())
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_writeToFile_withMissingParent_shouldCreateParent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("locales").join("README.de.md");

    FileManager::write_to_file(&target, "# Inhalt")?;

    assert_eq!(FileManager::read_to_string(&target)?, "# Inhalt");

    Ok(())
}

/// Test that read_to_string fails with context for missing files
#[test]
fn test_readToString_withMissingFile_shouldFail() {
    let outcome = FileManager::read_to_string("definitely_not_here.md");

    assert!(outcome.is_err());
}
