/*!
 * Tests for file utility functions
 */

use std::fs;
use anyhow::Result;
use srtshift::file_utils::FileManager;
use crate::common;

/// Test that dir_exists rejects regular files
#[test]
fn test_dir_exists_withRegularFile_shouldReturnFalse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "not_a_dir.tmp", "test content")?;

    assert!(!FileManager::dir_exists(&test_file));
    assert!(FileManager::dir_exists(temp_dir.path()));

    Ok(())
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateAllLevels() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b").join("c");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

/// Test extension matching ignores case and requires the dot
#[test]
fn test_has_extension_withVariousNames_shouldMatchCaseInsensitively() {
    assert!(FileManager::has_extension("movie.srt", "srt"));
    assert!(FileManager::has_extension("MOVIE.SRT", "srt"));
    assert!(FileManager::has_extension("/dir/movie.en.Srt", ".srt"));
    assert!(!FileManager::has_extension("movie.srt.bak", "srt"));
    assert!(!FileManager::has_extension("moviesrt", "srt"));
    assert!(!FileManager::has_extension("notes.txt", "srt"));
}

/// Test that find_files only returns matching files directly inside the directory
#[test]
fn test_find_files_withMixedEntries_shouldReturnTopLevelMatchesOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "b.SRT", "")?;
    common::create_test_file(dir, "a.srt", "")?;
    common::create_test_file(dir, "c.txt", "")?;
    fs::create_dir(dir.join("nested"))?;
    common::create_test_file(&dir.join("nested"), "d.srt", "")?;
    fs::create_dir(dir.join("folder.srt"))?;

    let files = FileManager::find_files(dir, "srt")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["a.srt", "b.SRT"]);
    Ok(())
}

/// Test that find_files fails for a missing directory
#[test]
fn test_find_files_withMissingDir_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing");

    assert!(FileManager::find_files(&missing, "srt").is_err());
    Ok(())
}

/// Test that find_files fails when given a file instead of a directory
#[test]
fn test_find_files_withFilePath_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "a.srt", "")?;

    assert!(FileManager::find_files(&file, "srt").is_err());
    Ok(())
}

/// Test that write_to_file creates parent directories and overwrites
#[test]
fn test_write_to_file_withMissingParent_shouldCreateAndOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out").join("movie.srt");

    FileManager::write_to_file(&target, "first")?;
    FileManager::write_to_file(&target, "second")?;

    assert_eq!(FileManager::read_to_string(&target)?, "second");
    Ok(())
}

/// Test that read_to_string rejects invalid UTF-8
#[test]
fn test_read_to_string_withInvalidUtf8_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("latin1.srt");
    fs::write(&path, [0x66, 0x6f, 0xe9, 0x0a])?;

    assert!(FileManager::read_to_string(&path).is_err());
    Ok(())
}
