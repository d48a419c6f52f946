use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// True when the file name ends with `.<extension>`, ignoring case
    pub fn has_extension<P: AsRef<Path>>(path: P, extension: &str) -> bool {
        let Some(name) = path.as_ref().file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        let suffix = format!(".{}", extension.trim_start_matches('.'));

        name.len() >= suffix.len()
            && name
                .get(name.len() - suffix.len()..)
                .is_some_and(|tail| tail.eq_ignore_ascii_case(&suffix))
    }

    /// Files directly inside `dir` with the given extension, sorted by name
    ///
    /// Subdirectories are neither descended into nor returned. Fails when
    /// `dir` itself cannot be read.
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut result = Vec::new();

        let walker = WalkDir::new(dir)
            .min_depth(0)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(e).with_context(|| format!("Failed to read directory: {:?}", dir));
                }
                Err(e) => {
                    log::warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };

            if entry.depth() == 0 {
                if !entry.file_type().is_dir() {
                    return Err(anyhow::anyhow!("Not a directory: {:?}", dir));
                }
                continue;
            }

            if entry.file_type().is_file() && Self::has_extension(entry.path(), extension) {
                result.push(entry.into_path());
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
