use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::WalkDir;

// @module: File and directory utilities

// @const: Existing "(n)" duplicate suffix at the end of a file stem
static DUPLICATE_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\d+\)$").unwrap());

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
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

    /// Copy a file, ensuring the target directory exists
    pub fn copy_file<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, to: P2) -> Result<()> {
        let from = from.as_ref();
        let to = to.as_ref();

        if !from.exists() {
            return Err(anyhow::anyhow!("Source file does not exist: {:?}", from));
        }

        if let Some(parent) = to.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::copy(from, to)?;

        Ok(())
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Pick a filename in `directory` that does not collide with an
    /// existing file.
    ///
    /// An existing `(n)` suffix on the stem is stripped first so repeated
    /// uploads of `clip(2).mp4` do not accumulate `clip(2)(2).mp4`; the
    /// probe then counts up from `(2)` until a free name is found.
    pub fn unique_path<P: AsRef<Path>>(directory: P, filename: &str) -> PathBuf {
        let directory = directory.as_ref();

        let (stem, extension) = match filename.rsplit_once('.') {
            Some((stem, ext)) => (stem, Some(ext)),
            None => (filename, None),
        };
        let stem = DUPLICATE_SUFFIX_REGEX.replace(stem, "").to_string();

        let compose = |suffix: &str| -> String {
            match extension {
                Some(ext) => format!("{}{}.{}", stem, suffix, ext),
                None => format!("{}{}", stem, suffix),
            }
        };

        let mut candidate = directory.join(compose(""));
        let mut counter = 1u32;
        while candidate.exists() {
            counter += 1;
            candidate = directory.join(compose(&format!("({})", counter)));
        }

        candidate
    }
}
