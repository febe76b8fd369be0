//! File reading and writing for the command-line tool

use crate::error::{MatterTableError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Configuration for reading input documents
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Maximum file size to read (in bytes)
    pub max_file_size: Option<usize>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: Some(10 * 1024 * 1024), // 10MB default limit
        }
    }
}

pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|s| s == "md" || s == "markdown")
        .unwrap_or(false)
}

/// Expand `paths` into input files: files are kept as given, directories
/// are walked for markdown files in sorted order
pub fn resolve_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() && is_markdown(entry.path()) {
                    files.push(entry.path().to_owned());
                }
            }
        } else {
            debug!("Skipping missing path: {}", path.display());
        }
    }
    files
}

/// Read a whole document, enforcing the configured size limit
pub fn read_input(path: &Path, config: &ReaderConfig) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(MatterTableError::file_not_found(path));
    }

    if let Some(max_size) = config.max_file_size {
        let metadata = fs::metadata(path)?;
        if metadata.len() as usize > max_size {
            return Err(MatterTableError::validation(format!(
                "File too large: {} bytes (limit: {} bytes)",
                metadata.len(),
                max_size
            )));
        }
    }

    fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => MatterTableError::permission_denied(path),
        _ => MatterTableError::Io(e),
    })
}

pub fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => MatterTableError::permission_denied(path),
        _ => MatterTableError::Io(e),
    })
}

/// `<out_dir>/<input stem>.<extension>`
pub fn output_path(out_dir: &Path, input: &Path, extension: &str) -> PathBuf {
    let mut name = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_os_string();
    name.push(".");
    name.push(extension);
    out_dir.join(name)
}
