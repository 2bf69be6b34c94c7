use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File extensions treated as Markdown. Nothing else is ever read or written.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid docs directory: {0}")]
    InvalidDocsDir(String),
}

/// Read a markdown file's raw bytes
pub fn read_file(relative_path: &RelativePath, docs_root: &Path) -> Result<Vec<u8>, IoError> {
    let absolute_path = relative_path.to_path(docs_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read(&absolute_path).map_err(IoError::Io)
}

/// Replace a markdown file's content.
///
/// The content is written to a temporary file next to the target and renamed
/// over it, so readers see either the old or the new file, never a mix.
/// The target's permissions are carried over.
pub fn write_file(
    relative_path: &RelativePath,
    docs_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(docs_root);

    // Create parent directories if they don't exist
    let parent = absolute_path.parent().unwrap_or(docs_root);
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    if let Ok(metadata) = fs::metadata(&absolute_path) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }
    tmp.persist(&absolute_path).map_err(|e| IoError::Io(e.error))?;
    Ok(())
}

/// Scan for markdown files under the docs directory, sorted, relative to it.
///
/// Subdirectories that cannot be read are logged and skipped; only an
/// unreadable root is an error.
pub fn scan_markdown_files(docs_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !docs_root.exists() {
        return Err(IoError::InvalidDocsDir(
            "docs directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    let entries = fs::read_dir(docs_root).map_err(IoError::Io)?;
    scan_entries(docs_root, entries, &mut files);
    files.sort();
    Ok(files)
}

fn scan_entries(docs_root: &Path, entries: fs::ReadDir, files: &mut Vec<RelativePathBuf>) {
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {e}", docs_root.display());
                continue;
            }
        };

        if path.is_dir() {
            match fs::read_dir(&path) {
                Ok(entries) => scan_entries(docs_root, entries, files),
                Err(e) => log::warn!("Skipping directory {}: {e}", path.display()),
            }
        } else if is_markdown(&path) {
            match relative_to(docs_root, &path) {
                Some(relative) => files.push(relative),
                None => log::warn!("Skipping non UTF-8 path {}", path.display()),
            }
        }
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

fn relative_to(docs_root: &Path, path: &Path) -> Option<RelativePathBuf> {
    let stripped = path.strip_prefix(docs_root).ok()?;
    RelativePathBuf::from_path(stripped).ok()
}

pub fn validate_docs_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
