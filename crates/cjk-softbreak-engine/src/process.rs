//! Per-text, per-file and per-tree pipelines.

use std::fmt;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::breaks::{
    MARKER_CLOSE, MARKER_OPEN, PatchError, Suppression, qualifying_breaks, suppress_break,
};
use crate::gate;
use crate::io::{self, IoError};
use crate::parsing::{ParseOptions, parse_document};

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: IoError },
    #[error("{path}: not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

/// Result of running the break pass over one text.
#[derive(Debug)]
pub struct FixOutcome {
    pub text: String,
    /// Breaks that received a marker.
    pub applied: usize,
    /// Breaks whose marker was already present.
    pub already_marked: usize,
    /// Breaks whose fragments could not be located in the text.
    pub missing: Vec<PatchError>,
}

impl FixOutcome {
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Parse `raw` once, then resolve every qualifying soft break in document
/// order against the running text.
///
/// Each patch is committed before the next break is looked up, so a pair of
/// fragments that repeats later in the text is matched at its next bare
/// occurrence.
pub fn fix_soft_breaks(raw: &str, options: &ParseOptions) -> FixOutcome {
    let doc = parse_document(raw, options);
    let mut outcome = FixOutcome {
        text: raw.to_string(),
        applied: 0,
        already_marked: 0,
        missing: Vec::new(),
    };

    for site in qualifying_breaks(&doc) {
        match suppress_break(&outcome.text, site.prev, site.next) {
            Ok(Suppression::Applied(text)) => {
                log::debug!(
                    "byte {}: {}{MARKER_OPEN}{MARKER_CLOSE}{}",
                    site.at.start,
                    site.prev,
                    site.next
                );
                outcome.text = text;
                outcome.applied += 1;
            }
            Ok(Suppression::AlreadyMarked) => outcome.already_marked += 1,
            Err(e) => {
                log::debug!("byte {}: {e}", site.at.start);
                outcome.missing.push(e);
            }
        }
    }

    outcome
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// No Han text in the sampled lines; the file was not touched.
    OutOfScope,
    /// In scope, but no marker was needed.
    Unchanged,
    /// Rewritten with `breaks` new markers.
    Modified { breaks: usize },
}

/// Run the break pass over one file under `docs_root`, writing it back only
/// when something changed.
pub fn process_file(
    relative_path: &RelativePath,
    docs_root: &Path,
    options: &ParseOptions,
) -> Result<FileStatus, ProcessError> {
    let absolute_path = relative_path.to_path(docs_root);
    let io_err = |source: IoError| ProcessError::Io {
        path: absolute_path.clone(),
        source,
    };

    if !gate::is_in_scope(&absolute_path).map_err(|e| io_err(e.into()))? {
        return Ok(FileStatus::OutOfScope);
    }

    let bytes = io::read_file(relative_path, docs_root).map_err(io_err)?;
    let raw = String::from_utf8(bytes).map_err(|source| ProcessError::Decode {
        path: absolute_path.clone(),
        source,
    })?;

    let outcome = fix_soft_breaks(&raw, options);
    for missing in &outcome.missing {
        log::warn!("{}: {missing}", absolute_path.display());
    }

    if !outcome.changed() {
        return Ok(FileStatus::Unchanged);
    }

    io::write_file(relative_path, docs_root, &outcome.text).map_err(io_err)?;
    log::info!("{}", absolute_path.display());
    Ok(FileStatus::Modified {
        breaks: outcome.applied,
    })
}

#[derive(Debug)]
pub struct FailedFile {
    pub path: RelativePathBuf,
    pub error: ProcessError,
}

/// Summary of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub scanned: usize,
    pub out_of_scope: usize,
    pub unchanged: usize,
    pub modified: Vec<RelativePathBuf>,
    pub failed: Vec<FailedFile>,
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files scanned: {} modified, {} unchanged, {} out of scope, {} failed",
            self.scanned,
            self.modified.len(),
            self.unchanged,
            self.out_of_scope,
            self.failed.len()
        )
    }
}

/// Process every markdown file under `docs_root`.
///
/// A failure on one file is recorded in the report and never stops the
/// batch. Only a missing or unreadable root is an error.
pub fn process_tree(docs_root: &Path, options: &ParseOptions) -> Result<BatchReport, IoError> {
    io::validate_docs_dir(docs_root)?;
    let files = io::scan_markdown_files(docs_root)?;

    let mut report = BatchReport {
        scanned: files.len(),
        ..BatchReport::default()
    };

    for file in files {
        match process_file(&file, docs_root, options) {
            Ok(FileStatus::OutOfScope) => report.out_of_scope += 1,
            Ok(FileStatus::Unchanged) => report.unchanged += 1,
            Ok(FileStatus::Modified { .. }) => report.modified.push(file),
            Err(error) => {
                log::warn!("Skipping {error}");
                report.failed.push(FailedFile { path: file, error });
            }
        }
    }

    Ok(report)
}
