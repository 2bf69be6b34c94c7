//! Translation gate: only files that already carry Han text are touched.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// How many leading lines are sampled when deciding scope.
pub const SAMPLE_LINES: usize = 50;

fn has_han(line: &str) -> bool {
    static HAN_REGEX: OnceLock<Regex> = OnceLock::new();
    let han = HAN_REGEX.get_or_init(|| Regex::new(r"\p{sc=Han}").expect("Invalid Han regex"));
    han.is_match(line)
}

/// True iff any of the first [`SAMPLE_LINES`] lines of `text` contains a Han character.
pub fn sample_is_translated(text: &str) -> bool {
    text.lines().take(SAMPLE_LINES).any(has_han)
}

/// Reads at most the first [`SAMPLE_LINES`] lines of the file at `path` and
/// applies [`sample_is_translated`] to them.
pub fn is_in_scope(path: &Path) -> io::Result<bool> {
    let reader = BufReader::new(File::open(path)?);
    let head = reader
        .lines()
        .take(SAMPLE_LINES)
        .collect::<io::Result<Vec<_>>>()?
        .join("\n");
    Ok(sample_is_translated(&head))
}
