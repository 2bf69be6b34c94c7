use regex::Regex;

/// Opening half of the suppression marker, placed right after the previous fragment.
pub const MARKER_OPEN: &str = "<!--";
/// Closing half of the suppression marker, placed right before the next fragment.
pub const MARKER_CLOSE: &str = "-->";

/// What may sit between two fragments across a soft break: trailing blanks,
/// the line ending, then the continuation prefix (list indentation, `>` quotes).
const GAP: &str = r"[ \t]*\r?\n[ \t>]*";

/// Result of a successful [`suppress_break`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suppression {
    /// The marker was inserted; carries the rewritten text.
    Applied(String),
    /// The fragment pair only occurs with a marker already in place.
    AlreadyMarked,
}

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("fragments not found verbatim: {prev:?} / {next:?}")]
    NotFound { prev: String, next: String },
    #[error("invalid fragment pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Insert the suppression marker at the first bare occurrence of
/// `prev` + line break + `next` in `raw`.
///
/// Every byte between the fragments is kept, so the line count never changes:
///
/// ```
/// # use cjk_softbreak_engine::breaks::patch::{suppress_break, Suppression};
/// let out = suppress_break("你好\n世界", "你好", "世界").unwrap();
/// assert_eq!(out, Suppression::Applied("你好<!--\n-->世界".to_string()));
/// ```
///
/// Fragments are matched literally. When no bare occurrence exists but a
/// marked one does, the boundary is already resolved and nothing changes.
pub fn suppress_break(raw: &str, prev: &str, next: &str) -> Result<Suppression, PatchError> {
    let prev_lit = regex::escape(prev);
    let next_lit = regex::escape(next);

    let bare = Regex::new(&format!("{prev_lit}({GAP}){next_lit}"))?;
    if let Some(caps) = bare.captures(raw) {
        if bare.find_iter(raw).nth(1).is_some() {
            log::debug!("fragment pair {prev:?} / {next:?} occurs more than once, patching the first");
        }

        let whole = caps.get_match();
        let gap = caps.get(1).map_or("", |m| m.as_str());
        let mut out = String::with_capacity(raw.len() + MARKER_OPEN.len() + MARKER_CLOSE.len());
        out.push_str(&raw[..whole.start()]);
        out.push_str(prev);
        out.push_str(MARKER_OPEN);
        out.push_str(gap);
        out.push_str(MARKER_CLOSE);
        out.push_str(next);
        out.push_str(&raw[whole.end()..]);
        return Ok(Suppression::Applied(out));
    }

    let marked = Regex::new(&format!(
        "{prev_lit}{}{GAP}{}{next_lit}",
        regex::escape(MARKER_OPEN),
        regex::escape(MARKER_CLOSE)
    ))?;
    if marked.is_match(raw) {
        return Ok(Suppression::AlreadyMarked);
    }

    Err(PatchError::NotFound {
        prev: prev.to_string(),
        next: next.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn applied(raw: &str, prev: &str, next: &str) -> String {
        match suppress_break(raw, prev, next).unwrap() {
            Suppression::Applied(text) => text,
            Suppression::AlreadyMarked => panic!("expected a patch for {raw:?}"),
        }
    }

    #[test]
    fn inserts_marker_around_newline() {
        assert_eq!(applied("你好\n世界", "你好", "世界"), "你好<!--\n-->世界");
    }

    #[test]
    fn keeps_crlf_and_trailing_blanks() {
        assert_eq!(
            applied("你好 \r\n世界", "你好", "世界"),
            "你好<!-- \r\n-->世界"
        );
    }

    #[test]
    fn keeps_blockquote_prefix() {
        assert_eq!(
            applied("> 你好\n> 世界\n", "你好", "世界"),
            "> 你好<!--\n> -->世界\n"
        );
    }

    #[test]
    fn keeps_list_continuation_indent() {
        assert_eq!(
            applied("- 你好\n  世界\n", "你好", "世界"),
            "- 你好<!--\n  -->世界\n"
        );
    }

    #[test]
    fn fragments_are_literal() {
        let raw = "见[文档](a.md)\n**重点**";
        assert_eq!(
            applied(raw, "[文档](a.md)", "**重点**"),
            "见[文档](a.md)<!--\n-->**重点**"
        );
    }

    #[test]
    fn patches_only_first_occurrence() {
        let raw = "甲乙\n丙丁\n\n甲乙\n丙丁\n";
        assert_eq!(
            applied(raw, "甲乙", "丙丁"),
            "甲乙<!--\n-->丙丁\n\n甲乙\n丙丁\n"
        );
    }

    #[test]
    fn second_call_reaches_second_occurrence() {
        let once = applied("甲乙\n丙丁\n\n甲乙\n丙丁\n", "甲乙", "丙丁");
        assert_eq!(
            applied(&once, "甲乙", "丙丁"),
            "甲乙<!--\n-->丙丁\n\n甲乙<!--\n-->丙丁\n"
        );
    }

    #[test]
    fn already_marked_is_a_no_op() {
        let result = suppress_break("你好<!--\n-->世界", "你好", "世界").unwrap();
        assert_eq!(result, Suppression::AlreadyMarked);
    }

    #[test]
    fn missing_fragments_report_not_found() {
        let err = suppress_break("你好\n\n世界", "你好", "世界").unwrap_err();
        assert!(matches!(err, PatchError::NotFound { .. }));
        assert!(err.to_string().contains("你好"));
    }

    #[test]
    fn line_count_is_preserved() {
        let raw = "第一行\n第二行\r\n> 第三行\n";
        let out = applied(raw, "第一行", "第二行");
        assert_eq!(out.lines().count(), raw.lines().count());
        assert_eq!(out.matches('\n').count(), raw.matches('\n').count());
    }
}
