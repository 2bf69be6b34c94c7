use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{BoundaryChar, NodeRef};

/// Is `c` a letter-like CJK ideograph?
///
/// Ideographic AND alphabetic: Han characters pass, while CJK punctuation
/// (`。`, `，`, `「`) and the full-width space fail.
pub fn is_cjk_ideograph(c: char) -> bool {
    static IDEOGRAPH_REGEX: OnceLock<Regex> = OnceLock::new();
    let ideograph = IDEOGRAPH_REGEX.get_or_init(|| {
        Regex::new(r"^[\p{Ideographic}&&\p{Alphabetic}]$").expect("Invalid ideograph regex")
    });

    let mut buf = [0u8; 4];
    ideograph.is_match(c.encode_utf8(&mut buf))
}

fn is_cjk_boundary(c: BoundaryChar) -> bool {
    c.as_char().is_some_and(is_cjk_ideograph)
}

/// Decide whether the space a renderer would put at a soft break between
/// `prev` and `next` must be suppressed.
///
/// Only CJK-to-CJK adjacency qualifies. A missing neighbour or a node with no
/// boundary character never qualifies.
pub fn should_suppress(prev: Option<NodeRef<'_>>, next: Option<NodeRef<'_>>) -> bool {
    let (Some(prev), Some(next)) = (prev, next) else {
        return false;
    };
    is_cjk_boundary(prev.last_char()) && is_cjk_boundary(next.first_char())
}
