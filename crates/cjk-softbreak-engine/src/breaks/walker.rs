use crate::breaks::classify::should_suppress;
use crate::parsing::{Document, NodeKind, NodeRef, Span};

/// A soft break whose implicit space must be suppressed, with the literal
/// source of the nodes on either side, cut down to the break's own lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakSite<'a> {
    pub prev: &'a str,
    pub next: &'a str,
    /// Span of the soft break itself in the parsed source.
    pub at: Span,
}

/// Depth-first, pre-order walk calling `on_soft_break` for every soft break
/// outside fenced code blocks and front matter.
pub fn visit<'a, F>(doc: &'a Document, mut on_soft_break: F)
where
    F: FnMut(NodeRef<'a>),
{
    visit_children(doc.root(), &mut on_soft_break);
}

fn visit_children<'a, F>(node: NodeRef<'a>, on_soft_break: &mut F)
where
    F: FnMut(NodeRef<'a>),
{
    for child in node.children() {
        match child.kind() {
            kind if kind.is_opaque() => {}
            NodeKind::SoftBreak => on_soft_break(child),
            _ => visit_children(child, on_soft_break),
        }
    }
}

/// Every soft break in `doc` that the classifier accepts, in document order.
pub fn qualifying_breaks(doc: &Document) -> Vec<BreakSite<'_>> {
    let mut sites = Vec::new();
    visit(doc, |sb| {
        let (prev, next) = (sb.prev_sibling(), sb.next_sibling());
        if let (Some(p), Some(n)) = (prev, next)
            && should_suppress(prev, next)
        {
            sites.push(BreakSite {
                prev: line_tail(p.source()),
                next: line_head(n.source()),
                at: sb.span(),
            });
        }
    });
    sites
}

/// The part of a node's source on the line the break ends. A node that spans
/// lines carries its own inner breaks, which get patched first, so only the
/// last line survives verbatim. The continuation prefix is left to the gap.
fn line_tail(source: &str) -> &str {
    let tail = source.rsplit('\n').next().unwrap_or(source);
    tail.trim_start_matches([' ', '\t', '>'])
}

/// The part of a node's source on the line the break starts.
fn line_head(source: &str) -> &str {
    let head = source.split('\n').next().unwrap_or(source);
    head.trim_end_matches([' ', '\t', '\r'])
}
