//! Tests for the parsing module.
//!
//! Whole-tree shapes are checked with inline `insta` snapshots of a compact
//! outline; everything else asserts on kinds and spans directly.


use crate::parsing::{BoundaryChar, Document, NodeKind, NodeRef, ParseOptions, parse_document};

fn parse(md: &str) -> Document {
    let doc = parse_document(md, &ParseOptions::default());
    invariants::check(&doc);
    doc
}

/// One line per node, indented by depth. Text nodes show their content.
fn outline(doc: &Document) -> String {
    let mut lines = Vec::new();
    outline_node(doc.root(), 0, &mut lines);
    lines.join("\n")
}

fn outline_node(node: NodeRef<'_>, depth: usize, lines: &mut Vec<String>) {
    let label = match node.kind() {
        NodeKind::Text(content) => format!("Text {content:?}"),
        other => format!("{other:?}"),
    };
    lines.push(format!("{}{label}", "  ".repeat(depth)));
    for child in node.children() {
        outline_node(child, depth + 1, lines);
    }
}

fn find_all<'a>(node: NodeRef<'a>, kind: &NodeKind, out: &mut Vec<NodeRef<'a>>) {
    if node.kind() == kind {
        out.push(node);
    }
    for child in node.children() {
        find_all(child, kind, out);
    }
}

fn soft_breaks(doc: &Document) -> Vec<NodeRef<'_>> {
    let mut out = Vec::new();
    find_all(doc.root(), &NodeKind::SoftBreak, &mut out);
    out
}

#[test]
fn paragraph_with_soft_break() {
    let doc = parse("你好\n世界");
    insta::assert_snapshot!(outline(&doc), @r#"
    Document
      Paragraph
        Text "你好"
        SoftBreak
        Text "世界"
    "#);
}

#[test]
fn link_and_emphasis_are_containers() {
    let doc = parse("参见[文档](a.md)\n*重点*内容");
    insta::assert_snapshot!(outline(&doc), @r#"
    Document
      Paragraph
        Text "参见"
        Link
          Text "文档"
        SoftBreak
        Emphasis
          Text "重点"
        Text "内容"
    "#);
}

#[test]
fn soft_break_siblings_navigate() {
    let doc = parse("你好\n世界");
    let breaks = soft_breaks(&doc);
    assert_eq!(breaks.len(), 1);

    let sb = breaks[0];
    let prev = sb.prev_sibling().unwrap();
    let next = sb.next_sibling().unwrap();
    assert_eq!(prev.source(), "你好");
    assert_eq!(next.source(), "世界");
    assert_eq!(sb.parent().unwrap().kind(), &NodeKind::Paragraph);
}

#[test]
fn node_source_includes_markup() {
    let doc = parse("参见[文档](a.md)\n**重点**");
    let sb = soft_breaks(&doc)[0];
    assert_eq!(sb.prev_sibling().unwrap().source(), "[文档](a.md)");
    assert_eq!(sb.next_sibling().unwrap().source(), "**重点**");
}

#[test]
fn boundary_chars_come_from_display_text() {
    let doc = parse("看[文档](https://example.com)\n**重点**");
    let sb = soft_breaks(&doc)[0];
    let link = sb.prev_sibling().unwrap();
    let strong = sb.next_sibling().unwrap();

    assert_eq!(link.first_char(), BoundaryChar::Char('文'));
    assert_eq!(link.last_char(), BoundaryChar::Char('档'));
    assert_eq!(strong.first_char(), BoundaryChar::Char('重'));
    assert_eq!(strong.last_char(), BoundaryChar::Char('点'));
}

#[test]
fn code_span_has_unknown_boundary() {
    let doc = parse("运行`命令`\n之后");
    let sb = soft_breaks(&doc)[0];
    let code = sb.prev_sibling().unwrap();

    assert_eq!(code.kind(), &NodeKind::Code);
    assert_eq!(code.first_char(), BoundaryChar::Unknown);
    assert_eq!(code.last_char(), BoundaryChar::Unknown);
}

#[test]
fn fenced_code_is_a_single_block() {
    let doc = parse("```\n你好\n世界\n```\n");
    let blocks: Vec<_> = doc.root().children().collect();

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind(), &NodeKind::FencedCodeBlock);
    assert!(blocks[0].kind().is_opaque());
    assert!(soft_breaks(&doc).is_empty());
}

#[test]
fn yaml_front_matter_is_recognised() {
    let doc = parse("---\ntitle: 标题\n描述: 内容\n---\n\n正文\n");
    let blocks: Vec<_> = doc.root().children().collect();

    assert_eq!(blocks[0].kind(), &NodeKind::FrontMatter);
    assert!(blocks[0].kind().is_opaque());
    assert_eq!(blocks[1].kind(), &NodeKind::Paragraph);
}

#[test]
fn front_matter_without_extension_is_not_opaque() {
    let options = ParseOptions::new(pulldown_cmark::Options::empty());
    let doc = parse_document("---\ntitle: 标题\n描述: 内容\n---\n", &options);

    assert!(
        doc.root()
            .children()
            .all(|block| block.kind() != &NodeKind::FrontMatter)
    );
}

#[test]
fn tables_and_strikethrough_are_enabled_by_default() {
    let doc = parse("| 甲 | 乙 |\n|----|----|\n| ~~丙~~ | 丁 |\n");
    let mut tables = Vec::new();
    find_all(doc.root(), &NodeKind::Table, &mut tables);
    let mut struck = Vec::new();
    find_all(doc.root(), &NodeKind::Strikethrough, &mut struck);

    assert_eq!(tables.len(), 1);
    assert_eq!(struck.len(), 1);
}

#[test]
fn block_edges_have_no_outer_siblings() {
    let doc = parse("你好\n世界");
    let paragraph = doc.root().children().next().unwrap();
    let first = paragraph.children().next().unwrap();
    let last = paragraph.children().last().unwrap();

    assert!(first.prev_sibling().is_none());
    assert!(last.next_sibling().is_none());
    assert!(doc.root().parent().is_none());
}
