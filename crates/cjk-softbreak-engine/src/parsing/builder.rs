use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Tag};

use crate::parsing::span::Span;
use crate::parsing::tree::{Document, NodeData, NodeId, NodeKind};

/// Builds a [`Document`] arena from a stream of start/end/leaf events.
///
/// Maintains a stack of open nodes; every new node becomes the last child of
/// the node on top of the stack.
pub(crate) struct TreeBuilder {
    nodes: Vec<NodeData>,
    stack: Vec<NodeId>,
    source: String,
}

impl TreeBuilder {
    pub(crate) fn new(source: &str) -> Self {
        let root = NodeData {
            kind: NodeKind::Document,
            span: Span::from(0..source.len()),
            parent: None,
            children: Vec::new(),
            index: 0,
        };
        Self {
            nodes: vec![root],
            stack: vec![NodeId(0)],
            source: source.to_string(),
        }
    }

    pub(crate) fn open(&mut self, kind: NodeKind, range: Range<usize>) {
        let id = self.push(kind, range);
        self.stack.push(id);
    }

    pub(crate) fn close(&mut self) {
        // The root is never closed, whatever the event stream says.
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    pub(crate) fn leaf(&mut self, kind: NodeKind, range: Range<usize>) {
        self.push(kind, range);
    }

    pub(crate) fn finish(self) -> Document {
        Document {
            nodes: self.nodes,
            source: self.source,
        }
    }

    fn push(&mut self, kind: NodeKind, range: Range<usize>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = *self.stack.last().unwrap_or(&NodeId(0));
        let index = self.nodes[parent.0].children.len();
        self.nodes.push(NodeData {
            kind,
            span: Span::from(range),
            parent: Some(parent),
            children: Vec::new(),
            index,
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

pub(crate) fn kind_for_tag(tag: &Tag<'_>) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { .. } => NodeKind::Heading,
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::CodeBlock(CodeBlockKind::Fenced(_)) => NodeKind::FencedCodeBlock,
        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::IndentedCodeBlock,
        Tag::HtmlBlock => NodeKind::HtmlBlock,
        Tag::List(_) => NodeKind::List,
        Tag::Item => NodeKind::Item,
        Tag::Table(_) => NodeKind::Table,
        Tag::TableHead | Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Strikethrough => NodeKind::Strikethrough,
        Tag::Link { .. } => NodeKind::Link,
        Tag::Image { .. } => NodeKind::Image,
        Tag::MetadataBlock(_) => NodeKind::FrontMatter,
        _ => NodeKind::Other,
    }
}
