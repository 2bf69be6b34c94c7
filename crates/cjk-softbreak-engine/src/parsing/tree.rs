use crate::parsing::span::Span;

/// Index of a node inside a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// The kind of a parsed node.
///
/// Closed set of the variants the break pass cares about. Anything the parser
/// reports that is not listed here collapses into [`NodeKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Paragraph,
    Heading,
    BlockQuote,
    List,
    Item,
    /// A ``` or ~~~ fenced code block. Opaque to the break pass.
    FencedCodeBlock,
    IndentedCodeBlock,
    /// YAML (`---`) or TOML (`+++`) front matter. Opaque to the break pass.
    FrontMatter,
    HtmlBlock,
    Table,
    TableRow,
    TableCell,
    /// Plain text with its decoded content (entities and escapes resolved).
    Text(String),
    /// An inline code span.
    Code,
    Link,
    Image,
    Emphasis,
    Strong,
    Strikethrough,
    /// Inline HTML, including comments such as the suppression marker.
    Html,
    SoftBreak,
    HardBreak,
    Rule,
    Other,
}

impl NodeKind {
    /// Block kinds whose content the break pass must never visit or modify.
    pub fn is_opaque(&self) -> bool {
        matches!(self, NodeKind::FencedCodeBlock | NodeKind::FrontMatter)
    }
}

/// The character adjoining a soft break on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryChar {
    Char(char),
    /// The node kind carries no usable character. Never classifies as CJK.
    Unknown,
}

impl BoundaryChar {
    pub fn as_char(self) -> Option<char> {
        match self {
            BoundaryChar::Char(c) => Some(c),
            BoundaryChar::Unknown => None,
        }
    }
}

impl From<Option<char>> for BoundaryChar {
    fn from(c: Option<char>) -> Self {
        c.map_or(BoundaryChar::Unknown, BoundaryChar::Char)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) span: Span,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Position of this node in its parent's `children`.
    pub(crate) index: usize,
}

/// Parsed tree for one source text.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]; parent and
/// sibling links are relations, not ownership. The document borrows nothing,
/// so the source text it was parsed from can be rewritten while the tree is
/// still being walked.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) source: String,
}

impl Document {
    pub fn root(&self) -> NodeRef<'_> {
        self.node(NodeId(0))
    }

    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { doc: self, id }
    }

    /// The text this document was parsed from. Spans index into it.
    pub fn source(&self) -> &str {
        &self.source
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }
}

/// Borrowed handle to a node with navigation helpers.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn kind(self) -> &'a NodeKind {
        &self.doc.data(self.id).kind
    }

    pub fn span(self) -> Span {
        self.doc.data(self.id).span
    }

    /// The literal source text covered by this node, markup included.
    pub fn source(self) -> &'a str {
        self.span().slice(&self.doc.source)
    }

    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.doc.data(self.id).parent.map(|p| self.doc.node(p))
    }

    pub fn prev_sibling(self) -> Option<NodeRef<'a>> {
        let data = self.doc.data(self.id);
        let parent = self.doc.data(data.parent?);
        let prev = parent.children.get(data.index.checked_sub(1)?)?;
        Some(self.doc.node(*prev))
    }

    pub fn next_sibling(self) -> Option<NodeRef<'a>> {
        let data = self.doc.data(self.id);
        let parent = self.doc.data(data.parent?);
        let next = parent.children.get(data.index + 1)?;
        Some(self.doc.node(*next))
    }

    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let doc = self.doc;
        doc.data(self.id).children.iter().map(move |c| doc.node(*c))
    }

    /// First character of the node's visible text.
    ///
    /// Text yields its own first character; links and emphasis yield the first
    /// character of their display text. Every other kind is `Unknown`.
    pub fn first_char(self) -> BoundaryChar {
        match self.kind() {
            NodeKind::Text(content) => content.chars().next().into(),
            NodeKind::Link | NodeKind::Emphasis | NodeKind::Strong => self
                .children()
                .next()
                .map_or(BoundaryChar::Unknown, NodeRef::first_char),
            _ => BoundaryChar::Unknown,
        }
    }

    /// Last character of the node's visible text. Mirror of [`first_char`].
    ///
    /// [`first_char`]: NodeRef::first_char
    pub fn last_char(self) -> BoundaryChar {
        match self.kind() {
            NodeKind::Text(content) => content.chars().next_back().into(),
            NodeKind::Link | NodeKind::Emphasis | NodeKind::Strong => self
                .children()
                .last()
                .map_or(BoundaryChar::Unknown, NodeRef::last_char),
            _ => BoundaryChar::Unknown,
        }
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", self.kind())
            .field("span", &self.span())
            .finish()
    }
}
