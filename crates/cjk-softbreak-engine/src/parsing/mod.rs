//! # Parsing
//!
//! Thin glue over `pulldown-cmark`: the offset-annotated event stream is folded
//! into an arena [`Document`] whose nodes know their kind, their byte span in
//! the source, their parent and their siblings.
//!
//! ## Modules
//!
//! - **`tree`**: `Document`, `NodeKind`, `NodeRef` navigation and `BoundaryChar`
//! - **`builder`**: `TreeBuilder` turning start/end/leaf events into the arena
//! - **`span`**: `Span` byte ranges into the source
//!
//! The tree is read-only. Nothing here ever serialises it back to Markdown.

pub mod builder;
pub mod span;
pub mod tree;

#[cfg(test)]
mod tests;

use pulldown_cmark::{Event, Options, Parser};

use builder::{TreeBuilder, kind_for_tag};
pub use span::Span;
pub use tree::{BoundaryChar, Document, NodeId, NodeKind, NodeRef};

/// Parser configuration, passed explicitly to every [`parse_document`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    markdown: Options,
}

impl ParseOptions {
    pub fn new(markdown: Options) -> Self {
        Self { markdown }
    }

    pub fn markdown(&self) -> Options {
        self.markdown
    }
}

impl Default for ParseOptions {
    /// Tables, strikethrough and front matter, the extensions translated
    /// documentation sites rely on.
    fn default() -> Self {
        Self::new(
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
                | Options::ENABLE_PLUSES_DELIMITED_METADATA_BLOCKS,
        )
    }
}

/// Parse `text` into a [`Document`]. Never fails: any text is some Markdown.
pub fn parse_document(text: &str, options: &ParseOptions) -> Document {
    let mut builder = TreeBuilder::new(text);

    for (event, range) in Parser::new_ext(text, options.markdown()).into_offset_iter() {
        match event {
            Event::Start(tag) => builder.open(kind_for_tag(&tag), range),
            Event::End(_) => builder.close(),
            Event::Text(content) => builder.leaf(NodeKind::Text(content.into_string()), range),
            Event::Code(_) => builder.leaf(NodeKind::Code, range),
            Event::Html(_) | Event::InlineHtml(_) => builder.leaf(NodeKind::Html, range),
            Event::SoftBreak => builder.leaf(NodeKind::SoftBreak, range),
            Event::HardBreak => builder.leaf(NodeKind::HardBreak, range),
            Event::Rule => builder.leaf(NodeKind::Rule, range),
            _ => builder.leaf(NodeKind::Other, range),
        }
    }

    builder.finish()
}
