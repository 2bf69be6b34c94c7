pub mod breaks;
pub mod gate;
pub mod io;
pub mod parsing;
pub mod process;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use breaks::{
    BreakSite, PatchError, Suppression, qualifying_breaks, should_suppress, suppress_break,
};
pub use gate::{is_in_scope, sample_is_translated};
pub use io::IoError;
pub use parsing::{Document, NodeKind, NodeRef, ParseOptions, parse_document};
pub use process::*;
