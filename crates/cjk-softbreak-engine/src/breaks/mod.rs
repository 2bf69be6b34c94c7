//! # Soft Break Suppression
//!
//! Decides which soft line breaks need their implicit space removed and
//! rewrites the raw source to do so.
//!
//! ## Modules
//!
//! - **`classify`**: `should_suppress` decision on the two nodes flanking a break
//! - **`patch`**: `suppress_break` inserting `<!--`/`-->` around the newline in the raw text
//! - **`walker`**: `visit` and `qualifying_breaks`, the document-order tree walk
//!
//! ## Key Invariants
//!
//! - Only the raw text is ever edited; the parsed tree is never re-serialised
//! - The line count of the text never changes
//! - Fenced code blocks and front matter are never visited

pub mod classify;
pub mod patch;
pub mod walker;

pub use classify::{is_cjk_ideograph, should_suppress};
pub use patch::{MARKER_CLOSE, MARKER_OPEN, PatchError, Suppression, suppress_break};
pub use walker::{BreakSite, qualifying_breaks, visit};
