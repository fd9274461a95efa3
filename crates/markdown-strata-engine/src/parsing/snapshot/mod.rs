//! Snapshot testing support.
//!
//! - **`normalize`**: renders a parse into a stable text form for snapshot
//!   assertions (one line per sequential element).
//! - **`invariants`**: runtime checks for parser correctness: block ranges
//!   ordered and disjoint, raw text reproduces source lines, sequential ids
//!   strictly increasing, resolved references actually resolve.
//!
//! Parsing behavior is pinned by snapshot tests over fixture documents
//! rather than a separate formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
