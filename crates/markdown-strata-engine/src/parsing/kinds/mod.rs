//! Per-construct syntax knowledge: each block kind owns its delimiters and
//! line-shape checks in one file, so the classifier stays free of literals.

pub mod block_quote;
pub mod code_fence;
pub mod definitions;
pub mod front_matter;
pub mod heading;
pub mod html_block;
pub mod list_item;
pub mod table_row;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceMarker, FenceSig};
pub use definitions::{FootnoteDefLine, ReferenceDefLine};
pub use front_matter::FrontMatter;
pub use heading::{AtxHeading, SetextUnderline, Underline};
pub use html_block::HtmlBlock;
pub use list_item::{ListItemLine, ListMarker, TaskState, depth_for};
pub use table_row::{Alignment, TableRow};
pub use thematic_break::ThematicBreak;
