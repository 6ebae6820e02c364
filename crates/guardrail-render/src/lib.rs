//! Rendering utilities for human surfaces (console summary, Markdown).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod table;

pub use markdown::render_markdown;
pub use model::{RenderableBatch, RenderableCounts, RenderableRow};
pub use table::render_summary_table;
