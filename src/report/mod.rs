//! Output for the inspection commands
//!
//! - `config` - output format and synonym visibility
//! - `writer` - Markdown writer with blank-line and table handling
//! - `markdown` - the generated syntax kind reference

mod config;
mod markdown;
mod writer;

pub use config::{OutputFormat, ReportConfig};
pub use markdown::render_reference;
pub use writer::{MarkdownWriter, code_span};
