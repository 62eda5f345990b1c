//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text highlighted from the lexer's own tokens
//! - [`tokens`]: The token stream with locations and categories
//! - [`program`]: Parsed statements and diagnostics
//! - [`status`]: Status bar with keybindings and a parse summary
//! - `utils`: Shared block, scrolling and token colouring helpers
//!
//! Each pane module exports a stateless `render_*` function; scroll offsets
//! are owned by the app and passed in by reference.

mod utils;

pub mod program;
pub mod source;
pub mod status;
pub mod tokens;

pub use program::render_program_pane;
pub use source::{render_source_pane, SourceRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use tokens::render_tokens_pane;
