//! Selection highlighter - Elm-style toggle highlighting engine
//!
//! Tracks text spans the user selects in open documents and paints them as
//! colored highlights. Re-selecting a highlighted span toggles it off;
//! selecting across existing highlights carves them up. The host editor is
//! abstracted behind [`surface::EditorSurface`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod eof;
pub mod messages;
pub mod model;
pub mod palette;
pub mod render;
pub mod replay;
pub mod runtime;
pub mod surface;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::{Cmd, CommandId};
pub use config::HighlighterConfig;
pub use messages::Msg;
pub use model::HighlightModel;
pub use palette::ColorTag;
pub use runtime::Runtime;
