pub mod buffer;
pub mod command;
pub mod config;
pub mod declaration;
pub mod docstring;
pub mod error;

// Re-export main types and functions
pub use buffer::{Line, StringBuffer, TextBuffer};
pub use command::{CommandReport, CursorOutcome, DocstringCommand};
pub use config::DocstringConfig;
pub use declaration::{locate, parse, Declaration, DeclarationKind, TextRegion};
pub use docstring::{build_docstring, build_module_header, Lang};
pub use error::DocstringError;
