pub mod locator;
pub mod model;
pub mod parser;

pub use locator::locate;
pub use model::{Declaration, DeclarationKind, TextRegion, UNKNOWN_NAME};
pub use parser::parse;
