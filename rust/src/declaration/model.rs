use serde::Serialize;

/// Name reported when a declaration has no recognizable identifier.
pub const UNKNOWN_NAME: &str = "can not find the class/def name";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Function,
    Unsupported,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    pub parameters: Vec<String>,
}

impl Declaration {
    /// False when the parser fell back to [`UNKNOWN_NAME`].
    pub fn has_name(&self) -> bool {
        self.name != UNKNOWN_NAME
    }
}

/// Half-open byte range `[start, end)` over a text buffer.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRegion {
    pub start: usize,
    pub end: usize,
}

impl TextRegion {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}
