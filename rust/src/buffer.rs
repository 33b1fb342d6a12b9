//! Line-addressable text access.
//!
//! The docstring command never touches an editor directly; it reads and writes
//! through [`TextBuffer`], which a host implements over its own storage.
//! [`StringBuffer`] is the in-memory implementation used by the CLI.

use crate::declaration::TextRegion;

/// One line of a buffer, without its trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub region: TextRegion,
}

pub trait TextBuffer {
    /// Total size in bytes.
    fn buffer_size(&self) -> usize;

    /// The line containing `offset`. Offsets past the end resolve to the last line.
    fn read_line(&self, offset: usize) -> Line;

    fn read_range(&self, region: TextRegion) -> String;

    /// Inserts `text` at `offset` and returns the number of bytes inserted.
    fn insert_text(&mut self, offset: usize, text: &str) -> usize;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    content: String,
}

impl StringBuffer {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }

    /// Byte offset of the first character of the 1-based `line`, clamped to the end.
    pub fn line_offset(&self, line: usize) -> usize {
        if line <= 1 {
            return 0;
        }
        self.content
            .match_indices('\n')
            .nth(line - 2)
            .map(|(i, _)| i + 1)
            .unwrap_or(self.content.len())
    }

    fn snap(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.content.len());
        while !self.content.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

impl TextBuffer for StringBuffer {
    fn buffer_size(&self) -> usize {
        self.content.len()
    }

    fn read_line(&self, offset: usize) -> Line {
        let offset = self.snap(offset);
        let start = self.content[..offset]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = self.content[offset..]
            .find('\n')
            .map(|i| i + offset)
            .unwrap_or(self.content.len());
        Line {
            text: self.content[start..end].to_string(),
            region: TextRegion::new(start, end),
        }
    }

    fn read_range(&self, region: TextRegion) -> String {
        let start = self.snap(region.start);
        let end = self.snap(region.end);
        if end <= start {
            return String::new();
        }
        self.content[start..end].to_string()
    }

    fn insert_text(&mut self, offset: usize, text: &str) -> usize {
        let offset = self.snap(offset);
        self.content.insert_str(offset, text);
        text.len()
    }
}
