use crate::buffer::TextBuffer;
use crate::declaration::model::TextRegion;

const DECLARATION_KEYWORDS: [&str; 2] = ["class", "def"];
const DECLARATION_TERMINATOR: &str = "):";

fn starts_declaration(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .map(|w| DECLARATION_KEYWORDS.contains(&w))
        .unwrap_or(false)
}

/// Finds the class/def declaration enclosing or preceding `position`.
///
/// The returned region starts at the beginning of the keyword line and ends at
/// the `:` of the first following line that ends in `):`, so the region text
/// ends with the closing parenthesis. A `):` inside a default value ends the
/// declaration early, and a paren-less `class Foo:` runs on to the `):` of the
/// next method, so both lines come back as one declaration.
pub fn locate(buffer: &dyn TextBuffer, position: usize) -> Option<TextRegion> {
    let size = buffer.buffer_size();

    // Walk back to the keyword line
    let mut point = position.min(size);
    let first = loop {
        let line = buffer.read_line(point);
        if starts_declaration(&line.text) {
            break line;
        }
        if line.region.start == 0 {
            return None;
        }
        point = line.region.start - 1;
    };
    let begin = first.region.start;

    // Walk forward to the terminator line
    let mut line = first;
    let end = loop {
        let trimmed = line.text.trim_end();
        if trimmed.ends_with(DECLARATION_TERMINATOR) {
            break line.region.start + trimmed.len() - 1;
        }
        if line.region.end >= size {
            return None;
        }
        line = buffer.read_line(line.region.end + 1);
    };

    if end <= begin {
        return None;
    }
    Some(TextRegion::new(begin, end))
}
