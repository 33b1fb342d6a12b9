use crate::declaration::model::{Declaration, DeclarationKind, UNKNOWN_NAME};

const IMPLICIT_RECEIVER: &str = "self";

fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    rest.starts_with(char::is_whitespace).then_some(rest)
}

/// Parses a class/def declaration such as `def area(self, w, h=1)`.
///
/// Never fails: unknown keywords yield [`DeclarationKind::Unsupported`], a
/// missing identifier yields [`UNKNOWN_NAME`], and a parameter list that is not
/// wrapped in one pair of parentheses yields no parameters.
pub fn parse(text: &str) -> Declaration {
    let text = text.trim();
    let (kind, rest) = if let Some(rest) = strip_keyword(text, "class") {
        (DeclarationKind::Class, rest)
    } else if let Some(rest) = strip_keyword(text, "def") {
        (DeclarationKind::Function, rest)
    } else {
        (DeclarationKind::Unsupported, text)
    };

    let rest = rest.trim();
    let (name, params) = split_name(rest);

    Declaration {
        kind,
        name,
        parameters: parse_parameters(params),
    }
}

fn split_name(rest: &str) -> (String, &str) {
    match rest.find('(') {
        Some(0) => (UNKNOWN_NAME.to_string(), rest),
        Some(i) => (rest[..i].trim_end().to_string(), &rest[i..]),
        None => {
            // `class Foo:` has no parameter list at all
            let bare = rest.strip_suffix(':').unwrap_or(rest).trim();
            if bare.is_empty() || bare.contains(char::is_whitespace) {
                (UNKNOWN_NAME.to_string(), "")
            } else {
                (bare.to_string(), "")
            }
        }
    }
}

fn parse_parameters(params: &str) -> Vec<String> {
    let params = params.trim();
    let params = params.strip_suffix(':').unwrap_or(params).trim_end();
    let interior = match params
        .strip_prefix('(')
        .and_then(|p| p.strip_suffix(')'))
    {
        Some(inner) => inner.trim(),
        None => return Vec::new(),
    };

    collapse_brackets(interior)
        .split(',')
        .map(str::trim)
        .filter(|p| *p != IMPLICIT_RECEIVER)
        .map(|p| match p.find('=') {
            Some(i) => p[..i].trim(),
            None => p,
        })
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drops every bracketed group so commas inside default values such as
/// `b=[1, 2]` or `c=call(x, y)` no longer look like separators. Runs of
/// whitespace collapse to a single space.
pub(crate) fn collapse_brackets(interior: &str) -> String {
    let mut stack: Vec<char> = Vec::with_capacity(interior.len());
    for c in interior.chars() {
        if c.is_whitespace() {
            match stack.last() {
                Some(top) if !top.is_whitespace() => stack.push(' '),
                _ => {}
            }
        } else if let Some(opener) = opener_for(c) {
            if let Some(i) = stack.iter().rposition(|&s| s == opener) {
                stack.truncate(i);
            }
        } else {
            stack.push(c);
        }
    }
    stack.into_iter().collect()
}
