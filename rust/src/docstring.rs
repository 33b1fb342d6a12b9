//! Docstring and module header templates.

use crate::declaration::{Declaration, DeclarationKind};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::Path;

const CLASS_INDENT: &str = "    ";
const DELIMITER: &str = "\"\"\"";

/// Languages the command knows how to annotate.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Python,
    Go,
}

impl Lang {
    /// Picks the language from a file name; `None` disables the command.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("py") => Some(Self::Python),
            Some("go") => Some(Self::Go),
            _ => None,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Go => write!(f, "go"),
        }
    }
}

/// Renders the comment skeleton for `declaration`.
///
/// Function docstrings prefix every line with `indent` spaces. Class docstrings
/// are a single line at a fixed four-space indent. Unsupported declarations
/// render as an empty string.
pub fn build_docstring(declaration: &Declaration, indent: usize) -> String {
    match declaration.kind {
        DeclarationKind::Class => {
            format!("{CLASS_INDENT}{DELIMITER}docstring for {}{DELIMITER}\n", declaration.name)
        }
        DeclarationKind::Function => {
            let mut lines = vec![DELIMITER.to_string()];
            let params: Vec<String> = declaration
                .parameters
                .iter()
                .filter(|p| !p.is_empty())
                .map(|p| format!("@param {p}:"))
                .collect();
            if !params.is_empty() {
                lines.extend(params);
                lines.push(String::new());
            }
            lines.push("@result: ".to_string());
            lines.push(DELIMITER.to_string());

            let pad = " ".repeat(indent);
            lines
                .iter()
                .map(|line| format!("{pad}{line}\n"))
                .collect()
        }
        DeclarationKind::Unsupported => String::new(),
    }
}

/// Renders the file-level authorship block stamped with `now`.
pub fn build_module_header(
    lang: Lang,
    author: &str,
    organization: &str,
    now: NaiveDateTime,
) -> String {
    let body = format!(
        "Copyright (c) {}, {}\n\n@author: {}\nCreated on {}\n",
        now.format("%Y"),
        organization,
        author,
        now.format("%Y-%m-%d %H:%M"),
    );
    match lang {
        Lang::Python => format!("# -*- coding: utf-8 -*-\n{DELIMITER}\n{body}{DELIMITER}\n"),
        Lang::Go => format!("/**\n{body}**/\n"),
    }
}
