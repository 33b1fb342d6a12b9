//! The "insert docstring" editor command.

use crate::buffer::TextBuffer;
use crate::config::DocstringConfig;
use crate::declaration::{locate, parse, TextRegion};
use crate::docstring::{build_docstring, build_module_header, Lang};
use crate::error::DocstringError;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CursorOutcome {
    /// `offset` is where the text went, in the buffer as it was at that moment.
    Inserted {
        position: usize,
        offset: usize,
        docstring: String,
    },
    Skipped {
        position: usize,
        error: DocstringError,
    },
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandReport {
    pub lang: Option<Lang>,
    pub module_header: bool,
    pub outcomes: Vec<CursorOutcome>,
}

impl CommandReport {
    pub fn inserted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, CursorOutcome::Inserted { .. }))
            .count()
    }

    pub fn changed_buffer(&self) -> bool {
        self.module_header || self.inserted() > 0
    }
}

pub struct DocstringCommand {
    config: DocstringConfig,
}

impl DocstringCommand {
    pub fn new(config: DocstringConfig) -> Self {
        Self { config }
    }

    /// Annotates the declaration above each cursor of `buffer`.
    ///
    /// Cursors are handled in ascending order; positions of the cursors still
    /// pending move along with every insertion, the way editor selections do.
    /// Never fails: anything that cannot be annotated is recorded as
    /// [`CursorOutcome::Skipped`] and the buffer is left as is for that cursor.
    /// Running twice over the same declaration inserts a second docstring.
    pub fn run(
        &self,
        buffer: &mut dyn TextBuffer,
        file_name: &Path,
        cursors: &[usize],
        now: NaiveDateTime,
    ) -> CommandReport {
        let mut report = CommandReport::default();
        let Some(lang) = Lang::from_path(file_name) else {
            debug!(file = %file_name.display(), "file type not supported, nothing to do");
            report.outcomes = cursors
                .iter()
                .map(|&position| CursorOutcome::Skipped {
                    position,
                    error: DocstringError::UnrecognizedFile {
                        path: file_name.to_path_buf(),
                    },
                })
                .collect();
            return report;
        };
        report.lang = Some(lang);

        let mut pending: Vec<usize> = cursors.to_vec();
        pending.sort_unstable();

        for i in 0..pending.len() {
            let mut position = pending[i].min(buffer.buffer_size());

            let line = buffer.read_line(position);
            let above = buffer.read_range(TextRegion::new(0, line.region.start));
            if !report.module_header && above.trim().is_empty() {
                let header = build_module_header(
                    lang,
                    &self.config.author,
                    &self.config.organization,
                    now,
                );
                let len = buffer.insert_text(0, &header);
                shift(&mut pending[i..], 0, len);
                position = pending[i].min(buffer.buffer_size());
                report.module_header = true;
                debug!(%lang, "inserted module header");
            }

            let outcome = match self.prepare(buffer, position) {
                Ok((offset, docstring)) => {
                    let len = buffer.insert_text(offset, &docstring);
                    shift(&mut pending[i + 1..], offset, len);
                    debug!(position, offset, "inserted docstring");
                    CursorOutcome::Inserted {
                        position,
                        offset,
                        docstring,
                    }
                }
                Err(error) => {
                    match &error {
                        DocstringError::ParseFailure { .. } => warn!("{}", error),
                        _ => debug!("{}", error),
                    }
                    CursorOutcome::Skipped { position, error }
                }
            };
            report.outcomes.push(outcome);
        }
        report
    }

    /// Computes the insertion offset and docstring for the cursor at `position`.
    fn prepare(
        &self,
        buffer: &dyn TextBuffer,
        position: usize,
    ) -> Result<(usize, String), DocstringError> {
        let region =
            locate(buffer, position).ok_or(DocstringError::DeclarationNotFound { position })?;
        let text = buffer.read_range(region);
        let declaration = parse(&text);

        if !declaration.has_name() {
            return Err(DocstringError::ParseFailure {
                text,
                message: "missing declaration name".to_string(),
            });
        }

        let indent = self.indent_before(&text, &declaration.name);
        let mut docstring = build_docstring(&declaration, indent);

        // Start of the line following the declaration
        let last = buffer.read_line(region.end);
        let offset = if last.region.end < buffer.buffer_size() {
            last.region.end + 1
        } else {
            docstring.insert(0, '\n');
            buffer.buffer_size()
        };
        Ok((offset, docstring))
    }

    /// Display width of everything in `text` before `name`; tabs count as `tab_size`.
    fn indent_before(&self, text: &str, name: &str) -> usize {
        // Skip the keyword so `f` is not found inside `def`
        let lead = text.len() - text.trim_start().len();
        let keyword_end = text[lead..]
            .find(char::is_whitespace)
            .map(|i| lead + i)
            .unwrap_or(lead);
        let Some(index) = text[keyword_end..].find(name).map(|i| keyword_end + i) else {
            return 0;
        };
        text[..index]
            .chars()
            .map(|c| if c == '\t' { self.config.tab_size } else { 1 })
            .sum()
    }
}

fn shift(positions: &mut [usize], offset: usize, len: usize) {
    for p in positions.iter_mut().filter(|p| **p >= offset) {
        *p += len;
    }
}
