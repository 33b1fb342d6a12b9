use chrono::{NaiveDate, NaiveDateTime};
use isware::{
    CursorOutcome, DocstringCommand, DocstringConfig, DocstringError, StringBuffer, TextBuffer,
};
use regex::Regex;
use std::path::Path;

const SHAPES: &str = include_str!("fixtures/shapes.py");

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 6)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn command() -> DocstringCommand {
    DocstringCommand::new(DocstringConfig {
        author: "ann".to_string(),
        organization: "Acme".to_string(),
        tab_size: 4,
    })
}

fn run_at(src: &str, file: &str, needles: &[&str]) -> (String, isware::CommandReport) {
    let mut buffer = StringBuffer::new(src);
    let cursors: Vec<usize> = needles.iter().map(|n| src.find(n).unwrap()).collect();
    let report = command().run(&mut buffer, Path::new(file), &cursors, fixed_now());
    (buffer.into_string(), report)
}

#[test]
fn annotates_method_with_nested_default() {
    let (out, report) = run_at(SHAPES, "shapes.py", &["def area"]);
    assert_eq!(report.inserted(), 1);
    assert!(!report.module_header, "file has content above the cursor");

    let expected = "    def area(self, scale=default(1, 2), *args):\n        \"\"\"\n        @param scale:\n        @param *args:\n        \n        @result: \n        \"\"\"\n        return math.prod";
    assert!(out.contains(expected), "got:\n{}", out);
}

#[test]
fn cursor_in_body_finds_multi_line_declaration() {
    let (out, _) = run_at(SHAPES, "shapes.py", &["self.sides = sides"]);
    let expected = "lengths=[1, 2, 3]):\n        \"\"\"\n        @param sides:\n        @param lengths:\n        \n        @result: \n        \"\"\"\n        self.sides = sides\n";
    assert!(out.contains(expected), "got:\n{}", out);
}

#[test]
fn class_gets_single_line_docstring() {
    let (out, _) = run_at(SHAPES, "shapes.py", &["class Shape"]);
    assert!(out.contains(
        "class Shape(object):\n    \"\"\"docstring for Shape\"\"\"\n    def __init__"
    ));
}

#[test]
fn empty_prefix_gets_module_header_first() {
    let src = "\n\ndef area(w, h=default(1,2)):\n    return w * h\n";
    let (out, report) = run_at(src, "geo.py", &["def area"]);
    assert!(report.module_header);
    assert_eq!(
        out,
        "# -*- coding: utf-8 -*-\n\"\"\"\nCopyright (c) 2024, Acme\n\n@author: ann\nCreated on 2024-05-06 09:30\n\"\"\"\n\
         \n\ndef area(w, h=default(1,2)):\n    \"\"\"\n    @param w:\n    @param h:\n    \n    @result: \n    \"\"\"\n    return w * h\n"
    );
}

#[test]
fn go_file_gets_block_comment_header() {
    let (out, report) = run_at("package main\n", "main.go", &["package"]);
    assert!(report.module_header);
    assert!(out.starts_with("/**\nCopyright (c) 2024, Acme\n\n@author: ann\nCreated on 2024-05-06 09:30\n**/\npackage main\n"));
    assert!(matches!(
        report.outcomes.as_slice(),
        [CursorOutcome::Skipped {
            error: DocstringError::DeclarationNotFound { .. },
            ..
        }]
    ));
}

#[test]
fn header_timestamp_uses_wall_clock_format() {
    let mut buffer = StringBuffer::new("def f():\n    pass\n");
    let now = chrono::Local::now().naive_local();
    command().run(&mut buffer, Path::new("f.py"), &[0], now);
    let created = Regex::new(r"(?m)^Created on \d{4}-\d{2}-\d{2} \d{2}:\d{2}$").unwrap();
    let copyright = Regex::new(r"(?m)^Copyright \(c\) \d{4}, Acme$").unwrap();
    assert!(created.is_match(buffer.as_str()));
    assert!(copyright.is_match(buffer.as_str()));
}

#[test]
fn no_declaration_above_cursor_leaves_buffer_alone() {
    let src = "import os\nx = 1\n";
    let (out, report) = run_at(src, "plain.py", &["x = 1"]);
    assert_eq!(out, src);
    assert!(!report.changed_buffer());
    assert_eq!(
        report.outcomes,
        vec![CursorOutcome::Skipped {
            position: 10,
            error: DocstringError::DeclarationNotFound { position: 10 },
        }]
    );
}

#[test]
fn unsupported_extension_is_a_no_op() {
    let src = "def f(a):\n    pass\n";
    let (out, report) = run_at(src, "notes.txt", &["def"]);
    assert_eq!(out, src);
    assert_eq!(report.lang, None);
    assert!(matches!(
        report.outcomes.as_slice(),
        [CursorOutcome::Skipped {
            error: DocstringError::UnrecognizedFile { .. },
            ..
        }]
    ));
}

#[test]
fn running_twice_inserts_two_blocks() {
    let src = "import os\n\ndef f(a):\n    pass\n";
    let mut buffer = StringBuffer::new(src);
    let cursor = src.find("def").unwrap();
    let cmd = command();
    cmd.run(&mut buffer, Path::new("f.py"), &[cursor], fixed_now());
    cmd.run(&mut buffer, Path::new("f.py"), &[cursor], fixed_now());

    let block = "    \"\"\"\n    @param a:\n    \n    @result: \n    \"\"\"\n";
    assert_eq!(buffer.as_str().matches(block).count(), 2);
    assert_eq!(
        buffer.as_str(),
        format!("import os\n\ndef f(a):\n{block}{block}    pass\n")
    );
}

#[test]
fn several_cursors_follow_earlier_insertions() {
    let src = "import os\n\ndef a(x):\n    pass\n\ndef b(y, z):\n    pass\n";
    let (out, report) = run_at(src, "m.py", &["def b", "def a"]);
    assert_eq!(report.inserted(), 2);
    assert_eq!(
        out,
        "import os\n\ndef a(x):\n    \"\"\"\n    @param x:\n    \n    @result: \n    \"\"\"\n    pass\n\n\
         def b(y, z):\n    \"\"\"\n    @param y:\n    @param z:\n    \n    @result: \n    \"\"\"\n    pass\n"
    );
}

#[test]
fn declaration_on_last_line_without_newline() {
    let src = "import os\ndef f():";
    let (out, _) = run_at(src, "f.py", &["def"]);
    assert_eq!(out, "import os\ndef f():\n    \"\"\"\n    @result: \n    \"\"\"\n");
}

#[test]
fn tabs_widen_the_indent() {
    let src = "import os\nclass A(object):\n\tdef m(self, k):\n\t\tpass\n";
    let (out, _) = run_at(src, "a.py", &["def m"]);
    assert!(out.contains("\tdef m(self, k):\n        \"\"\"\n        @param k:\n"));
}

#[test]
fn buffer_size_tracks_insertions() {
    let src = "import os\ndef f(a):\n";
    let mut buffer = StringBuffer::new(src);
    let report = command().run(&mut buffer, Path::new("f.py"), &[10], fixed_now());
    match &report.outcomes[0] {
        CursorOutcome::Inserted { offset, docstring, .. } => {
            assert_eq!(*offset, src.len());
            assert_eq!(buffer.buffer_size(), src.len() + docstring.len());
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn nameless_declaration_is_skipped() {
    let src = "import os\ndef (a, b):\n    pass\n";
    let (out, report) = run_at(src, "f.py", &["def"]);
    assert_eq!(out, src);
    assert!(!report.changed_buffer());
    assert_eq!(
        report.outcomes,
        vec![CursorOutcome::Skipped {
            position: 10,
            error: DocstringError::ParseFailure {
                text: "def (a, b)".to_string(),
                message: "missing declaration name".to_string(),
            },
        }]
    );
}
