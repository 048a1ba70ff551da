//! Line-by-line document scanning.
//!
//! The scanner copies every line into the output body, replacing accepted
//! heading lines with their anchored form and recording each of them in an
//! [`Outline`].

use std::io::BufRead;

use crate::{
    error::Result,
    headings::{classify_line, is_valid_identifier},
    outline::{Outline, OutlineBuilder, rewrite_heading},
};

/// The rewritten Markdown body together with its heading tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDocument {
    pub body: String,
    pub outline: Outline,
}

/// Per-document scanning state.
#[derive(Default)]
struct Scanner {
    body: String,
    builder: OutlineBuilder,
    line_no: usize,
    rejected: usize,
}

impl Scanner {
    fn feed(&mut self, line: &str) {
        self.line_no += 1;
        let Some(candidate) = classify_line(line) else {
            self.body.push_str(line);
            return;
        };
        if !is_valid_identifier(candidate.identifier) {
            log::debug!(
                "line {}: identifier {:?} is not anchor-safe, keeping as text",
                self.line_no,
                candidate.identifier
            );
            self.reject(line);
            return;
        }
        if self
            .builder
            .push(candidate.level, candidate.title, candidate.identifier)
            .is_none()
        {
            log::debug!(
                "line {}: heading level {} is too deep, keeping as text",
                self.line_no,
                candidate.level
            );
            self.reject(line);
            return;
        }
        self.body.push_str(&rewrite_heading(
            candidate.level,
            candidate.title,
            candidate.identifier,
        ));
    }

    fn reject(&mut self, line: &str) {
        self.rejected += 1;
        self.body.push_str(line);
    }

    fn finish(self) -> ScannedDocument {
        let outline = self.builder.finish();
        log::debug!(
            "scanned {} lines: {} headings, {} rejected candidates",
            self.line_no,
            outline.len(),
            self.rejected
        );
        ScannedDocument {
            body: self.body,
            outline,
        }
    }
}

/// Scan a document from any line-oriented source.
///
/// A final line without a terminator is still processed.
///
/// # Errors
/// Returns an error if reading from `reader` fails, including when the
/// input is not valid UTF-8.
pub fn scan_document<R: BufRead>(mut reader: R) -> Result<ScannedDocument> {
    let mut scanner = Scanner::default();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        scanner.feed(&line);
    }
    Ok(scanner.finish())
}

/// Scan an in-memory document.
#[must_use]
pub fn scan_str(text: &str) -> ScannedDocument {
    let mut scanner = Scanner::default();
    for line in text.split_inclusive('\n') {
        scanner.feed(line);
    }
    scanner.finish()
}
