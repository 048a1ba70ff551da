//! Whole-document conversion.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    error::{Error, Result},
    markdown::MarkdownRenderer,
    page::{Page, PageTemplate, document_title},
    process::scan_document,
    toc::render_toc,
};

/// Turns Markdown documents into complete pages.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent conversions. Every call rescans its input from scratch.
pub struct Converter {
    markdown: MarkdownRenderer,
    template: PageTemplate,
    lang: String,
}

impl Converter {
    #[must_use]
    pub fn new(
        markdown: MarkdownRenderer,
        template: PageTemplate,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            markdown,
            template,
            lang: lang.into(),
        }
    }

    /// Convert a document read from `reader` into a page titled `title`.
    ///
    /// # Errors
    /// Returns an error if reading, highlighting, or templating fails.
    pub fn convert_reader<R: BufRead>(&self, title: &str, reader: R) -> Result<String> {
        let doc = scan_document(reader)?;
        let table_of_contents = render_toc(&doc.outline);
        let contents = self.markdown.render(&doc.body)?;
        self.template.render(&Page {
            lang: &self.lang,
            title,
            table_of_contents: &table_of_contents,
            contents: &contents,
        })
    }

    /// Convert the document at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or converted.
    pub fn convert_file(&self, path: &Path) -> Result<String> {
        let file = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.convert_reader(&document_title(path), BufReader::new(file))
    }

    /// Convert `input` and write the page to `output`, replacing it.
    ///
    /// Nothing is written if the conversion fails.
    ///
    /// # Errors
    /// Returns an error if conversion or writing fails.
    pub fn render_to_file(&self, input: &Path, output: &Path) -> Result<()> {
        let page = self.convert_file(input)?;
        fs::write(output, page).map_err(|source| Error::Write {
            path: output.to_path_buf(),
            source,
        })
    }
}
