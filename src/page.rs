//! Page assembly.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;

const PAGE: &str = "page";
const BASE_TEMPLATE: &str = include_str!("../templates/base.html.hbs");

/// Values handed to the page template.
///
/// `table_of_contents` and `contents` are already HTML and must be inserted
/// with triple braces.
#[derive(Debug, Serialize)]
pub struct Page<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub table_of_contents: &'a str,
    pub contents: &'a str,
}

/// A compiled page layout.
pub struct PageTemplate {
    registry: Handlebars<'static>,
}

impl PageTemplate {
    /// The built-in layout: a fixed sidebar with the table of contents.
    ///
    /// # Errors
    /// Returns an error if the bundled template fails to compile.
    pub fn builtin() -> Result<Self> {
        Self::from_source(BASE_TEMPLATE)
    }

    /// Compile a handlebars layout.
    ///
    /// # Errors
    /// Returns an error if `source` is not a valid template.
    pub fn from_source(source: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_template_string(PAGE, source)?;
        Ok(Self { registry })
    }

    /// # Errors
    /// Returns an error if rendering the template fails.
    pub fn render(&self, page: &Page<'_>) -> Result<String> {
        Ok(self.registry.render(PAGE, page)?)
    }
}

/// Title shown for a document: its path without the final extension.
#[must_use]
pub fn document_title(path: &Path) -> String {
    path.with_extension("").display().to_string()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::Error;

    fn sample() -> Page<'static> {
        Page {
            lang: "en",
            title: "Notes & <Ideas>",
            table_of_contents: "<ul>\n<li>toc</li>\n</ul>",
            contents: "<p>body</p>",
        }
    }

    #[test]
    fn builtin_layout_embeds_fragments_unescaped() {
        let html = PageTemplate::builtin().unwrap().render(&sample()).unwrap();
        assert!(html.contains("<html lang=\"en\">"), "{html}");
        assert!(html.contains("<title>Notes &amp; &lt;Ideas&gt;</title>"), "{html}");
        assert!(html.contains("<ul>\n<li>toc</li>\n</ul>"), "{html}");
        assert!(html.contains("<p>body</p>"), "{html}");
    }

    #[test]
    fn custom_layout_replaces_builtin() {
        let template = PageTemplate::from_source("{{title}}|{{{contents}}}").unwrap();
        assert_eq!(
            template.render(&sample()).unwrap(),
            "Notes &amp; &lt;Ideas&gt;|<p>body</p>"
        );
    }

    #[test]
    fn reports_broken_layouts() {
        assert!(matches!(
            PageTemplate::from_source("{{#if ready}}{{/each}}"),
            Err(Error::Template(_))
        ));
    }

    #[rstest]
    #[case("guide.md", "guide")]
    #[case("docs/project.md", "docs/project")]
    #[case("archive.tar.gz", "archive.tar")]
    #[case("README", "README")]
    fn strips_final_extension(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(document_title(Path::new(path)), expected);
    }
}
