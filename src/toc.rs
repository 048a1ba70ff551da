//! Table-of-contents rendering.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::outline::{NodeId, Outline, TOC_PREFIX};

/// Characters left unescaped in anchor attributes, as in URL query escaping.
const ANCHOR_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Render the outline as nested `<ul>` lists.
///
/// Each entry links to its heading and carries the `toc-` anchor the
/// heading links back to. An outline without headings renders to an empty
/// string.
///
/// # Examples
///
/// ```
/// let doc = mdtoc::scan_str("# Intro # intro\n");
/// assert_eq!(
///     mdtoc::render_toc(&doc.outline),
///     "<ul>\n<li><a id=\"toc-intro\" href=\"#intro\">Intro</a></li>\n</ul>",
/// );
/// ```
#[must_use]
pub fn render_toc(outline: &Outline) -> String {
    let mut out = String::new();
    render_list(outline, outline.top_level(), &mut out);
    out
}

fn render_list(outline: &Outline, ids: &[NodeId], out: &mut String) {
    if ids.is_empty() {
        return;
    }
    out.push_str("<ul>");
    for &id in ids {
        let node = outline.node(id);
        let toc_anchor = format!("{TOC_PREFIX}{}", node.identifier);
        out.push_str("\n<li><a id=\"");
        out.extend(utf8_percent_encode(&toc_anchor, ANCHOR_SAFE));
        out.push_str("\" href=\"#");
        out.extend(utf8_percent_encode(&node.identifier, ANCHOR_SAFE));
        out.push_str("\">");
        out.push_str(&handlebars::html_escape(&node.title));
        out.push_str("</a>");
        if !node.children.is_empty() {
            out.push('\n');
            render_list(outline, &node.children, out);
            out.push('\n');
        }
        out.push_str("</li>");
    }
    out.push_str("\n</ul>");
}
