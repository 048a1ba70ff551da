//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "not every test binary uses every helper")]

use html5ever::{parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Build a Markdown document from lines, terminating each with `\n`.
macro_rules! doc {
    ($($line:expr),* $(,)?) => {
        concat!($($line, "\n"),*)
    };
}

/// Parse an HTML page or fragment into a DOM.
pub fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .expect("reading from a byte slice cannot fail")
}

fn element_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref().to_string()),
        _ => None,
    }
}

fn attribute(handle: &Handle, attr: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == attr)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

fn text_of(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// Finds the first `<ul>` under `handle`, depth first.
fn first_list(handle: &Handle) -> Option<Handle> {
    if element_name(handle).as_deref() == Some("ul") {
        return Some(handle.clone());
    }
    handle.children.borrow().iter().find_map(first_list)
}

/// Summarise a nested list as `Title(Child,Child),Title`.
fn list_shape(list: &Handle) -> String {
    let mut items = Vec::new();
    for item in list.children.borrow().iter() {
        if element_name(item).as_deref() != Some("li") {
            continue;
        }
        let mut title = String::new();
        let mut nested = None;
        for child in item.children.borrow().iter() {
            match element_name(child).as_deref() {
                Some("a") => title = text_of(child),
                Some("ul") => nested = Some(list_shape(child)),
                _ => {}
            }
        }
        items.push(match nested {
            Some(inner) => format!("{title}({inner})"),
            None => title,
        });
    }
    items.join(",")
}

/// Shape of the first table of contents list found in `html`.
pub fn toc_shape(html: &str) -> String {
    let dom = parse_html(html);
    first_list(&dom.document).map_or_else(String::new, |list| list_shape(&list))
}

/// `(id, href)` pairs of every link inside the first list of `html`.
pub fn toc_links(html: &str) -> Vec<(String, String)> {
    fn walk(handle: &Handle, out: &mut Vec<(String, String)>) {
        if element_name(handle).as_deref() == Some("a") {
            out.push((
                attribute(handle, "id").unwrap_or_default(),
                attribute(handle, "href").unwrap_or_default(),
            ));
        }
        for child in handle.children.borrow().iter() {
            walk(child, out);
        }
    }
    let dom = parse_html(html);
    let mut links = Vec::new();
    if let Some(list) = first_list(&dom.document) {
        walk(&list, &mut links);
    }
    links
}

/// Ids of every element carrying one, in document order.
pub fn element_ids(html: &str) -> Vec<String> {
    fn walk(handle: &Handle, out: &mut Vec<String>) {
        if let Some(id) = attribute(handle, "id") {
            out.push(id);
        }
        for child in handle.children.borrow().iter() {
            walk(child, out);
        }
    }
    let dom = parse_html(html);
    let mut ids = Vec::new();
    walk(&dom.document, &mut ids);
    ids
}
