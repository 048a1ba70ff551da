//! Errors raised while converting a document into a page.

use std::{io, path::PathBuf};

/// Any failure that aborts a conversion. There is no partial output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot read document: {0}")]
    Io(#[from] io::Error),

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("code highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),

    #[error("unknown highlighting theme `{0}`")]
    UnknownTheme(String),

    #[error("invalid page template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("page rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
