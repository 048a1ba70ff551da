//! Local preview server.
//!
//! Every request, whatever its path, re-renders the document from disk so
//! edits show up on reload.

use std::{
    io,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tokio::net::TcpListener;

use crate::convert::Converter;

/// Number of consecutive ports tried before asking the OS for any free one.
pub const PORT_ATTEMPTS: u16 = 10;

/// What the server renders.
pub struct Preview {
    pub converter: Converter,
    pub source: PathBuf,
}

/// Bind the first free port in `first_port..first_port + PORT_ATTEMPTS`,
/// falling back to an ephemeral port.
///
/// # Errors
/// Returns an error if even the ephemeral port cannot be bound.
pub async fn bind_preview_listener(host: IpAddr, first_port: u16) -> io::Result<TcpListener> {
    for offset in 0..PORT_ATTEMPTS {
        let Some(port) = first_port.checked_add(offset) else {
            break;
        };
        match TcpListener::bind(SocketAddr::new(host, port)).await {
            Ok(listener) => return Ok(listener),
            Err(err) => log::debug!("port {port} unavailable: {err}"),
        }
    }
    TcpListener::bind(SocketAddr::new(host, 0)).await
}

/// Build the router serving `preview` on every path.
#[must_use]
pub fn router(preview: Arc<Preview>) -> Router {
    Router::new().fallback(render_page).with_state(preview)
}

/// Serve `preview` on `listener` until the process is stopped.
///
/// # Errors
/// Returns an error if the server fails.
pub async fn serve(listener: TcpListener, preview: Arc<Preview>) -> io::Result<()> {
    axum::serve(listener, router(preview)).await
}

async fn render_page(State(preview): State<Arc<Preview>>) -> Response {
    let job = Arc::clone(&preview);
    let rendered =
        tokio::task::spawn_blocking(move || job.converter.convert_file(&job.source)).await;
    match rendered {
        Ok(Ok(page)) => Html(page).into_response(),
        Ok(Err(err)) => {
            log::error!("rendering {} failed: {err}", preview.source.display());
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
        Err(err) => {
            log::error!("render task failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "render task failed").into_response()
        }
    }
}
