//! Portal API server
//!
//! Serves the published-blog listing at `/api/blogs` and falls back to static
//! file service of the exported site. On a store failure the endpoint answers
//! with an empty JSON array and a 500 status; an empty body alone is not a
//! failure signal, since an empty content directory is a normal state.

use anyhow::Result;
use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::content::{BlogSummary, ContentStore};
use crate::Portal;

/// Server state
struct ServerState {
    store: ContentStore,
}

/// Start the API server
pub async fn start(portal: &Portal, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        store: portal.store(),
    });

    let app = Router::new()
        .route("/api/blogs", get(list_blogs))
        .fallback_service(
            ServeDir::new(&portal.public_dir).append_index_html_on_directories(true),
        )
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `GET /api/blogs` - published post summaries, newest first
async fn list_blogs(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    match state.store.try_list_published() {
        Ok(summaries) => (StatusCode::OK, Json(summaries)),
        Err(e) => {
            tracing::error!("Failed to list blogs: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Vec::<BlogSummary>::new()),
            )
        }
    }
}
