use crate::board::Board;
use crate::prelude::{eprintln, *};
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Json, Router,
};
use postboard_core::dom::Document;
use postboard_core::selection::{EventKind, SelectEvent};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Args, Clone)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectQuery {
    pub user: Option<String>,
    /// Event fired by the select menu, `change` when absent
    pub event: Option<EventKind>,
}

impl SelectQuery {
    fn into_event(self) -> SelectEvent {
        SelectEvent {
            kind: self.event.unwrap_or(EventKind::Change),
            value: self.user,
        }
    }
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let source = global.source()?;
    if global.verbose {
        eprintln!("Fetching users from {}", source.base());
    }

    let board = Arc::new(Board::new(Arc::new(source)));
    if board.init_page().await.is_none() {
        log::warn!("Serving without users; the select menu only has its default option");
    }

    let addr = format!("{}:{}", options.host, options.port);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app_router = router(board).layer(cors);

    if global.verbose {
        eprintln!("Posts page on http://{}", addr);
        eprintln!("Document endpoint: http://{}/api/document", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

fn router(board: Arc<Board>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/select", get(select_handler))
        .route("/posts/{post_id}/toggle", post(toggle_handler))
        .route("/api/document", get(document_handler))
        .with_state(board)
}

async fn page_handler(State(board): State<Arc<Board>>) -> Html<String> {
    Html(board.render_html().await)
}

async fn select_handler(
    State(board): State<Arc<Board>>,
    Query(query): Query<SelectQuery>,
) -> Redirect {
    board.spawn_select_change(query.into_event()).await;
    Redirect::to("/")
}

async fn toggle_handler(
    State(board): State<Arc<Board>>,
    Path(post_id): Path<String>,
) -> Redirect {
    if board.click(&post_id).await.is_none() {
        log::debug!("Click on post {post_id} changed nothing");
    }
    Redirect::to("/")
}

async fn document_handler(State(board): State<Arc<Board>>) -> Json<Document> {
    Json(board.snapshot().await)
}
