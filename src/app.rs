use crate::catalog::{CatalogStore, MemoryCatalog};
use crate::error::CatalogError;
use crate::models::{CatalogItem, ContentType, ItemDraft, ListFilter, StreamingPlatform};
use crate::seed::{seed_catalog, SeedOutcome};
use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::{env, net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

const MAX_BODY_BYTES: usize = 64 * 1024;
const DEFAULT_LIST_LIMIT: usize = 50;
const DEFAULT_PORT: u16 = 8000;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

pub async fn run_server() -> Result<()> {
    let state = AppState {
        store: Arc::new(MemoryCatalog::new()),
    };
    let app = build_router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    // Permissive CORS: the catalog UI is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(root))
        .route("/api/movies", get(list_items).post(create_item))
        .route(
            "/api/movies/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/api/platforms", get(platforms))
        .route("/api/stats", get(stats))
        .route("/api/seed", post(seed))
        .route("/health", get(health))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            CatalogError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            CatalogError::Field(_) => (StatusCode::BAD_REQUEST, "field_error"),
            CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            CatalogError::Internal(e) => {
                error!("Internal error: {:?}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "status": "error",
                        "kind": "internal",
                        "message": "internal error",
                    })),
                )
                    .into_response();
            }
        };
        (
            status,
            Json(json!({
                "status": "error",
                "kind": kind,
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Multi-Category Movie Rating API" }))
}

#[derive(Deserialize)]
struct ListQuery {
    platform: Option<StreamingPlatform>,
    content_type: Option<ContentType>,
    limit: Option<usize>,
}

async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CatalogItem>>, CatalogError> {
    let filter = ListFilter {
        streaming_platform: query.platform,
        content_type: query.content_type,
        limit: Some(query.limit.unwrap_or(DEFAULT_LIST_LIMIT)),
    };
    let items = state.store.list(filter).await?;
    Ok(Json(items))
}

async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<CatalogItem>, CatalogError> {
    let draft = ItemDraft::from_json(body)?;
    let item = state.store.create(draft).await?;
    info!("Created catalog item '{}' ({})", item.title, item.id);
    Ok(Json(item))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, CatalogError> {
    let item = state.store.get(&id).await?;
    Ok(Json(item))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<CatalogItem>, CatalogError> {
    let draft = ItemDraft::from_json(body)?;
    let item = state.store.update(&id, draft).await?;
    info!("Updated catalog item '{}' ({})", item.title, item.id);
    Ok(Json(item))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, CatalogError> {
    state.store.delete(&id).await?;
    info!("Deleted catalog item {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn platforms() -> Json<Vec<&'static str>> {
    Json(StreamingPlatform::ALL.iter().map(|p| p.as_str()).collect())
}

async fn stats(State(state): State<AppState>) -> Result<Json<Value>, CatalogError> {
    let items = state.store.list(ListFilter::default()).await?;
    let total_movies = items
        .iter()
        .filter(|i| i.content_type == ContentType::Movie)
        .count();
    let total_tv_shows = items.len() - total_movies;

    let mut distribution: Vec<(StreamingPlatform, usize)> = StreamingPlatform::ALL
        .iter()
        .map(|&p| (p, items.iter().filter(|i| i.streaming_platform == p).count()))
        .filter(|(_, count)| *count > 0)
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(Json(json!({
        "total_movies": total_movies,
        "total_tv_shows": total_tv_shows,
        "total_content": items.len(),
        "platform_distribution": distribution
            .into_iter()
            .map(|(platform, count)| json!({ "platform": platform.as_str(), "count": count }))
            .collect::<Vec<_>>(),
    })))
}

async fn seed(State(state): State<AppState>) -> Result<Json<Value>, CatalogError> {
    let message = match seed_catalog(state.store.as_ref()).await? {
        SeedOutcome::Seeded(count) => {
            format!("Successfully seeded database with {count} movies and TV shows")
        }
        SeedOutcome::AlreadyPopulated(count) => {
            format!("Database already contains {count} items, skipping seed")
        }
    };
    Ok(Json(json!({ "message": message })))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut term = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        term.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        }
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        }
    }
}
