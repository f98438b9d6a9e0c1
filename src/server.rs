//! The HTTP surface: thin axum handlers over the shared [`Catalog`].

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use derive_more::{Display, Error};
use exn::ResultExt;
use reel_catalog::{AllSections, Catalog};
use reel_extract::models::{CatalogEntry, PlayerResolution, Section};
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{ErrorKind, Result};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

/// Errors a handler can answer with, rendered as `{ "error": "..." }`.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    #[display("missing required parameter '{_0}'")]
    MissingParameter(#[error(not(source))] &'static str),
    #[display("{_0}")]
    Upstream(#[error(not(source))] String),
}
impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
impl From<reel_catalog::error::Error> for ApiError {
    fn from(err: reel_catalog::error::Error) -> Self {
        Self::Upstream((*err).to_string())
    }
}
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    section: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerParams {
    href: Option<String>,
}

/// Absent and blank parameters are treated the same: whitespace-only `q` or
/// `href` is rejected with 400 rather than sent upstream.
fn required(value: Option<String>, name: &'static str) -> std::result::Result<String, ApiError> {
    value.filter(|v| !v.trim().is_empty()).ok_or(ApiError::MissingParameter(name))
}

pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/movies", get(list_movies))
        .route("/movies/all", get(list_all))
        .route("/search", get(search))
        .route("/player", get(player))
        .with_state(AppState { catalog })
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> std::result::Result<Json<Vec<CatalogEntry>>, ApiError> {
    let section = Section::from_query(params.section.as_deref());
    Ok(Json(state.catalog.list_category(section).await?))
}

async fn list_all(State(state): State<AppState>) -> Json<AllSections> {
    Json(state.catalog.list_all().await)
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> std::result::Result<Json<Vec<CatalogEntry>>, ApiError> {
    let query = required(params.q, "q")?;
    Ok(Json(state.catalog.search(&query).await?))
}

async fn player(
    State(state): State<AppState>,
    Query(params): Query<PlayerParams>,
) -> std::result::Result<Json<PlayerResolution>, ApiError> {
    let href = required(params.href, "href")?;
    Ok(Json(state.catalog.resolve_player(&href).await?))
}

/// Serve until Ctrl-C.
pub async fn serve(catalog: Arc<Catalog>, bind: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(bind).await.or_raise(|| ErrorKind::Server)?;
    let addr = listener.local_addr().or_raise(|| ErrorKind::Server)?;
    info!(%addr, origin = catalog.origin(), "listening");
    axum::serve(listener, router(catalog))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .or_raise(|| ErrorKind::Server)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use reel_cache::MemoryCache;
    use reel_fetch::MockFetcher;
    use rstest::rstest;
    use tower::ServiceExt;

    const ORIGIN: &str = "https://himovies.sx";
    const HOME: &str = "https://himovies.sx/home";

    fn home_page() -> String {
        let card = |slug: &str, title: &str| {
            format!(
                r#"<div class="flw-item"><div class="film-poster"><img src="/p.jpg"><a href="/{slug}" title="{title}"></a></div></div>"#
            )
        };
        format!(
            r#"<div class="block_area"><h2>Trending</h2><div class="film_list-wrap">{}{}</div></div>
               <div class="block_area"><h2>Latest TV Shows</h2><div class="film_list-wrap">{}</div></div>"#,
            card("movie/avatar-19690", "Avatar"),
            card("movie/dune-105", "Dune"),
            card("tv/shogun-77", "Shogun"),
        )
    }

    fn app(fetcher: MockFetcher) -> Router {
        let catalog = Catalog::new(Arc::new(fetcher), Arc::new(MemoryCache::default()), ORIGIN);
        router(Arc::new(catalog))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app(MockFetcher::default()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[rstest]
    #[case("/movies", "Avatar", 2)]
    #[case("/movies?section=trending", "Avatar", 2)]
    #[case("/movies?section=unknown", "Avatar", 2)]
    #[case("/movies?section=tv", "Avatar", 2)]
    #[case("/movies?section=Latest%20TV%20Shows", "Avatar", 2)]
    #[case("/movies?section=latest-tv", "Shogun", 1)]
    #[case("/movies?section=latest-movies", "", 0)]
    #[tokio::test]
    async fn test_movies(#[case] uri: &str, #[case] first: &str, #[case] count: usize) {
        let (status, body) = get_json(app(MockFetcher::with_pages([(HOME, home_page())])), uri).await;
        assert_eq!(status, StatusCode::OK);
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), count);
        if count > 0 {
            assert_eq!(entries[0]["title"], first);
        }
    }

    #[tokio::test]
    async fn test_movies_all() {
        let (status, body) = get_json(app(MockFetcher::with_pages([(HOME, home_page())])), "/movies/all").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["trending"].as_array().unwrap().len(), 2);
        assert_eq!(body["latestMovies"], json!([]));
        assert_eq!(body["latestTv"][0]["mediaKind"], "tv");
    }

    #[tokio::test]
    async fn test_movies_upstream_failure() {
        let (status, body) = get_json(app(MockFetcher::default().with_status(HOME, 503)), "/movies").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("503"));
    }

    #[rstest]
    #[case("/search")]
    #[case("/search?q=")]
    #[case("/search?q=%20%20")]
    #[case("/player")]
    #[case("/player?href=")]
    #[case("/player?href=%20")]
    #[tokio::test]
    async fn test_missing_parameters(#[case] uri: &str) {
        let fetcher = MockFetcher::default();
        let (status, body) = get_json(app(fetcher), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("missing required parameter"));
    }

    #[tokio::test]
    async fn test_search() {
        let page = r#"<div class="film_list-wrap"><div class="flw-item"><div class="film-poster"><a href="/tv/the-office-4221" title="The Office"></a></div></div></div>"#;
        let fetcher = MockFetcher::with_pages([("https://himovies.sx/search/the%20office", page)]);
        let (status, body) = get_json(app(fetcher), "/search?q=the%20office").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "4221");
        assert_eq!(body[0]["mediaKind"], "tv");
        assert!(body[0].get("quality").is_none());
    }

    #[tokio::test]
    async fn test_player() {
        let page = r#"<iframe id="iframe-embed" src="//vidsrc.to/embed/movie/19690"></iframe>"#;
        let fetcher = MockFetcher::with_pages([("https://himovies.sx/watch-movie/avatar-19690", page)]);
        let (status, body) = get_json(app(fetcher), "/player?href=%2Fmovie%2Favatar-19690").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "resolutionKind": "iframe",
                "playerUrl": "https://vidsrc.to/embed/movie/19690",
                "watchUrl": "https://himovies.sx/watch-movie/avatar-19690"
            })
        );
    }

    #[tokio::test]
    async fn test_player_upstream_failure() {
        let (status, body) = get_json(app(MockFetcher::default()), "/player?href=/movie/gone-1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("404"));
    }
}
