use anyhow::Context;
use axum::{
    routing::get,
    Router,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod error;
mod handlers {
    pub mod api_handlers;
    pub mod admin_handlers;
    pub mod auth_handlers;
    pub mod auth_middleware;
    pub mod booking_handlers;
    pub mod studio_dtos;
}
mod models {
    pub mod studio_models;
}
mod repositories {
    pub mod mock_data;
    pub mod studio_repository;
}
mod config {
    pub mod app_config;
}

use config::app_config::Config;
use handlers::api_handlers;
use repositories::studio_repository::{InMemoryStudioRepository, StudioRepository};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub repository: Arc<dyn StudioRepository>,
    pub config: Config,
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = match config
        .frontend_url
        .as_deref()
        .and_then(|url| url.parse::<axum::http::HeaderValue>().ok())
    {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION])
        .expose_headers([axum::http::header::CONTENT_TYPE])
}

pub fn app(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api",
            get(api_handlers::handle_get).post(api_handlers::handle_post),
        );

    // Client-side routes (/gallery, /admin/...) all resolve to index.html.
    if let Some(dir) = &state.config.static_dir {
        let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(spa);
    }

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&state.config))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    let addr = config.socket_addr()?;
    if config.static_dir.is_none() {
        tracing::info!("STATIC_DIR not set, serving the API only");
    }

    let state = Arc::new(AppState {
        repository: Arc::new(InMemoryStudioRepository::seeded()),
        config,
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn state_with(config: Config) -> Arc<AppState> {
        Arc::new(AppState {
            repository: Arc::new(InMemoryStudioRepository::seeded()),
            config,
        })
    }

    fn dist_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dcart-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>studio shell</html>").unwrap();
        std::fs::write(dir.join("styles.css"), "body {}").unwrap();
        dir
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let dir = dist_dir("spa");
        let state = state_with(Config {
            static_dir: Some(dir.clone()),
            ..Config::default()
        });

        for path in ["/gallery", "/admin/dashboard", "/"] {
            let request = Request::get(path).body(Body::empty()).unwrap();
            let response = app(state.clone()).oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            assert_eq!(body_text(response).await, "<html>studio shell</html>", "{}", path);
        }

        let request = Request::get("/styles.css").body(Body::empty()).unwrap();
        let response = app(state.clone()).oneshot(request).await.unwrap();
        assert_eq!(body_text(response).await, "body {}");

        let request = Request::get("/api?action=get_faqs").body(Body::empty()).unwrap();
        let response = app(state).oneshot(request).await.unwrap();
        assert!(body_text(response).await.starts_with('['));

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn without_static_dir_unknown_paths_are_not_found() {
        let request = Request::get("/gallery").body(Body::empty()).unwrap();
        let response = app(state_with(Config::default())).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    fn with_origin(origin: &str) -> Request<Body> {
        Request::get("/api/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn frontend_url_restricts_cors_to_one_origin() {
        let state = state_with(Config {
            frontend_url: Some("https://dcartproduction.in".to_string()),
            ..Config::default()
        });

        let response = app(state.clone())
            .oneshot(with_origin("https://dcartproduction.in"))
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://dcartproduction.in"
        );

        let response = app(state).oneshot(with_origin("https://elsewhere.test")).await.unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn cors_is_open_without_frontend_url() {
        let response = app(state_with(Config::default()))
            .oneshot(with_origin("https://elsewhere.test"))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
