use axum::{
    extract::{DefaultBodyLimit, Request},
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::controllers::{
    casting::{self, CastingController},
    content::{ContentController, MAX_UPLOAD_BYTES},
    health,
    podcast::PodcastController,
    script::ScriptController,
    session::SessionController,
};
use crate::infrastructure::config::Config;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID wrapper type for extension
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tag every request with a unique id, echoed back in the response headers.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}

/// The controller set the router is assembled from.
pub struct AppControllers {
    pub session: Arc<SessionController>,
    pub content: Arc<ContentController>,
    pub casting: Arc<CastingController>,
    pub script: Arc<ScriptController>,
    pub podcast: Arc<PodcastController>,
}

/// Build the application router with all routes configured.
pub fn build_router(controllers: AppControllers) -> Router {
    let session_routes = Router::new()
        .route("/api/sessions", post(SessionController::create))
        .route("/api/sessions/:sessionId", get(SessionController::get))
        .with_state(controllers.session);

    // Uploads carry whole documents, so these routes get a larger body cap.
    let content_routes = Router::new()
        .route(
            "/api/sessions/:sessionId/content/text",
            post(ContentController::paste_text),
        )
        .route(
            "/api/sessions/:sessionId/content/file",
            post(ContentController::upload_file),
        )
        .with_state(controllers.content)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    let casting_routes = Router::new()
        .route(
            "/api/sessions/:sessionId/recommendation",
            post(CastingController::recommend),
        )
        .with_state(controllers.casting)
        .route("/api/voices", get(casting::list_voices))
        .route("/api/styles", get(casting::list_styles));

    let script_routes = Router::new()
        .route(
            "/api/sessions/:sessionId/script",
            post(ScriptController::generate)
                .put(ScriptController::edit)
                .get(ScriptController::download),
        )
        .with_state(controllers.script);

    let podcast_routes = Router::new()
        .route(
            "/api/sessions/:sessionId/podcast",
            post(PodcastController::generate).get(PodcastController::download),
        )
        .with_state(controllers.podcast);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .merge(session_routes)
        .merge(content_routes)
        .merge(casting_routes)
        .merge(script_routes)
        .merge(podcast_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    controllers: AppControllers,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(controllers);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
