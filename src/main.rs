use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podgen_backend::infrastructure::config::{Config, LogFormat};
use podgen_backend::infrastructure::http::{start_http_server, AppControllers};

/// Bounded wait for each synthesis call; expiry is a per-line failure.
const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting podgen backend on {}:{}",
        config.host,
        config.port
    );

    let http_client = reqwest::Client::builder()
        .timeout(SYNTHESIS_TIMEOUT)
        .build()?;

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (provider clients)
    tracing::info!("Instantiating repositories...");
    let chat_repo = Arc::new(
        podgen_backend::infrastructure::repositories::OpenAiChatRepository::new(
            config.llm_api_key.clone(),
            config.llm_base_url.clone(),
            config.llm_model.clone(),
        ),
    );
    let speech_repo = Arc::new(
        podgen_backend::infrastructure::repositories::MinimaxSpeechRepository::new(
            http_client,
            config.minimax_base_url.clone(),
            config.minimax_group_id.clone(),
            config.minimax_api_key.clone(),
            config.speech_model.clone(),
        ),
    );

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let content_service = Arc::new(podgen_backend::domain::content::ContentService::new());
    let casting_service = Arc::new(podgen_backend::domain::casting::CastingService::new(
        chat_repo.clone(),
    ));
    let script_service = Arc::new(podgen_backend::domain::script::ScriptService::new(
        chat_repo.clone(),
    ));
    let podcast_service = Arc::new(podgen_backend::domain::podcast::PodcastService::new(
        speech_repo.clone(),
    ));

    // 3. Session store
    let sessions = Arc::new(podgen_backend::infrastructure::sessions::SessionStore::new());

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let controllers = AppControllers {
        session: Arc::new(podgen_backend::controllers::session::SessionController::new(
            sessions.clone(),
        )),
        content: Arc::new(podgen_backend::controllers::content::ContentController::new(
            sessions.clone(),
            content_service,
        )),
        casting: Arc::new(podgen_backend::controllers::casting::CastingController::new(
            sessions.clone(),
            casting_service,
        )),
        script: Arc::new(podgen_backend::controllers::script::ScriptController::new(
            sessions.clone(),
            script_service,
        )),
        podcast: Arc::new(podgen_backend::controllers::podcast::PodcastController::new(
            sessions.clone(),
            podcast_service,
        )),
    };

    // Start HTTP server with all routes
    start_http_server(config, controllers).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "podgen_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "podgen_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
