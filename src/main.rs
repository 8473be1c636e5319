use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use storyboard_engine::{api, config, imagegen, segmenter, speech};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();

    // Artifact directories must exist before the first generation lands in them
    std::fs::create_dir_all(&config.image_dir).expect("Failed to create image directory");
    std::fs::create_dir_all(&config.audio_dir).expect("Failed to create audio directory");

    // Construct services once and inject them into the request path
    let state = Arc::new(api::routes::AppState {
        segmenter: segmenter::Segmenter::from_config(&config),
        image_generator: Arc::new(imagegen::TieredImageGenerator::from_config(&config)),
        emotion_classifier: speech::EmotionClassifier::new(
            config.emotion_api_url.clone(),
            config.emotion_api_key.clone(),
        ),
        synthesizer: speech::SpeechSynthesizer::new(
            config.tts_url.clone(),
            config.tts_voice.clone(),
            config.audio_dir.clone(),
        ),
    });

    // Build our application with a route
    let app = Router::new()
        .route("/", get(api::handlers::root))
        .route(
            "/api/v1/generate_storyboard",
            post(api::handlers::generate_storyboard),
        )
        .route("/api/v1/synthesize", post(api::handlers::synthesize_speech))
        .route("/api/v1/analyze_only", post(api::handlers::analyze_only))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", host_str);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8190", port_str);
        8190
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
