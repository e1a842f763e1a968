use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use assistive_backend::application::services::{
    AudioIngest, RecognitionService, SynthesisService, TranscriptionService,
};
use assistive_backend::infrastructure::audio::{
    GoogleSpeechRecognizer, GoogleTranslateSynthesizer, SymphoniaAudioDecoder,
};
use assistive_backend::infrastructure::observability::{TracingConfig, init_tracing};
use assistive_backend::infrastructure::storage::LocalUploadStore;
use assistive_backend::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::new(environment.as_str(), settings.logging.json),
        settings.server.port,
    );

    let upload_store = Arc::new(LocalUploadStore::new(settings.audio.upload_dir.clone())?);
    tracing::info!(
        upload_dir = %upload_store.base_path().display(),
        max_payload_mb = settings.audio.max_payload_mb,
        "Upload staging ready"
    );

    let recognizer = Arc::new(GoogleSpeechRecognizer::new(
        Some(settings.recognizer.endpoint.clone()),
        settings.recognizer.api_key.clone(),
    ));
    let synthesizer = Arc::new(GoogleTranslateSynthesizer::new(
        Some(settings.synthesizer.endpoint.clone()),
        settings.synthesizer.supported_languages.clone(),
    ));

    let transcription_service = Arc::new(TranscriptionService::new(
        AudioIngest::new(upload_store),
        RecognitionService::new(
            Arc::new(SymphoniaAudioDecoder),
            recognizer,
            settings.recognizer.timeout(),
        ),
    ));
    let synthesis_service = Arc::new(SynthesisService::new(
        synthesizer,
        settings.synthesizer.timeout(),
    ));

    let state = AppState::new(
        transcription_service,
        synthesis_service,
        settings.audio.max_payload_bytes(),
    );

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
