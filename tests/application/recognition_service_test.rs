use std::sync::Arc;
use std::time::Duration;

use assistive_backend::application::services::{RecognitionError, RecognitionService};
use assistive_backend::domain::{
    AudioBlob, AudioOrigin, ContainerHint, LanguageCode, TranscriptionResult,
};
use assistive_backend::infrastructure::audio::SymphoniaAudioDecoder;

use crate::helpers::{
    PanickingDecoder, RecognizerBehavior, ScriptedRecognizer, TEST_TIMEOUT, silent_wav,
};

fn wav_blob() -> AudioBlob {
    AudioBlob::new(
        silent_wav(1600),
        Some(ContainerHint::Wav),
        AudioOrigin::UploadedFile,
    )
    .unwrap()
}

fn service(recognizer: Arc<ScriptedRecognizer>, timeout: Duration) -> RecognitionService {
    RecognitionService::new(Arc::new(SymphoniaAudioDecoder), recognizer, timeout)
}

#[tokio::test]
async fn given_recognizer_transcript_when_recognizing_then_returns_trimmed_success() {
    let recognizer = Arc::new(ScriptedRecognizer::transcript("  hello there  "));
    let service = service(Arc::clone(&recognizer), TEST_TIMEOUT);

    let result = service
        .recognize(&wav_blob(), &LanguageCode::new("hi-IN"))
        .await
        .unwrap();

    match result {
        TranscriptionResult::Success(transcript) => {
            assert_eq!(transcript.text, "hello there");
            assert_eq!(transcript.engine, "google");
            assert!((transcript.confidence - 0.95).abs() < f32::EPSILON);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(recognizer.languages(), vec!["hi-IN".to_string()]);
}

#[tokio::test]
async fn given_no_match_when_recognizing_then_returns_unintelligible() {
    let recognizer = Arc::new(ScriptedRecognizer::new(RecognizerBehavior::NoMatch));
    let service = service(recognizer, TEST_TIMEOUT);

    let result = service
        .recognize(&wav_blob(), &LanguageCode::default())
        .await
        .unwrap();

    assert!(matches!(result, TranscriptionResult::Unintelligible));
}

#[tokio::test]
async fn given_blank_transcript_when_recognizing_then_returns_unintelligible() {
    let recognizer = Arc::new(ScriptedRecognizer::transcript("   "));
    let service = service(recognizer, TEST_TIMEOUT);

    let result = service
        .recognize(&wav_blob(), &LanguageCode::default())
        .await
        .unwrap();

    assert!(matches!(result, TranscriptionResult::Unintelligible));
}

#[tokio::test]
async fn given_recognizer_error_when_recognizing_then_returns_service_failure() {
    let recognizer = Arc::new(ScriptedRecognizer::new(RecognizerBehavior::Fail(
        "quota exceeded".to_string(),
    )));
    let service = service(recognizer, TEST_TIMEOUT);

    let result = service
        .recognize(&wav_blob(), &LanguageCode::default())
        .await
        .unwrap();

    match result {
        TranscriptionResult::ServiceFailure { message } => {
            assert!(message.contains("quota exceeded"), "{message}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn given_hanging_recognizer_when_recognizing_then_times_out_as_service_failure() {
    let recognizer = Arc::new(ScriptedRecognizer::new(RecognizerBehavior::Hang));
    let service = service(recognizer, Duration::from_millis(50));

    let result = service
        .recognize(&wav_blob(), &LanguageCode::default())
        .await
        .unwrap();

    match result {
        TranscriptionResult::ServiceFailure { message } => {
            assert!(message.contains("timed out"), "{message}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn given_unsupported_language_when_recognizing_then_recognizer_receives_en_us() {
    let recognizer = Arc::new(ScriptedRecognizer::transcript("bonjour"));
    let service = service(Arc::clone(&recognizer), TEST_TIMEOUT);

    service
        .recognize(&wav_blob(), &LanguageCode::new("fr-FR"))
        .await
        .unwrap();

    assert_eq!(recognizer.languages(), vec!["en-US".to_string()]);
}

#[tokio::test]
async fn given_garbage_upload_when_recognizing_then_returns_invalid_container() {
    let recognizer = Arc::new(ScriptedRecognizer::transcript("never"));
    let service = service(Arc::clone(&recognizer), TEST_TIMEOUT);
    let blob = AudioBlob::new(
        b"this is definitely not audio".to_vec(),
        Some(ContainerHint::Wav),
        AudioOrigin::UploadedFile,
    )
    .unwrap();

    let result = service.recognize(&blob, &LanguageCode::default()).await;

    assert!(matches!(result, Err(RecognitionError::InvalidContainer(_))));
    assert_eq!(recognizer.call_count(), 0);
}

#[tokio::test]
async fn given_panicking_decoder_when_recognizing_then_returns_decoder_crashed() {
    let recognizer = Arc::new(ScriptedRecognizer::transcript("never"));
    let service = RecognitionService::new(
        Arc::new(PanickingDecoder),
        Arc::clone(&recognizer) as _,
        TEST_TIMEOUT,
    );

    let result = service
        .recognize(&wav_blob(), &LanguageCode::default())
        .await;

    assert!(matches!(result, Err(RecognitionError::DecoderCrashed(_))));
    assert_eq!(recognizer.call_count(), 0);
}
