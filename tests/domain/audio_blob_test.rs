use bytes::Bytes;

use assistive_backend::domain::{AudioBlob, AudioOrigin, ContainerHint};

#[test]
fn given_empty_bytes_when_creating_blob_then_returns_none() {
    assert!(AudioBlob::new(Bytes::new(), None, AudioOrigin::RawStream).is_none());
}

#[test]
fn given_bytes_when_creating_blob_then_exposes_payload_and_origin() {
    let blob = AudioBlob::new(
        vec![1u8, 2, 3],
        Some(ContainerHint::Wav),
        AudioOrigin::UploadedFile,
    )
    .unwrap();

    assert_eq!(blob.len(), 3);
    assert!(!blob.is_empty());
    assert_eq!(blob.container(), Some(ContainerHint::Wav));
    assert_eq!(blob.origin(), AudioOrigin::UploadedFile);
    assert_eq!(blob.data().as_ref(), &[1, 2, 3]);
}

#[test]
fn given_uppercase_extension_when_parsing_filename_then_matches_case_insensitively() {
    assert_eq!(
        ContainerHint::from_filename("VOICE.M4A"),
        Some(ContainerHint::M4a)
    );
}

#[test]
fn given_multiple_dots_when_parsing_filename_then_uses_last_segment() {
    assert_eq!(
        ContainerHint::from_filename("take.1.final.webm"),
        Some(ContainerHint::Webm)
    );
    assert_eq!(ContainerHint::from_filename("clip.wav.exe"), None);
}

#[test]
fn given_filename_without_extension_when_parsing_then_returns_none() {
    assert_eq!(ContainerHint::from_filename("recording"), None);
}

#[test]
fn given_allowed_extensions_when_listing_then_joins_all_six() {
    assert_eq!(
        ContainerHint::allowed_extensions(),
        "wav, mp3, flac, ogg, webm, m4a"
    );
}
