use assistive_backend::application::ports::{UploadStore, UploadStoreError};
use assistive_backend::domain::{ContainerHint, StagedFileName};
use assistive_backend::infrastructure::storage::LocalUploadStore;

use crate::helpers::{list_dir, upload_dir};

#[tokio::test]
async fn given_missing_directory_when_creating_store_then_creates_it() {
    let root = upload_dir();
    let nested = root.path().join("nested").join("uploads");

    let store = LocalUploadStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.canonicalize().unwrap());
}

#[tokio::test]
async fn given_data_when_persisting_then_writes_file_inside_base_directory() {
    let dir = upload_dir();
    let store = LocalUploadStore::new(dir.path().to_path_buf()).unwrap();
    let name = StagedFileName::new("voice note.wav", ContainerHint::Wav);

    let staged = store.persist(&name, b"RIFF-data").await.unwrap();

    assert_eq!(staged.path().parent(), Some(store.base_path()));
    assert!(staged.path().ends_with(name.as_str()));
    assert_eq!(staged.read().await.unwrap(), b"RIFF-data");
}

#[tokio::test]
async fn given_staged_upload_when_dropped_then_file_is_removed() {
    let dir = upload_dir();
    let store = LocalUploadStore::new(dir.path().to_path_buf()).unwrap();
    let name = StagedFileName::new("clip.mp3", ContainerHint::Mp3);

    let staged = store.persist(&name, b"ID3").await.unwrap();
    let path = staged.path().to_path_buf();
    assert!(path.exists());

    drop(staged);

    assert!(!path.exists());
    assert!(list_dir(dir.path()).is_empty());
}

#[tokio::test]
async fn given_file_removed_externally_when_dropping_then_does_not_panic() {
    let dir = upload_dir();
    let store = LocalUploadStore::new(dir.path().to_path_buf()).unwrap();
    let name = StagedFileName::new("clip.ogg", ContainerHint::Ogg);

    let staged = store.persist(&name, b"OggS").await.unwrap();
    std::fs::remove_file(staged.path()).unwrap();

    drop(staged);
}

#[tokio::test]
async fn given_existing_name_when_persisting_again_then_refuses_to_overwrite() {
    let dir = upload_dir();
    let store = LocalUploadStore::new(dir.path().to_path_buf()).unwrap();
    let name = StagedFileName::new("clip.wav", ContainerHint::Wav);

    let first = store.persist(&name, b"first").await.unwrap();
    let second = store.persist(&name, b"second").await;

    assert!(matches!(second, Err(UploadStoreError::WriteFailed(_))));
    assert_eq!(first.read().await.unwrap(), b"first");
}

#[tokio::test]
async fn given_traversal_client_name_when_persisting_then_stays_in_base_directory() {
    let root = upload_dir();
    let base = root.path().join("uploads");
    let store = LocalUploadStore::new(base).unwrap();
    let name = StagedFileName::new("../../escape.wav", ContainerHint::Wav);

    let staged = store.persist(&name, b"data").await.unwrap();

    assert_eq!(staged.path().parent(), Some(store.base_path()));
    assert_eq!(list_dir(root.path()), vec!["uploads".to_string()]);
}
