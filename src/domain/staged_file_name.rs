use std::fmt;

use uuid::Uuid;

use super::audio_blob::ContainerHint;

/// Name of an upload inside the staging directory: `<uuid>_<sanitized client name>`.
///
/// The value never contains a path separator, never starts with a dot and always
/// carries a per-request unique prefix, so concurrent uploads of identically named
/// files land in distinct files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFileName(String);

impl StagedFileName {
    pub fn new(client_filename: &str, container: ContainerHint) -> Self {
        Self::with_id(Uuid::new_v4(), client_filename, container)
    }

    pub fn with_id(id: Uuid, client_filename: &str, container: ContainerHint) -> Self {
        let sanitized = sanitize_filename(client_filename);
        let base = if sanitized.is_empty() {
            format!("upload.{}", container.extension())
        } else {
            sanitized
        };
        Self(format!("{}_{}", id, base))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StagedFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduces a client-supplied filename to `[A-Za-z0-9._-]`, turning path separators and
/// whitespace into `_` and stripping leading and trailing dots and underscores.
pub fn sanitize_filename(filename: &str) -> String {
    let replaced: String = filename
        .chars()
        .map(|c| match c {
            '/' | '\\' => ' ',
            c => c,
        })
        .collect();

    let joined = replaced.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}
