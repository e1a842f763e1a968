use std::fmt;

use bytes::Bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerHint {
    Wav,
    Mp3,
    Flac,
    Ogg,
    Webm,
    M4a,
}

impl ContainerHint {
    pub const ALL: [ContainerHint; 6] = [
        Self::Wav,
        Self::Mp3,
        Self::Flac,
        Self::Ogg,
        Self::Webm,
        Self::M4a,
    ];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "flac" => Some(Self::Flac),
            "ogg" => Some(Self::Ogg),
            "webm" => Some(Self::Webm),
            "m4a" => Some(Self::M4a),
            _ => None,
        }
    }

    /// Extension of the final `.`-separated segment of a client filename.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
            Self::Webm => "webm",
            Self::M4a => "m4a",
        }
    }

    pub fn allowed_extensions() -> String {
        Self::ALL
            .iter()
            .map(ContainerHint::extension)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ContainerHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioOrigin {
    UploadedFile,
    RawStream,
}

/// One request's audio payload. Never empty.
#[derive(Debug, Clone)]
pub struct AudioBlob {
    data: Bytes,
    container: Option<ContainerHint>,
    origin: AudioOrigin,
}

impl AudioBlob {
    pub fn new(
        data: impl Into<Bytes>,
        container: Option<ContainerHint>,
        origin: AudioOrigin,
    ) -> Option<Self> {
        let data = data.into();
        if data.is_empty() {
            return None;
        }
        Some(Self {
            data,
            container,
            origin,
        })
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn container(&self) -> Option<ContainerHint> {
        self.container
    }

    pub fn origin(&self) -> AudioOrigin {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
