use std::io::Cursor;

use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use symphonia::core::audio::{AudioBufferRef, SampleBuffer};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader, Packet};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioDecoder, AudioDecoderError};
use crate::domain::{AudioBlob, AudioOrigin, DecodedAudio, TARGET_SAMPLE_RATE};

const RESAMPLE_CHUNK_FRAMES: usize = 1024;

/// Decodes wav, mp3, flac, ogg/vorbis, webm and m4a containers.
///
/// Raw-stream payloads that no container reader recognizes are read as headerless
/// little-endian 16-bit mono PCM at 16 kHz.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaAudioDecoder;

impl AudioDecoder for SymphoniaAudioDecoder {
    fn decode(&self, blob: &AudioBlob) -> Result<DecodedAudio, AudioDecoderError> {
        let mut hint = Hint::new();
        if let Some(container) = blob.container() {
            hint.with_extension(container.extension());
        }

        match decode_container(blob.data(), &hint) {
            Err(ContainerFailure::Unrecognized(reason))
                if blob.origin() == AudioOrigin::RawStream =>
            {
                tracing::debug!(reason = %reason, "No container detected, reading raw PCM");
                decode_raw_pcm16(blob.data())
            }
            Err(ContainerFailure::Unrecognized(reason)) => {
                Err(AudioDecoderError::UnsupportedFormat(reason))
            }
            Err(ContainerFailure::Decode(e)) => Err(e),
            Ok(samples) => Ok(DecodedAudio::new(samples)),
        }
    }
}

enum ContainerFailure {
    Unrecognized(String),
    Decode(AudioDecoderError),
}

impl From<AudioDecoderError> for ContainerFailure {
    fn from(e: AudioDecoderError) -> Self {
        ContainerFailure::Decode(e)
    }
}

fn decoding_failed(stage: &str, e: impl std::fmt::Display) -> AudioDecoderError {
    AudioDecoderError::DecodingFailed(format!("{}: {}", stage, e))
}

fn is_end_of_stream(e: &SymphoniaError) -> bool {
    matches!(e, SymphoniaError::IoError(io) if io.kind() == std::io::ErrorKind::UnexpectedEof)
}

fn open_container(data: &[u8], hint: &Hint) -> Result<Box<dyn FormatReader>, ContainerFailure> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(data.to_vec())), Default::default());

    match symphonia::default::get_probe().format(
        hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    ) {
        Ok(detected) => Ok(detected.format),
        Err(SymphoniaError::Unsupported(reason)) => {
            Err(ContainerFailure::Unrecognized(reason.to_string()))
        }
        Err(e) if is_end_of_stream(&e) => Err(ContainerFailure::Unrecognized(
            "stream ended before a container marker".to_string(),
        )),
        Err(e) => Err(decoding_failed("container detection", e).into()),
    }
}

fn next_packet(format: &mut dyn FormatReader) -> Result<Option<Packet>, AudioDecoderError> {
    match format.next_packet() {
        Ok(packet) => Ok(Some(packet)),
        Err(e) if is_end_of_stream(&e) => Ok(None),
        Err(e) => Err(decoding_failed("packet", e)),
    }
}

/// Accumulates decoded buffers as mono f32, averaging interleaved channels.
#[derive(Default)]
struct MonoMixer {
    scratch: Option<SampleBuffer<f32>>,
    mono: Vec<f32>,
}

impl MonoMixer {
    fn push(&mut self, decoded: AudioBufferRef<'_>) {
        let frames = decoded.frames();
        if frames == 0 {
            return;
        }

        let spec = *decoded.spec();
        let channels = spec.channels.count().max(1);
        let needed = frames * channels;

        if self.scratch.as_ref().is_none_or(|buf| buf.capacity() < needed) {
            self.scratch = Some(SampleBuffer::new(frames as u64, spec));
        }
        let Some(scratch) = self.scratch.as_mut() else {
            return;
        };
        scratch.copy_interleaved_ref(decoded);

        downmix(scratch.samples(), channels, &mut self.mono);
    }

    fn into_samples(self) -> Vec<f32> {
        self.mono
    }
}

fn downmix(interleaved: &[f32], channels: usize, out: &mut Vec<f32>) {
    if channels == 1 {
        out.extend_from_slice(interleaved);
        return;
    }
    let scale = 1.0 / channels as f32;
    out.extend(
        interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() * scale),
    );
}

fn decode_container(data: &[u8], hint: &Hint) -> Result<Vec<f32>, ContainerFailure> {
    let mut format = open_container(data, hint)?;

    let track = format
        .default_track()
        .ok_or_else(|| AudioDecoderError::DecodingFailed("no audio track found".to_string()))?;
    let track_id = track.id;
    let source_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AudioDecoderError::DecodingFailed("unknown sample rate".to_string()))?;

    // Opus tracks land here: the codec registry has no decoder for them.
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AudioDecoderError::UnsupportedFormat(format!("codec: {}", e)))?;

    let mut mixer = MonoMixer::default();
    let mut skipped_frames = 0usize;

    while let Some(packet) = next_packet(format.as_mut())? {
        if packet.track_id() != track_id {
            continue;
        }
        match decoder.decode(&packet) {
            Ok(decoded) => mixer.push(decoded),
            Err(SymphoniaError::DecodeError(reason)) => {
                skipped_frames += 1;
                tracing::warn!(error = reason, "Skipping corrupt audio frame");
            }
            Err(e) => return Err(decoding_failed("decode", e).into()),
        }
    }

    let samples = mixer.into_samples();
    if samples.is_empty() {
        return Err(
            AudioDecoderError::DecodingFailed("no audio samples decoded".to_string()).into(),
        );
    }

    let samples = if source_rate == TARGET_SAMPLE_RATE {
        samples
    } else {
        resample(&samples, source_rate, TARGET_SAMPLE_RATE)?
    };

    tracing::debug!(
        samples = samples.len(),
        source_rate,
        skipped_frames,
        "Audio decoded to 16kHz mono PCM"
    );

    Ok(samples)
}

fn decode_raw_pcm16(data: &[u8]) -> Result<DecodedAudio, AudioDecoderError> {
    if data.len() % 2 != 0 {
        return Err(AudioDecoderError::DecodingFailed(format!(
            "raw PCM stream has odd length {}; expected 16-bit samples",
            data.len()
        )));
    }

    let samples: Vec<f32> = data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect();

    if samples.is_empty() {
        return Err(AudioDecoderError::DecodingFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    Ok(DecodedAudio::new(samples))
}

fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, AudioDecoderError> {
    let ratio = f64::from(to_rate) / f64::from(from_rate);
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };
    let mut resampler = SincFixedIn::<f32>::new(ratio, 1.0, params, RESAMPLE_CHUNK_FRAMES, 1)
        .map_err(|e| decoding_failed("resampler init", e))?;

    let expected = (samples.len() as f64 * ratio).round() as usize;
    let delay = resampler.output_delay();
    let mut resampled = Vec::with_capacity(expected + delay + RESAMPLE_CHUNK_FRAMES);

    let mut pending = samples;
    while pending.len() >= resampler.input_frames_next() {
        let (block, rest) = pending.split_at(resampler.input_frames_next());
        let out = resampler
            .process(&[block], None)
            .map_err(|e| decoding_failed("resample", e))?;
        resampled.extend(out.into_iter().flatten());
        pending = rest;
    }

    if !pending.is_empty() {
        let out = resampler
            .process_partial(Some(&[pending]), None)
            .map_err(|e| decoding_failed("resample", e))?;
        resampled.extend(out.into_iter().flatten());
    }

    // Drain the filter so the tail survives the delay trim.
    while resampled.len() < expected + delay {
        let out = resampler
            .process_partial::<&[f32]>(None, None)
            .map_err(|e| decoding_failed("resample", e))?;
        let before = resampled.len();
        resampled.extend(out.into_iter().flatten());
        if resampled.len() == before {
            break;
        }
    }

    let mut aligned = resampled.split_off(delay.min(resampled.len()));
    aligned.truncate(expected);
    Ok(aligned)
}
