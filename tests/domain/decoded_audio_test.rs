use assistive_backend::domain::{DecodedAudio, TARGET_SAMPLE_RATE};

#[test]
fn given_one_second_of_samples_when_measuring_then_duration_is_one() {
    let audio = DecodedAudio::new(vec![0.0; TARGET_SAMPLE_RATE as usize]);

    assert_eq!(audio.sample_rate(), 16_000);
    assert!((audio.duration_secs() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn given_samples_when_encoding_pcm16_then_scales_and_clamps() {
    let audio = DecodedAudio::new(vec![0.0, 1.0, -1.0, 2.0]);

    let pcm = audio.to_pcm16_le();

    let values: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(values, vec![0, i16::MAX, -i16::MAX, i16::MAX]);
}
