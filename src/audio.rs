//! WAV inspection helpers

use std::path::Path;

/// Duration of a WAV file in seconds (frames / sample rate).
pub fn wav_duration_secs(path: &Path) -> Result<f64, hound::Error> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    Ok(f64::from(reader.duration()) / f64::from(spec.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, sample_rate: u32, frames: u32) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for _ in 0..frames {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn duration_is_frames_over_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("half_second.wav");
        write_wav(&path, 16_000, 8_000);

        let secs = wav_duration_secs(&path).unwrap();
        assert!((secs - 0.5).abs() < 1e-9);
    }

    #[test]
    fn malformed_wav_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.wav");
        std::fs::write(&path, b"not a riff header").unwrap();

        assert!(wav_duration_secs(&path).is_err());
    }
}
