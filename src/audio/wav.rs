//! WAV file writer for generated clips.
//!
//! Serializes sample buffers to WAV format using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Error, Result};

/// Sample rate shared by the synthesizer and the output files (44.1 kHz).
pub const SAMPLE_RATE: u32 = 44100;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bit depth of the output files (16-bit signed PCM).
pub const BITS_PER_SAMPLE: u16 = 16;

/// Scale factor from normalized f32 amplitude to i16 PCM.
const I16_SCALE: f32 = 32767.0;

/// Writes a sample buffer to a WAV file.
///
/// Samples are expected in [-1.0, 1.0] and are scaled to 16-bit signed
/// integers with truncation. Values outside that range wrap around in the
/// integer conversion, so callers keep amplitudes normalized. An existing
/// file at `path` is overwritten.
///
/// # Arguments
///
/// * `samples` - Audio samples as f32 values in [-1.0, 1.0]
/// * `path` - Output file path
///
/// # Example
///
/// ```ignore
/// use sfx_gen::audio::write_wav;
///
/// let samples = vec![0.0, 0.5, -0.5, 0.0];
/// write_wav(&samples, Path::new("/tmp/test.wav"))?;
/// ```
pub fn write_wav(samples: &[f32], path: &Path) -> Result<()> {
    let spec = WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .map_err(|e| Error::wav_write_failed(path.display().to_string(), e))?;

    for sample in samples {
        writer
            .write_sample((sample * I16_SCALE) as i16)
            .map_err(|e| Error::wav_write_failed(path.display().to_string(), e))?;
    }

    writer
        .finalize()
        .map_err(|e| Error::wav_write_failed(path.display().to_string(), e))?;

    Ok(())
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize) -> f32 {
    sample_count as f32 / SAMPLE_RATE as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_wav_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let samples = vec![0.0f32, 0.5, -0.5, 0.0];
        write_wav(&samples, &path).unwrap();

        assert!(path.exists());

        // Verify file is valid WAV with the expected format
        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, CHANNELS);
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(spec.bits_per_sample, BITS_PER_SAMPLE);
        assert_eq!(spec.sample_format, SampleFormat::Int);
    }

    #[test]
    fn write_wav_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.wav");

        let samples = vec![0.0f32, 0.25, -0.25, 1.0, -1.0, 0.5];
        write_wav(&samples, &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.duration() as usize, samples.len());

        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded.len(), samples.len());
        for (orig, dec) in samples.iter().zip(&decoded) {
            assert_eq!(*dec, (orig * I16_SCALE) as i16);
        }
    }

    #[test]
    fn write_wav_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overwrite.wav");

        write_wav(&vec![0.0f32; 100], &path).unwrap();
        write_wav(&vec![0.0f32; 10], &path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.duration(), 10);
    }

    #[test]
    fn write_wav_fails_on_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("test.wav");

        let err = write_wav(&[0.0f32], &path).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::WavWriteFailed);
    }

    #[test]
    fn samples_to_duration_calculation() {
        assert_eq!(samples_to_duration(44100), 1.0);
        assert_eq!(samples_to_duration(22050), 0.5);
        assert_eq!(samples_to_duration(2205), 0.05);
    }
}
