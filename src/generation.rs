//! Generation driver.
//!
//! Renders every clip in the catalog and writes it under the output
//! directory, creating the directory first if needed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::{samples_to_duration, write_wav};
use crate::clip::standard_clips;
use crate::error::{Error, Result};

/// Renders and writes every catalog clip into `output_dir`.
///
/// The directory is created if absent. Clips are generated sequentially and
/// each buffer is dropped after its write. Returns the written paths in
/// catalog order.
///
/// # Example
///
/// ```ignore
/// use sfx_gen::generation::generate_all;
///
/// let paths = generate_all(Path::new("public/sounds"))?;
/// assert_eq!(paths.len(), 4);
/// ```
pub fn generate_all(output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .map_err(|e| Error::output_dir_failed(output_dir.display().to_string(), e))?;

    let clips = standard_clips();
    let mut paths = Vec::with_capacity(clips.len());

    for clip in &clips {
        let samples = clip.render();
        eprintln!(
            "Rendering {}: {} samples ({:.2}s)",
            clip.name,
            samples.len(),
            samples_to_duration(samples.len())
        );

        let path = output_dir.join(clip.filename());
        write_wav(&samples, &path)?;
        paths.push(path);
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generates_all_four_clips() {
        let dir = tempdir().unwrap();
        let paths = generate_all(dir.path()).unwrap();

        assert_eq!(paths.len(), 4);
        for name in ["click.wav", "correct.wav", "incorrect.wav", "success.wav"] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("public").join("sounds");
        generate_all(&nested).unwrap();
        assert!(nested.join("click.wav").exists());
    }

    #[test]
    fn written_frame_counts_match_catalog() {
        let dir = tempdir().unwrap();
        generate_all(dir.path()).unwrap();

        let reader = hound::WavReader::open(dir.path().join("click.wav")).unwrap();
        assert_eq!(reader.duration(), 2205);

        let reader = hound::WavReader::open(dir.path().join("correct.wav")).unwrap();
        assert_eq!(reader.duration(), 17640);
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        // The catalog contains no noise segment, so output is deterministic
        let dir = tempdir().unwrap();
        let paths = generate_all(dir.path()).unwrap();
        let first: Vec<Vec<u8>> = paths.iter().map(|p| fs::read(p).unwrap()).collect();

        let paths = generate_all(dir.path()).unwrap();
        let second: Vec<Vec<u8>> = paths.iter().map(|p| fs::read(p).unwrap()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn fails_when_directory_cannot_be_created() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = generate_all(&blocker).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::OutputDirFailed);
    }
}
