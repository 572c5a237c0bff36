//! Generator configuration module.
//!
//! Contains the runtime configuration for the generator, which amounts to
//! where the WAV files land. The shipped binary always uses the default
//! directory; the override exists for library consumers and tests.

use std::path::PathBuf;

/// Directory the binary writes its clips into, relative to the working
/// directory. Created on first run if absent.
pub const DEFAULT_OUTPUT_DIR: &str = "public/sounds";

/// Runtime configuration for the generator.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Directory for the generated WAV files.
    /// If None, uses [`DEFAULT_OUTPUT_DIR`].
    pub output_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Creates a new GeneratorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the effective output directory, using the default if not
    /// specified.
    pub fn effective_output_dir(&self) -> PathBuf {
        if let Some(ref path) = self.output_dir {
            path.clone()
        } else {
            PathBuf::from(DEFAULT_OUTPUT_DIR)
        }
    }
}
