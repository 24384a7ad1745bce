//! Service context bundling the port trait objects for one invocation.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::{BuiltinDirectory, TableDirectory};
use crate::adapters::recording::RecordingDirectory;
use crate::adapters::replaying::ReplayingDirectory;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::Settings;
use crate::error::SkillError;
use crate::ports::PatientDirectory;

/// Bundles the ports a skill invocation talks to.
///
/// Constructors wire up different adapter implementations (built-in,
/// table file, recording, replaying).
pub struct ServiceContext {
    /// Patient directory used for name lookups.
    pub directory: Box<dyn PatientDirectory>,
    /// Recorder shared with a `RecordingDirectory`, written by `finish`.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a context backed by the built-in three-patient table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::with_directory(Box::new(BuiltinDirectory))
    }

    /// Creates a context around any directory implementation.
    #[must_use]
    pub fn with_directory(directory: Box<dyn PatientDirectory>) -> Self {
        Self { directory, recorder: None }
    }

    /// Creates a context from runtime settings.
    ///
    /// Loads the configured directory file (or falls back to the built-in
    /// table) and wraps it in a recording adapter when a cassette path is set.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError::Config`] if the directory file cannot be loaded.
    pub fn from_settings(settings: &Settings) -> Result<Self, SkillError> {
        let directory: Box<dyn PatientDirectory> = match &settings.directory {
            Some(path) => {
                let table = TableDirectory::load(path).map_err(SkillError::Config)?;
                tracing::debug!(path = %path.display(), patients = table.len(), "loaded directory file");
                Box::new(table)
            }
            None => Box::new(BuiltinDirectory),
        };

        Ok(match &settings.record {
            Some(path) => Self::recording(directory, path.clone()),
            None => Self::with_directory(directory),
        })
    }

    /// Creates a context whose lookups are captured to a cassette at `path`.
    ///
    /// The cassette is written by [`ServiceContext::finish`].
    #[must_use]
    pub fn recording(inner: Box<dyn PatientDirectory>, path: PathBuf) -> Self {
        tracing::debug!(path = %path.display(), "recording directory lookups");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )));
        Self {
            directory: Box::new(RecordingDirectory::new(inner, Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Creates a context that replays directory lookups from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError::Config`] if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, SkillError> {
        let replayer = CassetteReplayer::load(path).map_err(SkillError::Config)?;
        Ok(Self::with_directory(Box::new(ReplayingDirectory::new(replayer))))
    }

    /// Writes the cassette, if this context is recording.
    ///
    /// Returns the cassette path when one was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Self { directory, recorder } = self;
        // Drop the directory first to release its Arc reference.
        drop(directory);
        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| "cassette recorder is still shared".to_string())?
            .into_inner()
            .map_err(|_| "recorder lock poisoned".to_string())?;
        recorder
            .finish()
            .map(Some)
            .map_err(|e| format!("Failed to write cassette: {e}"))
    }
}
