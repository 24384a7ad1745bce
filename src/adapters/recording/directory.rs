//! Recording adapter for the `PatientDirectory` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::PatientDirectory;

/// Records directory lookups while delegating to an inner directory.
pub struct RecordingDirectory {
    inner: Box<dyn PatientDirectory>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingDirectory {
    /// Creates a recording directory wrapping the given implementation.
    pub fn new(inner: Box<dyn PatientDirectory>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl PatientDirectory for RecordingDirectory {
    fn lookup(&self, first_name: &str) -> Option<String> {
        let result = self.inner.lookup(first_name);
        record_interaction(
            &self.recorder,
            "directory",
            "lookup",
            &json!({ "first_name": first_name }),
            &result,
        );
        result
    }
}
