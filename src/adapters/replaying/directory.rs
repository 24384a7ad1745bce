//! Replaying adapter for the `PatientDirectory` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::PatientDirectory;

/// Replays recorded directory lookups from a cassette.
pub struct ReplayingDirectory {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingDirectory {
    /// Creates a new replaying directory from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl PatientDirectory for ReplayingDirectory {
    fn lookup(&self, _first_name: &str) -> Option<String> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("directory", "lookup");
            interaction.output.clone()
        };
        output.as_str().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            tool_version: "0.1.0".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn replays_lookups_in_order() {
        let replayer = make_replayer(vec![
            Interaction {
                seq: 0,
                port: "directory".into(),
                method: "lookup".into(),
                input: json!({"first_name": "maria"}),
                output: json!("H77777"),
            },
            Interaction {
                seq: 1,
                port: "directory".into(),
                method: "lookup".into(),
                input: json!({"first_name": "bob"}),
                output: json!(null),
            },
        ]);
        let directory = ReplayingDirectory::new(replayer);
        assert_eq!(directory.lookup("maria").as_deref(), Some("H77777"));
        assert!(directory.lookup("bob").is_none());
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_cassette_panics() {
        let directory = ReplayingDirectory::new(make_replayer(vec![]));
        let _ = directory.lookup("john");
    }
}
