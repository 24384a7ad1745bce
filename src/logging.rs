//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

use crate::error::SkillError;

/// Installs a stderr `tracing` subscriber when a filter is configured.
///
/// Without a filter no subscriber is installed and every event is dropped,
/// so stderr carries only the skill's own diagnostic line.
///
/// # Errors
///
/// Returns [`SkillError::Config`] if the filter directive does not parse.
pub fn init(filter: Option<&str>) -> Result<(), SkillError> {
    let Some(directive) = filter else {
        return Ok(());
    };
    let env_filter = EnvFilter::try_new(directive)
        .map_err(|e| SkillError::Config(format!("invalid log filter {directive:?}: {e}")))?;
    // A subscriber may already be installed (e.g. by a test harness); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
