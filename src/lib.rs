//! Patient skill CLIs: resolve a patient's first name to a patient
//! identifier, and serve a canned bloodwork panel for an identifier.
//!
//! Both skills take one JSON argument shaped like `{"inputArgs": {...}}`
//! and map every failure to a distinct exit code.

pub mod adapters;
pub mod bloodwork;
pub mod cassette;
pub mod cli;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod ports;
pub mod resolve;

use std::ffi::OsString;

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::envelope::PatientIdResult;
use crate::error::SkillError;

/// Run the resolver with the provided arguments and environment settings.
///
/// # Errors
///
/// Returns the [`SkillError`] that ends the invocation; its exit code
/// identifies the cause.
pub fn run<I, T>(args: I) -> Result<PatientIdResult, SkillError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw = cli::single_input(args, cli::RESOLVE_USAGE)?;
    // Input problems are reported before any configuration is applied.
    let query = resolve::parse_query(&raw)?;
    let settings = Settings::from_env();
    logging::init(settings.log_filter.as_deref())?;
    let ctx = ServiceContext::from_settings(&settings)?;
    run_with_context(ctx, &query)
}

/// Resolve a parsed query against the given context, then flush any
/// cassette the context is recording.
///
/// A cassette that fails to write is logged and does not change the
/// resolution outcome.
///
/// # Errors
///
/// Returns [`SkillError::UnknownPatient`] when the directory has no entry.
pub fn run_with_context(
    ctx: ServiceContext,
    query: &resolve::NameQuery,
) -> Result<PatientIdResult, SkillError> {
    let result = resolve::resolve(ctx.directory.as_ref(), query);
    match ctx.finish() {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "cassette written"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "cassette not written"),
    }
    result
}

/// Run the bloodwork skill with the provided arguments.
///
/// Returns the rendered one-line report.
///
/// # Errors
///
/// Returns the [`SkillError`] that ends the invocation.
pub fn run_bloodwork<I, T>(args: I) -> Result<String, SkillError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw = cli::single_input(args, cli::BLOODWORK_USAGE)?;
    let report = bloodwork::report(&raw)?;
    logging::init(Settings::from_env().log_filter.as_deref())?;
    tracing::debug!(patient_id = %report.patient_id, "serving canned bloodwork");
    report
        .to_spaced_json()
        .map_err(|e| SkillError::Config(format!("failed to render report: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::TableDirectory;

    #[test]
    fn run_resolves_known_name() {
        let result = run(["resolve-patient-id", r#"{"inputArgs":{"name":"John Smith"}}"#]);
        assert_eq!(result.unwrap().patient_id, "H12345");
    }

    #[test]
    fn run_checks_arity_before_parsing() {
        let err = run(["resolve-patient-id", "not json", "extra"]).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn run_with_injected_directory() {
        let ctx = ServiceContext::with_directory(Box::new(TableDirectory::from_entries([(
            "lena", "H31337",
        )])));
        let query = resolve::parse_query(r#"{"inputArgs":{"name":"Lena"}}"#).unwrap();
        assert_eq!(run_with_context(ctx, &query).unwrap().patient_id, "H31337");
    }

    #[test]
    fn run_bloodwork_renders_report() {
        let out = run_bloodwork(["patient-bloodwork", r#"{"inputArgs":{"patient_id":"H1"}}"#])
            .unwrap();
        assert!(out.starts_with(r#"{"patient_id": "H1", "bloodwork": {"#));
    }
}
