//! CLI argument definitions shared by the skill binaries.

use std::ffi::OsString;

use clap::Parser;

use crate::error::SkillError;

/// Usage line printed by `resolve-patient-id` on a wrong argument count.
pub const RESOLVE_USAGE: &str = "Usage: node resolve_patient_id.js '<SkillInputArgs JSON>'";
/// Usage line printed by `patient-bloodwork` on a wrong argument count.
pub const BLOODWORK_USAGE: &str = "Usage: python3 patient_bloodwork.py '<SkillInputArgs JSON>'";

/// Raw skill arguments.
///
/// Flags are not interpreted: every argument, including ones that look
/// like `--help` or `--`, is collected as a value.
#[derive(Debug, Parser)]
#[command(name = "skill", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// JSON-encoded skill input envelope.
    #[arg(value_name = "SKILL_INPUT_ARGS_JSON", num_args = 0..)]
    pub inputs: Vec<OsString>,
}

impl Cli {
    /// Parses raw process arguments, program name first.
    ///
    /// An escape `--` is inserted after the program name so clap treats
    /// every supplied argument, a literal `--` included, as a value.
    ///
    /// # Errors
    ///
    /// Returns the clap error if the arguments cannot be parsed.
    pub fn parse_raw(args: Vec<OsString>) -> Result<Self, clap::Error> {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| OsString::from("skill"));
        let escaped =
            std::iter::once(program).chain(std::iter::once(OsString::from("--"))).chain(args);
        Self::try_parse_from(escaped)
    }
}

/// Parses the process arguments and returns the single skill input.
///
/// The argument count is checked on the raw arguments before clap sees
/// them. A non-UTF-8 argument is decoded lossily and left for the JSON
/// parser to reject.
///
/// # Errors
///
/// Returns [`SkillError::Usage`] unless exactly one argument follows the
/// program name.
pub fn single_input<I, T>(args: I, usage: &'static str) -> Result<String, SkillError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 2 {
        return Err(SkillError::Usage { usage });
    }
    let cli = Cli::parse_raw(args).map_err(|_| SkillError::Usage { usage })?;
    match <[OsString; 1]>::try_from(cli.inputs) {
        Ok([input]) => Ok(input.to_string_lossy().into_owned()),
        Err(_) => Err(SkillError::Usage { usage }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_one_argument() {
        let input = single_input(["resolve", r#"{"inputArgs":{}}"#], RESOLVE_USAGE).unwrap();
        assert_eq!(input, r#"{"inputArgs":{}}"#);
    }

    #[test]
    fn rejects_zero_or_many_arguments() {
        for args in [vec!["resolve"], vec!["resolve", "{}", "{}"]] {
            let err = single_input(args, RESOLVE_USAGE).unwrap_err();
            assert_eq!(err.exit_code(), 1);
            assert_eq!(err.to_string(), RESOLVE_USAGE);
        }
    }

    #[test]
    fn flag_like_arguments_are_collected() {
        assert_eq!(single_input(["resolve", "--help"], RESOLVE_USAGE).unwrap(), "--help");
        assert_eq!(single_input(["resolve", "-1"], RESOLVE_USAGE).unwrap(), "-1");
    }

    #[test]
    fn double_dash_counts_as_an_argument() {
        let err = single_input(["resolve", "--", r#"{"inputArgs":{"name":"John"}}"#], RESOLVE_USAGE)
            .unwrap_err();
        assert_eq!(err.exit_code(), 1);

        assert_eq!(single_input(["resolve", "--"], RESOLVE_USAGE).unwrap(), "--");
        assert_eq!(single_input(["resolve", "-"], RESOLVE_USAGE).unwrap(), "-");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_decoded_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![0x7b, 0xff, 0x7d]);
        let input = single_input([OsString::from("resolve"), raw], RESOLVE_USAGE).unwrap();
        assert_eq!(input, "{\u{fffd}}");

        let err = crate::envelope::parse(&input).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn usage_line_is_per_binary() {
        let err = single_input(["bloodwork"], BLOODWORK_USAGE).unwrap_err();
        assert_eq!(err.to_string(), BLOODWORK_USAGE);
    }
}
