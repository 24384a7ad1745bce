//! Binary entrypoint for the `patient-bloodwork` skill.

use std::process::ExitCode;

use resolve_patient_id::error::SkillError;

fn main() -> ExitCode {
    match resolve_patient_id::run_bloodwork(std::env::args_os()) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err @ SkillError::Usage { .. }) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
    }
}
