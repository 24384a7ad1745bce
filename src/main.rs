//! Binary entrypoint for the `resolve-patient-id` skill.

use std::process::ExitCode;

fn main() -> ExitCode {
    match resolve_patient_id::run(std::env::args_os()) {
        Ok(result) => {
            println!("{}", result.to_pretty_json());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
