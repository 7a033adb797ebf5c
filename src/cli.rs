//! Invocation handling: decide between a bare start and a normal one, and
//! forward to the library exactly once.

use std::ffi::OsString;

use anyhow::Result;

use crate::library;

/// Program name the library sees when the front-end synthesizes arguments.
pub const PROGRAM_NAME: &str = "rcm";

const PROGRAM_LABEL: &str = "RCM CLI (Rust front-end)";
const HELP_FLAG: &str = "--help";

/// Run the front-end against the OS argument vector and return the
/// library's status for use as the process exit code.
///
/// With no user arguments beyond the program name, a version banner goes to
/// stdout and the invocation turns into a help request. Anything else is
/// forwarded untouched; the library owns all parsing.
pub fn run(args: Vec<OsString>) -> Result<i32> {
    if args.len() <= 1 {
        println!("{}", banner(library::version()));
        let help: [OsString; 2] = [PROGRAM_NAME.into(), HELP_FLAG.into()];
        library::run(&help)
    } else {
        library::run(&args)
    }
}

fn banner(version: Option<&str>) -> String {
    format!("{PROGRAM_LABEL} - {}", version.unwrap_or("unknown"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_includes_the_reported_version() {
        assert_eq!(banner(Some("1.2.0")), "RCM CLI (Rust front-end) - 1.2.0");
    }

    #[test]
    fn missing_version_reads_unknown() {
        assert_eq!(banner(None), "RCM CLI (Rust front-end) - unknown");
    }

    #[test]
    fn bare_invocation_turns_into_a_help_request() {
        // The placeholder library answers help requests with status 0.
        assert_eq!(run(vec![OsString::from("rcm")]).unwrap(), 0);
        assert_eq!(run(Vec::new()).unwrap(), 0);
    }

    #[test]
    fn normal_invocation_is_forwarded_without_interpretation() {
        let args = vec![OsString::from("rcm"), OsString::from("status")];
        assert_eq!(run(args).unwrap(), 1);
    }
}
