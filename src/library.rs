//! Safe wrappers over the two C entry points of the precompiled library.

use std::ffi::{CStr, CString, OsStr, OsString};
use std::os::raw::{c_char, c_int};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

/// Forward an argument vector to the library's run entry point and hand back
/// its status unchanged.
pub fn run(args: &[OsString]) -> Result<i32> {
    with_c_args(args, |argc, argv| {
        // Safety: argv holds argc NUL-terminated strings that stay alive
        // until the closure returns; the library does not retain them.
        unsafe { rcm_sys::rcm_run(argc, argv) }
    })
}

/// The library's version string, if it reports one.
///
/// The library hands out a static string, so a single lookup per process is
/// enough. A null pointer or non-UTF-8 text both read as "no version".
pub fn version() -> Option<&'static str> {
    static VERSION: Lazy<Option<&'static str>> = Lazy::new(|| {
        let ptr = unsafe { rcm_sys::rcm_version() };
        if ptr.is_null() {
            return None;
        }
        // Safety: non-null means a valid C string with static lifetime.
        unsafe { CStr::from_ptr(ptr) }.to_str().ok()
    });
    *VERSION
}

/// Marshal `args` into a C argc/argv pair and run `f` against it.
///
/// The `CString` storage and the pointer table both outlive the call and are
/// released right after it returns, which is the exact lifetime the library
/// contract asks for.
fn with_c_args<R>(
    args: &[OsString],
    f: impl FnOnce(c_int, *const *const c_char) -> R,
) -> Result<R> {
    let storage = args
        .iter()
        .enumerate()
        .map(|(i, arg)| {
            c_token(arg).with_context(|| format!("argument {i} contains an interior NUL byte"))
        })
        .collect::<Result<Vec<CString>>>()?;
    let argv: Vec<*const c_char> = storage.iter().map(|token| token.as_ptr()).collect();
    Ok(f(argv.len() as c_int, argv.as_ptr()))
}

#[cfg(unix)]
fn c_token(arg: &OsStr) -> Result<CString, std::ffi::NulError> {
    use std::os::unix::ffi::OsStrExt;
    CString::new(arg.as_bytes())
}

#[cfg(not(unix))]
fn c_token(arg: &OsStr) -> Result<CString, std::ffi::NulError> {
    CString::new(arg.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn marshalled_argv_matches_input() {
        let args = os(&["rcm", "status", "--verbose"]);
        let tokens = with_c_args(&args, |argc, argv| {
            assert_eq!(argc, 3);
            // Safety: reading back the table that was just built.
            unsafe {
                std::slice::from_raw_parts(argv, argc as usize)
                    .iter()
                    .map(|&p| CStr::from_ptr(p).to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
            }
        })
        .unwrap();
        assert_eq!(tokens, ["rcm", "status", "--verbose"]);
    }

    #[test]
    fn empty_vector_marshals_to_zero_count() {
        let argc = with_c_args(&[], |argc, _argv| argc).unwrap();
        assert_eq!(argc, 0);
    }

    #[test]
    fn interior_nul_is_rejected_not_truncated() {
        let args = vec![OsString::from("rcm"), OsString::from("bad\0token")];
        let err = with_c_args(&args, |_, _| ()).unwrap_err();
        assert!(err.to_string().contains("argument 1"));
    }

    #[test]
    fn version_is_memoized_static_text() {
        let first = version();
        assert_eq!(first, version());
        let v = first.expect("placeholder library always reports a version");
        assert!(!v.is_empty());
    }

    #[test]
    fn run_passes_the_library_status_through() {
        assert_eq!(run(&os(&["rcm", "--help"])).unwrap(), 0);
        assert_eq!(run(&os(&["rcm", "no-such-command"])).unwrap(), 1);
    }
}
