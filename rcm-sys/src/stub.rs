//! Placeholder implementation of the RCM library.
//!
//! Compiled in when the `stub` feature is active, so the front-end builds
//! and runs on machines without `librcm_cli` installed. It honors the same
//! contract the real library promises: argv is decoded defensively, never
//! retained, and the version string has static lifetime. Received tokens
//! are echoed back, which makes the front-end's forwarding observable from
//! the outside.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

// The trailing NUL makes the literal directly usable as a C string.
static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

#[no_mangle]
pub extern "C" fn rcm_version() -> *const c_char {
    VERSION.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn rcm_run(argc: c_int, argv: *const *const c_char) -> c_int {
    let args = decode_args(argc, argv);

    // An empty vector counts as a help request, as the real library does.
    let wants_help =
        args.len() <= 1 || args[1..].iter().any(|a| a == "--help" || a == "-h");

    if wants_help {
        let program = args.first().map(String::as_str).unwrap_or("rcm");
        println!("Usage: {program} <command> [options]");
        println!();
        println!("This build links the placeholder library, which accepts no");
        println!("commands. Rebuild with --no-default-features and RCM_LIB_DIR");
        println!("pointing at librcm_cli to get the full command set.");
        return 0;
    }

    eprintln!("rcm: unrecognized arguments: {}", args[1..].join(" "));
    1
}

fn decode_args(argc: c_int, argv: *const *const c_char) -> Vec<String> {
    if argv.is_null() || argc <= 0 {
        return Vec::new();
    }
    // Safety: the caller promises argc valid, NUL-terminated strings. Null
    // elements are tolerated as empty tokens rather than trusted away.
    unsafe {
        std::slice::from_raw_parts(argv, argc as usize)
            .iter()
            .map(|&p| {
                if p.is_null() {
                    String::new()
                } else {
                    CStr::from_ptr(p).to_string_lossy().into_owned()
                }
            })
            .collect()
    }
}
