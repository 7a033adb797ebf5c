use std::ffi::OsString;
use std::process;

fn main() {
    // args_os, not args: tokens must reach the library byte-for-byte even
    // when they are not valid UTF-8.
    let args: Vec<OsString> = std::env::args_os().collect();
    match rcm_cli::run(args) {
        Ok(status) => process::exit(status),
        Err(err) => {
            eprintln!("rcm: {err:#}");
            process::exit(1);
        }
    }
}
