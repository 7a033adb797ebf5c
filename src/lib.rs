//! Rust front-end for the RCM command-line tool.
//!
//! All commands, flags, and version information live in the precompiled
//! `librcm_cli`, reached through the two C entry points declared in
//! `rcm-sys`. This crate only adapts an OS process start into a single call
//! against that library and surfaces its status as the exit code.
//!
//! Default builds carry a placeholder library (the `stub` feature) so the
//! front-end compiles and runs standalone; build with
//! `--no-default-features` and `RCM_LIB_DIR` set to link the real thing.

pub mod cli;
pub mod library;

pub use cli::run;
