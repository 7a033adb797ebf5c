//! Raw C-ABI bindings to the precompiled RCM library (`librcm_cli`).
//!
//! The library owns all command parsing and business logic; this crate only
//! declares the two entry points the front-end consumes. Linking is
//! configured by `build.rs`: set `RCM_LIB_DIR` to the directory holding the
//! shared library, or enable the `stub` feature (on by default) to satisfy
//! the symbols with the in-crate placeholder instead.

use std::os::raw::{c_char, c_int};

#[cfg(feature = "stub")]
mod stub;

extern "C" {
    /// Run the RCM CLI with argc/argv semantics. Returns 0 on success,
    /// non-zero on error; the meaning of non-zero codes belongs to the
    /// library.
    ///
    /// # Safety
    ///
    /// `argv` must point to `argc` valid, NUL-terminated C strings, all of
    /// which stay alive for the duration of the call. The library does not
    /// retain the vector, so the caller may release the storage as soon as
    /// the call returns.
    pub fn rcm_run(argc: c_int, argv: *const *const c_char) -> c_int;

    /// Return the library's version as a static, NUL-terminated string, or
    /// null if unavailable.
    ///
    /// # Safety
    ///
    /// The returned pointer, when non-null, refers to storage with static
    /// lifetime. It must never be freed or written through.
    pub fn rcm_version() -> *const c_char;
}
