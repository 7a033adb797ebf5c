use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=RCM_LIB_DIR");

    // The placeholder supplies rcm_run/rcm_version in-crate; emitting link
    // directives as well would resolve the symbols twice.
    if env::var_os("CARGO_FEATURE_STUB").is_some() {
        return;
    }

    if let Some(dir) = env::var_os("RCM_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }
    println!("cargo:rustc-link-lib=dylib=rcm_cli");
}
