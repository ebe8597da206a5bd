//! Build script for highs-config.
//!
//! Resolves the build options once and writes the descriptor into OUT_DIR.
//! A contradictory configuration aborts the build here.

fn main() {
    println!("cargo::rerun-if-changed=build.rs");

    if let Err(err) = highs_config_build::generate() {
        panic!("invalid HiGHS build configuration: {err}");
    }
}
