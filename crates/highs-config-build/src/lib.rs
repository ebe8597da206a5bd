//! Build-time generator for the HiGHS configuration descriptor.
//!
//! This crate runs inside build scripts. It collects the options a build
//! was configured with, rejects contradictory combinations, and writes the
//! descriptor in two forms: Rust constants for `highs-config` and a
//! byte-compatible `HConfig.h` for C and C++ consumers.
//!
//! # Modules
//!
//! - [`options`]: build options, their builder, and collection from Cargo
//! - [`symbols`]: the exact symbol names and their header order
//! - [`render`]: header and Rust rendering, idempotent file output
//! - [`emit`]: cargo directives, cfg forwarding, index-width checks
//! - [`probe`]: target intrinsic and git probes
//! - [`env`]: variable lookup abstraction
//! - [`error`]: error type
//!
//! # Example
//!
//! ```
//! use highs_config_build::{render_header, BackendTarget, BuildOptions, Version};
//!
//! let options = BuildOptions::builder()
//!     .backend(BackendTarget::Cpu)
//!     .version(Version::new(1, 10, 0))
//!     .githash("fd8665394e")
//!     .build()
//!     .unwrap();
//! assert!(render_header(&options).contains("#define CUPDLP_CPU\n"));
//! ```

pub mod emit;
pub mod env;
pub mod error;
pub mod options;
pub mod probe;
pub mod render;
pub mod symbols;

pub use emit::{emit_directives, emit_git_watch, forward_cfgs, linked_index_width, require_index_width};
pub use env::{Env, ProcessEnv};
pub use error::{ConfigError, Result};
pub use options::{
    backend_from_flags, BackendTarget, BuildOptions, BuildOptionsBuilder, CpuIntrinsics, IndexWidth, Version,
};
pub use probe::probe_intrinsics;
pub use render::{render_header, render_rust, write_descriptor, write_if_changed, GeneratedFiles};

use std::io;
use std::path::PathBuf;

/// Generate the descriptor for the crate whose build script is running.
///
/// Reads the process environment, writes `hconfig.rs` and
/// `include/HConfig.h` under `OUT_DIR`, and prints the cargo directives.
pub fn generate() -> Result<BuildOptions> {
    let env = ProcessEnv;
    let options = BuildOptions::from_env(&env)?;
    let out_dir = PathBuf::from(env.require("OUT_DIR")?);
    let files = write_descriptor(&options, &out_dir)?;

    let mut stdout = io::stdout().lock();
    emit_directives(&options, Some(&files.include_dir), &mut stdout)?;
    emit_git_watch(&env, &options, &mut stdout)?;
    Ok(options)
}

/// Forward the linked descriptor's flags to the crate being built.
///
/// The consumer-side counterpart of [`generate`].
pub fn forward() -> Result<()> {
    forward_cfgs(&ProcessEnv, &mut io::stdout().lock())
}
