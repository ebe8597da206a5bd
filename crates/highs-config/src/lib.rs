//! Compile-time build configuration descriptor for the HiGHS solver.
//!
//! The build script of this crate resolves the optional features the
//! library was compiled with, plus version and provenance metadata, once.
//! This crate exposes the result as immutable constants. There is nothing
//! to initialize and nothing to lock: every query is resolved by the
//! compiler, and the record lives for the whole process.
//!
//! Features are chosen through Cargo:
//!
//! | Cargo feature | Symbol |
//! |---|---|
//! | `fast-build` | `FAST_BUILD` |
//! | `zlib` | `ZLIB_FOUND` |
//! | `cupdlp-cpu` (default) | `CUPDLP_CPU` |
//! | `cupdlp-gpu` | `CUPDLP_GPU` |
//! | `cupdlp-force-native` | `CUPDLP_FORCE_NATIVE` |
//! | `int64` | `HIGHSINT64` |
//! | `no-default-threads` | `HIGHS_NO_DEFAULT_THREADS` |
//!
//! Exactly one of `cupdlp-cpu` and `cupdlp-gpu` must be enabled; anything
//! else fails the build. The `HIGHS_HAVE_*` flags are probed from the
//! target.
//!
//! # Modules
//!
//! - [`symbols`]: the generated constants, named exactly as in `HConfig.h`
//! - [`config`]: the [`BuildConfig`] record and compile-time queries
//! - [`version`]: version and provenance reporting
//! - [`intrinsics`]: helpers gated on the CPU intrinsic flags
//! - [`threads`]: default scheduler sizing
//!
//! # Example
//!
//! ```
//! use highs_config::{backend_target, index_width, version_info, BackendTarget};
//!
//! if backend_target() == BackendTarget::Cpu {
//!     println!("cuPDLP runs on the CPU");
//! }
//! println!("HighsInt is {}", index_width());
//! println!("built from {}", version_info().githash);
//! ```

pub mod config;
pub mod intrinsics;
pub mod threads;
pub mod version;

#[cfg(feature = "capi")]
pub mod ffi;

/// Constants generated from the build options.
pub mod symbols {
    include!(concat!(env!("OUT_DIR"), "/hconfig.rs"));
}

pub use config::{
    backend_target, enabled_features, index_width, is_feature_enabled, BackendTarget,
    BuildConfig, CpuIntrinsics, Feature, IndexWidth, Version, CONFIG,
};
pub use threads::default_thread_count;
pub use version::{log_build_info, provenance, version_info, version_string, Provenance, VersionInfo};

use std::path::Path;

#[cfg(all(CUPDLP_CPU, CUPDLP_GPU))]
compile_error!("CUPDLP_CPU and CUPDLP_GPU are both defined");

#[cfg(not(any(CUPDLP_CPU, CUPDLP_GPU)))]
compile_error!("neither CUPDLP_CPU nor CUPDLP_GPU is defined");

/// Signed index and size type used throughout the solver.
#[cfg(HIGHSINT64)]
pub type HighsInt = i64;
/// Unsigned counterpart of [`HighsInt`].
#[cfg(HIGHSINT64)]
pub type HighsUInt = u64;

/// Signed index and size type used throughout the solver.
#[cfg(not(HIGHSINT64))]
pub type HighsInt = i32;
/// Unsigned counterpart of [`HighsInt`].
#[cfg(not(HIGHSINT64))]
pub type HighsUInt = u32;

/// Largest representable index.
pub const HIGHS_INT_MAX: HighsInt = HighsInt::MAX;

const _: () = assert!(symbols::CUPDLP_CPU != symbols::CUPDLP_GPU);
const _: () = assert!(std::mem::size_of::<HighsInt>() as u32 * 8 == CONFIG.index_width.bits());
const _: () = assert!(std::mem::size_of::<HighsUInt>() == std::mem::size_of::<HighsInt>());

/// Expands to whether a presence flag is defined, as a `const bool`.
///
/// ```
/// const GPU: bool = highs_config::feature_enabled!(CUPDLP_GPU);
/// assert_eq!(GPU, highs_config::backend_target().is_gpu());
/// ```
#[macro_export]
macro_rules! feature_enabled {
    ($name:ident) => {{
        const ENABLED: bool = $crate::symbols::$name;
        ENABLED
    }};
}

/// Directory holding the generated `HConfig.h`.
///
/// Dependent build scripts see the same path as `DEP_HIGHS_CONFIG_INCLUDE`.
pub fn include_dir() -> &'static Path {
    Path::new(concat!(env!("OUT_DIR"), "/include"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highs_int_width() {
        assert_eq!(HighsInt::BITS, index_width().bits());
        assert_eq!(HighsUInt::BITS, index_width().bits());
        assert_eq!(HIGHS_INT_MAX, HighsInt::MAX);
    }

    #[test]
    fn test_cfg_agrees_with_constants() {
        assert_eq!(cfg!(CUPDLP_GPU), symbols::CUPDLP_GPU);
        assert_eq!(cfg!(HIGHSINT64), symbols::HIGHSINT64);
        assert_eq!(cfg!(ZLIB_FOUND), symbols::ZLIB_FOUND);
        assert_eq!(cfg!(HIGHS_HAVE_MM_PAUSE), symbols::HIGHS_HAVE_MM_PAUSE);
    }

    #[test]
    fn test_feature_enabled_macro() {
        assert_eq!(feature_enabled!(CUPDLP_CPU), symbols::CUPDLP_CPU);
        assert_eq!(
            feature_enabled!(HIGHS_NO_DEFAULT_THREADS),
            is_feature_enabled(Feature::NoDefaultThreads)
        );
    }

    #[test]
    fn test_generated_header_is_present() {
        let header = std::fs::read_to_string(include_dir().join("HConfig.h")).unwrap();
        assert!(header.starts_with("#ifndef HCONFIG_H_\n"));
        let githash = format!("#define HIGHS_GITHASH \"{}\"\n", CONFIG.githash);
        assert!(header.contains(&githash));
    }
}
