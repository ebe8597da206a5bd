//! The configuration record and its compile-time queries.
//!
//! Everything here is a `const`. The record is assembled from the
//! generated symbols at compile time, so it cannot be observed before it
//! exists and cannot change afterwards.

use crate::symbols;
use std::fmt;

pub use highs_config_types::{BackendTarget, CpuIntrinsics, IndexWidth, Version};

/// Build options the library was compiled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuildConfig {
    /// `FAST_BUILD`
    pub fast_build: bool,
    /// `ZLIB_FOUND`
    pub zlib_found: bool,
    /// `CUPDLP_CPU` / `CUPDLP_GPU`
    pub backend: BackendTarget,
    /// `CUPDLP_FORCE_NATIVE`
    pub force_native: bool,
    /// `CMAKE_BUILD_TYPE`
    pub build_type: &'static str,
    /// `CMAKE_INSTALL_PREFIX`
    pub install_prefix: &'static str,
    /// `HIGHSINT64`
    pub index_width: IndexWidth,
    /// `HIGHS_NO_DEFAULT_THREADS`
    pub no_default_threads: bool,
    /// `HIGHS_HAVE_MM_PAUSE`, `HIGHS_HAVE_BUILTIN_CLZ`, `HIGHS_HAVE_BITSCAN_REVERSE`
    pub intrinsics: CpuIntrinsics,
    /// `HIGHS_VERSION_MAJOR/MINOR/PATCH`
    pub version: Version,
    /// `HIGHS_GITHASH`
    pub githash: &'static str,
    /// `HIGHS_DIR`
    pub source_dir: &'static str,
}

/// The record for this build.
pub const CONFIG: BuildConfig = BuildConfig {
    fast_build: symbols::FAST_BUILD,
    zlib_found: symbols::ZLIB_FOUND,
    backend: if symbols::CUPDLP_GPU {
        BackendTarget::Gpu
    } else {
        BackendTarget::Cpu
    },
    force_native: symbols::CUPDLP_FORCE_NATIVE,
    build_type: symbols::CMAKE_BUILD_TYPE,
    install_prefix: symbols::CMAKE_INSTALL_PREFIX,
    index_width: IndexWidth::from_int64(symbols::HIGHSINT64),
    no_default_threads: symbols::HIGHS_NO_DEFAULT_THREADS,
    intrinsics: CpuIntrinsics {
        mm_pause: symbols::HIGHS_HAVE_MM_PAUSE,
        builtin_clz: symbols::HIGHS_HAVE_BUILTIN_CLZ,
        bitscan_reverse: symbols::HIGHS_HAVE_BITSCAN_REVERSE,
    },
    version: Version::new(
        symbols::HIGHS_VERSION_MAJOR,
        symbols::HIGHS_VERSION_MINOR,
        symbols::HIGHS_VERSION_PATCH,
    ),
    githash: symbols::HIGHS_GITHASH,
    source_dir: symbols::HIGHS_DIR,
};

/// A presence flag of the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Feature {
    /// `FAST_BUILD`
    FastBuild,
    /// `ZLIB_FOUND`
    ZlibFound,
    /// `CUPDLP_CPU`
    CupdlpCpu,
    /// `CUPDLP_GPU`
    CupdlpGpu,
    /// `CUPDLP_FORCE_NATIVE`
    CupdlpForceNative,
    /// `HIGHSINT64`
    HighsInt64,
    /// `HIGHS_NO_DEFAULT_THREADS`
    NoDefaultThreads,
    /// `HIGHS_HAVE_MM_PAUSE`
    HaveMmPause,
    /// `HIGHS_HAVE_BUILTIN_CLZ`
    HaveBuiltinClz,
    /// `HIGHS_HAVE_BITSCAN_REVERSE`
    HaveBitscanReverse,
}

impl Feature {
    /// Every flag, in header order.
    pub const ALL: [Feature; 10] = [
        Feature::FastBuild,
        Feature::ZlibFound,
        Feature::CupdlpCpu,
        Feature::CupdlpGpu,
        Feature::CupdlpForceNative,
        Feature::HighsInt64,
        Feature::NoDefaultThreads,
        Feature::HaveMmPause,
        Feature::HaveBuiltinClz,
        Feature::HaveBitscanReverse,
    ];

    /// The exact symbol name.
    pub const fn symbol(self) -> &'static str {
        match self {
            Feature::FastBuild => "FAST_BUILD",
            Feature::ZlibFound => "ZLIB_FOUND",
            Feature::CupdlpCpu => "CUPDLP_CPU",
            Feature::CupdlpGpu => "CUPDLP_GPU",
            Feature::CupdlpForceNative => "CUPDLP_FORCE_NATIVE",
            Feature::HighsInt64 => "HIGHSINT64",
            Feature::NoDefaultThreads => "HIGHS_NO_DEFAULT_THREADS",
            Feature::HaveMmPause => "HIGHS_HAVE_MM_PAUSE",
            Feature::HaveBuiltinClz => "HIGHS_HAVE_BUILTIN_CLZ",
            Feature::HaveBitscanReverse => "HIGHS_HAVE_BITSCAN_REVERSE",
        }
    }

    /// Look a flag up by its symbol name.
    pub fn from_symbol(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.symbol() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Whether `feature` was defined for this build.
///
/// Usable in `const` context. To keep code out of the binary entirely,
/// gate it with `#[cfg(NAME)]` after forwarding the flags with
/// `highs_config_build::forward()`.
pub const fn is_feature_enabled(feature: Feature) -> bool {
    match feature {
        Feature::FastBuild => symbols::FAST_BUILD,
        Feature::ZlibFound => symbols::ZLIB_FOUND,
        Feature::CupdlpCpu => symbols::CUPDLP_CPU,
        Feature::CupdlpGpu => symbols::CUPDLP_GPU,
        Feature::CupdlpForceNative => symbols::CUPDLP_FORCE_NATIVE,
        Feature::HighsInt64 => symbols::HIGHSINT64,
        Feature::NoDefaultThreads => symbols::HIGHS_NO_DEFAULT_THREADS,
        Feature::HaveMmPause => symbols::HIGHS_HAVE_MM_PAUSE,
        Feature::HaveBuiltinClz => symbols::HIGHS_HAVE_BUILTIN_CLZ,
        Feature::HaveBitscanReverse => symbols::HIGHS_HAVE_BITSCAN_REVERSE,
    }
}

/// Flags defined for this build, in header order.
pub fn enabled_features() -> impl Iterator<Item = Feature> {
    Feature::ALL.into_iter().filter(|&f| is_feature_enabled(f))
}

/// The cuPDLP backend compiled in.
pub const fn backend_target() -> BackendTarget {
    CONFIG.backend
}

/// The width of `HighsInt` for this build.
pub const fn index_width() -> IndexWidth {
    CONFIG.index_width
}
