//! Build options captured for the descriptor.
//!
//! [`BuildOptions`] is the owned, validated form of every value that ends
//! up in `HConfig.h` and in the generated Rust constants. It can only be
//! obtained through [`BuildOptionsBuilder::build`] or
//! [`BuildOptions::from_env`], both of which validate, so a value of this
//! type never describes a contradictory build.

use crate::env::{bool_override, require_u32, Env};
use crate::error::{ConfigError, Result};
use crate::probe::probe_intrinsics;
use std::path::Path;

/// Cargo feature that selects the reduced build profile.
pub const FEATURE_FAST_BUILD: &str = "fast-build";
/// Cargo feature that links compression support.
pub const FEATURE_ZLIB: &str = "zlib";
/// Cargo feature that selects the CPU cuPDLP backend.
pub const FEATURE_CUPDLP_CPU: &str = "cupdlp-cpu";
/// Cargo feature that selects the GPU cuPDLP backend.
pub const FEATURE_CUPDLP_GPU: &str = "cupdlp-gpu";
/// Cargo feature that forces native cuPDLP arithmetic.
pub const FEATURE_CUPDLP_FORCE_NATIVE: &str = "cupdlp-force-native";
/// Cargo feature that widens `HighsInt` to 64 bits.
pub const FEATURE_INT64: &str = "int64";
/// Cargo feature that suppresses the default thread pool.
pub const FEATURE_NO_DEFAULT_THREADS: &str = "no-default-threads";

/// Git hash recorded when neither an override nor a repository is found.
pub const UNKNOWN_GITHASH: &str = "unknown";
/// Install prefix recorded when none is configured.
pub const DEFAULT_INSTALL_PREFIX: &str = "/usr/local";
/// Build type recorded when Cargo reports no profile.
pub const DEFAULT_BUILD_TYPE: &str = "Release";

/// Environment variables, besides Cargo's own, that feed the options.
pub const INPUT_VARIABLES: &[&str] = &[
    "HIGHS_BUILD_TYPE",
    "HIGHS_INSTALL_PREFIX",
    "CMAKE_INSTALL_PREFIX",
    "HIGHS_GITHASH",
    "HIGHS_DIR",
    "HIGHS_HAVE_MM_PAUSE",
    "HIGHS_HAVE_BUILTIN_CLZ",
    "HIGHS_HAVE_BITSCAN_REVERSE",
];

pub use highs_config_types::{BackendTarget, CpuIntrinsics, IndexWidth, Version};

/// Resolve the `CUPDLP_CPU` / `CUPDLP_GPU` pair into one backend.
pub fn backend_from_flags(cpu: bool, gpu: bool) -> Result<BackendTarget> {
    match (cpu, gpu) {
        (true, false) => Ok(BackendTarget::Cpu),
        (false, true) => Ok(BackendTarget::Gpu),
        (true, true) => Err(ConfigError::ConflictingBackends),
        (false, false) => Err(ConfigError::MissingBackend),
    }
}

/// Validated build options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuildOptions {
    fast_build: bool,
    zlib_found: bool,
    backend: BackendTarget,
    force_native: bool,
    build_type: String,
    install_prefix: String,
    index_width: IndexWidth,
    no_default_threads: bool,
    intrinsics: CpuIntrinsics,
    version: Version,
    githash: String,
    source_dir: String,
}

impl BuildOptions {
    /// Start building options by hand.
    pub fn builder() -> BuildOptionsBuilder {
        BuildOptionsBuilder::new()
    }

    /// Collect options from the variables Cargo passes to a build script.
    pub fn from_env<E: Env + ?Sized>(env: &E) -> Result<Self> {
        let source_dir = env
            .var("HIGHS_DIR")
            .or_else(|| env.var("CARGO_MANIFEST_DIR"))
            .unwrap_or_default();

        let githash = match env.var("HIGHS_GITHASH") {
            Some(hash) => hash.trim().to_string(),
            None => env
                .git_hash(Path::new(&source_dir))
                .unwrap_or_else(|| UNKNOWN_GITHASH.to_string()),
        };

        let build_type = match env.var("HIGHS_BUILD_TYPE") {
            Some(build_type) => build_type,
            None => build_type_for_profile(&env.var("PROFILE").unwrap_or_default()),
        };

        let install_prefix = env
            .var("HIGHS_INSTALL_PREFIX")
            .or_else(|| env.var("CMAKE_INSTALL_PREFIX"))
            .unwrap_or_else(|| DEFAULT_INSTALL_PREFIX.to_string());

        let version = Version::new(
            require_u32(env, "CARGO_PKG_VERSION_MAJOR")?,
            require_u32(env, "CARGO_PKG_VERSION_MINOR")?,
            require_u32(env, "CARGO_PKG_VERSION_PATCH")?,
        );

        let mut intrinsics = probe_intrinsics(
            &env.var("CARGO_CFG_TARGET_ARCH").unwrap_or_default(),
            &env.var("CARGO_CFG_TARGET_ENV").unwrap_or_default(),
        );
        if let Some(value) = bool_override(env, "HIGHS_HAVE_MM_PAUSE")? {
            intrinsics.mm_pause = value;
        }
        if let Some(value) = bool_override(env, "HIGHS_HAVE_BUILTIN_CLZ")? {
            intrinsics.builtin_clz = value;
        }
        if let Some(value) = bool_override(env, "HIGHS_HAVE_BITSCAN_REVERSE")? {
            intrinsics.bitscan_reverse = value;
        }

        Self::builder()
            .fast_build(env.feature(FEATURE_FAST_BUILD))
            .zlib_found(env.feature(FEATURE_ZLIB))
            .cupdlp_cpu(env.feature(FEATURE_CUPDLP_CPU))
            .cupdlp_gpu(env.feature(FEATURE_CUPDLP_GPU))
            .force_native(env.feature(FEATURE_CUPDLP_FORCE_NATIVE))
            .build_type(build_type)
            .install_prefix(install_prefix)
            .int64(env.feature(FEATURE_INT64))
            .no_default_threads(env.feature(FEATURE_NO_DEFAULT_THREADS))
            .intrinsics(intrinsics)
            .version(version)
            .githash(githash)
            .source_dir(source_dir)
            .build()
    }

    /// Re-check every invariant.
    pub fn validate(&self) -> Result<()> {
        if self.githash.is_empty() {
            return Err(ConfigError::EmptyGitHash);
        }
        if self.build_type.is_empty() {
            return Err(ConfigError::EmptyBuildType);
        }
        for (field, value) in [
            ("CMAKE_BUILD_TYPE", &self.build_type),
            ("CMAKE_INSTALL_PREFIX", &self.install_prefix),
            ("HIGHS_GITHASH", &self.githash),
            ("HIGHS_DIR", &self.source_dir),
        ] {
            check_single_line(field, value)?;
        }
        Ok(())
    }

    /// `FAST_BUILD`
    pub fn fast_build(&self) -> bool {
        self.fast_build
    }

    /// `ZLIB_FOUND`
    pub fn zlib_found(&self) -> bool {
        self.zlib_found
    }

    /// `CUPDLP_CPU` / `CUPDLP_GPU`
    pub fn backend(&self) -> BackendTarget {
        self.backend
    }

    /// `CUPDLP_FORCE_NATIVE`
    pub fn force_native(&self) -> bool {
        self.force_native
    }

    /// `CMAKE_BUILD_TYPE`
    pub fn build_type(&self) -> &str {
        &self.build_type
    }

    /// `CMAKE_INSTALL_PREFIX`
    pub fn install_prefix(&self) -> &str {
        &self.install_prefix
    }

    /// `HIGHSINT64`
    pub fn index_width(&self) -> IndexWidth {
        self.index_width
    }

    /// `HIGHS_NO_DEFAULT_THREADS`
    pub fn no_default_threads(&self) -> bool {
        self.no_default_threads
    }

    /// `HIGHS_HAVE_*`
    pub fn intrinsics(&self) -> CpuIntrinsics {
        self.intrinsics
    }

    /// `HIGHS_VERSION_MAJOR/MINOR/PATCH`
    pub fn version(&self) -> Version {
        self.version
    }

    /// `HIGHS_GITHASH`
    pub fn githash(&self) -> &str {
        &self.githash
    }

    /// `HIGHS_DIR`
    pub fn source_dir(&self) -> &str {
        &self.source_dir
    }
}

fn check_single_line(field: &'static str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(ConfigError::malformed(field, "contains a NUL byte"));
    }
    if value.contains('\n') || value.contains('\r') {
        return Err(ConfigError::malformed(field, "contains a line break"));
    }
    Ok(())
}

/// Map Cargo's `PROFILE` onto a CMake-style build type.
pub fn build_type_for_profile(profile: &str) -> String {
    let mut chars = profile.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => DEFAULT_BUILD_TYPE.to_string(),
    }
}

/// Builder for [`BuildOptions`].
///
/// The backend is held as the raw `CUPDLP_CPU` / `CUPDLP_GPU` pair until
/// [`build`](Self::build), which rejects both-or-neither.
#[derive(Debug, Clone)]
pub struct BuildOptionsBuilder {
    fast_build: bool,
    zlib_found: bool,
    cupdlp_cpu: bool,
    cupdlp_gpu: bool,
    force_native: bool,
    build_type: String,
    install_prefix: String,
    int64: bool,
    no_default_threads: bool,
    intrinsics: CpuIntrinsics,
    version: Version,
    githash: String,
    source_dir: String,
}

impl BuildOptionsBuilder {
    /// Create a builder with every flag undefined and no backend chosen.
    pub fn new() -> Self {
        Self {
            fast_build: false,
            zlib_found: false,
            cupdlp_cpu: false,
            cupdlp_gpu: false,
            force_native: false,
            build_type: DEFAULT_BUILD_TYPE.to_string(),
            install_prefix: DEFAULT_INSTALL_PREFIX.to_string(),
            int64: false,
            no_default_threads: false,
            intrinsics: CpuIntrinsics::default(),
            version: Version::default(),
            githash: String::new(),
            source_dir: String::new(),
        }
    }

    /// Define or undefine `FAST_BUILD`.
    pub fn fast_build(mut self, enabled: bool) -> Self {
        self.fast_build = enabled;
        self
    }

    /// Define or undefine `ZLIB_FOUND`.
    pub fn zlib_found(mut self, enabled: bool) -> Self {
        self.zlib_found = enabled;
        self
    }

    /// Define or undefine `CUPDLP_CPU`.
    pub fn cupdlp_cpu(mut self, enabled: bool) -> Self {
        self.cupdlp_cpu = enabled;
        self
    }

    /// Define or undefine `CUPDLP_GPU`.
    pub fn cupdlp_gpu(mut self, enabled: bool) -> Self {
        self.cupdlp_gpu = enabled;
        self
    }

    /// Select exactly one backend.
    pub fn backend(mut self, backend: BackendTarget) -> Self {
        self.cupdlp_cpu = backend.is_cpu();
        self.cupdlp_gpu = backend.is_gpu();
        self
    }

    /// Define or undefine `CUPDLP_FORCE_NATIVE`.
    pub fn force_native(mut self, enabled: bool) -> Self {
        self.force_native = enabled;
        self
    }

    /// Set `CMAKE_BUILD_TYPE`.
    pub fn build_type<S: Into<String>>(mut self, build_type: S) -> Self {
        self.build_type = build_type.into();
        self
    }

    /// Set `CMAKE_INSTALL_PREFIX`.
    pub fn install_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.install_prefix = prefix.into();
        self
    }

    /// Define or undefine `HIGHSINT64`.
    pub fn int64(mut self, enabled: bool) -> Self {
        self.int64 = enabled;
        self
    }

    /// Set the index width directly.
    pub fn index_width(mut self, width: IndexWidth) -> Self {
        self.int64 = width.is_int64();
        self
    }

    /// Define or undefine `HIGHS_NO_DEFAULT_THREADS`.
    pub fn no_default_threads(mut self, enabled: bool) -> Self {
        self.no_default_threads = enabled;
        self
    }

    /// Set all three `HIGHS_HAVE_*` flags.
    pub fn intrinsics(mut self, intrinsics: CpuIntrinsics) -> Self {
        self.intrinsics = intrinsics;
        self
    }

    /// Set the version triple.
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Set `HIGHS_GITHASH`.
    pub fn githash<S: Into<String>>(mut self, githash: S) -> Self {
        self.githash = githash.into();
        self
    }

    /// Set `HIGHS_DIR`.
    pub fn source_dir<S: Into<String>>(mut self, dir: S) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Validate and build the options.
    pub fn build(self) -> Result<BuildOptions> {
        let options = BuildOptions {
            fast_build: self.fast_build,
            zlib_found: self.zlib_found,
            backend: backend_from_flags(self.cupdlp_cpu, self.cupdlp_gpu)?,
            force_native: self.force_native,
            build_type: self.build_type,
            install_prefix: self.install_prefix,
            index_width: IndexWidth::from_int64(self.int64),
            no_default_threads: self.no_default_threads,
            intrinsics: self.intrinsics,
            version: self.version,
            githash: self.githash,
            source_dir: self.source_dir,
        };
        options.validate()?;
        Ok(options)
    }
}

impl Default for BuildOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
