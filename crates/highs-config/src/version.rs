//! Version and provenance reporting.
//!
//! These values identify the build for diagnostics. Nothing in the solver
//! should branch on them.

use crate::config::{enabled_features, CONFIG};
use once_cell::sync::Lazy;
use std::fmt;

/// Version triple plus the commit it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VersionInfo {
    /// `HIGHS_VERSION_MAJOR`
    pub major: u32,
    /// `HIGHS_VERSION_MINOR`
    pub minor: u32,
    /// `HIGHS_VERSION_PATCH`
    pub patch: u32,
    /// `HIGHS_GITHASH`
    pub githash: &'static str,
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{} (git hash: {})",
            self.major, self.minor, self.patch, self.githash
        )
    }
}

/// Where and how the library was built.
///
/// Paths are recorded as configured. They are not checked for existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Provenance {
    /// `CMAKE_BUILD_TYPE`
    pub build_type: &'static str,
    /// `CMAKE_INSTALL_PREFIX`
    pub install_prefix: &'static str,
    /// `HIGHS_DIR`
    pub source_dir: &'static str,
}

/// Version of this build.
pub const fn version_info() -> VersionInfo {
    VersionInfo {
        major: CONFIG.version.major,
        minor: CONFIG.version.minor,
        patch: CONFIG.version.patch,
        githash: CONFIG.githash,
    }
}

/// Provenance of this build.
pub const fn provenance() -> Provenance {
    Provenance {
        build_type: CONFIG.build_type,
        install_prefix: CONFIG.install_prefix,
        source_dir: CONFIG.source_dir,
    }
}

static VERSION_STRING: Lazy<String> = Lazy::new(|| format!("HiGHS {}", version_info()));

/// Banner such as `HiGHS 1.10.0 (git hash: fd8665394e)`.
pub fn version_string() -> &'static str {
    &VERSION_STRING
}

/// Log the build description.
///
/// The banner goes out at `info`, the full record at `debug`.
pub fn log_build_info() {
    log::info!("{}", version_string());

    let provenance = provenance();
    log::debug!(
        "cuPDLP backend: {}, index width: {}, build type: {}",
        CONFIG.backend,
        CONFIG.index_width,
        provenance.build_type
    );
    log::debug!(
        "install prefix: {}, source dir: {}",
        provenance.install_prefix,
        provenance.source_dir
    );

    let features: Vec<&str> = enabled_features().map(|f| f.symbol()).collect();
    log::debug!("defined flags: {}", features.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display() {
        let info = VersionInfo {
            major: 1,
            minor: 10,
            patch: 0,
            githash: "fd8665394e",
        };
        assert_eq!(info.to_string(), "1.10.0 (git hash: fd8665394e)");
    }

    #[test]
    fn test_version_string_is_cached() {
        let first = version_string();
        let second = version_string();
        assert!(std::ptr::eq(first, second));
        assert!(first.starts_with("HiGHS "));
        assert!(first.ends_with(&format!("(git hash: {})", CONFIG.githash)));
    }

    #[test]
    fn test_provenance_mirrors_record() {
        let provenance = provenance();
        assert_eq!(provenance.build_type, CONFIG.build_type);
        assert_eq!(provenance.install_prefix, CONFIG.install_prefix);
        assert_eq!(provenance.source_dir, CONFIG.source_dir);
    }
}
