//! The descriptor's symbol table.
//!
//! Names are reproduced exactly as consumers of `HConfig.h` know them.
//! The same names are used for `rustc-cfg` symbols, for the generated
//! Rust constants, and for `DEP_HIGHS_CONFIG_*` metadata keys.

use crate::options::BuildOptions;

/// Reduced-feature fast build.
pub const FAST_BUILD: &str = "FAST_BUILD";
/// zlib was available, so compressed model files can be read.
pub const ZLIB_FOUND: &str = "ZLIB_FOUND";
/// cuPDLP runs on the CPU. Mutually exclusive with [`CUPDLP_GPU`].
pub const CUPDLP_CPU: &str = "CUPDLP_CPU";
/// cuPDLP runs on a CUDA device. Mutually exclusive with [`CUPDLP_CPU`].
pub const CUPDLP_GPU: &str = "CUPDLP_GPU";
/// Force the native cuPDLP build.
pub const CUPDLP_FORCE_NATIVE: &str = "CUPDLP_FORCE_NATIVE";
/// Build type string, e.g. `Release`.
pub const CMAKE_BUILD_TYPE: &str = "CMAKE_BUILD_TYPE";
/// Install prefix string.
pub const CMAKE_INSTALL_PREFIX: &str = "CMAKE_INSTALL_PREFIX";
/// `HighsInt` is 64 bits wide.
pub const HIGHSINT64: &str = "HIGHSINT64";
/// No default scheduler is started.
pub const HIGHS_NO_DEFAULT_THREADS: &str = "HIGHS_NO_DEFAULT_THREADS";
/// The target has the `_mm_pause` spin hint.
pub const HIGHS_HAVE_MM_PAUSE: &str = "HIGHS_HAVE_MM_PAUSE";
/// The toolchain has `__builtin_clz`.
pub const HIGHS_HAVE_BUILTIN_CLZ: &str = "HIGHS_HAVE_BUILTIN_CLZ";
/// The toolchain has `_BitScanReverse`.
pub const HIGHS_HAVE_BITSCAN_REVERSE: &str = "HIGHS_HAVE_BITSCAN_REVERSE";
/// Short commit hash of the sources.
pub const HIGHS_GITHASH: &str = "HIGHS_GITHASH";
/// Major version.
pub const HIGHS_VERSION_MAJOR: &str = "HIGHS_VERSION_MAJOR";
/// Minor version.
pub const HIGHS_VERSION_MINOR: &str = "HIGHS_VERSION_MINOR";
/// Patch version.
pub const HIGHS_VERSION_PATCH: &str = "HIGHS_VERSION_PATCH";
/// Absolute path of the source tree.
pub const HIGHS_DIR: &str = "HIGHS_DIR";

/// Every presence flag, in header order.
pub const PRESENCE_FLAGS: &[&str] = &[
    FAST_BUILD,
    ZLIB_FOUND,
    CUPDLP_CPU,
    CUPDLP_GPU,
    CUPDLP_FORCE_NATIVE,
    HIGHSINT64,
    HIGHS_NO_DEFAULT_THREADS,
    HIGHS_HAVE_MM_PAUSE,
    HIGHS_HAVE_BUILTIN_CLZ,
    HIGHS_HAVE_BITSCAN_REVERSE,
];

/// Value a symbol carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolValue<'a> {
    /// Defined with no value, or left undefined
    Flag(bool),
    /// Defined as a string literal
    Str(&'a str),
    /// Defined as an integer literal
    Int(u32),
}

/// A named entry of the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol<'a> {
    /// Exact symbol name
    pub name: &'static str,
    /// Value it carries
    pub value: SymbolValue<'a>,
}

impl<'a> Symbol<'a> {
    fn flag(name: &'static str, defined: bool) -> Self {
        Self {
            name,
            value: SymbolValue::Flag(defined),
        }
    }

    fn string(name: &'static str, value: &'a str) -> Self {
        Self {
            name,
            value: SymbolValue::Str(value),
        }
    }

    fn int(name: &'static str, value: u32) -> Self {
        Self {
            name,
            value: SymbolValue::Int(value),
        }
    }

    /// Whether a presence flag is defined. Valued symbols always are.
    pub fn is_defined(&self) -> bool {
        match self.value {
            SymbolValue::Flag(defined) => defined,
            SymbolValue::Str(_) | SymbolValue::Int(_) => true,
        }
    }
}

impl BuildOptions {
    /// Feature and build-profile symbols, in header order.
    pub fn feature_symbols(&self) -> [Symbol<'_>; 12] {
        let intrinsics = self.intrinsics();
        [
            Symbol::flag(FAST_BUILD, self.fast_build()),
            Symbol::flag(ZLIB_FOUND, self.zlib_found()),
            Symbol::flag(CUPDLP_CPU, self.backend().is_cpu()),
            Symbol::flag(CUPDLP_GPU, self.backend().is_gpu()),
            Symbol::flag(CUPDLP_FORCE_NATIVE, self.force_native()),
            Symbol::string(CMAKE_BUILD_TYPE, self.build_type()),
            Symbol::string(CMAKE_INSTALL_PREFIX, self.install_prefix()),
            Symbol::flag(HIGHSINT64, self.index_width().is_int64()),
            Symbol::flag(HIGHS_NO_DEFAULT_THREADS, self.no_default_threads()),
            Symbol::flag(HIGHS_HAVE_MM_PAUSE, intrinsics.mm_pause),
            Symbol::flag(HIGHS_HAVE_BUILTIN_CLZ, intrinsics.builtin_clz),
            Symbol::flag(HIGHS_HAVE_BITSCAN_REVERSE, intrinsics.bitscan_reverse),
        ]
    }

    /// Version and provenance symbols, in header order.
    pub fn provenance_symbols(&self) -> [Symbol<'_>; 5] {
        let version = self.version();
        [
            Symbol::string(HIGHS_GITHASH, self.githash()),
            Symbol::int(HIGHS_VERSION_MAJOR, version.major),
            Symbol::int(HIGHS_VERSION_MINOR, version.minor),
            Symbol::int(HIGHS_VERSION_PATCH, version.patch),
            Symbol::string(HIGHS_DIR, self.source_dir()),
        ]
    }

    /// All symbols, in header order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol<'_>> + '_ {
        self.feature_symbols()
            .into_iter()
            .chain(self.provenance_symbols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BackendTarget;

    #[test]
    fn test_flag_order_matches_table() {
        let options = BuildOptions::builder()
            .backend(BackendTarget::Cpu)
            .githash("abc")
            .build()
            .unwrap();
        let flags: Vec<&str> = options
            .symbols()
            .filter(|s| matches!(s.value, SymbolValue::Flag(_)))
            .map(|s| s.name)
            .collect();
        assert_eq!(flags, PRESENCE_FLAGS);
    }

    #[test]
    fn test_exactly_one_backend_symbol_defined() {
        for backend in [BackendTarget::Cpu, BackendTarget::Gpu] {
            let options = BuildOptions::builder()
                .backend(backend)
                .githash("abc")
                .build()
                .unwrap();
            let defined = options
                .symbols()
                .filter(|s| s.name == CUPDLP_CPU || s.name == CUPDLP_GPU)
                .filter(Symbol::is_defined)
                .count();
            assert_eq!(defined, 1);
        }
    }

    #[test]
    fn test_every_name_constant_is_documented() {
        let source = include_str!("symbols.rs");
        let lines: Vec<&str> = source.lines().collect();
        let mut names = 0;
        for (i, line) in lines.iter().enumerate() {
            if line.starts_with("pub const ") && line.ends_with("\";") {
                names += 1;
                assert!(i > 0 && lines[i - 1].starts_with("/// "), "undocumented: {line}");
            }
        }
        let options = BuildOptions::builder()
            .backend(BackendTarget::Cpu)
            .githash("abc")
            .build()
            .unwrap();
        assert_eq!(names, options.symbols().count());
    }
}
