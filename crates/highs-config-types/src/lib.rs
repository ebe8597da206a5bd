//! Value types shared by the HiGHS configuration descriptor and its
//! build-time generator.
//!
//! This crate has no dependencies besides an optional `serde`, so the
//! descriptor stays a leaf for the code that links it.

use std::fmt;

/// Execution backend of the cuPDLP sub-solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackendTarget {
    /// Portable CPU implementation
    Cpu,
    /// CUDA implementation
    Gpu,
}

impl BackendTarget {
    /// Whether `CUPDLP_CPU` is defined.
    pub const fn is_cpu(self) -> bool {
        matches!(self, Self::Cpu)
    }

    /// Whether `CUPDLP_GPU` is defined.
    pub const fn is_gpu(self) -> bool {
        matches!(self, Self::Gpu)
    }
}

impl fmt::Display for BackendTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "CPU"),
            Self::Gpu => write!(f, "GPU"),
        }
    }
}

/// Width of `HighsInt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexWidth {
    /// `HIGHSINT64` undefined
    Bits32,
    /// `HIGHSINT64` defined
    Bits64,
}

impl IndexWidth {
    /// Map the presence of `HIGHSINT64` to a width.
    pub const fn from_int64(int64: bool) -> Self {
        if int64 {
            Self::Bits64
        } else {
            Self::Bits32
        }
    }

    /// Whether `HIGHSINT64` is defined.
    pub const fn is_int64(self) -> bool {
        matches!(self, Self::Bits64)
    }

    /// Number of bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }
}

impl fmt::Display for IndexWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// CPU intrinsics the target toolchain offers.
///
/// The three flags are probed independently. `builtin_clz` and
/// `bitscan_reverse` usually come from different toolchains, but nothing
/// here requires them to be exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuIntrinsics {
    /// `_mm_pause` for spin waits
    pub mm_pause: bool,
    /// `__builtin_clz` family
    pub builtin_clz: bool,
    /// `_BitScanReverse` family
    pub bitscan_reverse: bool,
}

/// Semantic version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch version
    pub patch: u32,
}

impl Version {
    /// Create a version triple.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_flags() {
        assert!(BackendTarget::Cpu.is_cpu());
        assert!(!BackendTarget::Cpu.is_gpu());
        assert!(BackendTarget::Gpu.is_gpu());
    }

    #[test]
    fn test_index_width_bits() {
        assert_eq!(IndexWidth::from_int64(false), IndexWidth::Bits32);
        assert_eq!(IndexWidth::from_int64(true).bits(), 64);
        assert!(IndexWidth::Bits64.is_int64());
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::new(1, 10, 0).to_string(), "1.10.0");
        assert_eq!(BackendTarget::Gpu.to_string(), "GPU");
        assert_eq!(IndexWidth::Bits64.to_string(), "64-bit");
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 7));
    }
}
