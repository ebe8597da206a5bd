//! Helpers that pick an intrinsic when the build found one.
//!
//! Each helper has a portable fallback. The intrinsic path is compiled
//! only when the matching `HIGHS_HAVE_*` flag is defined.

/// Hint that the caller is spinning on a lock or flag.
#[inline]
pub fn spin_pause() {
    #[cfg(HIGHS_HAVE_MM_PAUSE)]
    {
        std::hint::spin_loop();
    }

    #[cfg(not(HIGHS_HAVE_MM_PAUSE))]
    {
        std::thread::yield_now();
    }
}

/// Floor of the base-2 logarithm, `None` for zero.
#[inline]
pub fn log2_floor(n: u64) -> Option<u32> {
    if n == 0 {
        return None;
    }

    #[cfg(any(HIGHS_HAVE_BUILTIN_CLZ, HIGHS_HAVE_BITSCAN_REVERSE))]
    {
        Some(63 - n.leading_zeros())
    }

    #[cfg(not(any(HIGHS_HAVE_BUILTIN_CLZ, HIGHS_HAVE_BITSCAN_REVERSE)))]
    {
        Some(log2_floor_portable(n))
    }
}

/// Shift-and-compare fallback for [`log2_floor`]. `n` must be non-zero.
#[inline]
pub fn log2_floor_portable(mut n: u64) -> u32 {
    let mut log = 0;
    for shift in [32, 16, 8, 4, 2, 1] {
        if n >> shift != 0 {
            n >>= shift;
            log += shift;
        }
    }
    log
}
