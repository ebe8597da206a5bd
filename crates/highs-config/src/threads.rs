//! Default scheduler sizing.

use once_cell::sync::Lazy;

static DEFAULT_THREADS: Lazy<Option<usize>> = Lazy::new(|| {
    if cfg!(HIGHS_NO_DEFAULT_THREADS) {
        None
    } else {
        Some(scheduler_size(num_cpus::get()))
    }
});

/// Thread count the solver starts with when the caller sets none.
///
/// `None` when the build defines `HIGHS_NO_DEFAULT_THREADS`; the caller
/// must then size the scheduler itself.
pub fn default_thread_count() -> Option<usize> {
    *DEFAULT_THREADS
}

/// Half the logical cores, rounded up, never zero.
pub fn scheduler_size(logical_cores: usize) -> usize {
    logical_cores.div_ceil(2).max(1)
}
