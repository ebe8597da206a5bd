//! C entry points for version reporting.
//!
//! Names and signatures follow the HiGHS C API. Returned strings are
//! static and NUL-terminated; callers must not free them.

#![allow(non_snake_case, unsafe_code)]

use crate::symbols;
use crate::HighsInt;
use std::ffi::c_char;

/// Widen a version component to `HighsInt`.
///
/// Fails const evaluation if the component does not fit, so an oversized
/// version is a build error instead of a wrapped value.
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
const fn to_highs_int(value: u32) -> HighsInt {
    assert!(
        value as u64 <= HighsInt::MAX as u64,
        "version component does not fit in HighsInt"
    );
    value as HighsInt
}

const VERSION_MAJOR: HighsInt = to_highs_int(symbols::HIGHS_VERSION_MAJOR);
const VERSION_MINOR: HighsInt = to_highs_int(symbols::HIGHS_VERSION_MINOR);
const VERSION_PATCH: HighsInt = to_highs_int(symbols::HIGHS_VERSION_PATCH);

/// Dotted version, e.g. `1.10.0`.
#[no_mangle]
pub extern "C" fn Highs_version() -> *const c_char {
    symbols::HIGHS_VERSION_CSTR.as_ptr()
}

/// `HIGHS_VERSION_MAJOR`
#[no_mangle]
pub extern "C" fn Highs_versionMajor() -> HighsInt {
    VERSION_MAJOR
}

/// `HIGHS_VERSION_MINOR`
#[no_mangle]
pub extern "C" fn Highs_versionMinor() -> HighsInt {
    VERSION_MINOR
}

/// `HIGHS_VERSION_PATCH`
#[no_mangle]
pub extern "C" fn Highs_versionPatch() -> HighsInt {
    VERSION_PATCH
}

/// `HIGHS_GITHASH`
#[no_mangle]
pub extern "C" fn Highs_githash() -> *const c_char {
    symbols::HIGHS_GITHASH_CSTR.as_ptr()
}
