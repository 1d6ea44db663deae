//! C-ABI entry points.
//!
//! All functions use `#[no_mangle]` and `extern "C"`. Input pointers come
//! from the foreign caller, which guarantees they are either null or point
//! to a NUL-terminated string that stays valid for the duration of the call.
//!
//! # Ownership protocol
//!
//! `calculate` and `calculate_with_status` allocate the returned string with
//! [`CString::into_raw`]; ownership passes to the caller on return and this
//! library never touches the buffer again. `free_result` reclaims it with
//! [`CString::from_raw`], the only matching teardown. One allocation, one
//! release.

#![allow(
    unsafe_code,
    reason = "C-ABI entry points dereference and reclaim raw pointers"
)]

use std::ffi::{c_char, c_int, CStr, CString};
use std::panic;

use tracing::{debug, warn};

use crate::{init_tracing, render, CalcStatus, Outcome, TracingError};

/// Version string returned by [`calc_version`].
static VERSION: &CStr = match CStr::from_bytes_with_nul(
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes(),
) {
    Ok(version) => version,
    Err(_) => c"unknown",
};

/// Evaluate `expression` and return the result as a newly allocated string.
///
/// On success the string is the formatted number (`"2290.28"`); on any
/// failure it is a diagnostic starting with `"error: "`. Never returns null,
/// including for a null or non-UTF-8 `expression`.
///
/// The returned pointer is owned by the caller and must be released exactly
/// once with [`free_result`], never with C `free`.
#[no_mangle]
pub extern "C" fn calculate(expression: *const c_char) -> *mut c_char {
    calculate_with_status(expression, std::ptr::null_mut())
}

/// [`calculate`], additionally writing the outcome category to `*status`
/// when `status` is non-null.
///
/// The returned pointer follows the same ownership rule as [`calculate`].
#[no_mangle]
pub extern "C" fn calculate_with_status(
    expression: *const c_char,
    status: *mut CalcStatus,
) -> *mut c_char {
    let outcome = panic::catch_unwind(|| outcome_for(expression)).unwrap_or_else(|_| {
        warn!("panic while evaluating expression");
        Outcome::failure(CalcStatus::Internal, "internal error")
    });

    if !status.is_null() {
        // SAFETY: caller passes either null or a pointer to writable `CalcStatus`.
        unsafe { status.write(outcome.status) };
    }

    into_owned_c_string(outcome.text)
}

/// Release a string returned by [`calculate`] or [`calculate_with_status`].
///
/// Passing null does nothing.
///
/// # Safety
///
/// `buffer` must be null or a pointer obtained from `calculate` or
/// `calculate_with_status` that has not been released yet. Any other pointer
/// (including one from `calc_version`, or one already passed here) is
/// undefined behavior. After this call the caller must not use `buffer`.
#[no_mangle]
pub unsafe extern "C" fn free_result(buffer: *mut c_char) {
    if buffer.is_null() {
        return;
    }
    // SAFETY: caller guarantees `buffer` came from `CString::into_raw` in
    // `into_owned_c_string` and is released only once.
    drop(unsafe { CString::from_raw(buffer) });
}

/// Library version as a static NUL-terminated string.
///
/// The pointer is borrowed for the life of the process; do NOT pass it to
/// [`free_result`].
#[no_mangle]
pub extern "C" fn calc_version() -> *const c_char {
    VERSION.as_ptr()
}

/// Install stderr logging filtered by `filter` (e.g. `"calc_parse=trace"`).
///
/// Returns 0 on success, 1 if `filter` is null, not UTF-8 or not a valid
/// filter, and 2 if a global subscriber is already installed.
#[no_mangle]
pub extern "C" fn calc_init_tracing(filter: *const c_char) -> c_int {
    if filter.is_null() {
        return 1;
    }
    // SAFETY: caller guarantees a valid NUL-terminated string for this call.
    let Ok(directives) = unsafe { CStr::from_ptr(filter) }.to_str() else {
        return 1;
    };

    match init_tracing(directives) {
        Ok(()) => 0,
        Err(TracingError::Filter(_)) => 1,
        Err(TracingError::AlreadyInstalled(_)) => 2,
    }
}

/// Decode the foreign input and evaluate it.
fn outcome_for(expression: *const c_char) -> Outcome {
    if expression.is_null() {
        return Outcome::failure(CalcStatus::InvalidInput, "null input pointer");
    }

    // SAFETY: non-null, and the caller guarantees a NUL-terminated string
    // that outlives this call.
    let input = unsafe { CStr::from_ptr(expression) };
    match input.to_str() {
        Ok(source) => render(source),
        Err(err) => {
            debug!(valid_up_to = err.valid_up_to(), "rejecting non-UTF-8 input");
            Outcome::failure(CalcStatus::InvalidInput, "input is not valid UTF-8")
        }
    }
}

/// Move `text` into a C allocation owned by the caller.
fn into_owned_c_string(text: String) -> *mut c_char {
    let owned = CString::new(text).unwrap_or_else(|err| {
        // Unreachable for C-string input; strip NULs rather than return null.
        let mut bytes = err.into_vec();
        bytes.retain(|&b| b != 0);
        CString::new(bytes).unwrap_or_default()
    });
    owned.into_raw()
}
