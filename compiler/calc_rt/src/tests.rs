//! Tests for the safe API and the C entry points.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::ffi::{CStr, CString};

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use std::io;
use std::sync::{Arc, Mutex};

use super::ffi::{calc_init_tracing, calc_version, calculate, calculate_with_status, free_result};
use super::tracing_setup::subscriber;
use super::*;

/// Run one expression through the C boundary and release the result.
fn call(expression: &str) -> (String, CalcStatus) {
    let input = CString::new(expression).unwrap();
    let mut status = CalcStatus::Internal;
    let ptr = calculate_with_status(input.as_ptr(), &mut status);
    assert!(!ptr.is_null());
    // SAFETY: `ptr` was just returned by `calculate_with_status`.
    let text = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_owned();
    // SAFETY: released exactly once.
    unsafe { free_result(ptr) };
    (text, status)
}

fn text(expression: &str) -> String {
    call(expression).0
}

// -- Scenarios --

#[test]
fn documented_scenarios() {
    assert_eq!(text("114514 / 50"), "2290.28");
    assert_eq!(text("2 + 3 * 4"), "14");
    assert_eq!(text("(2 + 3) * 4"), "20");
    assert_eq!(text("5 / 0"), "error: division by zero at position 2");
    assert_eq!(text("2 + "), "error: unexpected end of input at position 4");
    assert_eq!(text(""), "error: unexpected end of input at position 0");
    assert_eq!(text("-(114 * (5 + 1)) / 4"), "-171");
}

#[test]
fn blank_input_is_never_zero() {
    for blank in ["", " ", "\t\n", "    "] {
        let (text, status) = call(blank);
        assert!(text.starts_with(ERROR_PREFIX), "{blank:?} gave {text}");
        assert_eq!(status, CalcStatus::ParseError);
    }
}

#[test]
fn status_codes_follow_failure_kind() {
    assert_eq!(call("1 + 1").1, CalcStatus::Ok);
    assert_eq!(call("1 + x").1, CalcStatus::LexError);
    assert_eq!(call("1 + )").1, CalcStatus::ParseError);
    assert_eq!(call("1 / (2 - 2)").1, CalcStatus::EvalError);
}

#[test]
fn diagnostics_name_the_problem() {
    assert_eq!(text("1 + x"), "error: unexpected character 'x' at position 4");
    assert_eq!(text("(1 + 2"), "error: unexpected end of input at position 6");
    assert_eq!(text("1 2"), "error: unexpected token `2` at position 2");
    assert_eq!(text("1 + 2)"), "error: unexpected token `)` at position 5");
}

#[test]
fn safe_api_matches_boundary() {
    assert_eq!(evaluate("7 / 2").unwrap(), 3.5);
    assert!(matches!(evaluate("7 / 0"), Err(CalcError::Eval(_))));
    assert!(matches!(evaluate("7 +"), Err(CalcError::Parse(_))));

    let outcome = render("1 / 3");
    assert!(outcome.is_ok());
    assert_eq!(outcome.text, "0.33");
    assert_eq!(render("1 / 0").status, CalcStatus::EvalError);
}

// -- Boundary edge cases --

#[test]
fn null_input_yields_diagnostic() {
    let mut status = CalcStatus::Ok;
    let ptr = calculate_with_status(std::ptr::null(), &mut status);
    assert!(!ptr.is_null());
    // SAFETY: returned by `calculate_with_status`.
    let text = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_owned();
    unsafe { free_result(ptr) };
    assert_eq!(text, "error: null input pointer");
    assert_eq!(status, CalcStatus::InvalidInput);
}

#[test]
fn invalid_utf8_yields_diagnostic() {
    let input = CString::new(vec![b'1', b'+', 0xff, 0xfe]).unwrap();
    let mut status = CalcStatus::Ok;
    let ptr = calculate_with_status(input.as_ptr(), &mut status);
    // SAFETY: returned by `calculate_with_status`.
    let text = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_owned();
    unsafe { free_result(ptr) };
    assert_eq!(text, "error: input is not valid UTF-8");
    assert_eq!(status, CalcStatus::InvalidInput);
}

#[test]
fn calculate_without_status_pointer() {
    let input = CString::new("6 * 7").unwrap();
    let ptr = calculate(input.as_ptr());
    // SAFETY: returned by `calculate`.
    assert_eq!(unsafe { CStr::from_ptr(ptr) }.to_str().unwrap(), "42");
    unsafe { free_result(ptr) };
}

#[test]
fn free_result_ignores_null() {
    // SAFETY: null is explicitly allowed.
    unsafe { free_result(std::ptr::null_mut()) };
}

#[test]
fn version_is_static() {
    // SAFETY: static NUL-terminated string.
    let version = unsafe { CStr::from_ptr(calc_version()) };
    assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    assert_eq!(calc_version(), calc_version());
}

#[test]
fn tracing_init_rejects_bad_filters() {
    assert_eq!(calc_init_tracing(std::ptr::null()), 1);
    let bad = CString::new("calc_parse=notalevel").unwrap();
    assert_eq!(calc_init_tracing(bad.as_ptr()), 1);
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn log_output_is_plain_text() {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let filter = tracing_subscriber::EnvFilter::try_new("calc_parse=debug").unwrap();
    let logger = subscriber(filter, move || writer.clone());
    let outcome = tracing::subscriber::with_default(logger, || render("-(114 * (5 + 1)) / 4"));
    assert_eq!(outcome.text, "-171");

    let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("parsed expression"), "{logged}");
    assert!(logged.contains("(/ (- (* 114 (+ 5 1))) 4)"), "{logged}");
    assert!(!logged.contains('\x1b'), "{logged:?}");
}

// -- Concurrency --

#[test]
fn concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                for j in 0..100 {
                    let expected = format_number(f64::from(i) * f64::from(j) + 1.0);
                    assert_eq!(text(&format!("{i} * {j} + 1")), expected);
                    assert!(text(&format!("{i} / 0")).starts_with(ERROR_PREFIX));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

// -- Properties --

proptest! {
    /// Whatever the input, the boundary returns a releasable string that is
    /// either a number or a diagnostic, and the status agrees with the text.
    #[test]
    fn boundary_always_returns_text(source in "[^\\x00]{0,32}") {
        let (text, status) = call(&source);
        if status == CalcStatus::Ok {
            prop_assert!(text.parse::<f64>().is_ok(), "not a number: {}", text);
        } else {
            prop_assert!(text.starts_with(ERROR_PREFIX), "missing prefix: {}", text);
        }
    }

    #[test]
    fn arithmetic_inputs_never_fail_to_render(source in "[0-9 +*/()\\-]{0,32}") {
        let (text, status) = call(&source);
        prop_assert!(!text.is_empty());
        prop_assert_ne!(status, CalcStatus::Internal);
    }
}
