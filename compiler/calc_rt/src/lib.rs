//! Calculator runtime (`libcalc_rt`)
//!
//! Evaluates arithmetic expressions for foreign callers through a C ABI.
//! The engine crates (`calc_lexer`, `calc_parse`, `calc_eval`) are safe Rust;
//! all raw-pointer handling lives in [`ffi`].
//!
//! # Build Modes
//!
//! - **rlib**: For Rust consumers and tests
//! - **staticlib** / **cdylib**: For C hosts, declared in `include/calc.h`
//!
//! # Result Convention
//!
//! Every call produces text. A successful evaluation yields the number
//! formatted by [`calc_eval::format_number`] (at most two fractional digits,
//! e.g. `2290.28`, `14`). Any failure yields a diagnostic starting with
//! [`ERROR_PREFIX`], e.g. `error: division by zero at position 2`. Callers
//! that prefer not to inspect the text use `calculate_with_status`, which
//! reports the same outcome as a [`CalcStatus`] code.
//!
//! # Ownership
//!
//! Strings returned by `calculate` and `calculate_with_status` are allocated
//! by this library and owned by the caller, who must hand each one back to
//! `free_result` exactly once. Releasing them with C `free`, releasing twice,
//! or never releasing are caller bugs this library cannot detect.

#![warn(clippy::allow_attributes_without_reason)]

pub mod ffi;
mod tracing_setup;

use calc_eval::{format_number, EvalError};
use calc_parse::ParseError;
use tracing::debug;

pub use tracing_setup::{init_tracing, TracingError};

/// Prefix of every diagnostic returned across the boundary.
pub const ERROR_PREFIX: &str = "error: ";

/// Longest accepted expression, in bytes. Spans are `u32` offsets.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Outcome category, mirrored as `CalcStatus` in `calc.h`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CalcStatus {
    Ok = 0,
    LexError = 1,
    ParseError = 2,
    EvalError = 3,
    /// Null pointer, invalid UTF-8, or oversized input.
    InvalidInput = 4,
    /// A panic was caught at the boundary.
    Internal = 5,
}

/// Any failure of the lex → parse → evaluate pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    pub fn status(&self) -> CalcStatus {
        match self {
            Self::Parse(ParseError::Lex(_)) => CalcStatus::LexError,
            Self::Parse(_) => CalcStatus::ParseError,
            Self::Eval(_) => CalcStatus::EvalError,
        }
    }
}

/// Text and status for one call, before it is copied into a C string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub status: CalcStatus,
    pub text: String,
}

impl Outcome {
    fn success(value: f64) -> Self {
        Outcome {
            status: CalcStatus::Ok,
            text: format_number(value),
        }
    }

    pub(crate) fn failure(status: CalcStatus, message: impl std::fmt::Display) -> Self {
        Outcome {
            status,
            text: format!("{ERROR_PREFIX}{message}"),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == CalcStatus::Ok
    }
}

/// Parse and evaluate `source`.
pub fn evaluate(source: &str) -> Result<f64, CalcError> {
    let parsed = calc_parse::parse(source)?;
    Ok(calc_eval::evaluate(&parsed)?)
}

/// Evaluate `source` and render the result or diagnostic as text.
pub fn render(source: &str) -> Outcome {
    if source.len() > MAX_SOURCE_LEN {
        return Outcome::failure(CalcStatus::InvalidInput, "input is too long");
    }

    let outcome = match evaluate(source) {
        Ok(value) => Outcome::success(value),
        Err(err) => Outcome::failure(err.status(), &err),
    };
    debug!(source, status = ?outcome.status, text = %outcome.text, "rendered");
    outcome
}

#[cfg(test)]
mod tests;
