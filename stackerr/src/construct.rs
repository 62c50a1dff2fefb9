//! Error constructors and the trace-presence predicate
//!
//! The one decision made here: capture a fresh stack trace, or preserve the
//! one an inner error already carries. A chain never ends up with more than
//! one trace, and the trace always marks the earliest construction site that
//! did not find one.

use crate::value::{interpolate, ErrorValue};
use crate::{Error, StackTrace};

/// Frames hidden from a captured trace: the public constructor and its
/// internal helper, so the trace starts at the constructor's caller.
const CAPTURE_SKIP: usize = 2;

/// Create a new traced error from any payload.
///
/// - [`ErrorValue::None`] maps to `None`: no error in, no error out.
/// - An error payload whose chain already carries a trace is wrapped
///   without capturing again; the original capture site wins.
/// - Anything else becomes an error with a fresh trace rooted at the
///   caller of `new`.
///
/// # Example
///
/// ```rust
/// let err = stackerr::new("connection reset").unwrap();
/// assert_eq!(err.message(), "connection reset");
/// assert!(err.has_stack_trace());
///
/// assert!(stackerr::new(None::<String>).is_none());
/// ```
#[inline(never)]
pub fn new(value: impl Into<ErrorValue>) -> Option<Error> {
    new_with_skip(CAPTURE_SKIP, value.into())
}

/// Create a formatted traced error.
///
/// `values` are interpolated into `format` at each `{}` placeholder. The
/// first error-typed value becomes the causal source. If any error-typed
/// value already carries a trace, no new trace is captured; otherwise a
/// fresh one is rooted at the caller.
///
/// The [`errorf!`](macro@crate::errorf) macro builds the value list from
/// heterogeneous arguments.
#[inline(never)]
pub fn errorf(format: &str, values: Vec<ErrorValue>) -> Error {
    errorf_with_skip(CAPTURE_SKIP, format, values)
}

#[inline(never)]
fn new_with_skip(skip: usize, value: ErrorValue) -> Option<Error> {
    match value {
        ErrorValue::None => None,
        ErrorValue::Error(err) => {
            let message = err.to_string();
            let trace = if contains_stack_trace(err.as_ref()) {
                None
            } else {
                Some(StackTrace::capture(skip))
            };
            Some(Error::from_parts(message, Some(err), trace))
        }
        other => Some(Error::from_parts(
            other.to_string(),
            None,
            Some(StackTrace::capture(skip)),
        )),
    }
}

#[inline(never)]
fn errorf_with_skip(skip: usize, format: &str, values: Vec<ErrorValue>) -> Error {
    let message = interpolate(format, &values);

    let already_traced = values.iter().any(|value| match value {
        ErrorValue::Error(err) => contains_stack_trace(err.as_ref()),
        _ => false,
    });

    // Rust's error model has a single source edge; the first error value
    // anchors the chain, the rest are present in the message only.
    let source = values.into_iter().find_map(|value| match value {
        ErrorValue::Error(err) => Some(err),
        _ => None,
    });

    let trace = if already_traced {
        None
    } else {
        Some(StackTrace::capture(skip))
    };

    Error::from_parts(message, source, trace)
}

/// Walk the causal chain of `err` and report whether any node already
/// carries a captured stack trace.
///
/// Pure and total: a chain without any [`Error`] node, or without any traced
/// node, yields `false`.
pub fn contains_stack_trace(err: &(dyn std::error::Error + 'static)) -> bool {
    stack_trace_of(err).is_some()
}

/// Find the trace anchoring the causal chain of `err`, if any.
///
/// Per the single-trace invariant this is the only trace in the chain, and
/// it marks the earliest construction site that did not find one already.
pub fn stack_trace_of<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a StackTrace> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(traced) = err.downcast_ref::<Error>() {
            if let Some(trace) = traced.stack_trace() {
                return Some(trace);
            }
        }
        current = err.source();
    }
    None
}

/// Build a formatted traced error from heterogeneous arguments.
///
/// Drop-in stand-in for a variadic [`errorf`](fn@crate::errorf) call: each
/// argument is converted through [`ErrorValue::from`](crate::ErrorValue).
///
/// ```rust
/// let inner = stackerr::new("timeout").unwrap();
/// let err = stackerr::errorf!("inference failed: {}", inner);
/// assert_eq!(err.message(), "inference failed: timeout");
/// ```
#[macro_export]
macro_rules! errorf {
    ($format:expr $(, $value:expr)* $(,)?) => {
        $crate::errorf($format, vec![$($crate::ErrorValue::from($value)),*])
    };
}
