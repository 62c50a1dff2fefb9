//! Panic recovery into traced errors

use crate::{Error, StackTrace};
use std::panic::{self, UnwindSafe};

/// Run `f`, converting a panic into a traced [`Error`].
///
/// The panic payload becomes the error message when it is a string (the
/// common `panic!` case). The trace is captured at the recovery site.
///
/// ```rust
/// let ok = stackerr::catch_panic(|| 2 + 2).unwrap();
/// assert_eq!(ok, 4);
///
/// let err = stackerr::catch_panic(|| -> i32 { panic!("boom") }).unwrap_err();
/// assert_eq!(err.message(), "panic: boom");
/// assert!(err.has_stack_trace());
/// ```
#[inline(never)]
pub fn catch_panic<T, F>(f: F) -> crate::Result<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => Err(panic_error(payload)),
    }
}

#[inline(never)]
fn panic_error(payload: Box<dyn std::any::Any + Send>) -> Error {
    let message = if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        String::from("non-string panic payload")
    };

    Error::from_parts(
        format!("panic: {}", message),
        None,
        Some(StackTrace::capture(2)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_panic_passes_value_through() {
        let value = catch_panic(|| vec![1, 2, 3]).unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_panic_becomes_traced_error() {
        let err = catch_panic(|| -> () { panic!("stack depth exceeded") }).unwrap_err();
        assert_eq!(err.message(), "panic: stack depth exceeded");
        assert!(err.has_stack_trace());
    }

    #[test]
    fn test_formatted_panic_message() {
        let err = catch_panic(|| -> () { panic!("bad index {}", 9) }).unwrap_err();
        assert_eq!(err.message(), "panic: bad index 9");
    }
}
