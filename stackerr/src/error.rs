//! The traced error type

use crate::StackTrace;
use std::fmt;

/// An error value, optionally annotated with the stack trace captured at the
/// point of failure.
///
/// At most one trace exists per causal chain: constructors only capture when
/// [`contains_stack_trace`](crate::contains_stack_trace) says the chain does
/// not hold one already, so wrapping never duplicates or discards the
/// original capture site.
///
/// # Example
///
/// ```rust
/// let err = stackerr::errorf!("page {} not loaded", 7);
/// assert_eq!(err.message(), "page 7 not loaded");
/// assert!(err.stack_trace().is_some());
/// ```
pub struct Error {
    message: String,
    // Boxed directly, not type-erased through anyhow: the chain walk in
    // `stack_trace_of` must be able to downcast this node back to `Error`.
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    trace: Option<StackTrace>,
}

impl Error {
    pub(crate) fn from_parts(
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
        trace: Option<StackTrace>,
    ) -> Self {
        Self {
            message,
            source,
            trace,
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the trace captured when this value was constructed.
    ///
    /// `None` when this value wraps an error that was already traced; use
    /// [`stack_trace_of`](crate::stack_trace_of) to find the trace anywhere
    /// in the chain.
    pub fn stack_trace(&self) -> Option<&StackTrace> {
        self.trace.as_ref()
    }

    /// Whether this value itself carries a trace
    pub fn has_stack_trace(&self) -> bool {
        self.trace.is_some()
    }

    /// Get the source error (if any)
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

// =============================================================================
// Display - message only, single line for logs
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

// =============================================================================
// Debug - verbose, multi-line format with chain and trace
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Caused by: {}", source)?;
        }

        if let Some(trace) = &self.trace {
            writeln!(f)?;
            writeln!(f, "    Stack trace:")?;
            for line in trace.to_string().lines() {
                writeln!(f, "    {}", line)?;
            }
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
