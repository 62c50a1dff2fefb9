//! # stackerr
//!
//! Stack-trace-aware error construction: capture a trace at the point of
//! failure, and never capture it twice.
//!
//! ## Design Philosophy
//!
//! - **Capture once**: a trace is attached at the earliest construction site
//!   where the causal chain does not hold one already
//! - **Preserve on rewrap**: wrapping a traced error keeps the original
//!   capture site instead of replacing it with a less useful one
//! - **Total construction**: every input produces a defined output; no path
//!   through the constructors panics
//!
//! ## Usage
//!
//! ```rust
//! use stackerr::errorf;
//!
//! fn read_page(id: u32) -> stackerr::Result<String> {
//!     let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
//!     // fresh trace, rooted here
//!     Err(errorf!("page {} not loaded: {}", id, inner))
//! }
//!
//! fn run() -> stackerr::Result<String> {
//!     // rewrap: the trace from read_page survives unchanged
//!     read_page(7).map_err(|e| errorf!("run failed: {}", e))
//! }
//!
//! let err = run().unwrap_err();
//! assert_eq!(err.message(), "run failed: page 7 not loaded: gone");
//! assert!(stackerr::contains_stack_trace(&err));
//! ```
//!
//! ## Principles
//!
//! - At most one stack trace per causal chain
//! - `new` maps "no error" in to "no error" out
//! - Constructors are pure and reentrant; safe from any number of threads

mod construct;
mod error;
mod panic;
mod trace;
mod value;

pub use construct::{contains_stack_trace, errorf, new, stack_trace_of};
pub use error::Error;
pub use panic::catch_panic;
pub use trace::{StackFrame, StackTrace};
pub use value::ErrorValue;

/// Result type alias using stackerr Error
pub type Result<T> = std::result::Result<T, Error>;
