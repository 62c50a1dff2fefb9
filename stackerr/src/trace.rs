//! Stack trace capture and rendering

use std::fmt;

/// A single resolved call frame.
///
/// File and line are optional: symbol resolution can fail on stripped
/// binaries, in which case only the (possibly mangled) function name survives.
#[derive(Debug, Clone)]
pub struct StackFrame {
    function: String,
    file: Option<String>,
    line: Option<u32>,
}

impl StackFrame {
    /// The demangled function name, or `"<unknown>"` when unresolved
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source file path, when debug info was available
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Source line, when debug info was available
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

/// An ordered sequence of call frames captured at error-construction time.
///
/// The topmost frame is the caller of the constructor that captured the
/// trace; the constructor's own frames are skipped during capture.
#[derive(Debug, Clone)]
pub struct StackTrace {
    frames: Vec<StackFrame>,
}

impl StackTrace {
    /// Capture the current call stack.
    ///
    /// Frames up to and including this function are always dropped; `skip`
    /// additional frames are dropped after that, so constructors can hide
    /// their own frame and their internal helper's frame.
    #[inline(never)]
    pub(crate) fn capture(skip: usize) -> Self {
        let raw = backtrace::Backtrace::new();

        let mut frames = Vec::new();
        let mut below_capture = false;
        let mut remaining = skip;
        for frame in raw.frames() {
            for symbol in frame.symbols() {
                let function = symbol
                    .name()
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| String::from("<unknown>"));

                if !below_capture {
                    if function.contains("StackTrace") && function.contains("capture") {
                        below_capture = true;
                    }
                    continue;
                }
                if remaining > 0 {
                    remaining -= 1;
                    continue;
                }

                frames.push(StackFrame {
                    function,
                    file: symbol
                        .filename()
                        .map(|path| path.display().to_string()),
                    line: symbol.lineno(),
                });
            }
        }

        // Symbol resolution failed outright; keep the raw frames rather than
        // returning an empty trace.
        if frames.is_empty() {
            for frame in raw.frames() {
                frames.push(StackFrame {
                    function: format!("{:p}", frame.ip()),
                    file: None,
                    line: None,
                });
            }
        }

        Self { frames }
    }

    /// The captured frames, topmost (closest to the failure) first
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, frame) in self.frames.iter().enumerate() {
            writeln!(f, "{:4}: {}", index, frame.function)?;
            if let Some(file) = &frame.file {
                match frame.line {
                    Some(line) => writeln!(f, "          at {}:{}", file, line)?,
                    None => writeln!(f, "          at {}", file)?,
                }
            }
        }
        Ok(())
    }
}
