//! The closed set of values accepted by the error constructors
//!
//! `new` and `errorf` take heterogeneous payloads the way a variadic API
//! would. `ErrorValue` is the ordered, closed variant that carries them:
//! scalars and strings are rendered into messages, error members join the
//! causal chain.

use std::fmt;

/// A payload accepted by [`new`](crate::new) and interpolated by
/// [`errorf`](fn@crate::errorf).
#[derive(Debug)]
pub enum ErrorValue {
    /// The "no error" payload; `new` maps it to `None`
    None,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    /// An error member; becomes the causal source of the constructed error
    Error(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ErrorValue {
    /// Wrap any error type as a payload.
    ///
    /// The blanket `From<E: Error>` impl would collide with the scalar
    /// conversions, so error types not covered by a dedicated `From` go
    /// through here.
    pub fn error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ErrorValue::Error(Box::new(err))
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorValue::None => write!(f, "<none>"),
            ErrorValue::Bool(value) => write!(f, "{}", value),
            ErrorValue::Int(value) => write!(f, "{}", value),
            ErrorValue::Uint(value) => write!(f, "{}", value),
            ErrorValue::Float(value) => write!(f, "{}", value),
            ErrorValue::Str(value) => write!(f, "{}", value),
            ErrorValue::Error(err) => write!(f, "{}", err),
        }
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ErrorValue {
            fn from(value: $ty) -> Self {
                ErrorValue::Int(value as i64)
            }
        })*
    };
}

macro_rules! from_uint {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ErrorValue {
            fn from(value: $ty) -> Self {
                ErrorValue::Uint(value as u64)
            }
        })*
    };
}

from_int!(i8, i16, i32, i64, isize);
from_uint!(u8, u16, u32, u64, usize);

impl From<bool> for ErrorValue {
    fn from(value: bool) -> Self {
        ErrorValue::Bool(value)
    }
}

impl From<f32> for ErrorValue {
    fn from(value: f32) -> Self {
        ErrorValue::Float(value as f64)
    }
}

impl From<f64> for ErrorValue {
    fn from(value: f64) -> Self {
        ErrorValue::Float(value)
    }
}

impl From<&str> for ErrorValue {
    fn from(value: &str) -> Self {
        ErrorValue::Str(value.to_string())
    }
}

impl From<String> for ErrorValue {
    fn from(value: String) -> Self {
        ErrorValue::Str(value)
    }
}

impl From<crate::Error> for ErrorValue {
    fn from(err: crate::Error) -> Self {
        ErrorValue::Error(Box::new(err))
    }
}

impl From<std::io::Error> for ErrorValue {
    fn from(err: std::io::Error) -> Self {
        ErrorValue::Error(Box::new(err))
    }
}

impl From<anyhow::Error> for ErrorValue {
    fn from(err: anyhow::Error) -> Self {
        ErrorValue::Error(err.into())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync + 'static>> for ErrorValue {
    fn from(err: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        ErrorValue::Error(err)
    }
}

/// `None` is the "no error" payload, `Some(v)` converts like `v` itself.
impl<T: Into<ErrorValue>> From<Option<T>> for ErrorValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => ErrorValue::None,
        }
    }
}

/// Interpolate `values` into `format` using `{}` placeholders.
///
/// Total by construction: `{{` and `}}` escape braces, placeholders beyond
/// the value list render literally, and surplus values are ignored.
pub(crate) fn interpolate(format: &str, values: &[ErrorValue]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut values = values.iter();
    let mut chars = format.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' if chars.peek() == Some(&'}') => {
                chars.next();
                match values.next() {
                    Some(value) => out.push_str(&value.to_string()),
                    None => out.push_str("{}"),
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert!(matches!(ErrorValue::from(5), ErrorValue::Int(5)));
        assert!(matches!(ErrorValue::from(5usize), ErrorValue::Uint(5)));
        assert!(matches!(ErrorValue::from(true), ErrorValue::Bool(true)));
        assert!(matches!(ErrorValue::from("x"), ErrorValue::Str(_)));
        assert!(matches!(ErrorValue::from(1.5), ErrorValue::Float(_)));
    }

    #[test]
    fn test_option_conversion() {
        assert!(matches!(ErrorValue::from(None::<i32>), ErrorValue::None));
        assert!(matches!(ErrorValue::from(Some(7)), ErrorValue::Int(7)));
    }

    #[test]
    fn test_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let value = ErrorValue::from(io);
        assert!(matches!(value, ErrorValue::Error(_)));
        assert_eq!(value.to_string(), "gone");
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorValue::from(42).to_string(), "42");
        assert_eq!(ErrorValue::from("text").to_string(), "text");
        assert_eq!(ErrorValue::None.to_string(), "<none>");
    }

    #[test]
    fn test_interpolate_basic() {
        let values = [ErrorValue::from("disk"), ErrorValue::from(3)];
        assert_eq!(
            interpolate("read {} failed after {} tries", &values),
            "read disk failed after 3 tries"
        );
    }

    #[test]
    fn test_interpolate_escapes() {
        assert_eq!(interpolate("literal {{}} here", &[]), "literal {} here");
    }

    #[test]
    fn test_interpolate_is_total() {
        // missing values render the placeholder literally
        assert_eq!(interpolate("a {} b {}", &[ErrorValue::from(1)]), "a 1 b {}");
        // surplus values are ignored
        assert_eq!(
            interpolate("a {}", &[ErrorValue::from(1), ErrorValue::from(2)]),
            "a 1"
        );
    }
}
