//! Coarse error categories

use std::fmt;

/// The broad group an [`ErrorKind`](crate::ErrorKind) falls into.
///
/// This helps callers decide how to handle a failure without matching every kind:
/// - `Format`: the file on disk is malformed or corrupted
/// - `ApiContract`: the caller passed something the API does not accept
/// - `Io`: the operating system refused an I/O request
/// - `ResourceLifecycle`: an object was used outside its open/attached lifetime
/// - `Internal`: the library itself is in an inconsistent state
///
/// More categories may be added, so matches outside this crate need a wildcard
/// arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Not an error. Only `Success` lives here.
    #[default]
    None,

    /// Malformed headers, packets, XML or checksums.
    Format,

    /// Bad arguments, out of bounds indices, duplicate assignment, type mismatches.
    ApiContract,

    /// open/close/read/write/seek failures.
    Io,

    /// File, reader or writer not open; too many readers or writers; already has a parent.
    ResourceLifecycle,

    /// Unimplemented functionality, inconsistent internal state, invariance violations.
    ///
    /// These point at a library bug rather than bad input.
    Internal,
}

impl ErrorCategory {
    /// Check if callers can generally recover from this category
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, ErrorCategory::Internal)
    }

    /// Get category as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::None => "none",
            ErrorCategory::Format => "format",
            ErrorCategory::ApiContract => "api-contract",
            ErrorCategory::Io => "io",
            ErrorCategory::ResourceLifecycle => "resource-lifecycle",
            ErrorCategory::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_recoverable() {
        assert!(ErrorCategory::Format.is_recoverable());
        assert!(ErrorCategory::ApiContract.is_recoverable());
        assert!(ErrorCategory::Io.is_recoverable());
        assert!(ErrorCategory::ResourceLifecycle.is_recoverable());
        assert!(!ErrorCategory::Internal.is_recoverable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::ApiContract.to_string(), "api-contract");
        assert_eq!(ErrorCategory::default(), ErrorCategory::None);
    }

    #[test]
    fn test_internal_kinds() {
        let internal: Vec<ErrorKind> = ErrorKind::iter()
            .filter(|k| k.category() == ErrorCategory::Internal)
            .collect();
        let expected = [
            ErrorKind::Internal,
            ErrorKind::NotImplemented,
            ErrorKind::InvarianceViolation,
        ];
        assert_eq!(internal, expected);
    }

    #[test]
    fn test_io_kinds() {
        let io: Vec<i32> = ErrorKind::iter()
            .filter(|k| k.category() == ErrorCategory::Io)
            .map(ErrorKind::code)
            .collect();
        assert_eq!(io, vec![17, 18, 19, 20, 21, 30]);
    }
}
