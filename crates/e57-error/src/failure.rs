//! The Failure type raised by every E57 operation.

use crate::ErrorKind;
use std::borrow::Cow;
use std::fmt;

/// Unified failure type for all E57 operations.
///
/// A `Failure` is built once where the fault is detected and then only read.
/// The consuming `with_origin*` builders are part of construction; there are
/// no setters.
#[derive(Clone, PartialEq, Eq)]
pub struct Failure {
    kind: ErrorKind,
    context: String,
    origin_file: Option<Cow<'static, str>>,
    origin_function: Option<Cow<'static, str>>,
    origin_line: u32,
}

impl Failure {
    /// Create a new failure with the given kind and context.
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        let context = context.into();
        if kind.is_success() {
            tracing::warn!(context = %context, "failure built from the success kind");
        }
        tracing::trace!(
            code = kind.code(),
            kind = kind.as_str(),
            context = %context,
            "failure constructed"
        );

        Self {
            kind,
            context,
            origin_file: None,
            origin_function: None,
            origin_line: 0,
        }
    }

    /// Create a failure together with the source location that detected it.
    ///
    /// Prefer [`e57_failure!`](crate::e57_failure), which fills the location in.
    pub fn at(
        kind: ErrorKind,
        context: impl Into<String>,
        file: &'static str,
        line: u32,
        function: Option<&'static str>,
    ) -> Self {
        let failure = Self::new(kind, context).with_origin(file, line);
        match function {
            Some(function) => failure.with_origin_function(function),
            None => failure,
        }
    }

    /// Attach the source file and line that detected this failure.
    ///
    /// The file name may be a literal or a name only known at runtime, such as
    /// one read from a script or a generated location table.
    pub fn with_origin(mut self, file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        self.origin_file = Some(file.into());
        self.origin_line = line;
        self
    }

    /// Attach the name of the function that detected this failure.
    pub fn with_origin_function(mut self, function: impl Into<Cow<'static, str>>) -> Self {
        self.origin_function = Some(function.into());
        self
    }

    /// Get the failure kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the integral code of the failure kind.
    pub fn code(&self) -> i32 {
        self.kind.code()
    }

    /// The canonical description of the kind. Never includes the context.
    pub fn description(&self) -> &'static str {
        crate::describe(self.kind)
    }

    /// Get the free-form context
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Source file that detected the failure, if recorded.
    pub fn origin_file(&self) -> Option<&str> {
        self.origin_file.as_deref()
    }

    /// Line that detected the failure, 0 when unknown.
    pub fn origin_line(&self) -> u32 {
        self.origin_line
    }

    /// Function that detected the failure, if recorded.
    pub fn origin_function(&self) -> Option<&str> {
        self.origin_function.as_deref()
    }

    /// Fixed marker shared by every failure.
    pub fn what(&self) -> &'static str {
        "E57 exception"
    }

    /// Check if a caller can reasonably recover from this failure
    pub fn is_recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (C{})", self.description(), self.code())?;

        if !self.context.is_empty() {
            write!(f, " => {}", self.context)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} (C{}): {}",
            self.kind,
            self.code(),
            self.description()
        )?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context: {}", self.context)?;
        }

        if let Some(file) = self.origin_file() {
            writeln!(f)?;
            writeln!(f, "    Origin: {}:{}", file, self.origin_line)?;
            if let Some(function) = self.origin_function() {
                writeln!(f, "        in {}", function)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for Failure {}

impl From<Failure> for ErrorKind {
    fn from(failure: Failure) -> Self {
        failure.kind
    }
}

impl Failure {
    /// Create an Internal failure.
    pub fn internal(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, context)
    }

    /// Create a BadApiArgument failure
    pub fn bad_api_argument(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadApiArgument, context)
    }

    /// Create a NotImplemented failure
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        let context = format!("'{}' is not implemented", feature.into());
        Self::new(ErrorKind::NotImplemented, context)
    }

    /// Create an InvarianceViolation failure
    pub fn invariance_violation(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvarianceViolation, context)
    }

    /// Create a ChildIndexOutOfBounds failure
    pub fn child_index_out_of_bounds(index: i64, child_count: i64) -> Self {
        Self::new(
            ErrorKind::ChildIndexOutOfBounds,
            format!("childIndex={} childCount={}", index, child_count),
        )
    }

    /// Create a BadChecksum failure
    pub fn bad_checksum(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadChecksum, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failure_creation() {
        let failure = Failure::new(ErrorKind::BadChecksum, "block 12 checksum mismatch");
        assert_eq!(failure.kind(), ErrorKind::BadChecksum);
        assert_eq!(failure.code(), 16);
        assert_eq!(failure.context(), "block 12 checksum mismatch");
        assert_eq!(
            failure.description(),
            "checksum mismatch, file is corrupted"
        );
        assert_eq!(failure.origin_file(), None);
        assert_eq!(failure.origin_function(), None);
        assert_eq!(failure.origin_line(), 0);
    }

    #[test]
    fn test_empty_context() {
        let failure = Failure::new(ErrorKind::ReadFailed, "");
        assert_eq!(failure.context(), "");
        assert_eq!(failure.to_string(), "read() failed (C19)");
    }

    #[test]
    fn test_with_origin() {
        let failure = Failure::at(
            ErrorKind::SeekFailed,
            "offset=42",
            "src/file.rs",
            88,
            Some("seek"),
        );
        assert_eq!(failure.origin_file(), Some("src/file.rs"));
        assert_eq!(failure.origin_line(), 88);
        assert_eq!(failure.origin_function(), Some("seek"));
        assert_eq!(failure.what(), "E57 exception");
    }

    #[test]
    fn test_origin_known_only_at_runtime() {
        let script = String::from("scripts/convert.lua");
        let function = format!("{}::{}", "converter", "flush");
        let failure = Failure::new(ErrorKind::WriteFailed, "fileName=out.e57")
            .with_origin(script, 17)
            .with_origin_function(function);

        assert_eq!(failure.origin_file(), Some("scripts/convert.lua"));
        assert_eq!(failure.origin_line(), 17);
        assert_eq!(failure.origin_function(), Some("converter::flush"));

        let debug = format!("{:?}", failure);
        assert!(debug.contains("Origin: scripts/convert.lua:17"));
        assert!(debug.contains("in converter::flush"));
    }

    #[test]
    fn test_at_without_function() {
        let failure = Failure::at(ErrorKind::OpenFailed, "", "src/open.rs", 3, None);
        assert_eq!(failure.origin_file(), Some("src/open.rs"));
        assert_eq!(failure.origin_function(), None);
    }

    #[test]
    fn test_description_ignores_context() {
        let a = Failure::new(ErrorKind::BadPathName, "/a//b");
        let b = Failure::new(ErrorKind::BadPathName, "something else entirely");
        assert_eq!(a.description(), b.description());
        assert_eq!(a.description(), crate::describe(a.kind()));
    }

    #[test]
    fn test_display() {
        let failure = Failure::new(ErrorKind::BufferSizeMismatch, "x has 10 records, y has 12");
        assert_eq!(
            failure.to_string(),
            "SourceDestBuffers not all same size (C25) => x has 10 records, y has 12"
        );
    }

    #[test]
    fn test_debug() {
        let failure = Failure::at(
            ErrorKind::Internal,
            "bad state",
            "src/lib.rs",
            7,
            Some("check"),
        );
        let debug = format!("{:?}", failure);
        assert!(debug.starts_with("Internal (C11): "));
        assert!(debug.contains("Context: bad state"));
        assert!(debug.contains("Origin: src/lib.rs:7"));
        assert!(debug.contains("in check"));
    }

    #[test]
    fn test_convenience_constructors() {
        let failure = Failure::child_index_out_of_bounds(5, 3);
        assert_eq!(failure.kind(), ErrorKind::ChildIndexOutOfBounds);
        assert_eq!(failure.context(), "childIndex=5 childCount=3");

        let failure = Failure::not_implemented("bitPack of 65 bits");
        assert_eq!(failure.kind(), ErrorKind::NotImplemented);
        assert!(failure.context().contains("bitPack of 65 bits"));
        assert!(!failure.is_recoverable());

        let failure = Failure::invariance_violation("");
        assert_eq!(failure.kind(), ErrorKind::InvarianceViolation);
        let failure = Failure::bad_api_argument("");
        assert_eq!(failure.kind(), ErrorKind::BadApiArgument);
        assert_eq!(Failure::internal("").kind(), ErrorKind::Internal);
        assert_eq!(Failure::bad_checksum("").kind(), ErrorKind::BadChecksum);
    }

    #[test]
    fn test_into_kind() {
        let failure = Failure::new(ErrorKind::TooManyWriters, "");
        let kind: ErrorKind = failure.into();
        assert_eq!(kind, ErrorKind::TooManyWriters);
    }

    #[test]
    fn test_propagates_as_std_error() {
        fn open() -> crate::Result<()> {
            Err(Failure::new(ErrorKind::OpenFailed, "fileName=missing.e57"))
        }
        fn run() -> Result<(), Box<dyn std::error::Error>> {
            open()?;
            Ok(())
        }
        let err = run().unwrap_err();
        assert_eq!(
            err.to_string(),
            "open() failed (C17) => fileName=missing.e57"
        );
    }
}
