//! # e57-error
//!
//! Error reporting shared by every part of the E57 file-format library.
//!
//! ## Design
//!
//! - **ErrorKind**: a closed set of kinds with permanently assigned integral codes
//!   and one canonical description each. Renamed kinds keep their old spelling as
//!   a `#[deprecated]` alias bound to the same code.
//! - **ErrorCategory**: the broad group of a kind, and whether it is recoverable.
//! - **Failure**: the single error type callers catch. It binds a kind, a free-form
//!   context string and optionally the source location that raised it.
//! - **Reports**: an opt-in diagnostic rendering written to a caller-supplied sink,
//!   plus a structured `tracing` event.
//!
//! ## Usage
//!
//! ```rust
//! use e57_error::{e57_failure, ErrorKind, Failure, ReportOption, Result};
//!
//! fn verify(page: u64, expected: u32, actual: u32) -> Result<()> {
//!     if expected != actual {
//!         return Err(e57_failure!(ErrorKind::BadChecksum, "page {} checksum mismatch", page));
//!     }
//!     Ok(())
//! }
//!
//! let failure: Failure = verify(12, 0xdead, 0xbeef).unwrap_err();
//! assert_eq!(failure.kind(), ErrorKind::BadChecksum);
//! assert_eq!(failure.description(), "checksum mismatch, file is corrupted");
//!
//! let mut out = Vec::new();
//! failure.report_with(&ReportOption::new().with_verbose(false), None, &mut out);
//! assert_eq!(out, b"**** Got an e57 exception: checksum mismatch, file is corrupted\n");
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, e57_error::Failure>`
//! - Codes are appended, never renumbered or reused
//! - This crate never recovers; callers decide

#![warn(missing_docs)]

mod category;
mod failure;
mod kind;
mod macros;
mod report;

pub use category::ErrorCategory;
pub use failure::Failure;
pub use kind::{ErrorKind, UNRECOGNIZED_ERROR_CODE, UnknownErrorCode, describe, describe_code};
pub use report::{DIAGNOSTIC_ENV, ReportOption, ReportSite};
pub use strum::{EnumCount, IntoEnumIterator};

/// Result type alias using E57 Failure
pub type Result<T> = std::result::Result<T, Failure>;
