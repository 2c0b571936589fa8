//! Error kinds for E57 operations.
//!
//! Every kind owns a permanently assigned integral code. Codes are logged and
//! serialized, so they are never renumbered or reused: new kinds are appended
//! at the end, and renamed kinds keep their old name as a deprecated alias
//! bound to the same code.

use std::fmt;

use strum_macros::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

use crate::ErrorCategory;

/// Returned by [`describe_code`] for codes outside the taxonomy.
pub const UNRECOGNIZED_ERROR_CODE: &str = "unrecognized error code";

/// The kind of error that occurred.
///
/// Match on the kind (or branch on [`ErrorKind::code`]) to decide how to
/// handle a [`Failure`](crate::Failure). New kinds are appended over time, so
/// matches outside this crate need a wildcard arm:
///
/// ```rust
/// use e57_error::ErrorKind;
///
/// fn should_retry(kind: ErrorKind) -> bool {
///     match kind {
///         ErrorKind::ReadFailed | ErrorKind::SeekFailed => true,
///         _ => false,
///     }
/// }
///
/// assert!(should_retry(ErrorKind::SeekFailed));
/// assert!(!should_retry(ErrorKind::BadChecksum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(IntoStaticStr, Display, EnumIter, EnumCount, FromRepr)]
#[non_exhaustive]
#[repr(i32)]
pub enum ErrorKind {
    /// Operation was successful
    Success = 0,

    // =========================================================================
    // Compressed vector binary section
    // =========================================================================
    /// A CompressedVector binary header was bad
    BadCvHeader = 1,
    /// A CompressedVector binary packet was bad
    BadCvPacket = 2,

    // =========================================================================
    // Element tree and value representation
    // =========================================================================
    /// A numerical index identifying a child was out of bounds
    ChildIndexOutOfBounds = 3,
    /// Attempted to set an existing child element to a new value
    SetTwice = 4,
    /// Attempted to add an element that would have made the children of a
    /// homogeneous vector have different types
    HomogeneousViolation = 5,
    /// A value could not be represented in the requested type
    ValueNotRepresentable = 6,
    /// After scaling the result could not be represented in the requested type
    ScaledValueNotRepresentable = 7,
    /// A 64 bit IEEE float was too large to store in a 32 bit IEEE float
    Real64TooLarge = 8,
    /// Expecting numeric representation in user's buffer, found ustring
    ExpectingNumeric = 9,
    /// Expecting string representation in user's buffer, found numeric
    ExpectingUString = 10,

    /// An unrecoverable inconsistent internal state was detected
    Internal = 11,
    /// E57 primitive not encoded in XML correctly
    BadXmlFormat = 12,
    /// XML not well formed
    XmlParser = 13,
    /// Bad API function argument provided by user
    BadApiArgument = 14,
    /// Can't modify read only file
    FileReadOnly = 15,
    /// Checksum mismatch, file is corrupted
    BadChecksum = 16,

    // =========================================================================
    // File I/O
    // =========================================================================
    /// open() failed
    OpenFailed = 17,
    /// close() failed
    CloseFailed = 18,
    /// read() failed
    ReadFailed = 19,
    /// write() failed
    WriteFailed = 20,
    /// lseek() failed
    SeekFailed = 21,

    /// Element path well formed but not defined
    PathUndefined = 22,

    // =========================================================================
    // Source/destination buffers
    // =========================================================================
    /// Bad SourceDestBuffer
    BadBuffer = 23,
    /// No buffer specified for an element in CompressedVectorNode during write
    NoBufferForElement = 24,
    /// SourceDestBuffers not all same size
    BufferSizeMismatch = 25,
    /// Duplicate pathname in CompressedVectorNode read/write
    BufferDuplicatePathName = 26,

    // =========================================================================
    // File header and XML section
    // =========================================================================
    /// File signature not "ASTM-E57"
    BadFileSignature = 27,
    /// Incompatible file version
    UnknownFileVersion = 28,
    /// Size in file header not same as actual
    BadFileLength = 29,
    /// XML parser failed to initialize
    XmlParserInit = 30,
    /// Namespace prefix already defined
    DuplicateNamespacePrefix = 31,
    /// Namespace URI already defined
    DuplicateNamespaceUri = 32,
    /// Bad prototype in CompressedVectorNode
    BadPrototype = 33,
    /// Bad codecs in CompressedVectorNode
    BadCodecs = 34,

    /// Element value out of min/max bounds
    ValueOutOfBounds = 35,
    /// Conversion required to assign element value, but not requested
    ConversionRequired = 36,
    /// E57 path name is not well formed
    BadPathName = 37,
    /// Functionality not implemented
    NotImplemented = 38,
    /// Bad downcast from Node to specific node type
    BadNodeDowncast = 39,

    // =========================================================================
    // Resource lifecycle
    // =========================================================================
    /// CompressedVectorWriter is no longer open
    WriterNotOpen = 40,
    /// CompressedVectorReader is no longer open
    ReaderNotOpen = 41,
    /// Node is not yet attached to tree of ImageFile
    NodeUnattached = 42,
    /// Node already has a parent
    AlreadyHasParent = 43,
    /// Nodes were constructed with different destImageFiles
    DifferentDestImageFile = 44,
    /// destImageFile is no longer open
    ImageFileNotOpen = 45,
    /// SourceDestBuffers not compatible with previously given ones
    BuffersNotCompatible = 46,
    /// Too many open CompressedVectorWriters of an ImageFile
    TooManyWriters = 47,
    /// Too many open CompressedVectorReaders of an ImageFile
    TooManyReaders = 48,

    /// Bad configuration string
    BadConfiguration = 49,
    /// Class invariance constraint violation in debug mode
    InvarianceViolation = 50,

    // =========================================================================
    // Data3D
    // =========================================================================
    /// An invalid node type was passed in Data3D pointFields
    InvalidNodeType = 51,
    /// Passed an invalid value in Data3D pointFields
    InvalidData3DValue = 52,
}

/// Legacy spellings, kept so existing callers keep compiling.
#[allow(missing_docs)]
impl ErrorKind {
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::Success."
    )]
    pub const E57_SUCCESS: ErrorKind = ErrorKind::Success;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadCvHeader."
    )]
    pub const E57_ERROR_BAD_CV_HEADER: ErrorKind = ErrorKind::BadCvHeader;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadCvPacket."
    )]
    pub const E57_ERROR_BAD_CV_PACKET: ErrorKind = ErrorKind::BadCvPacket;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::ChildIndexOutOfBounds."
    )]
    pub const E57_ERROR_CHILD_INDEX_OUT_OF_BOUNDS: ErrorKind = ErrorKind::ChildIndexOutOfBounds;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::SetTwice."
    )]
    pub const E57_ERROR_SET_TWICE: ErrorKind = ErrorKind::SetTwice;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::HomogeneousViolation."
    )]
    pub const E57_ERROR_HOMOGENEOUS_VIOLATION: ErrorKind = ErrorKind::HomogeneousViolation;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::ValueNotRepresentable."
    )]
    pub const E57_ERROR_VALUE_NOT_REPRESENTABLE: ErrorKind = ErrorKind::ValueNotRepresentable;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::ScaledValueNotRepresentable."
    )]
    pub const E57_ERROR_SCALED_VALUE_NOT_REPRESENTABLE: ErrorKind =
        ErrorKind::ScaledValueNotRepresentable;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::Real64TooLarge."
    )]
    pub const E57_ERROR_REAL64_TOO_LARGE: ErrorKind = ErrorKind::Real64TooLarge;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::ExpectingNumeric."
    )]
    pub const E57_ERROR_EXPECTING_NUMERIC: ErrorKind = ErrorKind::ExpectingNumeric;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::ExpectingUString."
    )]
    pub const E57_ERROR_EXPECTING_USTRING: ErrorKind = ErrorKind::ExpectingUString;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::Internal."
    )]
    pub const E57_ERROR_INTERNAL: ErrorKind = ErrorKind::Internal;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadXmlFormat."
    )]
    pub const E57_ERROR_BAD_XML_FORMAT: ErrorKind = ErrorKind::BadXmlFormat;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::XmlParser."
    )]
    pub const E57_ERROR_XML_PARSER: ErrorKind = ErrorKind::XmlParser;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadApiArgument."
    )]
    pub const E57_ERROR_BAD_API_ARGUMENT: ErrorKind = ErrorKind::BadApiArgument;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::FileReadOnly."
    )]
    pub const E57_ERROR_FILE_IS_READ_ONLY: ErrorKind = ErrorKind::FileReadOnly;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadChecksum."
    )]
    pub const E57_ERROR_BAD_CHECKSUM: ErrorKind = ErrorKind::BadChecksum;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::OpenFailed."
    )]
    pub const E57_ERROR_OPEN_FAILED: ErrorKind = ErrorKind::OpenFailed;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::CloseFailed."
    )]
    pub const E57_ERROR_CLOSE_FAILED: ErrorKind = ErrorKind::CloseFailed;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::ReadFailed."
    )]
    pub const E57_ERROR_READ_FAILED: ErrorKind = ErrorKind::ReadFailed;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::WriteFailed."
    )]
    pub const E57_ERROR_WRITE_FAILED: ErrorKind = ErrorKind::WriteFailed;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::SeekFailed."
    )]
    pub const E57_ERROR_LSEEK_FAILED: ErrorKind = ErrorKind::SeekFailed;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::PathUndefined."
    )]
    pub const E57_ERROR_PATH_UNDEFINED: ErrorKind = ErrorKind::PathUndefined;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadBuffer."
    )]
    pub const E57_ERROR_BAD_BUFFER: ErrorKind = ErrorKind::BadBuffer;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::NoBufferForElement."
    )]
    pub const E57_ERROR_NO_BUFFER_FOR_ELEMENT: ErrorKind = ErrorKind::NoBufferForElement;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BufferSizeMismatch."
    )]
    pub const E57_ERROR_BUFFER_SIZE_MISMATCH: ErrorKind = ErrorKind::BufferSizeMismatch;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BufferDuplicatePathName."
    )]
    pub const E57_ERROR_BUFFER_DUPLICATE_PATHNAME: ErrorKind = ErrorKind::BufferDuplicatePathName;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadFileSignature."
    )]
    pub const E57_ERROR_BAD_FILE_SIGNATURE: ErrorKind = ErrorKind::BadFileSignature;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::UnknownFileVersion."
    )]
    pub const E57_ERROR_UNKNOWN_FILE_VERSION: ErrorKind = ErrorKind::UnknownFileVersion;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadFileLength."
    )]
    pub const E57_ERROR_BAD_FILE_LENGTH: ErrorKind = ErrorKind::BadFileLength;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::XmlParserInit."
    )]
    pub const E57_ERROR_XML_PARSER_INIT: ErrorKind = ErrorKind::XmlParserInit;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::DuplicateNamespacePrefix."
    )]
    pub const E57_ERROR_DUPLICATE_NAMESPACE_PREFIX: ErrorKind = ErrorKind::DuplicateNamespacePrefix;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::DuplicateNamespaceUri."
    )]
    pub const E57_ERROR_DUPLICATE_NAMESPACE_URI: ErrorKind = ErrorKind::DuplicateNamespaceUri;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadPrototype."
    )]
    pub const E57_ERROR_BAD_PROTOTYPE: ErrorKind = ErrorKind::BadPrototype;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadCodecs."
    )]
    pub const E57_ERROR_BAD_CODECS: ErrorKind = ErrorKind::BadCodecs;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::ValueOutOfBounds."
    )]
    pub const E57_ERROR_VALUE_OUT_OF_BOUNDS: ErrorKind = ErrorKind::ValueOutOfBounds;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::ConversionRequired."
    )]
    pub const E57_ERROR_CONVERSION_REQUIRED: ErrorKind = ErrorKind::ConversionRequired;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadPathName."
    )]
    pub const E57_ERROR_BAD_PATH_NAME: ErrorKind = ErrorKind::BadPathName;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::NotImplemented."
    )]
    pub const E57_ERROR_NOT_IMPLEMENTED: ErrorKind = ErrorKind::NotImplemented;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadNodeDowncast."
    )]
    pub const E57_ERROR_BAD_NODE_DOWNCAST: ErrorKind = ErrorKind::BadNodeDowncast;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::WriterNotOpen."
    )]
    pub const E57_ERROR_WRITER_NOT_OPEN: ErrorKind = ErrorKind::WriterNotOpen;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::ReaderNotOpen."
    )]
    pub const E57_ERROR_READER_NOT_OPEN: ErrorKind = ErrorKind::ReaderNotOpen;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::NodeUnattached."
    )]
    pub const E57_ERROR_NODE_UNATTACHED: ErrorKind = ErrorKind::NodeUnattached;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::AlreadyHasParent."
    )]
    pub const E57_ERROR_ALREADY_HAS_PARENT: ErrorKind = ErrorKind::AlreadyHasParent;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::DifferentDestImageFile."
    )]
    pub const E57_ERROR_DIFFERENT_DEST_IMAGEFILE: ErrorKind = ErrorKind::DifferentDestImageFile;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::ImageFileNotOpen."
    )]
    pub const E57_ERROR_IMAGEFILE_NOT_OPEN: ErrorKind = ErrorKind::ImageFileNotOpen;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BuffersNotCompatible."
    )]
    pub const E57_ERROR_BUFFERS_NOT_COMPATIBLE: ErrorKind = ErrorKind::BuffersNotCompatible;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::TooManyWriters."
    )]
    pub const E57_ERROR_TOO_MANY_WRITERS: ErrorKind = ErrorKind::TooManyWriters;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::TooManyReaders."
    )]
    pub const E57_ERROR_TOO_MANY_READERS: ErrorKind = ErrorKind::TooManyReaders;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::BadConfiguration."
    )]
    pub const E57_ERROR_BAD_CONFIGURATION: ErrorKind = ErrorKind::BadConfiguration;
    #[deprecated(
        since = "3.0.0",
        note = "Will be removed in 4.0. Use ErrorKind::InvarianceViolation."
    )]
    pub const E57_ERROR_INVARIANCE_VIOLATION: ErrorKind = ErrorKind::InvarianceViolation;
}

impl ErrorKind {
    /// The stable integral code of this kind.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a kind by its integral code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }

    /// Returns the kind name as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// The canonical human-readable description of this kind.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorKind::Success => "operation was successful",
            ErrorKind::BadCvHeader => "a CompressedVector binary header was bad",
            ErrorKind::BadCvPacket => "a CompressedVector binary packet was bad",
            ErrorKind::ChildIndexOutOfBounds => {
                "a numerical index identifying a child was out of bounds"
            }
            ErrorKind::SetTwice => "attempted to set an existing child element to a new value",
            ErrorKind::HomogeneousViolation => {
                "attempted to add an E57 Element that would have made the children of a \
                 homogeneous Vector have different types"
            }
            ErrorKind::ValueNotRepresentable => {
                "a value could not be represented in the requested type"
            }
            ErrorKind::ScaledValueNotRepresentable => {
                "after scaling the result could not be represented in the requested type"
            }
            ErrorKind::Real64TooLarge => {
                "a 64 bit IEEE float was too large to store in a 32 bit IEEE float"
            }
            ErrorKind::ExpectingNumeric => {
                "Expecting numeric representation in user's buffer, found ustring"
            }
            ErrorKind::ExpectingUString => {
                "Expecting string representation in user's buffer, found numeric"
            }
            ErrorKind::Internal => "An unrecoverable inconsistent internal state was detected",
            ErrorKind::BadXmlFormat => "E57 primitive not encoded in XML correctly",
            ErrorKind::XmlParser => "XML not well formed",
            ErrorKind::BadApiArgument => "bad API function argument provided by user",
            ErrorKind::FileReadOnly => "can't modify read only file",
            ErrorKind::BadChecksum => "checksum mismatch, file is corrupted",
            ErrorKind::OpenFailed => "open() failed",
            ErrorKind::CloseFailed => "close() failed",
            ErrorKind::ReadFailed => "read() failed",
            ErrorKind::WriteFailed => "write() failed",
            ErrorKind::SeekFailed => "lseek() failed",
            ErrorKind::PathUndefined => "E57 element path well formed but not defined",
            ErrorKind::BadBuffer => "bad SourceDestBuffer",
            ErrorKind::NoBufferForElement => {
                "no buffer specified for an element in CompressedVectorNode during write"
            }
            ErrorKind::BufferSizeMismatch => "SourceDestBuffers not all same size",
            ErrorKind::BufferDuplicatePathName => {
                "duplicate pathname in CompressedVectorNode read/write"
            }
            ErrorKind::BadFileSignature => "file signature not \"ASTM-E57\"",
            ErrorKind::UnknownFileVersion => "incompatible file version",
            ErrorKind::BadFileLength => "size in file header not same as actual",
            ErrorKind::XmlParserInit => "XML parser failed to initialize",
            ErrorKind::DuplicateNamespacePrefix => "namespace prefix already defined",
            ErrorKind::DuplicateNamespaceUri => "namespace URI already defined",
            ErrorKind::BadPrototype => "bad prototype in CompressedVectorNode",
            ErrorKind::BadCodecs => "bad codecs in CompressedVectorNode",
            ErrorKind::ValueOutOfBounds => "element value out of min/max bounds",
            ErrorKind::ConversionRequired => {
                "conversion required to assign element value, but not requested"
            }
            ErrorKind::BadPathName => "E57 path name is not well formed",
            ErrorKind::NotImplemented => "functionality not implemented",
            ErrorKind::BadNodeDowncast => "bad downcast from Node to specific node type",
            ErrorKind::WriterNotOpen => "CompressedVectorWriter is no longer open",
            ErrorKind::ReaderNotOpen => "CompressedVectorReader is no longer open",
            ErrorKind::NodeUnattached => "node is not yet attached to tree of ImageFile",
            ErrorKind::AlreadyHasParent => "node already has a parent",
            ErrorKind::DifferentDestImageFile => {
                "nodes were constructed with different destImageFiles"
            }
            ErrorKind::ImageFileNotOpen => "destImageFile is no longer open",
            ErrorKind::BuffersNotCompatible => {
                "SourceDestBuffers not compatible with previously given ones"
            }
            ErrorKind::TooManyWriters => "too many open CompressedVectorWriters of an ImageFile",
            ErrorKind::TooManyReaders => "too many open CompressedVectorReaders of an ImageFile",
            ErrorKind::BadConfiguration => "bad configuration string",
            ErrorKind::InvarianceViolation => "class invariance constraint violation in debug mode",
            ErrorKind::InvalidNodeType => "an invalid node type was passed in Data3D pointFields",
            ErrorKind::InvalidData3DValue => "passed an invalid value in Data3D pointFields",
        }
    }

    /// The coarse category this kind belongs to.
    pub const fn category(self) -> ErrorCategory {
        use ErrorKind::*;
        match self {
            Success => ErrorCategory::None,
            BadCvHeader
            | BadCvPacket
            | BadXmlFormat
            | XmlParser
            | BadChecksum
            | BadFileSignature
            | UnknownFileVersion
            | BadFileLength
            | BadPrototype
            | BadCodecs => ErrorCategory::Format,
            OpenFailed | CloseFailed | ReadFailed | WriteFailed | SeekFailed => ErrorCategory::Io,
            // The XML parser is set up through the platform, not the file.
            XmlParserInit => ErrorCategory::Io,
            FileReadOnly
            | WriterNotOpen
            | ReaderNotOpen
            | NodeUnattached
            | AlreadyHasParent
            | ImageFileNotOpen
            | TooManyWriters
            | TooManyReaders => ErrorCategory::ResourceLifecycle,
            Internal | NotImplemented | InvarianceViolation => ErrorCategory::Internal,
            ChildIndexOutOfBounds
            | SetTwice
            | HomogeneousViolation
            | ValueNotRepresentable
            | ScaledValueNotRepresentable
            | Real64TooLarge
            | ExpectingNumeric
            | ExpectingUString
            | BadApiArgument
            | PathUndefined
            | BadBuffer
            | NoBufferForElement
            | BufferSizeMismatch
            | BufferDuplicatePathName
            | DuplicateNamespacePrefix
            | DuplicateNamespaceUri
            | ValueOutOfBounds
            | ConversionRequired
            | BadPathName
            | BadNodeDowncast
            | DifferentDestImageFile
            | BuffersNotCompatible
            | BadConfiguration
            | InvalidNodeType
            | InvalidData3DValue => ErrorCategory::ApiContract,
        }
    }

    /// True only for [`ErrorKind::Success`].
    pub const fn is_success(self) -> bool {
        matches!(self, ErrorKind::Success)
    }

    /// Whether a caller can reasonably recover from this kind.
    ///
    /// Internal kinds indicate a library bug rather than bad input.
    pub const fn is_recoverable(self) -> bool {
        self.category().is_recoverable()
    }
}

/// The canonical description of `kind`.
pub const fn describe(kind: ErrorKind) -> &'static str {
    kind.description()
}

/// The canonical description of a raw integral code.
///
/// Codes outside the taxonomy resolve to [`UNRECOGNIZED_ERROR_CODE`]. This sits
/// on failure-reporting paths, so it logs the anomaly instead of failing.
pub fn describe_code(code: i32) -> &'static str {
    match ErrorKind::from_code(code) {
        Some(kind) => kind.description(),
        None => {
            tracing::warn!(code, "code outside the error taxonomy");
            UNRECOGNIZED_ERROR_CODE
        }
    }
}

impl From<ErrorKind> for i32 {
    fn from(kind: ErrorKind) -> Self {
        kind.code()
    }
}

impl TryFrom<i32> for ErrorKind {
    type Error = UnknownErrorCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ErrorKind::from_code(code).ok_or(UnknownErrorCode(code))
    }
}

/// An integral code that does not name any [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownErrorCode(pub i32);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", UNRECOGNIZED_ERROR_CODE, self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ErrorKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i32::deserialize(deserializer)?;
        ErrorKind::try_from(code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::BadChecksum.to_string(), "BadChecksum");
        assert_eq!(ErrorKind::SeekFailed.as_str(), "SeekFailed");
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorKind::Success.code(), 0);
        assert_eq!(ErrorKind::BadCvHeader.code(), 1);
        assert_eq!(ErrorKind::BadChecksum.code(), 16);
        assert_eq!(ErrorKind::SeekFailed.code(), 21);
        assert_eq!(ErrorKind::InvarianceViolation.code(), 50);
        assert_eq!(ErrorKind::InvalidData3DValue.code(), 52);
        assert_eq!(ErrorKind::COUNT, 53);
    }

    #[test]
    fn test_canonical_codes_are_unique() {
        let codes: HashSet<i32> = ErrorKind::iter().map(ErrorKind::code).collect();
        assert_eq!(codes.len(), ErrorKind::COUNT);

        let zeros: Vec<ErrorKind> = ErrorKind::iter().filter(|k| k.code() == 0).collect();
        assert_eq!(zeros, vec![ErrorKind::Success]);
        assert!(ErrorKind::iter().skip(1).all(|k| k.code() > 0));
    }

    #[test]
    fn test_codes_are_contiguous() {
        for (expected, kind) in ErrorKind::iter().enumerate() {
            assert_eq!(kind.code(), expected as i32);
        }
    }

    #[test]
    fn test_every_kind_has_description() {
        for kind in ErrorKind::iter() {
            assert!(!describe(kind).is_empty(), "{kind} has no description");
            assert_ne!(describe(kind), UNRECOGNIZED_ERROR_CODE);
        }
        assert_eq!(describe(ErrorKind::Success), "operation was successful");
    }

    #[test]
    #[allow(deprecated)]
    fn test_alias_shares_code_and_description() {
        let alias = ErrorKind::E57_ERROR_CHILD_INDEX_OUT_OF_BOUNDS;
        let canonical = ErrorKind::ChildIndexOutOfBounds;
        assert_eq!(alias, canonical);
        assert_eq!(alias.code(), canonical.code());
        assert_eq!(describe(alias), describe(canonical));

        assert_eq!(ErrorKind::E57_SUCCESS, ErrorKind::Success);
        assert_eq!(ErrorKind::E57_ERROR_LSEEK_FAILED, ErrorKind::SeekFailed);
    }

    #[test]
    fn test_from_code() {
        for kind in ErrorKind::iter() {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
            assert_eq!(ErrorKind::try_from(i32::from(kind)), Ok(kind));
        }
        assert_eq!(ErrorKind::from_code(-1), None);
        assert_eq!(ErrorKind::from_code(53), None);
        assert_eq!(ErrorKind::try_from(99), Err(UnknownErrorCode(99)));
    }

    #[test]
    fn test_describe_code_fallback() {
        assert_eq!(describe_code(16), "checksum mismatch, file is corrupted");
        assert_eq!(describe_code(999), UNRECOGNIZED_ERROR_CODE);
        assert_eq!(describe_code(-7), UNRECOGNIZED_ERROR_CODE);

        let shown = UnknownErrorCode(999).to_string();
        assert_eq!(shown, "unrecognized error code (999)");
    }

    #[test]
    fn test_category() {
        use ErrorCategory::{ApiContract, Format, Internal, Io, ResourceLifecycle};

        assert_eq!(ErrorKind::Success.category(), ErrorCategory::None);
        assert_eq!(ErrorKind::BadChecksum.category(), Format);
        assert_eq!(ErrorKind::ChildIndexOutOfBounds.category(), ApiContract);
        assert_eq!(ErrorKind::SeekFailed.category(), Io);
        assert_eq!(ErrorKind::XmlParserInit.category(), Io);
        assert_eq!(ErrorKind::TooManyReaders.category(), ResourceLifecycle);
        assert_eq!(ErrorKind::NotImplemented.category(), Internal);
        for kind in ErrorKind::iter().skip(1) {
            assert_ne!(kind.category(), ErrorCategory::None);
        }
    }

    #[test]
    fn test_is_recoverable() {
        assert!(ErrorKind::BadApiArgument.is_recoverable());
        assert!(ErrorKind::ReadFailed.is_recoverable());
        assert!(!ErrorKind::Internal.is_recoverable());
        assert!(!ErrorKind::InvarianceViolation.is_recoverable());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&ErrorKind::BadChecksum).unwrap();
        assert_eq!(json, "16");
        let kind: ErrorKind = serde_json::from_str("41").unwrap();
        assert_eq!(kind, ErrorKind::ReaderNotOpen);
        assert!(serde_json::from_str::<ErrorKind>("77").is_err());
    }
}
