use std::fmt;

/// Reason a write was rejected. None of these are recoverable mid-token; the
/// failing token commits nothing and the writer stays usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteErrorKind {
    /// A structural rule was violated (e.g. `end_object` while inside an array,
    /// or a value where a property name is required).
    InvalidOperation,
    /// Starting another container would exceed `Options::max_depth`.
    DepthLimitExceeded,
    /// The input length would overflow the worst-case sizing arithmetic.
    ArgumentTooLarge,
    /// A byte payload is not well-formed UTF-8.
    InvalidUtf8,
    /// A code-unit payload is not well-formed UTF-16 (lone or misordered surrogate).
    InvalidUtf16,
    /// NaN or an infinity; JSON has no representation for them.
    InvalidFloatValue,
    /// More bytes were declared via `advance` than the last span could hold.
    Overcommit,
    /// A fixed-capacity sink cannot satisfy the requested reservation.
    OutOfSpace,
    /// An IO-backed sink failed while growing or flushing.
    Io(std::io::ErrorKind),
}

/// Error produced by the writer. `offset` is the number of bytes the writer
/// had produced (committed plus pending) when the offending call was made;
/// output up to that offset is valid JSON for the tokens accepted so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteError {
    pub kind: WriteErrorKind,
    pub offset: usize,
}

impl WriteError {
    pub fn new(kind: WriteErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WriteErrorKind::InvalidOperation => {
                write!(f, "invalid token for current structure at offset {}", self.offset)
            }
            WriteErrorKind::DepthLimitExceeded => {
                write!(f, "maximum container depth exceeded at offset {}", self.offset)
            }
            WriteErrorKind::ArgumentTooLarge => {
                write!(f, "input too large for worst-case sizing at offset {}", self.offset)
            }
            WriteErrorKind::InvalidUtf8 => {
                write!(f, "input is not well-formed UTF-8 at offset {}", self.offset)
            }
            WriteErrorKind::InvalidUtf16 => {
                write!(f, "input is not well-formed UTF-16 at offset {}", self.offset)
            }
            WriteErrorKind::InvalidFloatValue => {
                write!(f, "NaN and infinities cannot be written as JSON at offset {}", self.offset)
            }
            WriteErrorKind::Overcommit => {
                write!(f, "advanced past the reserved span at offset {}", self.offset)
            }
            WriteErrorKind::OutOfSpace => {
                write!(f, "fixed sink capacity exhausted at offset {}", self.offset)
            }
            WriteErrorKind::Io(e) => {
                write!(f, "sink io error ({:?}) at offset {}", e, self.offset)
            }
        }
    }
}

impl std::error::Error for WriteError {}

impl From<std::io::Error> for WriteErrorKind {
    fn from(e: std::io::Error) -> Self {
        WriteErrorKind::Io(e.kind())
    }
}
