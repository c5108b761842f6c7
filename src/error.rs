use thiserror::Error;

/// Errors raised while building or invoking a serialization routine.
///
/// Build-time errors (`UnsupportedShape`) are memoized per cache key and
/// replayed to every caller forever; call-time errors describe a particular
/// value and leave the cached routine intact.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The type graph contains a construct the builder cannot encode.
    /// Raised while building a routine, never at serialization time.
    #[error("unsupported shape: {0}")]
    UnsupportedShape(String),

    /// The value graph nested deeper than the recursion bound, usually
    /// because it contains a cycle.
    #[error("maximum serialization depth of {max} exceeded")]
    MaxDepthExceeded { max: usize },

    /// NaN or an infinity, which have no JSON representation.
    #[error("cannot encode a non-finite floating point number as JSON")]
    NonFiniteNumber,

    /// A date that cannot be resolved to an instant, e.g. a local time
    /// that does not exist in the configured time zone.
    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    /// A runtime value disagreed with its declared shape.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The output sink rejected a write.
    #[error("write failed: {0}")]
    Io(String),
}

impl Error {
    pub(crate) fn max_depth(max: usize) -> Self {
        Error::MaxDepthExceeded { max }
    }

    pub(crate) fn mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::InvalidValue(format!("expected {expected}, found {found}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
