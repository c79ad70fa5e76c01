//! Error taxonomy shared by every fallible operation in the crate.

/// The error type returned by fallible `burst` operations.
///
/// Preconditions that are cheap to check (buffer sizes, thresholds) are reported
/// through this type. Preconditions that are expensive to check (full sortedness of
/// an input) are `debug_assert!`-only, per the crate's error handling design.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sort's output or scratch buffer is smaller than its input.
    #[error("buffer too small: need at least {need} elements, have {have}")]
    BufferTooSmall { need: usize, have: usize },

    /// A semiintersection was requested with a threshold of zero.
    #[error("semiintersection threshold must be at least 1")]
    InvalidThreshold,

    /// A bitap pattern is longer than the bitmask type can represent.
    #[error("pattern of length {pattern_len} exceeds bitmask width {bitmask_width}")]
    PatternTooLong {
        pattern_len: usize,
        bitmask_width: usize,
    },

    /// Cloning a [`crate::container::DynamicTuple`] failed partway through.
    #[error("failed to copy element of type `{type_name}` while cloning dynamic tuple")]
    CopyFailed { type_name: &'static str },

    /// Growing a container's backing allocation failed.
    #[error("allocation failed while growing container to {requested} bytes")]
    AllocationFailed { requested: usize },
}

impl Error {
    pub(crate) fn copy_failed<T>() -> Self {
        Error::CopyFailed {
            type_name: std::any::type_name::<T>(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
