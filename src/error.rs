// One error type for the whole crate.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reference and user buffers hold a different number of samples.
    #[error("compare: buffer length mismatch (reference {reference} bytes, user {user} bytes)")]
    ShapeMismatch { reference: usize, user: usize },

    /// Images handed to `compare_images` differ in width or height.
    #[error("compare: dimension mismatch (reference {reference:?}, user {user:?})")]
    DimensionMismatch {
        reference: (u32, u32),
        user: (u32, u32),
    },

    #[error("compare: buffers are empty")]
    EmptyBuffer,

    #[error("compare: buffer length {len} is not a multiple of 4 (RGBA)")]
    NotPixelAligned { len: usize },

    #[error("compare: tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    #[error("color: `{0}` is not a #rrggbb hex color")]
    InvalidHex(String),

    #[error("Window init error: {0}")]
    WindowInit(String),

    #[error("Window update error: {0}")]
    WindowUpdate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
