//! Error types for the `.dat` builder.

use thiserror::Error;

/// Error type for builder operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A prefix length of zero or one exceeding the address family's width was supplied.
    #[error("invalid prefix length {len} for a {bits}-bit address family")]
    InvalidPrefixLength { len: u8, bits: u8 },

    /// `insert` was called with an IPv6 prefix on a v4 builder (or vice versa).
    #[error("address family mismatch: builder expects {expected}, got {actual}")]
    AddressFamilyMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A later insert's path tried to descend through a slot already occupied
    /// by a data leaf from an earlier, shorter prefix.
    #[error("prefix {prefix} conflicts with an existing shorter prefix at the same branch")]
    ConflictingPrefix { prefix: String },

    /// The segment table grew past what `segment_record_len` bytes can address,
    /// and `Config::strict_segment_overflow` is set.
    #[error("segment count {count} exceeds the {bytes}-byte segment record capacity")]
    SegmentCountOverflow { count: usize, bytes: u8 },

    /// `insert` was called with a [`crate::builder::Payload`] variant that
    /// doesn't match the edition's payload shape (e.g. a `City` payload on
    /// an ASN builder).
    #[error("edition {edition} expects a {expected} payload")]
    PayloadMismatch {
        edition: &'static str,
        expected: &'static str,
    },

    /// I/O error while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, Error>;
