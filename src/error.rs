//! Error types for WKB encoding and decoding.

use thiserror::Error;

use crate::common::{Dimension, GeometryType};

/// WKB errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WkbError {
    /// The record header could not be read: the byte-order byte was not 0 or
    /// 1, the buffer was too short for the five header bytes, or a value does
    /// not fit the header's wire representation.
    #[error("malformed WKB header: {0}")]
    MalformedHeader(String),

    /// The 32-bit geometry type code does not map to a known geometry type.
    #[error("unknown WKB geometry type code: {0:#010x}")]
    UnknownTypeCode(u32),

    /// A read advanced past the end of the buffer.
    #[error("unexpected end of WKB buffer: needed {needed} more bytes, {remaining} remaining")]
    Truncated {
        /// Bytes the read required
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// A typed container held a child record of a type it does not permit.
    #[error("{container:?} may not contain a {child:?}")]
    InvalidChildType {
        /// The container geometry type
        container: GeometryType,
        /// The decoded child geometry type
        child: GeometryType,
    },

    /// A child geometry disagrees with its container on Z/M dimensionality.
    #[error("dimension mismatch: container is {expected:?} but child is {actual:?}")]
    DimensionMismatch {
        /// The container's dimension
        expected: Dimension,
        /// The child's dimension
        actual: Dimension,
    },

    /// Record nesting exceeded the configured depth limit.
    #[error("WKB nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),
}

/// Crate-specific result type
pub type WkbResult<T> = std::result::Result<T, WkbError>;
