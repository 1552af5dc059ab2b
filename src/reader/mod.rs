//! Decode Well-Known Binary buffers into owned geometries.
//!
//! Each WKB record declares its own byte order, and the reader honors the
//! declared order of every nested record independently of its parent, so
//! mixed-endian buffers decode correctly. The byte order configured in
//! [`ReadOptions`] only seeds the cursor; it cannot influence the decoded
//! result.

mod bytes;
mod geometry;

pub use bytes::ByteReader;

use crate::error::WkbResult;
use crate::filter::PointFiniteFilter;
use crate::geometry::Geometry;
use crate::Endianness;

use geometry::{read_tagged_geometry, ReadContext};

/// The default cap on record nesting depth
pub const MAX_NESTING_DEPTH: usize = 64;

/// Options for reading WKB geometries
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// The initial byte order of the cursor. Every record re-declares its
    /// own order, so this has no effect on the decoded geometry.
    pub byte_order: Endianness,
    /// An optional per-point filter; rejected points are dropped and
    /// containers emptied by the drops are pruned.
    pub filter: Option<PointFiniteFilter>,
    /// Maximum record nesting depth before decoding fails
    pub max_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            byte_order: Endianness::default(),
            filter: None,
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

/// Decode a single geometry from a WKB buffer.
///
/// Returns `Ok(None)` when a configured filter rejects every point of the
/// root record; any structural problem with the buffer is an error. Trailing
/// bytes after the root record are ignored.
pub fn read_geometry(buf: &[u8], options: &ReadOptions) -> WkbResult<Option<Geometry>> {
    let mut reader = ByteReader::new(buf, options.byte_order);
    let ctx = ReadContext {
        filter: options.filter.as_ref(),
        max_depth: options.max_depth,
    };
    read_tagged_geometry(&mut reader, &ctx, 0)
}
