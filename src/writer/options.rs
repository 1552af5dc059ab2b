use crate::Endianness;

/// Options for writing geometries to WKB
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// The byte order used for every record in the output
    pub endianness: Endianness,
}
