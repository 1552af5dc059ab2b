use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{WkbError, WkbResult};

/// Bit flag marking an EWKB geometry with a Z coordinate
const EWKB_FLAG_Z: u32 = 0x80000000;
/// Bit flag marking an EWKB geometry with an M coordinate
const EWKB_FLAG_M: u32 = 0x40000000;

/// Supported WKB dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    /// XY
    #[default]
    Xy,
    /// XY + elevation
    Xyz,
    /// XY + measure
    Xym,
    /// XY + elevation + measure
    Xyzm,
}

impl Dimension {
    /// The additive offset this dimension contributes to an ISO WKB type code
    pub(crate) fn as_u32_offset(&self) -> u32 {
        match self {
            Self::Xy => 0,
            Self::Xyz => 1000,
            Self::Xym => 2000,
            Self::Xyzm => 3000,
        }
    }

    /// The number of f64 ordinates per coordinate
    pub fn size(&self) -> usize {
        match self {
            Self::Xy => 2,
            Self::Xyz | Self::Xym => 3,
            Self::Xyzm => 4,
        }
    }

    /// Whether coordinates carry a Z ordinate
    pub fn has_z(&self) -> bool {
        matches!(self, Self::Xyz | Self::Xyzm)
    }

    /// Whether coordinates carry an M ordinate
    pub fn has_m(&self) -> bool {
        matches!(self, Self::Xym | Self::Xyzm)
    }

    /// Construct from Z/M presence flags
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Self::Xy,
            (true, false) => Self::Xyz,
            (false, true) => Self::Xym,
            (true, true) => Self::Xyzm,
        }
    }
}

/// The WKB geometry type, i.e. the base code of the u32 following the
/// byte-order byte, with any Z/M marking stripped.
///
/// `Geometry`, `Curve`, `Surface`, `MultiCurve` and `MultiSurface` are
/// abstract: no decoded geometry ever carries them as its type. The two
/// multi-codes still appear on the wire for collections written through
/// [`ExtendedGeometryCollection`](crate::geometry::ExtendedGeometryCollection).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryType {
    /// Abstract root type
    Geometry = 0,
    /// A single coordinate
    Point = 1,
    /// Line connected by straight segments
    LineString = 2,
    /// Surface bounded by straight-edged rings
    Polygon = 3,
    /// Collection of points
    MultiPoint = 4,
    /// Collection of line strings
    MultiLineString = 5,
    /// Collection of polygons
    MultiPolygon = 6,
    /// Heterogeneous collection
    GeometryCollection = 7,
    /// Line interpolated through circular arcs
    CircularString = 8,
    /// Curve stitched from line strings and circular strings
    CompoundCurve = 9,
    /// Surface bounded by curve rings
    CurvePolygon = 10,
    /// Abstract collection of curves
    MultiCurve = 11,
    /// Abstract collection of surfaces
    MultiSurface = 12,
    /// Abstract curve type
    Curve = 13,
    /// Abstract surface type
    Surface = 14,
    /// Contiguous collection of polygons sharing edges
    PolyhedralSurface = 15,
    /// Triangulated irregular network
    Tin = 16,
    /// Polygon with exactly three distinct vertices
    Triangle = 17,
}

impl GeometryType {
    /// Whether the type is abstract, i.e. never the type of a decoded geometry
    pub fn is_abstract(&self) -> bool {
        matches!(
            self,
            Self::Geometry | Self::Curve | Self::Surface | Self::MultiCurve | Self::MultiSurface
        )
    }
}

/// The geometry "code" of a WKB record
///
/// This is the four-byte `u32` directly after the one-byte endianness. It
/// carries the geometry type and the Z/M dimensionality. Encoding always uses
/// the ISO additive scheme (base + 1000 for Z + 2000 for M); decoding accepts
/// both that scheme and the EWKB high-bit flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct WkbGeometryCode(u32);

impl WkbGeometryCode {
    /// The ISO code for a geometry type and dimension
    pub fn new(geometry_type: GeometryType, dim: Dimension) -> Self {
        Self(u32::from(geometry_type) + dim.as_u32_offset())
    }

    /// Wrap a raw wire code
    pub fn from_raw(code: u32) -> Self {
        Self(code)
    }

    /// The raw u32 value as written to the wire
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Split the code into its geometry type and dimension.
    ///
    /// For ISO WKB the thousands digit marks the dimension: 1001, 1002, …
    /// are XYZ, 2001 etc. are XYM, 3001 etc. are XYZM. EWKB instead sets the
    /// two high bits for Z and M.
    pub fn decode(&self) -> WkbResult<(GeometryType, Dimension)> {
        let code = self.0;

        let is_ewkb_z = code & EWKB_FLAG_Z == EWKB_FLAG_Z;
        let is_ewkb_m = code & EWKB_FLAG_M == EWKB_FLAG_M;
        let code = code & !(EWKB_FLAG_Z | EWKB_FLAG_M);

        let (has_z, has_m) = match code / 1000 {
            0 => (is_ewkb_z, is_ewkb_m),
            1 => (true, is_ewkb_m),
            2 => (is_ewkb_z, true),
            3 => (true, true),
            _ => return Err(WkbError::UnknownTypeCode(self.0)),
        };

        let geometry_type = GeometryType::try_from(code % 1000)
            .map_err(|_| WkbError::UnknownTypeCode(self.0))?;

        Ok((geometry_type, Dimension::from_flags(has_z, has_m)))
    }
}

impl From<WkbGeometryCode> for u32 {
    fn from(value: WkbGeometryCode) -> Self {
        value.0
    }
}

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    /// Big endian (WKB XDR, byte-order byte 0)
    BigEndian = 0,
    /// Little endian (WKB NDR, byte-order byte 1)
    #[default]
    LittleEndian = 1,
}
