//! Primitive assembly and rasterization vocabulary.

/// How vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Each vertex is a point.
    PointList,
    /// Every two vertices form a line.
    LineList,
    /// Consecutive vertices form a connected line.
    LineStrip,
    /// Every three vertices form a triangle.
    #[default]
    TriangleList,
    /// Each vertex after the first two forms a triangle with the previous two.
    TriangleStrip,
    /// Each vertex after the first two forms a triangle with the first vertex.
    TriangleFan,
    /// Vertices are grouped into patches for tessellation.
    ///
    /// Only valid in pipelines with both tessellation stages.
    PatchList,
}

impl PrimitiveTopology {
    /// Returns true for [`PrimitiveTopology::PatchList`].
    pub fn is_patch_list(&self) -> bool {
        matches!(self, Self::PatchList)
    }

    /// Returns true for the strip and fan topologies, the only ones affected
    /// by primitive restart.
    pub fn is_strip(&self) -> bool {
        matches!(self, Self::LineStrip | Self::TriangleStrip | Self::TriangleFan)
    }
}

/// How polygons are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolygonMode {
    /// Filled polygons.
    #[default]
    Fill,
    /// Polygon edges only.
    Line,
    /// Polygon vertices only.
    Point,
}

/// Which polygon faces are discarded.
///
/// The values are bits: `FrontAndBack` is `Front | Back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum CullMode {
    /// Nothing is culled.
    None = 0b00,
    /// Front faces are culled.
    Front = 0b01,
    /// Back faces are culled.
    #[default]
    Back = 0b10,
    /// Every polygon is culled.
    FrontAndBack = 0b11,
}

impl CullMode {
    /// Returns true if front faces are culled.
    pub fn culls_front(self) -> bool {
        self as u32 & Self::Front as u32 != 0
    }

    /// Returns true if back faces are culled.
    pub fn culls_back(self) -> bool {
        self as u32 & Self::Back as u32 != 0
    }
}

/// Winding order that identifies a front face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrontFace {
    /// Clockwise polygons are front facing.
    Clockwise,
    /// Counter-clockwise polygons are front facing.
    #[default]
    CounterClockwise,
}

/// Type of the values in an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    /// 8-bit indices.
    UnsignedByte,
    /// 16-bit indices.
    UnsignedShort,
    /// 32-bit indices.
    UnsignedInt,
}

impl IndexType {
    /// Size of one index in bytes.
    pub fn size(&self) -> u32 {
        match self {
            Self::UnsignedByte => 1,
            Self::UnsignedShort => 2,
            Self::UnsignedInt => 4,
        }
    }
}

/// Clip-space depth range convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipDepthRange {
    /// Depth in `[-1, 1]`.
    #[default]
    NegativeOneToOne,
    /// Depth in `[0, 1]`.
    ZeroToOne,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::none(CullMode::None, false, false)]
    #[case::front(CullMode::Front, true, false)]
    #[case::back(CullMode::Back, false, true)]
    #[case::both(CullMode::FrontAndBack, true, true)]
    fn test_cull_mode_bits(#[case] mode: CullMode, #[case] front: bool, #[case] back: bool) {
        assert_eq!(mode.culls_front(), front);
        assert_eq!(mode.culls_back(), back);
    }

    #[test]
    fn test_front_and_back_is_union() {
        assert_eq!(
            CullMode::FrontAndBack as u32,
            CullMode::Front as u32 | CullMode::Back as u32
        );
    }

    #[rstest]
    #[case(IndexType::UnsignedByte, 1)]
    #[case(IndexType::UnsignedShort, 2)]
    #[case(IndexType::UnsignedInt, 4)]
    fn test_index_size(#[case] index: IndexType, #[case] size: u32) {
        assert_eq!(index.size(), size);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PrimitiveTopology::default(), PrimitiveTopology::TriangleList);
        assert_eq!(PolygonMode::default(), PolygonMode::Fill);
        assert_eq!(CullMode::default(), CullMode::Back);
        assert_eq!(FrontFace::default(), FrontFace::CounterClockwise);
        assert_eq!(ClipDepthRange::default(), ClipDepthRange::NegativeOneToOne);
        assert!(PrimitiveTopology::TriangleFan.is_strip());
        assert!(!PrimitiveTopology::PatchList.is_strip());
    }
}
