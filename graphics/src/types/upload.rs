//! Client-side pixel layouts for texture uploads and readbacks.

/// Channel layout of client pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UploadFormat {
    /// No layout. Rejected by uploads.
    #[default]
    Undefined,
    /// Red only.
    R,
    /// Red and green.
    Rg,
    /// Red, green and blue.
    Rgb,
    /// Blue, green and red.
    Bgr,
    /// Red, green, blue and alpha.
    Rgba,
    /// Blue, green, red and alpha.
    Bgra,
    /// Red only, integer.
    RInteger,
    /// Red and green, integer.
    RgInteger,
    /// Red, green and blue, integer.
    RgbInteger,
    /// Blue, green and red, integer.
    BgrInteger,
    /// Red, green, blue and alpha, integer.
    RgbaInteger,
    /// Blue, green, red and alpha, integer.
    BgraInteger,
    /// Depth only.
    DepthComponent,
    /// Stencil only.
    StencilIndex,
    /// Packed depth and stencil.
    DepthStencil,
    /// Derive the layout from the texture format.
    ///
    /// Only valid for buffer/texture copies.
    InferFormat,
}

impl UploadFormat {
    /// Number of channels per pixel, or `None` when the layout is undefined
    /// or inferred.
    pub fn channel_count(&self) -> Option<u32> {
        match self {
            Self::Undefined | Self::InferFormat => None,
            Self::R | Self::RInteger | Self::DepthComponent | Self::StencilIndex => Some(1),
            Self::Rg | Self::RgInteger | Self::DepthStencil => Some(2),
            Self::Rgb | Self::Bgr | Self::RgbInteger | Self::BgrInteger => Some(3),
            Self::Rgba | Self::Bgra | Self::RgbaInteger | Self::BgraInteger => Some(4),
        }
    }
}

/// Component data type of client pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UploadType {
    /// No type. Rejected by uploads.
    #[default]
    Undefined,
    /// Unsigned 8-bit.
    Ubyte,
    /// Signed 8-bit.
    Sbyte,
    /// Unsigned 16-bit.
    Ushort,
    /// Signed 16-bit.
    Sshort,
    /// Unsigned 32-bit.
    Uint,
    /// Signed 32-bit.
    Sint,
    /// 32-bit float.
    Float,
    /// Packed 3-3-2 in one byte.
    Ubyte332,
    /// Packed 2-3-3 in one byte, reversed component order.
    Ubyte233Rev,
    /// Packed 5-6-5 in 16 bits.
    Ushort565,
    /// Packed 5-6-5 in 16 bits, reversed component order.
    Ushort565Rev,
    /// Packed 4-4-4-4 in 16 bits.
    Ushort4444,
    /// Packed 4-4-4-4 in 16 bits, reversed component order.
    Ushort4444Rev,
    /// Packed 5-5-5-1 in 16 bits.
    Ushort5551,
    /// Packed 1-5-5-5 in 16 bits, reversed component order.
    Ushort1555Rev,
    /// Packed 8-8-8-8 in 32 bits.
    Uint8888,
    /// Packed 8-8-8-8 in 32 bits, reversed component order.
    Uint8888Rev,
    /// Packed 10-10-10-2 in 32 bits.
    Uint1010102,
    /// Packed 2-10-10-10 in 32 bits, reversed component order.
    Uint2101010Rev,
    /// Derive the type from the texture format.
    ///
    /// Only valid for buffer/texture copies.
    InferType,
}

impl UploadType {
    /// Returns true if one value of this type holds a whole pixel.
    pub fn is_packed(&self) -> bool {
        matches!(
            self,
            Self::Ubyte332
                | Self::Ubyte233Rev
                | Self::Ushort565
                | Self::Ushort565Rev
                | Self::Ushort4444
                | Self::Ushort4444Rev
                | Self::Ushort5551
                | Self::Ushort1555Rev
                | Self::Uint8888
                | Self::Uint8888Rev
                | Self::Uint1010102
                | Self::Uint2101010Rev
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_count() {
        assert_eq!(UploadFormat::Bgra.channel_count(), Some(4));
        assert_eq!(UploadFormat::RgInteger.channel_count(), Some(2));
        assert_eq!(UploadFormat::StencilIndex.channel_count(), Some(1));
        assert_eq!(UploadFormat::InferFormat.channel_count(), None);
        assert_eq!(UploadFormat::default().channel_count(), None);
    }

    #[test]
    fn test_packed_types() {
        assert!(UploadType::Uint2101010Rev.is_packed());
        assert!(!UploadType::Float.is_packed());
        assert!(!UploadType::InferType.is_packed());
    }
}
