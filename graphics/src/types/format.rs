//! Pixel formats and image layout vocabulary.

/// Pixel format of a texture or vertex attribute.
///
/// `Undefined` is never valid for resource creation; it exists so that
/// descriptors can be default-constructed before a format is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Format {
    /// No format. Rejected by every consumer.
    #[default]
    Undefined,

    // Normalized color formats
    /// 8-bit red channel, unsigned normalized.
    R8Unorm,
    /// 8-bit red channel, signed normalized.
    R8Snorm,
    /// 16-bit red channel, unsigned normalized.
    R16Unorm,
    /// 16-bit red channel, signed normalized.
    R16Snorm,
    /// 8-bit RG channels, unsigned normalized.
    Rg8Unorm,
    /// 8-bit RG channels, signed normalized.
    Rg8Snorm,
    /// 16-bit RG channels, unsigned normalized.
    Rg16Unorm,
    /// 16-bit RG channels, signed normalized.
    Rg16Snorm,
    /// Packed 3-3-2 bit RGB, unsigned normalized.
    R3G3B2Unorm,
    /// 4-bit RGB channels, unsigned normalized.
    Rgb4Unorm,
    /// 5-bit RGB channels, unsigned normalized.
    Rgb5Unorm,
    /// 8-bit RGB channels, unsigned normalized.
    Rgb8Unorm,
    /// 8-bit RGB channels, signed normalized.
    Rgb8Snorm,
    /// 10-bit RGB channels, unsigned normalized.
    Rgb10Unorm,
    /// 12-bit RGB channels, unsigned normalized.
    Rgb12Unorm,
    /// 16-bit RGB channels, signed normalized.
    Rgb16Snorm,
    /// 2-bit RGBA channels, unsigned normalized.
    Rgba2Unorm,
    /// 4-bit RGBA channels, unsigned normalized.
    Rgba4Unorm,
    /// 5-bit RGB with 1-bit alpha, unsigned normalized.
    Rgb5A1Unorm,
    /// 8-bit RGBA channels, unsigned normalized.
    Rgba8Unorm,
    /// 8-bit RGBA channels, signed normalized.
    Rgba8Snorm,
    /// 10-bit RGB with 2-bit alpha, unsigned normalized.
    Rgb10A2Unorm,
    /// 10-bit RGB with 2-bit alpha, unsigned integer.
    Rgb10A2Uint,
    /// 12-bit RGBA channels, unsigned normalized.
    Rgba12Unorm,
    /// 16-bit RGBA channels, unsigned normalized.
    Rgba16Unorm,
    /// 16-bit RGBA channels, signed normalized.
    Rgba16Snorm,

    // sRGB formats
    /// 8-bit RGB channels, sRGB encoded.
    Rgb8Srgb,
    /// 8-bit RGBA channels, sRGB encoded color with linear alpha.
    Rgba8Srgb,

    // Float formats
    /// 16-bit red channel, float.
    R16Float,
    /// 16-bit RG channels, float.
    Rg16Float,
    /// 16-bit RGB channels, float.
    Rgb16Float,
    /// 16-bit RGBA channels, float.
    Rgba16Float,
    /// 32-bit red channel, float.
    R32Float,
    /// 32-bit RG channels, float.
    Rg32Float,
    /// 32-bit RGB channels, float.
    Rgb32Float,
    /// 32-bit RGBA channels, float.
    Rgba32Float,
    /// Packed 11-11-10 bit unsigned float RGB.
    Rg11B10Float,
    /// Shared-exponent RGB with 9-bit mantissas.
    Rgb9E5,

    // Integer formats
    /// 8-bit red channel, signed integer.
    R8Sint,
    /// 8-bit red channel, unsigned integer.
    R8Uint,
    /// 16-bit red channel, signed integer.
    R16Sint,
    /// 16-bit red channel, unsigned integer.
    R16Uint,
    /// 32-bit red channel, signed integer.
    R32Sint,
    /// 32-bit red channel, unsigned integer.
    R32Uint,
    /// 8-bit RG channels, signed integer.
    Rg8Sint,
    /// 8-bit RG channels, unsigned integer.
    Rg8Uint,
    /// 16-bit RG channels, signed integer.
    Rg16Sint,
    /// 16-bit RG channels, unsigned integer.
    Rg16Uint,
    /// 32-bit RG channels, signed integer.
    Rg32Sint,
    /// 32-bit RG channels, unsigned integer.
    Rg32Uint,
    /// 8-bit RGB channels, signed integer.
    Rgb8Sint,
    /// 8-bit RGB channels, unsigned integer.
    Rgb8Uint,
    /// 16-bit RGB channels, signed integer.
    Rgb16Sint,
    /// 16-bit RGB channels, unsigned integer.
    Rgb16Uint,
    /// 32-bit RGB channels, signed integer.
    Rgb32Sint,
    /// 32-bit RGB channels, unsigned integer.
    Rgb32Uint,
    /// 8-bit RGBA channels, signed integer.
    Rgba8Sint,
    /// 8-bit RGBA channels, unsigned integer.
    Rgba8Uint,
    /// 16-bit RGBA channels, signed integer.
    Rgba16Sint,
    /// 16-bit RGBA channels, unsigned integer.
    Rgba16Uint,
    /// 32-bit RGBA channels, signed integer.
    Rgba32Sint,
    /// 32-bit RGBA channels, unsigned integer.
    Rgba32Uint,

    // Depth/stencil formats
    /// 32-bit depth, float.
    D32Float,
    /// 32-bit depth, unsigned normalized.
    D32Unorm,
    /// 24-bit depth, unsigned normalized.
    D24Unorm,
    /// 16-bit depth, unsigned normalized.
    D16Unorm,
    /// 32-bit float depth with 8-bit stencil.
    D32FloatS8Uint,
    /// 24-bit depth with 8-bit stencil.
    D24UnormS8Uint,

    // Block-compressed formats
    /// BC1 (DXT1) RGB, unsigned normalized.
    Bc1RgbUnorm,
    /// BC1 (DXT1) RGB, sRGB.
    Bc1RgbSrgb,
    /// BC1 (DXT1) RGBA with 1-bit alpha, unsigned normalized.
    Bc1RgbaUnorm,
    /// BC1 (DXT1) RGBA with 1-bit alpha, sRGB.
    Bc1RgbaSrgb,
    /// BC2 (DXT3) RGBA, unsigned normalized.
    Bc2RgbaUnorm,
    /// BC2 (DXT3) RGBA, sRGB.
    Bc2RgbaSrgb,
    /// BC3 (DXT5) RGBA, unsigned normalized.
    Bc3RgbaUnorm,
    /// BC3 (DXT5) RGBA, sRGB.
    Bc3RgbaSrgb,
    /// BC4 (RGTC1) red, unsigned normalized.
    Bc4RUnorm,
    /// BC4 (RGTC1) red, signed normalized.
    Bc4RSnorm,
    /// BC5 (RGTC2) RG, unsigned normalized.
    Bc5RgUnorm,
    /// BC5 (RGTC2) RG, signed normalized.
    Bc5RgSnorm,
    /// BC6H (BPTC) RGB, unsigned float.
    Bc6hRgbUfloat,
    /// BC6H (BPTC) RGB, signed float.
    Bc6hRgbSfloat,
    /// BC7 (BPTC) RGBA, unsigned normalized.
    Bc7RgbaUnorm,
    /// BC7 (BPTC) RGBA, sRGB.
    Bc7RgbaSrgb,
}

impl Format {
    /// Returns true for [`Format::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if this format has a depth component.
    pub fn is_depth(&self) -> bool {
        matches!(
            self,
            Self::D32Float
                | Self::D32Unorm
                | Self::D24Unorm
                | Self::D16Unorm
                | Self::D32FloatS8Uint
                | Self::D24UnormS8Uint
        )
    }

    /// Returns true if this format has a stencil component.
    pub fn has_stencil(&self) -> bool {
        matches!(self, Self::D32FloatS8Uint | Self::D24UnormS8Uint)
    }

    /// Returns true if this is a depth or stencil format.
    pub fn is_depth_stencil(&self) -> bool {
        self.is_depth() || self.has_stencil()
    }

    /// Returns true if this format can be bound as a color attachment or
    /// sampled as color.
    pub fn is_color(&self) -> bool {
        !self.is_undefined() && !self.is_depth_stencil()
    }

    /// Returns true if this is a block-compressed format.
    pub fn is_compressed(&self) -> bool {
        matches!(
            self,
            Self::Bc1RgbUnorm
                | Self::Bc1RgbSrgb
                | Self::Bc1RgbaUnorm
                | Self::Bc1RgbaSrgb
                | Self::Bc2RgbaUnorm
                | Self::Bc2RgbaSrgb
                | Self::Bc3RgbaUnorm
                | Self::Bc3RgbaSrgb
                | Self::Bc4RUnorm
                | Self::Bc4RSnorm
                | Self::Bc5RgUnorm
                | Self::Bc5RgSnorm
                | Self::Bc6hRgbUfloat
                | Self::Bc6hRgbSfloat
                | Self::Bc7RgbaUnorm
                | Self::Bc7RgbaSrgb
        )
    }

    /// Returns true if this format stores sRGB-encoded color.
    pub fn is_srgb(&self) -> bool {
        matches!(
            self,
            Self::Rgb8Srgb
                | Self::Rgba8Srgb
                | Self::Bc1RgbSrgb
                | Self::Bc1RgbaSrgb
                | Self::Bc2RgbaSrgb
                | Self::Bc3RgbaSrgb
                | Self::Bc7RgbaSrgb
        )
    }

    /// Returns true if shaders read this format as integers rather than floats.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Rgb10A2Uint
                | Self::R8Sint
                | Self::R8Uint
                | Self::R16Sint
                | Self::R16Uint
                | Self::R32Sint
                | Self::R32Uint
                | Self::Rg8Sint
                | Self::Rg8Uint
                | Self::Rg16Sint
                | Self::Rg16Uint
                | Self::Rg32Sint
                | Self::Rg32Uint
                | Self::Rgb8Sint
                | Self::Rgb8Uint
                | Self::Rgb16Sint
                | Self::Rgb16Uint
                | Self::Rgb32Sint
                | Self::Rgb32Uint
                | Self::Rgba8Sint
                | Self::Rgba8Uint
                | Self::Rgba16Sint
                | Self::Rgba16Uint
                | Self::Rgba32Sint
                | Self::Rgba32Uint
        )
    }

    /// Returns the size in bytes per texel, or per 4x4 block for compressed
    /// formats.
    ///
    /// Formats whose channels are not byte aligned report the size of the
    /// storage they occupy (`Rgb12Unorm` is stored as three 16-bit channels).
    /// `Undefined` reports zero.
    pub fn block_size(&self) -> u32 {
        match self {
            Self::Undefined => 0,

            Self::R8Unorm | Self::R8Snorm | Self::R3G3B2Unorm | Self::Rgba2Unorm => 1,
            Self::R8Sint | Self::R8Uint => 1,

            Self::R16Unorm
            | Self::R16Snorm
            | Self::Rg8Unorm
            | Self::Rg8Snorm
            | Self::Rgb4Unorm
            | Self::Rgb5Unorm
            | Self::Rgba4Unorm
            | Self::Rgb5A1Unorm
            | Self::R16Float
            | Self::R16Sint
            | Self::R16Uint
            | Self::Rg8Sint
            | Self::Rg8Uint
            | Self::D16Unorm => 2,

            Self::Rgb8Unorm
            | Self::Rgb8Snorm
            | Self::Rgb8Srgb
            | Self::Rgb8Sint
            | Self::Rgb8Uint => 3,

            Self::Rg16Unorm
            | Self::Rg16Snorm
            | Self::Rgb10Unorm
            | Self::Rgba8Unorm
            | Self::Rgba8Snorm
            | Self::Rgb10A2Unorm
            | Self::Rgb10A2Uint
            | Self::Rgba8Srgb
            | Self::Rg16Float
            | Self::R32Float
            | Self::Rg11B10Float
            | Self::Rgb9E5
            | Self::R32Sint
            | Self::R32Uint
            | Self::Rg16Sint
            | Self::Rg16Uint
            | Self::Rgba8Sint
            | Self::Rgba8Uint
            | Self::D32Float
            | Self::D32Unorm
            | Self::D24Unorm
            | Self::D24UnormS8Uint => 4,

            Self::Rgb12Unorm
            | Self::Rgb16Snorm
            | Self::Rgb16Float
            | Self::Rgb16Sint
            | Self::Rgb16Uint => 6,

            Self::Rgba12Unorm
            | Self::Rgba16Unorm
            | Self::Rgba16Snorm
            | Self::Rgba16Float
            | Self::Rg32Float
            | Self::Rg32Sint
            | Self::Rg32Uint
            | Self::Rgba16Sint
            | Self::Rgba16Uint
            | Self::D32FloatS8Uint => 8,

            Self::Rgb32Float | Self::Rgb32Sint | Self::Rgb32Uint => 12,

            Self::Rgba32Float | Self::Rgba32Sint | Self::Rgba32Uint => 16,

            Self::Bc1RgbUnorm
            | Self::Bc1RgbSrgb
            | Self::Bc1RgbaUnorm
            | Self::Bc1RgbaSrgb
            | Self::Bc4RUnorm
            | Self::Bc4RSnorm => 8,

            Self::Bc2RgbaUnorm
            | Self::Bc2RgbaSrgb
            | Self::Bc3RgbaUnorm
            | Self::Bc3RgbaSrgb
            | Self::Bc5RgUnorm
            | Self::Bc5RgSnorm
            | Self::Bc6hRgbUfloat
            | Self::Bc6hRgbSfloat
            | Self::Bc7RgbaUnorm
            | Self::Bc7RgbaSrgb => 16,
        }
    }
}

/// Dimensionality and arrangement of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageType {
    /// One-dimensional texture.
    Tex1d,
    /// Two-dimensional texture.
    #[default]
    Tex2d,
    /// Three-dimensional texture.
    Tex3d,
    /// Array of 1D textures.
    Tex1dArray,
    /// Array of 2D textures.
    Tex2dArray,
    /// Cube map.
    TexCubemap,
    /// Array of cube maps.
    TexCubemapArray,
    /// Multisampled 2D texture.
    Tex2dMultisample,
    /// Array of multisampled 2D textures.
    Tex2dMultisampleArray,
}

impl ImageType {
    /// Returns true for the multisampled image types.
    pub fn is_multisampled(&self) -> bool {
        matches!(self, Self::Tex2dMultisample | Self::Tex2dMultisampleArray)
    }
}

/// Source of one component when an image view is swizzled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentSwizzle {
    /// Constant zero.
    Zero,
    /// Constant one.
    One,
    /// Red channel.
    R,
    /// Green channel.
    G,
    /// Blue channel.
    B,
    /// Alpha channel.
    A,
}

/// Number of samples per pixel for multisampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(u32)]
pub enum SampleCount {
    /// Single sample, no multisampling.
    #[default]
    X1 = 1,
    /// 2 samples.
    X2 = 2,
    /// 4 samples.
    X4 = 4,
    /// 8 samples.
    X8 = 8,
    /// 16 samples.
    X16 = 16,
    /// 32 samples.
    X32 = 32,
}

impl SampleCount {
    /// Number of samples.
    pub fn count(self) -> u32 {
        self as u32
    }

    /// Convert a raw sample count. Returns `None` if `count` is not a
    /// supported power of two.
    pub fn from_count(count: u32) -> Option<Self> {
        match count {
            1 => Some(Self::X1),
            2 => Some(Self::X2),
            4 => Some(Self::X4),
            8 => Some(Self::X8),
            16 => Some(Self::X16),
            32 => Some(Self::X32),
            _ => None,
        }
    }
}
