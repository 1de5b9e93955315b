//! Sampler vocabulary.

/// Texel filtering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// No filtering. Only meaningful for the mipmap filter, where it disables
    /// mip selection.
    #[default]
    None,
    /// Nearest neighbor.
    Nearest,
    /// Linear interpolation.
    Linear,
}

/// How texture coordinates outside `[0, 1]` are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Tile the texture.
    #[default]
    Repeat,
    /// Tile the texture, mirroring every other repetition.
    MirroredRepeat,
    /// Clamp to the edge texel.
    ClampToEdge,
    /// Return the border color.
    ClampToBorder,
    /// Mirror once, then clamp to the edge texel.
    MirrorClampToEdge,
}

/// Border color used by [`AddressMode::ClampToBorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderColor {
    /// `(0.0, 0.0, 0.0, 0.0)`.
    #[default]
    FloatTransparentBlack,
    /// `(0, 0, 0, 0)`.
    IntTransparentBlack,
    /// `(0.0, 0.0, 0.0, 1.0)`.
    FloatOpaqueBlack,
    /// `(0, 0, 0, 1)`.
    IntOpaqueBlack,
    /// `(1.0, 1.0, 1.0, 1.0)`.
    FloatOpaqueWhite,
    /// `(1, 1, 1, 1)`.
    IntOpaqueWhite,
}

impl BorderColor {
    /// Returns true if the border color is meant for integer formats.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::IntTransparentBlack | Self::IntOpaqueBlack | Self::IntOpaqueWhite
        )
    }

    /// The border color as RGBA components.
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Self::FloatTransparentBlack | Self::IntTransparentBlack => [0.0, 0.0, 0.0, 0.0],
            Self::FloatOpaqueBlack | Self::IntOpaqueBlack => [0.0, 0.0, 0.0, 1.0],
            Self::FloatOpaqueWhite | Self::IntOpaqueWhite => [1.0, 1.0, 1.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_color() {
        assert!(BorderColor::IntOpaqueWhite.is_integer());
        assert!(!BorderColor::FloatOpaqueWhite.is_integer());
        assert_eq!(BorderColor::FloatOpaqueBlack.rgba(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            BorderColor::IntOpaqueWhite.rgba(),
            BorderColor::FloatOpaqueWhite.rgba()
        );
    }
}
