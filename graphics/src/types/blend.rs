//! Color blending vocabulary.

use vesper_core::{Flags, impl_flag_bits};

/// Framebuffer logical operation, applied instead of blending when enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicOp {
    /// `0`
    Clear,
    /// `!0`
    Set,
    /// `s`
    #[default]
    Copy,
    /// `!s`
    CopyInverted,
    /// `d`
    NoOp,
    /// `!d`
    Invert,
    /// `s & d`
    And,
    /// `!(s & d)`
    Nand,
    /// `s | d`
    Or,
    /// `!(s | d)`
    Nor,
    /// `s ^ d`
    Xor,
    /// `!(s ^ d)`
    Equivalent,
    /// `s & !d`
    AndReverse,
    /// `s | !d`
    OrReverse,
    /// `!s & d`
    AndInverted,
    /// `!s | d`
    OrInverted,
}

/// Multiplier applied to a blend operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// `0`
    Zero,
    /// `1`
    One,
    /// Source color.
    SrcColor,
    /// `1 - source color`.
    OneMinusSrcColor,
    /// Destination color.
    DstColor,
    /// `1 - destination color`.
    OneMinusDstColor,
    /// Source alpha.
    SrcAlpha,
    /// `1 - source alpha`.
    OneMinusSrcAlpha,
    /// Destination alpha.
    DstAlpha,
    /// `1 - destination alpha`.
    OneMinusDstAlpha,
    /// Blend constant color.
    ConstantColor,
    /// `1 - blend constant color`.
    OneMinusConstantColor,
    /// Blend constant alpha.
    ConstantAlpha,
    /// `1 - blend constant alpha`.
    OneMinusConstantAlpha,
    /// `min(source alpha, 1 - destination alpha)`.
    SrcAlphaSaturate,
    /// Second source color (dual-source blending).
    Src1Color,
    /// `1 - second source color`.
    OneMinusSrc1Color,
    /// Second source alpha.
    Src1Alpha,
    /// `1 - second source alpha`.
    OneMinusSrc1Alpha,
}

impl BlendFactor {
    /// Returns true if the factor reads the second fragment output.
    pub fn uses_dual_source(&self) -> bool {
        matches!(
            self,
            Self::Src1Color | Self::OneMinusSrc1Color | Self::Src1Alpha | Self::OneMinusSrc1Alpha
        )
    }

    /// Returns true if the factor reads the pipeline blend constants.
    pub fn uses_constant(&self) -> bool {
        matches!(
            self,
            Self::ConstantColor
                | Self::OneMinusConstantColor
                | Self::ConstantAlpha
                | Self::OneMinusConstantAlpha
        )
    }
}

/// How the weighted source and destination are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendOp {
    /// `src + dst`
    #[default]
    Add,
    /// `src - dst`
    Subtract,
    /// `dst - src`
    ReverseSubtract,
    /// `min(src, dst)`, factors ignored.
    Min,
    /// `max(src, dst)`, factors ignored.
    Max,
}

/// Color channels written by a color attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ColorComponentFlag {
    /// No channel.
    None = 0,
    /// Red.
    R = 0b0001,
    /// Green.
    G = 0b0010,
    /// Blue.
    B = 0b0100,
    /// Alpha.
    A = 0b1000,
    /// All four channels.
    Rgba = 0b1111,
}

impl_flag_bits!(ColorComponentFlag: u32 { None, R, G, B, A, Rgba });

/// Set of [`ColorComponentFlag`]s.
pub type ColorComponentFlags = Flags<ColorComponentFlag>;
