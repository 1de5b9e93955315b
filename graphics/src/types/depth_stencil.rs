//! Depth and stencil test vocabulary.

/// Comparison used by depth and stencil tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Never passes.
    Never,
    /// Passes if the new value is less than the stored value.
    Less,
    /// Passes if the values are equal.
    Equal,
    /// Passes if the new value is less than or equal to the stored value.
    LessOrEqual,
    /// Passes if the new value is greater than the stored value.
    Greater,
    /// Passes if the values differ.
    NotEqual,
    /// Passes if the new value is greater than or equal to the stored value.
    GreaterOrEqual,
    /// Always passes.
    Always,
}

impl CompareOp {
    /// Evaluate the comparison on two values, `new` against `stored`.
    pub fn compare<T: PartialOrd>(self, new: T, stored: T) -> bool {
        match self {
            Self::Never => false,
            Self::Less => new < stored,
            Self::Equal => new == stored,
            Self::LessOrEqual => new <= stored,
            Self::Greater => new > stored,
            Self::NotEqual => new != stored,
            Self::GreaterOrEqual => new >= stored,
            Self::Always => true,
        }
    }
}

/// Action applied to the stencil buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StencilOp {
    /// Keep the current value.
    #[default]
    Keep,
    /// Set to zero.
    Zero,
    /// Set to the reference value.
    Replace,
    /// Increment, clamping at the maximum.
    IncrementAndClamp,
    /// Decrement, clamping at zero.
    DecrementAndClamp,
    /// Bitwise invert.
    Invert,
    /// Increment, wrapping to zero.
    IncrementAndWrap,
    /// Decrement, wrapping to the maximum.
    DecrementAndWrap,
}
