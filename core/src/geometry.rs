//! Integer extents, offsets and rectangles.
//!
//! Every type here is a plain `Copy` value with component-wise arithmetic:
//!
//! | Operand              | Meaning                                  |
//! |----------------------|------------------------------------------|
//! | `a op b`             | component-wise between two values         |
//! | `a op s` (`s: u32`)  | `s` broadcast to every component of `a`   |
//! | `s op a`             | same as `a op s`                          |
//!
//! Division by zero and shifts by 32 or more are not checked. They behave like
//! the underlying `u32` operation (a panic in debug builds).
//!
//! The 3D types convert into their 2D counterpart by dropping the third
//! component. There is intentionally no conversion in the other direction.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

/// Implements one binary operator (plus its assignment form) component-wise,
/// for `T op T`, `T op u32` and `u32 op T`.
macro_rules! impl_component_op {
    ($ty:ident { $($field:ident),+ }, $trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt) => {
        impl $trait for $ty {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field $op rhs.$field),+ }
            }
        }

        impl $trait<u32> for $ty {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: u32) -> $ty {
                self $op $ty::splat(rhs)
            }
        }

        impl $trait<$ty> for u32 {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: $ty) -> $ty {
                rhs $op $ty::splat(self)
            }
        }

        impl $assign_trait for $ty {
            #[inline]
            fn $assign_method(&mut self, rhs: $ty) {
                *self = *self $op rhs;
            }
        }

        impl $assign_trait<u32> for $ty {
            #[inline]
            fn $assign_method(&mut self, rhs: u32) {
                *self = *self $op rhs;
            }
        }
    };
}

macro_rules! impl_component_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl $ty {
            /// All components set to zero.
            pub const ZERO: $ty = $ty { $($field: 0),+ };

            /// Create a value with every component set to `value`.
            #[inline]
            pub const fn splat(value: u32) -> $ty {
                $ty { $($field: value),+ }
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: $ty) -> $ty {
                $ty { $($field: self.$field.min(other.$field)),+ }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: $ty) -> $ty {
                $ty { $($field: self.$field.max(other.$field)),+ }
            }
        }

        impl_component_op!($ty { $($field),+ }, Add::add, AddAssign::add_assign, +);
        impl_component_op!($ty { $($field),+ }, Sub::sub, SubAssign::sub_assign, -);
        impl_component_op!($ty { $($field),+ }, Mul::mul, MulAssign::mul_assign, *);
        impl_component_op!($ty { $($field),+ }, Div::div, DivAssign::div_assign, /);
        impl_component_op!($ty { $($field),+ }, Shl::shl, ShlAssign::shl_assign, <<);
        impl_component_op!($ty { $($field),+ }, Shr::shr, ShrAssign::shr_assign, >>);
    };
}

// ============================================================================
// Extents
// ============================================================================

/// 2D size in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent2d {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Extent2d {
    /// Create a new 2D extent.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of texels covered (`width * height`).
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns true if any component is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl_component_ops!(Extent2d { width, height });

/// 3D size in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent3d {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
    /// Depth (1 for 2D images).
    pub depth: u32,
}

impl Extent3d {
    /// Create a new 3D extent.
    #[inline]
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Create a 2D-shaped extent with `depth == 1`.
    #[inline]
    pub const fn new_2d(width: u32, height: u32) -> Self {
        Self::new(width, height, 1)
    }

    /// Number of texels covered (`width * height * depth`).
    #[inline]
    pub fn volume(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * u64::from(self.depth)
    }

    /// Returns true if any component is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.depth == 0
    }
}

impl_component_ops!(Extent3d {
    width,
    height,
    depth
});

impl From<Extent3d> for Extent2d {
    #[inline]
    fn from(extent: Extent3d) -> Self {
        Self {
            width: extent.width,
            height: extent.height,
        }
    }
}

// ============================================================================
// Offsets
// ============================================================================

/// 2D position in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset2d {
    /// X coordinate.
    pub x: u32,
    /// Y coordinate.
    pub y: u32,
}

impl Offset2d {
    /// Create a new 2D offset.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl_component_ops!(Offset2d { x, y });

/// 3D position in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset3d {
    /// X coordinate.
    pub x: u32,
    /// Y coordinate.
    pub y: u32,
    /// Z coordinate.
    pub z: u32,
}

impl Offset3d {
    /// Create a new 3D offset.
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

impl_component_ops!(Offset3d { x, y, z });

impl From<Offset3d> for Offset2d {
    #[inline]
    fn from(offset: Offset3d) -> Self {
        Self {
            x: offset.x,
            y: offset.y,
        }
    }
}

// ============================================================================
// Rect2d
// ============================================================================

/// Axis-aligned rectangle: an offset plus an extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect2d {
    /// Top-left corner.
    pub offset: Offset2d,
    /// Size.
    pub extent: Extent2d,
}

impl Rect2d {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(offset: Offset2d, extent: Extent2d) -> Self {
        Self { offset, extent }
    }

    /// Rectangle at the origin covering `extent`.
    #[inline]
    pub const fn from_extent(extent: Extent2d) -> Self {
        Self {
            offset: Offset2d::ZERO,
            extent,
        }
    }
}
