//! Strongly typed flag sets built from plain bit enumerations.
//!
//! A bit enumeration is an ordinary `#[repr]` enum whose variants are powers of
//! two, or explicit composites of other variants (`FRONT_AND_BACK = FRONT | BACK`).
//! [`impl_flag_bits!`] registers such an enum, after which [`Flags<B>`] is its
//! flag set:
//!
//! ```
//! use vesper_core::flags::Flags;
//! use vesper_core::impl_flag_bits;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! #[repr(u32)]
//! enum Access {
//!     Read = 1 << 0,
//!     Write = 1 << 1,
//! }
//!
//! impl_flag_bits!(Access: u32 { Read, Write });
//!
//! let rw: Flags<Access> = Access::Read | Access::Write;
//! assert!(rw.contains(Access::Write));
//! assert!(bool::from(rw & Access::Read));
//! assert_eq!(rw.bits(), 0b11);
//! ```
//!
//! Construction never validates. Bits outside every named variant survive all
//! operations and can be detected with [`Flags::has_unknown_bits`]; consumers
//! (backends) are expected to reject them rather than mask them away.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Unsigned integer that can back a flag set.
pub trait FlagStorage:
    Copy
    + Eq
    + Hash
    + fmt::Debug
    + fmt::LowerHex
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The value with no bits set.
    const ZERO: Self;
}

macro_rules! impl_flag_storage {
    ($($ty:ty),+) => {
        $(
            impl FlagStorage for $ty {
                const ZERO: Self = 0;
            }
        )+
    };
}

impl_flag_storage!(u8, u16, u32, u64);

/// A named bit enumeration usable with [`Flags`].
///
/// Usually implemented through [`impl_flag_bits!`].
pub trait FlagBits: Copy + 'static {
    /// Underlying integer type.
    type Storage: FlagStorage;

    /// Every named variant, composites included.
    const ALL: &'static [Self];

    /// Raw value of this bit (or composite).
    fn bits(self) -> Self::Storage;
}

/// A set of bits drawn from the enumeration `B`.
///
/// Each bit enumeration gets its own distinct flag type, so flags of unrelated
/// enumerations cannot be mixed by accident.
pub struct Flags<B: FlagBits> {
    bits: B::Storage,
    _marker: PhantomData<fn() -> B>,
}

impl<B: FlagBits> Flags<B> {
    /// The empty set.
    #[inline]
    pub fn empty() -> Self {
        Self::from_bits(B::Storage::ZERO)
    }

    /// Wrap a raw integer. No validation is performed.
    #[inline]
    pub fn from_bits(bits: B::Storage) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    /// The union of every named variant.
    pub fn known_bits() -> B::Storage {
        B::ALL
            .iter()
            .fold(B::Storage::ZERO, |acc, bit| acc | bit.bits())
    }

    /// Underlying integer value.
    #[inline]
    pub fn bits(self) -> B::Storage {
        self.bits
    }

    /// Returns true if no bit is set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == B::Storage::ZERO
    }

    /// Returns true if any bit is set.
    #[inline]
    pub fn any(self) -> bool {
        !self.is_empty()
    }

    /// Returns true if every bit of `other` is also set in `self`.
    #[inline]
    pub fn contains(self, other: impl Into<Self>) -> bool {
        let other = other.into().bits;
        self.bits & other == other
    }

    /// Returns true if `self` and `other` share at least one bit.
    #[inline]
    pub fn intersects(self, other: impl Into<Self>) -> bool {
        self.bits & other.into().bits != B::Storage::ZERO
    }

    /// Set every bit of `other`.
    #[inline]
    pub fn insert(&mut self, other: impl Into<Self>) {
        self.bits = self.bits | other.into().bits;
    }

    /// Clear every bit of `other`.
    #[inline]
    pub fn remove(&mut self, other: impl Into<Self>) {
        self.bits = self.bits & !other.into().bits;
    }

    /// Bits that are not covered by any named variant.
    #[inline]
    pub fn unknown_bits(self) -> B::Storage {
        self.bits & !Self::known_bits()
    }

    /// Returns true if any bit outside the named variants is set.
    #[inline]
    pub fn has_unknown_bits(self) -> bool {
        self.unknown_bits() != B::Storage::ZERO
    }
}

impl<B: FlagBits> Clone for Flags<B> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: FlagBits> Copy for Flags<B> {}

impl<B: FlagBits> Default for Flags<B> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<B: FlagBits> PartialEq for Flags<B> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<B: FlagBits> Eq for Flags<B> {}

impl<B: FlagBits> Hash for Flags<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<B: FlagBits> fmt::Debug for Flags<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = std::any::type_name::<B>();
        let name = name.rsplit("::").next().unwrap_or(name);
        write!(f, "Flags<{name}>({:#x})", self.bits)
    }
}

impl<B: FlagBits> From<B> for Flags<B> {
    #[inline]
    fn from(bit: B) -> Self {
        Self::from_bits(bit.bits())
    }
}

impl<B: FlagBits> From<Flags<B>> for bool {
    #[inline]
    fn from(flags: Flags<B>) -> bool {
        flags.any()
    }
}

impl<B: FlagBits> FromIterator<B> for Flags<B> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, bit| acc | bit)
    }
}

macro_rules! impl_flags_op {
    ($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt) => {
        impl<B: FlagBits, R: Into<Flags<B>>> $trait<R> for Flags<B> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: R) -> Self {
                Self::from_bits(self.bits $op rhs.into().bits)
            }
        }

        impl<B: FlagBits, R: Into<Flags<B>>> $assign_trait<R> for Flags<B> {
            #[inline]
            fn $assign_method(&mut self, rhs: R) {
                self.bits = self.bits $op rhs.into().bits;
            }
        }
    };
}

impl_flags_op!(BitOr::bitor, BitOrAssign::bitor_assign, |);
impl_flags_op!(BitAnd::bitand, BitAndAssign::bitand_assign, &);
impl_flags_op!(BitXor::bitxor, BitXorAssign::bitxor_assign, ^);

impl<B: FlagBits> Not for Flags<B> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_bits(!self.bits)
    }
}

/// Register a `#[repr]` enum as a bit enumeration.
///
/// Implements [`FlagBits`](crate::flags::FlagBits) with the listed variants and
/// the `| & ^ !` operators on bare bits, each producing a
/// [`Flags`](crate::flags::Flags) value.
#[macro_export]
macro_rules! impl_flag_bits {
    ($bits:ident : $storage:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::flags::FlagBits for $bits {
            type Storage = $storage;

            const ALL: &'static [Self] = &[$($bits::$variant),+];

            #[inline]
            fn bits(self) -> $storage {
                self as $storage
            }
        }

        impl<R: Into<$crate::flags::Flags<$bits>>> ::std::ops::BitOr<R> for $bits {
            type Output = $crate::flags::Flags<$bits>;

            #[inline]
            fn bitor(self, rhs: R) -> Self::Output {
                $crate::flags::Flags::from(self) | rhs
            }
        }

        impl<R: Into<$crate::flags::Flags<$bits>>> ::std::ops::BitAnd<R> for $bits {
            type Output = $crate::flags::Flags<$bits>;

            #[inline]
            fn bitand(self, rhs: R) -> Self::Output {
                $crate::flags::Flags::from(self) & rhs
            }
        }

        impl<R: Into<$crate::flags::Flags<$bits>>> ::std::ops::BitXor<R> for $bits {
            type Output = $crate::flags::Flags<$bits>;

            #[inline]
            fn bitxor(self, rhs: R) -> Self::Output {
                $crate::flags::Flags::from(self) ^ rhs
            }
        }

        impl ::std::ops::Not for $bits {
            type Output = $crate::flags::Flags<$bits>;

            #[inline]
            fn not(self) -> Self::Output {
                !$crate::flags::Flags::from(self)
            }
        }
    };
}
