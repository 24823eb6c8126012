//! Operator plumbing shared by every flag set.
//!
//! `a | b`, `a & b` and `a ^ b` forward to `set`, `mask` and `flip`, with any
//! operand that converts into the flag set: a single flag, a list, another
//! set. [`enum_flag_ops!`](crate::enum_flag_ops) adds `Enum | Enum -> Flags`
//! for the enum-based designs.

/// Implement `| & ^` and their assign forms for a flag set with
/// `set`, `mask` and `flip` methods taking `impl Into<Self>`.
macro_rules! impl_flag_operators {
    (impl<$($p:ident: $b:path),+> $ty:ty) => {
        impl<$($p: $b,)+ Rhs: Into<$ty>> ::core::ops::BitOr<Rhs> for $ty {
            type Output = $ty;
            #[inline]
            fn bitor(self, rhs: Rhs) -> $ty {
                self.set(rhs)
            }
        }

        impl<$($p: $b,)+ Rhs: Into<$ty>> ::core::ops::BitAnd<Rhs> for $ty {
            type Output = $ty;
            #[inline]
            fn bitand(self, rhs: Rhs) -> $ty {
                self.mask(rhs)
            }
        }

        impl<$($p: $b,)+ Rhs: Into<$ty>> ::core::ops::BitXor<Rhs> for $ty {
            type Output = $ty;
            #[inline]
            fn bitxor(self, rhs: Rhs) -> $ty {
                self.flip(rhs)
            }
        }

        impl<$($p: $b,)+ Rhs: Into<$ty>> ::core::ops::BitOrAssign<Rhs> for $ty {
            #[inline]
            fn bitor_assign(&mut self, rhs: Rhs) {
                *self = self.set(rhs);
            }
        }

        impl<$($p: $b,)+ Rhs: Into<$ty>> ::core::ops::BitAndAssign<Rhs> for $ty {
            #[inline]
            fn bitand_assign(&mut self, rhs: Rhs) {
                *self = self.mask(rhs);
            }
        }

        impl<$($p: $b,)+ Rhs: Into<$ty>> ::core::ops::BitXorAssign<Rhs> for $ty {
            #[inline]
            fn bitxor_assign(&mut self, rhs: Rhs) {
                *self = self.flip(rhs);
            }
        }
    };
}

pub(crate) use impl_flag_operators;

/// Let two enum values combine into their flag set: `Animal::Cat | Animal::Dog`.
///
/// Invoke it next to the flag set declaration; `$enum` must be local to the
/// invoking crate.
///
/// ```
/// use typeflags::{enum_flag_ops, BitFlags, Enumerant};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
/// enum Animal { Cat, Dog, Wolf = 3 }
///
/// type Animals = BitFlags<Animal>;
/// enum_flag_ops!(Animal => Animals);
///
/// let pack = Animal::Cat | Animal::Dog;
/// assert_eq!(pack.bits(), 0b11);
/// ```
#[macro_export]
macro_rules! enum_flag_ops {
    ($enum:ty => $flags:ty) => {
        impl ::core::ops::BitOr for $enum {
            type Output = $flags;
            #[inline]
            fn bitor(self, rhs: $enum) -> $flags {
                <$flags>::from(self) | rhs
            }
        }

        impl ::core::ops::BitOr<$flags> for $enum {
            type Output = $flags;
            #[inline]
            fn bitor(self, rhs: $flags) -> $flags {
                rhs | self
            }
        }
    };
}
