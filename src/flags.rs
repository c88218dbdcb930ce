//! Bitmask decomposition into fixed records of named booleans.

/// Whether every bit of `mask` is set in `value`.
///
/// A zero mask is vacuously set.
#[inline]
pub fn is_flag_set(value: u32, mask: u32) -> bool {
    value & mask == mask
}

/// Declares a record of named booleans decomposed from a `u32`.
///
/// Each field is tested with [`is_flag_set`] against its mask. The source
/// integer is not stored.
macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident = $mask:expr,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: bool,
            )+
        }

        impl $name {
            /// `(field, mask)` pairs in declaration order.
            pub const MASKS: &'static [(&'static str, u32)] = &[$((stringify!($field), $mask),)+];

            /// Decomposes `bits` into the named fields.
            pub fn from_bits(bits: u32) -> Self {
                Self {
                    $($field: $crate::flags::is_flag_set(bits, $mask),)+
                }
            }
        }
    };
}

pub(crate) use flag_set;
