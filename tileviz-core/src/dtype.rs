//! Element types that can appear in a shape descriptor.

use std::{fmt, str::FromStr};

use crate::Error;

macro_rules! element_types {
    ($($variant:ident => $repr:literal, $bits:literal;)*) => {
        /// Primitive element type of a tensor, named the way shape
        /// descriptors spell it (`f32`, `bf16`, `s8`, ...).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum ElementType {
            $($variant,)*
        }

        impl ElementType {
            pub const ALL: &'static [ElementType] = &[$(ElementType::$variant,)*];

            pub const fn name(&self) -> &'static str {
                match self {
                    $(ElementType::$variant => $repr,)*
                }
            }

            pub const fn bit_width(&self) -> usize {
                match self {
                    $(ElementType::$variant => $bits,)*
                }
            }
        }

        impl FromStr for ElementType {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($repr => Ok(ElementType::$variant),)*
                    other => Err(Error::UnknownElementType(other.to_string())),
                }
            }
        }
    };
}

element_types! {
    S4 => "s4", 4;
    S8 => "s8", 8;
    S16 => "s16", 16;
    S32 => "s32", 32;
    S64 => "s64", 64;
    U4 => "u4", 4;
    U8 => "u8", 8;
    U16 => "u16", 16;
    U32 => "u32", 32;
    U64 => "u64", 64;
    F8 => "f8", 8;
    F16 => "f16", 16;
    Bf16 => "bf16", 16;
    F32 => "f32", 32;
    F64 => "f64", 64;
    C64 => "c64", 64;
    C128 => "c128", 128;
}

impl ElementType {
    /// Bytes occupied by `count` densely packed elements, rounded up.
    pub fn bytes_for(&self, count: usize) -> usize {
        (count * self.bit_width()).div_ceil(8)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
