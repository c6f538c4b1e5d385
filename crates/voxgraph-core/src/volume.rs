//! [`Volume`]: a dense grid whose element type is only known at runtime.
//!
//! Callers holding raw arrays of some numeric type wrap them in the matching
//! variant. Algorithms match on the variant once, at the call boundary, and
//! run a monomorphic inner loop for that element type.

use std::fmt;

use crate::geom::Shape;
use crate::grid::Grid3;

/// Element type of a [`Volume`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
}

impl ElementKind {
    /// Whether values of this kind are numbers.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Bool)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A dense grid tagged with its element type.
#[derive(Debug, Clone, PartialEq)]
pub enum Volume {
    U8(Grid3<u8>),
    U16(Grid3<u16>),
    U32(Grid3<u32>),
    U64(Grid3<u64>),
    I8(Grid3<i8>),
    I16(Grid3<i16>),
    I32(Grid3<i32>),
    I64(Grid3<i64>),
    F32(Grid3<f32>),
    F64(Grid3<f64>),
    Bool(Grid3<bool>),
}

macro_rules! volume_variants {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        impl Volume {
            /// The element type.
            pub fn kind(&self) -> ElementKind {
                match self {
                    $(Self::$variant(_) => ElementKind::$variant,)*
                }
            }

            /// The grid's shape.
            pub fn shape(&self) -> Shape {
                match self {
                    $(Self::$variant(g) => g.shape(),)*
                }
            }
        }

        $(
            impl From<Grid3<$ty>> for Volume {
                fn from(g: Grid3<$ty>) -> Self {
                    Self::$variant(g)
                }
            }
        )*
    };
}

volume_variants! {
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    F32 => f32,
    F64 => f64,
    Bool => bool,
}

impl Volume {
    /// Number of voxels.
    pub fn len(&self) -> usize {
        self.shape().len()
    }

    /// Whether the volume holds no voxels.
    pub fn is_empty(&self) -> bool {
        self.shape().is_empty()
    }
}
