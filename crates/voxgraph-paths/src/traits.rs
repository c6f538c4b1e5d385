use voxgraph_core::{Error, Result};

/// Voxel element usable as an edge weight.
///
/// Moving onto a voxel costs that voxel's weight. Implemented for every
/// numeric element type a [`Volume`](voxgraph_core::Volume) can hold.
pub trait Weight: Copy {
    /// Whether some values of this type are not valid weights.
    const CHECKED: bool;

    /// The weight as `f64`. Negative zero reads as zero.
    fn weight(self) -> f64;

    /// Whether this value is a usable weight (non-negative, not NaN).
    /// `+inf` is allowed and acts as an impassable barrier.
    fn is_valid(self) -> bool;
}

macro_rules! unsigned_weight {
    ($($ty:ty),*) => {$(
        impl Weight for $ty {
            const CHECKED: bool = false;
            #[inline]
            fn weight(self) -> f64 {
                self as f64
            }
            #[inline]
            fn is_valid(self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! signed_weight {
    ($($ty:ty),*) => {$(
        impl Weight for $ty {
            const CHECKED: bool = true;
            #[inline]
            fn weight(self) -> f64 {
                self as f64
            }
            #[inline]
            fn is_valid(self) -> bool {
                self >= 0
            }
        }
    )*};
}

macro_rules! float_weight {
    ($($ty:ty),*) => {$(
        impl Weight for $ty {
            const CHECKED: bool = true;
            #[inline]
            fn weight(self) -> f64 {
                self as f64 + 0.0
            }
            #[inline]
            fn is_valid(self) -> bool {
                self >= 0.0
            }
        }
    )*};
}

unsigned_weight!(u8, u16, u32, u64);
signed_weight!(i8, i16, i32, i64);
float_weight!(f32, f64);

/// Reject the first negative or NaN weight in `data`.
pub(crate) fn validate_weights<T: Weight>(data: &[T]) -> Result<()> {
    if !T::CHECKED {
        return Ok(());
    }
    match data.iter().position(|w| !w.is_valid()) {
        Some(index) => Err(Error::InvalidWeight {
            index,
            value: data[index].weight(),
        }),
        None => Ok(()),
    }
}

/// Foreground indicator stored in a label mask.
///
/// Any nonzero value is foreground. Erasing a voxel writes
/// [`BACKGROUND`](Label::BACKGROUND); nothing ever writes foreground back.
pub trait Label: Copy {
    const BACKGROUND: Self;

    fn is_foreground(self) -> bool;
}

impl Label for bool {
    const BACKGROUND: Self = false;
    #[inline]
    fn is_foreground(self) -> bool {
        self
    }
}

macro_rules! int_label {
    ($($ty:ty),*) => {$(
        impl Label for $ty {
            const BACKGROUND: Self = 0;
            #[inline]
            fn is_foreground(self) -> bool {
                self != 0
            }
        }
    )*};
}

int_label!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Run `$body` with `$grid` bound to the typed grid inside a weighted
/// [`Volume`](voxgraph_core::Volume), or fail with a type error.
///
/// This is the only place the element type is inspected; `$body` is
/// instantiated once per numeric type.
macro_rules! with_weights {
    ($volume:expr, $grid:ident => $body:expr) => {
        match $volume {
            voxgraph_core::Volume::U8($grid) => $body,
            voxgraph_core::Volume::U16($grid) => $body,
            voxgraph_core::Volume::U32($grid) => $body,
            voxgraph_core::Volume::U64($grid) => $body,
            voxgraph_core::Volume::I8($grid) => $body,
            voxgraph_core::Volume::I16($grid) => $body,
            voxgraph_core::Volume::I32($grid) => $body,
            voxgraph_core::Volume::I64($grid) => $body,
            voxgraph_core::Volume::F32($grid) => $body,
            voxgraph_core::Volume::F64($grid) => $body,
            voxgraph_core::Volume::Bool(_) => Err(voxgraph_core::Error::UnsupportedType(
                voxgraph_core::ElementKind::Bool,
            )),
        }
    };
}

pub(crate) use with_weights;
