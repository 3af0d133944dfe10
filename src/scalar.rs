// src/scalar.rs
use bytemuck::Pod;

use crate::types::{Endianness, ScalarType};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width numeric scalar the engine can reorder.
///
/// Sealed over the six supported kinds so every implementor's width is
/// known to fit the engine's maximum. The `Pod` bound supplies the
/// bit-pattern view: `bytemuck::bytes_of_mut` reinterprets the value as
/// its raw bytes without copying or normalizing anything, which is what
/// keeps NaN and infinity encodings intact through a conversion.
pub trait Scalar: Pod + sealed::Sealed {
    /// Width of this scalar in bytes.
    const WIDTH: usize;
    /// Runtime tag for this scalar kind.
    const SCALAR_TYPE: ScalarType;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();
                const SCALAR_TYPE: ScalarType = ScalarType::$variant;
            }
        )*
    };
}

impl_scalar! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

// Single conversion body shared by every typed wrapper. The scalar's
// width is statically within bounds, so unlike the slice converters
// this path is infallible.
fn convert<T: Scalar>(value: T, target: Endianness) -> T {
    let mut copy = value;
    if Endianness::host() != target {
        bytemuck::bytes_of_mut(&mut copy).reverse();
    }
    copy
}

/// Return a copy of `value` whose bytes are in big-endian order.
///
/// Total over every bit pattern of `T`; the input is taken by value and
/// never mutated.
pub fn big_endian<T: Scalar>(value: T) -> T {
    convert(value, Endianness::Big)
}

/// Return a copy of `value` whose bytes are in little-endian order.
pub fn little_endian<T: Scalar>(value: T) -> T {
    convert(value, Endianness::Little)
}

macro_rules! typed_wrappers {
    ($($ty:ty, $big:ident, $little:ident);* $(;)?) => {
        $(
            #[doc = concat!("[`big_endian`] fixed to `", stringify!($ty), "`.")]
            pub fn $big(value: $ty) -> $ty {
                big_endian(value)
            }

            #[doc = concat!("[`little_endian`] fixed to `", stringify!($ty), "`.")]
            pub fn $little(value: $ty) -> $ty {
                little_endian(value)
            }
        )*
    };
}

typed_wrappers! {
    i8, big_endian_i8, little_endian_i8;
    i16, big_endian_i16, little_endian_i16;
    i32, big_endian_i32, little_endian_i32;
    i64, big_endian_i64, little_endian_i64;
    f32, big_endian_f32, little_endian_f32;
    f64, big_endian_f64, little_endian_f64;
}
