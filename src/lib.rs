// src/lib.rs
//! # endian-rs
//!
//! A small library for converting fixed-width numeric values between host
//! byte order and an explicit target byte order (big- or little-endian),
//! plus a runtime check of the host's native ordering.
//!
//! ## Features
//!
//! - 🎯 **Type Safe**: the six supported scalar kinds form a closed set, so
//!   typed conversions are statically bounded and infallible
//! - 🔒 **No Silent Corruption**: slice-level requests wider than 8 bytes
//!   are rejected with [`EndianError::WidthOverflow`] before any byte moves
//! - 📦 **Allocation Free**: every conversion swaps in place or copies
//!   through the value itself
//! - ⚡ **Bounded**: every operation completes in at most 8 byte swaps
//!
//! ## Quick Start
//!
//! ```rust
//! use endian_rs::*;
//!
//! // Typed conversions copy the value and reorder the copy.
//! let be = big_endian_i32(0x0102_0304);
//! assert_eq!(be.to_ne_bytes(), [0x01, 0x02, 0x03, 0x04]);
//!
//! // Slice conversions mutate in place and validate the width.
//! let mut buf = 0x0102_0304i32.to_ne_bytes();
//! to_big_endian(&mut buf)?;
//! assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
//!
//! // Host order is queryable at runtime.
//! let host_is_be = is_big_endian();
//! # assert_eq!(host_is_be, cfg!(target_endian = "big"));
//! # Ok::<(), EndianError>(())
//! ```

// Modules
pub mod convert;
pub mod error;
pub mod scalar;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use error::{EndianError, Result};

// Type exports
pub use types::{Endianness, ScalarType, MAX_SCALAR_WIDTH};

// Slice converter exports
pub use convert::{reverse_bytes, to_big_endian, to_little_endian};

// Typed wrapper exports
pub use scalar::{
    big_endian, big_endian_f32, big_endian_f64, big_endian_i16, big_endian_i32, big_endian_i64,
    big_endian_i8, little_endian, little_endian_f32, little_endian_f64, little_endian_i16,
    little_endian_i32, little_endian_i64, little_endian_i8, Scalar,
};

/// Whether the executing host stores the most significant byte first.
///
/// Boolean form of [`Endianness::host`]; stable for the process lifetime.
pub fn is_big_endian() -> bool {
    Endianness::host().is_big()
}

// Version information
/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use endian_rs::prelude::*;
    //! ```

    pub use crate::convert::{reverse_bytes, to_big_endian, to_little_endian};
    pub use crate::error::{EndianError, Result};
    pub use crate::is_big_endian;
    pub use crate::scalar::{big_endian, little_endian, Scalar};
    pub use crate::types::{Endianness, ScalarType};
}
