// src/types.rs

/// Widest scalar the engine converts, in bytes (a 64-bit integer or double).
pub const MAX_SCALAR_WIDTH: usize = 8;

/// Byte ordering of multi-byte values in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most significant byte at the lowest address.
    Big,
    /// Least significant byte at the lowest address.
    Little,
}

impl Endianness {
    /// Detect the byte order of the executing host.
    ///
    /// Materializes the integer `1` and inspects its first byte: `0` means
    /// the most significant byte comes first. The result never changes for
    /// the lifetime of the process, and detection touches only a fresh
    /// local value, so this is safe to call from any thread.
    pub fn host() -> Self {
        if 1u32.to_ne_bytes()[0] == 0 {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }

    pub fn is_big(&self) -> bool {
        matches!(self, Endianness::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Endianness::Little)
    }

    /// Get the name of the byte order as a string
    pub fn name(&self) -> &'static str {
        match self {
            Endianness::Big => "big",
            Endianness::Little => "little",
        }
    }
}

/// Fixed-width scalar type enumeration
///
/// The closed set of scalar kinds the engine converts. Keeping the set
/// closed is what lets the typed conversion path bound its scratch width
/// at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl ScalarType {
    /// Get the size of this scalar type in bytes
    pub fn width(&self) -> usize {
        match self {
            ScalarType::I8 => 1,
            ScalarType::I16 => 2,
            ScalarType::I32 | ScalarType::F32 => 4,
            ScalarType::I64 | ScalarType::F64 => 8,
        }
    }

    /// Check if this is an integer type
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ScalarType::I8 | ScalarType::I16 | ScalarType::I32 | ScalarType::I64
        )
    }

    /// Check if this is a floating point type
    pub fn is_float(&self) -> bool {
        matches!(self, ScalarType::F32 | ScalarType::F64)
    }

    /// Get the name of the scalar type as a string
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
        }
    }
}
