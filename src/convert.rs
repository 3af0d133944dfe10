// src/convert.rs
use crate::error::{EndianError, Result};
use crate::types::{Endianness, MAX_SCALAR_WIDTH};

/// Reverse the byte order of `buf` in place.
///
/// Byte `i` swaps with byte `len - 1 - i`; odd and even lengths both
/// follow the midpoint-swap rule, and a single byte is a no-op. Lengths
/// above [`MAX_SCALAR_WIDTH`] are rejected before any byte moves.
///
/// # Example
///
/// ```
/// use endian_rs::reverse_bytes;
///
/// let mut buf = [0x01, 0x02, 0x03, 0x04];
/// reverse_bytes(&mut buf).unwrap();
/// assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
/// ```
pub fn reverse_bytes(buf: &mut [u8]) -> Result<()> {
    check_width(buf.len())?;
    buf.reverse();
    Ok(())
}

/// Reorder `buf` from host byte order to big-endian in place.
///
/// Reverses iff the host is little-endian; on a big-endian host the
/// bytes are left untouched. Applying this twice restores the original.
pub fn to_big_endian(buf: &mut [u8]) -> Result<()> {
    check_width(buf.len())?;
    if !Endianness::host().is_big() {
        buf.reverse();
    }
    Ok(())
}

/// Reorder `buf` from host byte order to little-endian in place.
///
/// Mirror image of [`to_big_endian`]: reverses iff the host is
/// big-endian.
pub fn to_little_endian(buf: &mut [u8]) -> Result<()> {
    check_width(buf.len())?;
    if Endianness::host().is_big() {
        buf.reverse();
    }
    Ok(())
}

// The original engine copied through a fixed 32-byte local scratch and
// silently overflowed it for longer requests. Validation happens up
// front in every entry point, even on the no-reversal path, so a bad
// length fails the same way on every host.
fn check_width(requested: usize) -> Result<()> {
    if requested > MAX_SCALAR_WIDTH {
        return Err(EndianError::WidthOverflow {
            requested,
            max: MAX_SCALAR_WIDTH,
        });
    }
    Ok(())
}
