//! Bit reflection (bit-order reversal).
//!
//! "Reflected" CRC variants process data LSB-first. The table-driven engines in
//! this crate always run MSB-first, so reflection is applied to the data at
//! compute time: each input byte when `reflect_input` is set, and the final
//! register when `reflect_output` is set.

/// Largest bit count accepted by [`reflect`] (the widest supported register).
pub const MAX_REFLECT_BITS: u8 = 32;

/// Reverse the order of the lowest `bit_count` bits of `value`.
///
/// Bits at or above `bit_count` are ignored and the result never has a bit set
/// at or above `bit_count`. A `bit_count` of zero yields zero.
///
/// # Panics
///
/// Panics if `bit_count` exceeds [`MAX_REFLECT_BITS`]. In const contexts this
/// is a compile-time error.
///
/// # Examples
///
/// ```
/// use autosar_crc::reflect;
///
/// assert_eq!(reflect(0b0001, 4), 0b1000);
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// // Only the low `bit_count` bits take part.
/// assert_eq!(reflect(0xFF01, 8), 0x80);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u32, bit_count: u8) -> u32 {
  assert!(bit_count <= MAX_REFLECT_BITS, "reflect: bit count exceeds 32");

  let mut data = value;
  let mut reflection = 0u32;
  let mut bit = 0u8;
  while bit < bit_count {
    if data & 1 != 0 {
      reflection |= 1 << (bit_count - 1 - bit);
    }
    data >>= 1;
    bit += 1;
  }
  reflection
}
