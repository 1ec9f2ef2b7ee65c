//! Error types for the width-agnostic CRC surface.
//!
//! The per-width engines ([`crc8`](crate::crc8), [`crc16`](crate::crc16),
//! [`crc32`](crate::crc32)) cannot fail: their register types make out-of-range
//! parameters unrepresentable. Errors only arise where a width and its values
//! travel separately as plain integers.

use core::fmt;

use crate::CrcWidth;

/// Parameter field named in [`CrcError::ValueTooWide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
  Polynomial,
  Initial,
  XorOut,
}

impl Field {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Polynomial => "polynomial",
      Self::Initial => "initial value",
      Self::XorOut => "final XOR value",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// CRC parameter validation failed.
///
/// # Examples
///
/// ```
/// use autosar_crc::{CrcError, CrcWidth, generate_table};
///
/// let err = generate_table(CrcWidth::Bits8, 0x11D).unwrap_err();
/// assert!(matches!(err, CrcError::ValueTooWide { value: 0x11D, .. }));
///
/// assert_eq!(CrcWidth::try_from(24u8), Err(CrcError::UnsupportedWidth(24)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrcError {
  /// Register width other than 8, 16 or 32 bits.
  UnsupportedWidth(u8),
  /// A parameter has bits set above the register width.
  ValueTooWide {
    field: Field,
    value: u32,
    width: CrcWidth,
  },
  /// A parameter set was applied to a table built for another width or
  /// polynomial.
  TableMismatch {
    table_width: CrcWidth,
    table_polynomial: u32,
    width: CrcWidth,
    polynomial: u32,
  },
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedWidth(bits) => write!(f, "unsupported CRC width {bits} (expected 8, 16 or 32)"),
      Self::ValueTooWide { field, value, width } => {
        write!(f, "{field} 0x{value:X} does not fit in a {width} register")
      }
      Self::TableMismatch {
        table_width,
        table_polynomial,
        width,
        polynomial,
      } => write!(
        f,
        "table for {table_width} polynomial 0x{table_polynomial:X} cannot compute a {width} CRC with polynomial 0x{polynomial:X}"
      ),
    }
  }
}

impl core::error::Error for CrcError {}
