//! CRC register widths.

use core::fmt;

use crate::{CrcError, error::Field};

/// Register width of a CRC variant.
///
/// Carries the width-dependent constants used by table generation and the
/// compute loop: the top-bit mask (`1 << (W - 1)`), the shift that aligns a
/// dividend byte with the top of the register (`W - 8`) and the register mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CrcWidth {
  Bits8,
  Bits16,
  Bits32,
}

impl CrcWidth {
  pub const ALL: [Self; 3] = [Self::Bits8, Self::Bits16, Self::Bits32];

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u8 {
    match self {
      Self::Bits8 => 8,
      Self::Bits16 => 16,
      Self::Bits32 => 32,
    }
  }

  /// Mask covering every bit of the register.
  #[inline]
  #[must_use]
  pub const fn mask(self) -> u32 {
    match self {
      Self::Bits8 => 0xFF,
      Self::Bits16 => 0xFFFF,
      Self::Bits32 => 0xFFFF_FFFF,
    }
  }

  /// Most significant bit of the register.
  #[inline]
  #[must_use]
  pub const fn top_bit(self) -> u32 {
    1 << (self.bits() - 1)
  }

  /// Left shift that places a byte in the most significant byte of the register.
  #[inline]
  #[must_use]
  pub const fn byte_shift(self) -> u32 {
    self.bits() as u32 - 8
  }

  /// Returns `true` if `value` has no bits set above this width.
  #[inline]
  #[must_use]
  pub const fn fits(self, value: u32) -> bool {
    value & !self.mask() == 0
  }

  pub(crate) const fn check(self, field: Field, value: u32) -> Result<u32, CrcError> {
    if self.fits(value) {
      Ok(value)
    } else {
      Err(CrcError::ValueTooWide { field, value, width: self })
    }
  }
}

impl TryFrom<u8> for CrcWidth {
  type Error = CrcError;

  fn try_from(bits: u8) -> Result<Self, Self::Error> {
    match bits {
      8 => Ok(Self::Bits8),
      16 => Ok(Self::Bits16),
      32 => Ok(Self::Bits32),
      other => Err(CrcError::UnsupportedWidth(other)),
    }
  }
}

impl From<CrcWidth> for u8 {
  #[inline]
  fn from(width: CrcWidth) -> Self {
    width.bits()
  }
}

impl fmt::Display for CrcWidth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-bit", self.bits())
  }
}
