//! CRC algorithm parameters.
//!
//! This module defines the parameters of the AUTOSAR CRC routines following
//! the conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/),
//! with one difference in ordering: the final XOR is applied *before* output
//! reflection. For every preset here the two orderings agree because the XOR
//! value is either all zeros or all ones.

use core::fmt;

use crate::{CrcError, CrcWidth, error::Field};

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: register width (8, 16 or 32 bits)
/// - `polynomial`: generator polynomial, normal form, without the implicit high bit
/// - `initial`: initial register value
/// - `xor_out`: value XORed into the register after the last byte
/// - `reflect_in`: reflect each input byte before processing
/// - `reflect_out`: reflect the register after the final XOR
///
/// All values are held in a `u32` and must fit in `width` bits; see
/// [`validate`](Self::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Register width.
  pub width: CrcWidth,
  /// Generator polynomial (normal form).
  pub polynomial: u32,
  /// Initial value for the CRC register.
  pub initial: u32,
  /// XOR value applied to the final CRC.
  pub xor_out: u32,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect the final CRC after the XOR.
  pub reflect_out: bool,
}

impl CrcParams {
  /// CRC-8 (SAE-J1850), AUTOSAR `Crc_CalculateCRC8`.
  pub const CRC8_SAE_J1850: Self = Self {
    width: CrcWidth::Bits8,
    polynomial: 0x1D,
    initial: 0xFF,
    xor_out: 0xFF,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-8H2F, AUTOSAR `Crc_CalculateCRC8H2F`.
  pub const CRC8_H2F: Self = Self {
    width: CrcWidth::Bits8,
    polynomial: 0x2F,
    initial: 0xFF,
    xor_out: 0xFF,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-16/CCITT-FALSE, AUTOSAR `Crc_CalculateCRC16`.
  pub const CRC16_CCITT_FALSE: Self = Self {
    width: CrcWidth::Bits16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    xor_out: 0x0000,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-32/Ethernet (IEEE 802.3), AUTOSAR `Crc_CalculateCRC32`.
  pub const CRC32_ETHERNET: Self = Self {
    width: CrcWidth::Bits32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    xor_out: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
  };

  /// Create a parameter set, checking every value against `width`.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::ValueTooWide`] if the polynomial, initial value or
  /// final XOR value has bits above `width`.
  pub const fn new(
    width: CrcWidth,
    polynomial: u32,
    initial: u32,
    xor_out: u32,
    reflect_in: bool,
    reflect_out: bool,
  ) -> Result<Self, CrcError> {
    let params = Self {
      width,
      polynomial,
      initial,
      xor_out,
      reflect_in,
      reflect_out,
    };
    match params.validate() {
      Ok(()) => Ok(params),
      Err(err) => Err(err),
    }
  }

  /// Check that every value fits in the register width.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::ValueTooWide`] naming the first offending field.
  pub const fn validate(&self) -> Result<(), CrcError> {
    if let Err(err) = self.width.check(Field::Polynomial, self.polynomial) {
      return Err(err);
    }
    if let Err(err) = self.width.check(Field::Initial, self.initial) {
      return Err(err);
    }
    if let Err(err) = self.width.check(Field::XorOut, self.xor_out) {
      return Err(err);
    }
    Ok(())
  }

  /// Returns the reflected polynomial (bit-reversed across the width).
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u32 {
    crate::reflect(self.polynomial, self.width.bits())
  }

  /// CRC of the empty message: `initial ^ xor_out`, reflected if `reflect_out` is set.
  #[must_use]
  pub const fn empty_crc(&self) -> u32 {
    let crc = (self.initial ^ self.xor_out) & self.width.mask();
    if self.reflect_out {
      crate::reflect(crc, self.width.bits())
    } else {
      crc
    }
  }
}

impl fmt::Display for CrcParams {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = usize::from(self.width.bits() / 4);
    write!(
      f,
      "width={} poly=0x{:0digits$X} init=0x{:0digits$X} xorout=0x{:0digits$X} refin={} refout={}",
      self.width.bits(),
      self.polynomial,
      self.initial,
      self.xor_out,
      self.reflect_in,
      self.reflect_out,
    )
  }
}
