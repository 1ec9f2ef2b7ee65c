//! A parameter set bundled with its prebuilt lookup table.

use crate::{CrcError, CrcParams, CrcTable, CrcVariant};

/// CRC calculator for one parameter set.
///
/// Building a `Crc` generates the lookup table once; every subsequent
/// [`checksum`](Self::checksum) call reuses it. The handle is `Copy` and holds
/// no interior mutability, so it can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use autosar_crc::{Crc, CrcParams, CrcVariant, CrcWidth};
///
/// let ethernet = Crc::from_variant(CrcVariant::Crc32Ethernet);
/// assert_eq!(ethernet.checksum(b"123456789"), 0xCBF4_3926);
///
/// // Custom parameters are validated against the width.
/// let params = CrcParams::new(CrcWidth::Bits16, 0x8005, 0x0000, 0x0000, true, true)?;
/// let arc = Crc::new(params)?;
/// assert_eq!(arc.checksum(b"123456789"), 0xBB3D);
/// # Ok::<(), autosar_crc::CrcError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc {
  params: CrcParams,
  table: CrcTable,
}

impl Crc {
  /// Build a calculator, generating the table for `params`.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::ValueTooWide`] if any value in `params` has bits above
  /// its width.
  pub const fn new(params: CrcParams) -> Result<Self, CrcError> {
    if let Err(err) = params.validate() {
      return Err(err);
    }
    Ok(Self {
      params,
      table: CrcTable::generate(params.width, params.polynomial),
    })
  }

  /// Calculator for an AUTOSAR preset, using its precomputed table.
  #[must_use]
  pub const fn from_variant(variant: CrcVariant) -> Self {
    Self {
      params: variant.params(),
      table: variant.table(),
    }
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn table(&self) -> &CrcTable {
    &self.table
  }

  /// Compute the CRC of `data`.
  #[must_use]
  pub const fn checksum(&self, data: &[u8]) -> u32 {
    self.table.compute_masked(
      data,
      self.params.initial,
      self.params.xor_out,
      self.params.reflect_out,
      self.params.reflect_in,
    )
  }
}

impl From<CrcVariant> for Crc {
  #[inline]
  fn from(variant: CrcVariant) -> Self {
    Self::from_variant(variant)
  }
}
