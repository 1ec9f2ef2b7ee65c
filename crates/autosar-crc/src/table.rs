//! Width-agnostic lookup tables and the runtime compute surface.
//!
//! [`CrcTable`] is a sum type over the three register widths. It lets callers
//! pick the width at runtime while every byte still runs through the
//! monomorphic engine for that width.

use core::fmt;

use crate::{CrcError, CrcParams, CrcWidth, crc8, crc16, crc32, error::Field};

/// A 256-entry CRC lookup table for one (width, polynomial) pair.
///
/// Tables are plain arrays: immutable once built, `Copy`, and safe to share
/// between threads for concurrent reads.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::large_enum_variant)] // tables are passed by reference
pub enum CrcTable {
  Crc8([u8; 256]),
  Crc16([u16; 256]),
  Crc32([u32; 256]),
}

impl CrcTable {
  /// Generate the table for `polynomial` at `width`.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::ValueTooWide`] if `polynomial` has bits above `width`.
  pub const fn new(width: CrcWidth, polynomial: u32) -> Result<Self, CrcError> {
    match width.check(Field::Polynomial, polynomial) {
      Ok(poly) => Ok(Self::generate(width, poly)),
      Err(err) => Err(err),
    }
  }

  /// Table for an already validated polynomial.
  pub(crate) const fn generate(width: CrcWidth, poly: u32) -> Self {
    match width {
      CrcWidth::Bits8 => Self::Crc8(crc8::generate_table(poly as u8)),
      CrcWidth::Bits16 => Self::Crc16(crc16::generate_table(poly as u16)),
      CrcWidth::Bits32 => Self::Crc32(crc32::generate_table(poly)),
    }
  }

  /// Register width of this table.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> CrcWidth {
    match self {
      Self::Crc8(_) => CrcWidth::Bits8,
      Self::Crc16(_) => CrcWidth::Bits16,
      Self::Crc32(_) => CrcWidth::Bits32,
    }
  }

  /// Entry for the dividend byte `index`, widened to `u32`.
  #[inline]
  #[must_use]
  #[allow(clippy::indexing_slicing)] // `u8` index into a 256-entry table.
  pub const fn get(&self, index: u8) -> u32 {
    let i = index as usize;
    match self {
      Self::Crc8(t) => t[i] as u32,
      Self::Crc16(t) => t[i] as u32,
      Self::Crc32(t) => t[i],
    }
  }

  /// The polynomial this table was generated from (always entry 1).
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.get(1)
  }

  /// Compute a CRC over `data`; see [`compute_crc`].
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::ValueTooWide`] if `initial` or `xor_out` has bits
  /// above the table width.
  pub const fn compute(
    &self,
    data: &[u8],
    initial: u32,
    xor_out: u32,
    reflect_output: bool,
    reflect_input: bool,
  ) -> Result<u32, CrcError> {
    let width = self.width();
    if let Err(err) = width.check(Field::Initial, initial) {
      return Err(err);
    }
    if let Err(err) = width.check(Field::XorOut, xor_out) {
      return Err(err);
    }
    Ok(self.compute_masked(data, initial, xor_out, reflect_output, reflect_input))
  }

  /// Compute without range checks; values are truncated to the table width.
  pub(crate) const fn compute_masked(
    &self,
    data: &[u8],
    initial: u32,
    xor_out: u32,
    reflect_output: bool,
    reflect_input: bool,
  ) -> u32 {
    match self {
      Self::Crc8(t) => {
        crc8::compute(t, data, initial as u8, xor_out as u8, reflect_output, reflect_input) as u32
      }
      Self::Crc16(t) => {
        crc16::compute(t, data, initial as u16, xor_out as u16, reflect_output, reflect_input) as u32
      }
      Self::Crc32(t) => crc32::compute(t, data, initial, xor_out, reflect_output, reflect_input),
    }
  }

  /// Compute a CRC over `data` using the initial value, XOR value and
  /// reflection flags from `params`.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::TableMismatch`] if the table was not generated for
  /// `params.width` and `params.polynomial`, and [`CrcError::ValueTooWide`] if
  /// the initial or final XOR value does not fit the width.
  pub const fn checksum(&self, params: &CrcParams, data: &[u8]) -> Result<u32, CrcError> {
    let width = self.width();
    if width.bits() != params.width.bits() || self.polynomial() != params.polynomial {
      return Err(CrcError::TableMismatch {
        table_width: width,
        table_polynomial: self.polynomial(),
        width: params.width,
        polynomial: params.polynomial,
      });
    }
    self.compute(data, params.initial, params.xor_out, params.reflect_out, params.reflect_in)
  }
}

impl fmt::Debug for CrcTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcTable")
      .field("width", &self.width())
      .field("polynomial", &format_args!("0x{:X}", self.polynomial()))
      .finish_non_exhaustive()
  }
}

/// Renders the table as a C array body: eight `0x..U, ` entries per line.
impl fmt::Display for CrcTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = usize::from(self.width().bits() / 4);
    for index in 0..=255u8 {
      if index != 0 && index % 8 == 0 {
        f.write_str("\n")?;
      } else if index != 0 {
        f.write_str(" ")?;
      }
      write!(f, "0x{:0digits$X}U,", self.get(index))?;
    }
    Ok(())
  }
}

/// Generate the 256-entry lookup table for `polynomial` at `width`.
///
/// Build the table once per (width, polynomial) pair and reuse it for every
/// buffer. Table entries depend only on those two inputs.
///
/// # Errors
///
/// Returns [`CrcError::ValueTooWide`] if `polynomial` has bits above `width`.
///
/// # Examples
///
/// ```
/// use autosar_crc::{CrcWidth, compute_crc, generate_table};
///
/// let table = generate_table(CrcWidth::Bits16, 0x1021)?;
/// let crc = compute_crc(&table, &[0x0F, 0xAA, 0x00, 0x55], 0xFFFF, 0x0000, false, false)?;
/// assert_eq!(crc, 0x2023);
/// # Ok::<(), autosar_crc::CrcError>(())
/// ```
pub const fn generate_table(width: CrcWidth, polynomial: u32) -> Result<CrcTable, CrcError> {
  CrcTable::new(width, polynomial)
}

/// Compute the CRC of `data` with a table from [`generate_table`].
///
/// The register starts at `initial`, absorbs each byte (reflected first when
/// `reflect_input` is set), is XORed with `xor_out` and finally reflected
/// across the table width when `reflect_output` is set. An empty `data`
/// yields `initial ^ xor_out`, reflected if requested.
///
/// # Errors
///
/// Returns [`CrcError::ValueTooWide`] if `initial` or `xor_out` has bits above
/// the table width.
pub const fn compute_crc(
  table: &CrcTable,
  data: &[u8],
  initial: u32,
  xor_out: u32,
  reflect_output: bool,
  reflect_input: bool,
) -> Result<u32, CrcError> {
  table.compute(data, initial, xor_out, reflect_output, reflect_input)
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::string::ToString;

  use super::*;

  #[test]
  fn generate_matches_const_tables() {
    assert_eq!(generate_table(CrcWidth::Bits8, 0x1D), Ok(CrcTable::Crc8(crc8::SAE_J1850_TABLE)));
    assert_eq!(generate_table(CrcWidth::Bits8, 0x2F), Ok(CrcTable::Crc8(crc8::H2F_TABLE)));
    assert_eq!(
      generate_table(CrcWidth::Bits16, 0x1021),
      Ok(CrcTable::Crc16(crc16::CCITT_FALSE_TABLE))
    );
    assert_eq!(
      generate_table(CrcWidth::Bits32, 0x04C1_1DB7),
      Ok(CrcTable::Crc32(crc32::ETHERNET_TABLE))
    );
  }

  #[test]
  fn generate_rejects_wide_polynomial() {
    assert_eq!(
      generate_table(CrcWidth::Bits16, 0x1_1021),
      Err(CrcError::ValueTooWide {
        field: Field::Polynomial,
        value: 0x1_1021,
        width: CrcWidth::Bits16,
      })
    );
  }

  #[test]
  fn compute_rejects_wide_values() {
    let table = CrcTable::Crc8(crc8::SAE_J1850_TABLE);
    assert!(matches!(
      compute_crc(&table, &[], 0x100, 0, false, false),
      Err(CrcError::ValueTooWide { field: Field::Initial, .. })
    ));
    assert!(matches!(
      compute_crc(&table, &[], 0xFF, 0x1FF, false, false),
      Err(CrcError::ValueTooWide { field: Field::XorOut, .. })
    ));
  }

  #[test]
  fn compute_known_vectors() {
    let table = CrcTable::Crc32(crc32::ETHERNET_TABLE);
    assert_eq!(compute_crc(&table, &[0xFF; 4], 0xFFFF_FFFF, 0xFFFF_FFFF, true, true), Ok(0xFFFF_FFFF));
    assert_eq!(table.checksum(&CrcParams::CRC32_ETHERNET, b"123456789"), Ok(0xCBF4_3926));
  }

  #[test]
  fn checksum_rejects_foreign_params() {
    let ethernet = CrcTable::Crc32(crc32::ETHERNET_TABLE);
    assert_eq!(
      ethernet.checksum(&CrcParams::CRC8_SAE_J1850, &[0x00; 4]),
      Err(CrcError::TableMismatch {
        table_width: CrcWidth::Bits32,
        table_polynomial: 0x04C1_1DB7,
        width: CrcWidth::Bits8,
        polynomial: 0x1D,
      })
    );

    // Same width, different polynomial.
    let h2f = CrcTable::Crc8(crc8::H2F_TABLE);
    assert!(matches!(
      h2f.checksum(&CrcParams::CRC8_SAE_J1850, &[0x00; 4]),
      Err(CrcError::TableMismatch { table_polynomial: 0x2F, polynomial: 0x1D, .. })
    ));
    let sae = CrcTable::Crc8(crc8::SAE_J1850_TABLE);
    assert_eq!(sae.checksum(&CrcParams::CRC8_SAE_J1850, &[0x00; 4]), Ok(0x59));
  }

  #[test]
  fn accessors() {
    let table = CrcTable::Crc16(crc16::CCITT_FALSE_TABLE);
    assert_eq!(table.width(), CrcWidth::Bits16);
    assert_eq!(table.polynomial(), 0x1021);
    assert_eq!(table.get(0), 0);
    assert_eq!(table.get(255), 0x1EF0);
  }

  #[test]
  fn display_as_c_array() {
    let text = CrcTable::Crc8(crc8::SAE_J1850_TABLE).to_string();
    let lines: std::vec::Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], "0x00U, 0x1DU, 0x3AU, 0x27U, 0x74U, 0x69U, 0x4EU, 0x53U,");

    let text = CrcTable::Crc32(crc32::ETHERNET_TABLE).to_string();
    assert!(text.starts_with("0x00000000U, 0x04C11DB7U, 0x09823B6EU,"));
    assert!(text.ends_with("0xB1F740B4U,"));
  }

  #[test]
  fn debug_is_compact() {
    let text = std::format!("{:?}", CrcTable::Crc16(crc16::CCITT_FALSE_TABLE));
    assert_eq!(text, "CrcTable { width: Bits16, polynomial: 0x1021, .. }");
  }
}
