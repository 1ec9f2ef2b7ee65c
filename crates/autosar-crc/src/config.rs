//! Named CRC presets.
//!
//! Presets are selected with [`CrcVariant`], which parses the common spellings
//! of each AUTOSAR routine name, so a variant can come from a config file or
//! command line as easily as from code.

use core::{fmt, str::FromStr};

use crate::{CrcParams, CrcTable, crc8, crc16, crc32};

/// One of the AUTOSAR CRC routines.
///
/// # Examples
///
/// ```
/// use autosar_crc::{CrcParams, CrcVariant};
///
/// let variant: CrcVariant = "ccitt-false".parse()?;
/// assert_eq!(variant, CrcVariant::Crc16CcittFalse);
/// assert_eq!(variant.params(), CrcParams::CRC16_CCITT_FALSE);
/// # Ok::<(), autosar_crc::config::ParseVariantError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrcVariant {
  /// CRC-8 (SAE-J1850).
  Crc8SaeJ1850,
  /// CRC-8H2F.
  Crc8H2F,
  /// CRC-16/CCITT-FALSE.
  Crc16CcittFalse,
  /// CRC-32/Ethernet (IEEE 802.3).
  Crc32Ethernet,
}

impl CrcVariant {
  pub const ALL: [Self; 4] = [Self::Crc8SaeJ1850, Self::Crc8H2F, Self::Crc16CcittFalse, Self::Crc32Ethernet];

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Crc8SaeJ1850 => "CRC-8/SAE-J1850",
      Self::Crc8H2F => "CRC-8H2F",
      Self::Crc16CcittFalse => "CRC-16/CCITT-FALSE",
      Self::Crc32Ethernet => "CRC-32/Ethernet",
    }
  }

  /// Full parameter set of this variant.
  #[must_use]
  pub const fn params(self) -> CrcParams {
    match self {
      Self::Crc8SaeJ1850 => CrcParams::CRC8_SAE_J1850,
      Self::Crc8H2F => CrcParams::CRC8_H2F,
      Self::Crc16CcittFalse => CrcParams::CRC16_CCITT_FALSE,
      Self::Crc32Ethernet => CrcParams::CRC32_ETHERNET,
    }
  }

  /// Precomputed lookup table of this variant.
  #[must_use]
  pub const fn table(self) -> CrcTable {
    match self {
      Self::Crc8SaeJ1850 => CrcTable::Crc8(crc8::SAE_J1850_TABLE),
      Self::Crc8H2F => CrcTable::Crc8(crc8::H2F_TABLE),
      Self::Crc16CcittFalse => CrcTable::Crc16(crc16::CCITT_FALSE_TABLE),
      Self::Crc32Ethernet => CrcTable::Crc32(crc32::ETHERNET_TABLE),
    }
  }

  /// CRC of the ASCII string `"123456789"`.
  #[must_use]
  pub const fn check(self) -> u32 {
    match self {
      Self::Crc8SaeJ1850 => 0x4B,
      Self::Crc8H2F => 0xDF,
      Self::Crc16CcittFalse => 0x29B1,
      Self::Crc32Ethernet => 0xCBF4_3926,
    }
  }

  fn parse(value: &str) -> Option<Self> {
    fn any_of(value: &str, names: &[&str]) -> bool {
      names.iter().any(|name| value.eq_ignore_ascii_case(name))
    }

    let value = value.trim();

    if any_of(value, &["crc8", "crc-8", "crc8-sae-j1850", "crc-8/sae-j1850", "sae-j1850", "j1850"]) {
      return Some(Self::Crc8SaeJ1850);
    }
    if any_of(value, &["crc8h2f", "crc-8h2f", "crc-8/h2f", "h2f", "crc-8/autosar"]) {
      return Some(Self::Crc8H2F);
    }
    if any_of(value, &["crc16", "crc-16", "crc-16/ccitt-false", "ccitt-false", "ccitt", "crc-16/ibm-3740"]) {
      return Some(Self::Crc16CcittFalse);
    }
    if any_of(value, &["crc32", "crc-32", "crc-32/ethernet", "ethernet", "ieee", "crc-32/iso-hdlc"]) {
      return Some(Self::Crc32Ethernet);
    }
    None
  }
}

impl fmt::Display for CrcVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Unrecognized CRC variant name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseVariantError;

impl fmt::Display for ParseVariantError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown CRC variant")
  }
}

impl core::error::Error for ParseVariantError {}

impl FromStr for CrcVariant {
  type Err = ParseVariantError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s).ok_or(ParseVariantError)
  }
}
