//! CRC-8 engine.
//!
//! AUTOSAR defines two 8-bit routines, both non-reflected:
//!
//! | Variant | Poly | Init | XorOut | Check |
//! |---------|------|------|--------|-------|
//! | CRC-8 (SAE-J1850) | 0x1D | 0xFF | 0xFF | 0x4B |
//! | CRC-8H2F | 0x2F | 0xFF | 0xFF | 0xDF |
//!
//! # Example
//!
//! ```
//! use autosar_crc::crc8;
//!
//! let crc = crc8::compute(&crc8::SAE_J1850_TABLE, &[0x00, 0x00, 0x00, 0x00], 0xFF, 0xFF, false, false);
//! assert_eq!(crc, 0x59);
//! ```

// SAFETY: table indices are `u8` values widened to `usize` and data indices are
// bounded by `data.len()`; clippy cannot see this in const fn.
#![allow(clippy::indexing_slicing)]

define_crc_engine! {
  register: u8,
  width: crate::CrcWidth::Bits8,
  step: |crc, byte, table| table[(crc ^ byte) as usize],
}

/// CRC-8 (SAE-J1850) polynomial (normal form).
pub const SAE_J1850_POLY: u8 = 0x1D;

/// CRC-8H2F polynomial (normal form).
pub const H2F_POLY: u8 = 0x2F;

/// Lookup table for CRC-8 (SAE-J1850).
pub const SAE_J1850_TABLE: [u8; 256] = generate_table(SAE_J1850_POLY);

/// Lookup table for CRC-8H2F.
pub const H2F_TABLE: [u8; 256] = generate_table(H2F_POLY);

#[cfg(test)]
mod tests {
  use super::*;

  const MESSAGES: [&[u8]; 7] = [
    &[0x00, 0x00, 0x00, 0x00],
    &[0xF2, 0x01, 0x83],
    &[0x0F, 0xAA, 0x00, 0x55],
    &[0x00, 0xFF, 0x55, 0x11],
    &[0x33, 0x22, 0x55, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF],
    &[0x92, 0x6B, 0x55],
    &[0xFF, 0xFF, 0xFF, 0xFF],
  ];

  #[test]
  fn table_layout() {
    assert_eq!(SAE_J1850_TABLE[0], 0x00);
    assert_eq!(SAE_J1850_TABLE[1], SAE_J1850_POLY);
    assert_eq!(H2F_TABLE[1], H2F_POLY);
    assert_eq!(SAE_J1850_TABLE[0x80], 0x26);
    assert_eq!(SAE_J1850_TABLE[0xFF], 0xC4);
    assert_eq!(H2F_TABLE[0xFF], 0x42);
  }

  #[test]
  fn table_is_linear() {
    // Polynomial division is linear over GF(2): T[a ^ b] == T[a] ^ T[b].
    for a in 0..=255u8 {
      for b in [0x01u8, 0x10, 0x80, 0xA5] {
        assert_eq!(
          SAE_J1850_TABLE[(a ^ b) as usize],
          SAE_J1850_TABLE[a as usize] ^ SAE_J1850_TABLE[b as usize]
        );
      }
    }
  }

  #[test]
  fn sae_j1850_vectors() {
    let expected = [0x59, 0x37, 0x79, 0xB8, 0xCB, 0x8C, 0x74];
    for (msg, want) in MESSAGES.iter().zip(expected) {
      assert_eq!(compute(&SAE_J1850_TABLE, msg, 0xFF, 0xFF, false, false), want, "message {msg:02X?}");
    }
  }

  #[test]
  fn h2f_vectors() {
    let expected = [0x12, 0xC2, 0xC6, 0x77, 0x11, 0x33, 0x6C];
    for (msg, want) in MESSAGES.iter().zip(expected) {
      assert_eq!(compute(&H2F_TABLE, msg, 0xFF, 0xFF, false, false), want, "message {msg:02X?}");
    }
  }

  #[test]
  fn check_values() {
    assert_eq!(compute(&SAE_J1850_TABLE, b"123456789", 0xFF, 0xFF, false, false), 0x4B);
    assert_eq!(compute(&H2F_TABLE, b"123456789", 0xFF, 0xFF, false, false), 0xDF);
  }

  #[test]
  fn empty_input() {
    assert_eq!(compute(&SAE_J1850_TABLE, &[], 0xFF, 0xFF, false, false), 0x00);
    assert_eq!(compute(&SAE_J1850_TABLE, &[], 0x0F, 0x00, false, false), 0x0F);
    assert_eq!(compute(&SAE_J1850_TABLE, &[], 0x0F, 0x00, true, false), 0xF0);
  }

  #[test]
  fn reflected_input_matches_pre_reflected_data() {
    let data = [0x12u8, 0x34, 0x56, 0x78];
    let reflected = data.map(u8::reverse_bits);
    assert_eq!(
      compute(&H2F_TABLE, &data, 0xFF, 0xFF, false, true),
      compute(&H2F_TABLE, &reflected, 0xFF, 0xFF, false, false)
    );
  }

  #[test]
  fn width_constants() {
    assert_eq!(WIDTH, 8);
    assert_eq!(TOP_BIT, 0x80);
    assert_eq!(BYTE_SHIFT, 0);
  }
}
