//! CRC-16 engine.
//!
//! AUTOSAR's 16-bit routine is CRC-16/CCITT-FALSE:
//!
//! | Poly | Init | XorOut | Reflect | Check |
//! |------|------|--------|---------|-------|
//! | 0x1021 | 0xFFFF | 0x0000 | no | 0x29B1 |

// SAFETY: table indices are `u8` values widened to `usize` and data indices are
// bounded by `data.len()`; clippy cannot see this in const fn.
#![allow(clippy::indexing_slicing)]

define_crc_engine! {
  register: u16,
  width: crate::CrcWidth::Bits16,
  step: |crc, byte, table| (crc << 8) ^ table[((crc >> 8) as u8 ^ byte) as usize],
}

/// CRC-16/CCITT-FALSE polynomial (normal form).
pub const CCITT_FALSE_POLY: u16 = 0x1021;

/// Lookup table for CRC-16/CCITT-FALSE.
pub const CCITT_FALSE_TABLE: [u16; 256] = generate_table(CCITT_FALSE_POLY);
