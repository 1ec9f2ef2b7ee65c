//! CRC-32 engine.
//!
//! AUTOSAR's 32-bit routine is the Ethernet CRC (IEEE 802.3), which reflects
//! both input and output:
//!
//! | Poly | Init | XorOut | Reflect | Check |
//! |------|------|--------|---------|-------|
//! | 0x04C11DB7 | 0xFFFFFFFF | 0xFFFFFFFF | in + out | 0xCBF43926 |
//!
//! The table stays in normal (MSB-first) form; reflection is applied to each
//! input byte and to the final register.

// SAFETY: table indices are `u8` values widened to `usize` and data indices are
// bounded by `data.len()`; clippy cannot see this in const fn.
#![allow(clippy::indexing_slicing)]

define_crc_engine! {
  register: u32,
  width: crate::CrcWidth::Bits32,
  step: |crc, byte, table| (crc << 8) ^ table[((crc >> 24) as u8 ^ byte) as usize],
}

/// CRC-32/Ethernet polynomial (normal form).
pub const ETHERNET_POLY: u32 = 0x04C1_1DB7;

/// Lookup table for CRC-32/Ethernet (normal form).
pub const ETHERNET_TABLE: [u32; 256] = generate_table(ETHERNET_POLY);
