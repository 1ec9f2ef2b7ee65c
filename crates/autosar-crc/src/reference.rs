//! Bitwise reference implementation.
//!
//! This module provides the canonical "source of truth" for CRC computation.
//! It processes one bit at a time with no lookup table, making it:
//!
//! - **Obviously correct**: the loop mirrors polynomial long division directly
//! - **Width-generic**: one body covers 8, 16 and 32 bits via [`CrcWidth`]
//! - **Const-evaluable**: check values are verified at compile time below
//!
//! The table-driven engines must produce identical results for every parameter
//! set and input. The unit, property and fuzz tests use it as their oracle.

// SAFETY: all indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

use crate::{CrcParams, CrcWidth, reflect};

/// Bitwise CRC over `data` for an arbitrary parameter set.
///
/// Values in `params` are masked to the register width; callers that need
/// validation use [`CrcParams::validate`] first.
#[must_use]
pub const fn crc_bitwise(params: &CrcParams, data: &[u8]) -> u32 {
  let width = params.width;
  let mask = width.mask();
  let top = width.top_bit();
  let poly = params.polynomial & mask;

  let mut crc = params.initial & mask;
  let mut i = 0usize;
  while i < data.len() {
    let byte = if params.reflect_in {
      reflect(data[i] as u32, 8)
    } else {
      data[i] as u32
    };
    crc ^= byte << width.byte_shift();

    let mut bit = 0;
    while bit < 8 {
      crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
      crc &= mask;
      bit += 1;
    }
    i += 1;
  }

  crc = (crc ^ params.xor_out) & mask;
  if params.reflect_out {
    crc = reflect(crc, width.bits());
  }
  crc
}

/// Bitwise computation of a single table entry: the remainder of `byte`
/// aligned to the top of a `width`-bit register, divided by `poly`.
#[must_use]
pub const fn table_entry_bitwise(width: CrcWidth, poly: u32, byte: u8) -> u32 {
  let params = CrcParams {
    width,
    polynomial: poly,
    initial: 0,
    xor_out: 0,
    reflect_in: false,
    reflect_out: false,
  };
  crc_bitwise(&params, &[byte])
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// CRC-8 (SAE-J1850): check 0x4B
const _: () = assert!(crc_bitwise(&CrcParams::CRC8_SAE_J1850, CHECK_INPUT) == 0x4B);

// CRC-8H2F: check 0xDF
const _: () = assert!(crc_bitwise(&CrcParams::CRC8_H2F, CHECK_INPUT) == 0xDF);

// CRC-16/CCITT-FALSE: check 0x29B1
const _: () = assert!(crc_bitwise(&CrcParams::CRC16_CCITT_FALSE, CHECK_INPUT) == 0x29B1);

// CRC-32/Ethernet: check 0xCBF43926
const _: () = assert!(crc_bitwise(&CrcParams::CRC32_ETHERNET, CHECK_INPUT) == 0xCBF4_3926);
