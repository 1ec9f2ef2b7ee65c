//! Fuzz target for the width-agnostic table surface.
//!
//! Tests that:
//! - Unmasked values are rejected exactly when they exceed the width
//! - Accepted tables are deterministic and carry the polynomial in entry 1

#![no_main]

use arbitrary::Arbitrary;
use autosar_crc::{CrcWidth, compute_crc, generate_table};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  bits: u8,
  polynomial: u32,
  initial: u32,
  xor_out: u32,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let Ok(width) = CrcWidth::try_from(input.bits) else {
    return;
  };

  let table = match generate_table(width, input.polynomial) {
    Ok(table) => table,
    Err(_) => {
      assert!(!width.fits(input.polynomial), "{width} rejected fitting polynomial");
      return;
    }
  };
  assert!(width.fits(input.polynomial), "{width} accepted wide polynomial");
  assert_eq!(table.polynomial(), input.polynomial);
  assert_eq!(generate_table(width, input.polynomial), Ok(table));

  let result = compute_crc(&table, &input.data, input.initial, input.xor_out, false, false);
  let fits = width.fits(input.initial) && width.fits(input.xor_out);
  assert_eq!(result.is_ok(), fits, "{width} range check mismatch");
});
