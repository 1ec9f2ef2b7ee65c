//! Basic usage: presets, custom parameters and table dumps.
//!
//! Run with: `cargo run --example basic -p autosar-crc`

use autosar_crc::{Crc, CrcError, CrcParams, CrcVariant, CrcWidth, compute_crc, generate_table};

fn main() -> Result<(), CrcError> {
  println!("=== AUTOSAR CRC Examples ===\n");

  presets();
  custom()?;
  table_dump()?;

  Ok(())
}

/// Every AUTOSAR preset over the standard check string.
fn presets() {
  println!("--- Presets ---\n");

  let data = b"123456789";
  for variant in CrcVariant::ALL {
    let crc = Crc::from_variant(variant);
    let value = crc.checksum(data);
    println!("{:<20} 0x{value:08X}  ({})", variant.as_str(), variant.params());
    assert_eq!(value, variant.check());
  }
  println!();
}

/// A table built once and reused for several buffers.
fn custom() -> Result<(), CrcError> {
  println!("--- Custom parameters ---\n");

  // CRC-16/ARC: reflected in and out.
  let params = CrcParams::new(CrcWidth::Bits16, 0x8005, 0x0000, 0x0000, true, true)?;
  let table = generate_table(params.width, params.polynomial)?;

  for msg in [&b"123456789"[..], b"", b"AUTOSAR"] {
    let crc = compute_crc(&table, msg, params.initial, params.xor_out, params.reflect_out, params.reflect_in)?;
    println!("CRC-16/ARC {msg:02X?} = 0x{crc:04X}");
  }
  println!();
  Ok(())
}

/// Print a lookup table as a C array body.
fn table_dump() -> Result<(), CrcError> {
  println!("--- CRC-8 (SAE-J1850) table ---\n");

  let table = generate_table(CrcWidth::Bits8, 0x1D)?;
  println!("{table}");
  Ok(())
}
