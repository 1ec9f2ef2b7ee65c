//! AUTOSAR "Specification of CRC Routines" test vectors.
//!
//! Every preset is checked against all seven reference messages through each
//! public layer: the width-agnostic API, the `Crc` handle (precomputed and
//! generated tables) and the bitwise reference.

use autosar_crc::{Crc, CrcVariant, compute_crc, generate_table, reference::crc_bitwise};

const MESSAGES: [&[u8]; 7] = [
  &[0x00, 0x00, 0x00, 0x00],
  &[0xF2, 0x01, 0x83],
  &[0x0F, 0xAA, 0x00, 0x55],
  &[0x00, 0xFF, 0x55, 0x11],
  &[0x33, 0x22, 0x55, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF],
  &[0x92, 0x6B, 0x55],
  &[0xFF, 0xFF, 0xFF, 0xFF],
];

/// Expected CRC per variant, in `MESSAGES` order.
const EXPECTED: [(CrcVariant, [u32; 7]); 4] = [
  (CrcVariant::Crc8SaeJ1850, [0x59, 0x37, 0x79, 0xB8, 0xCB, 0x8C, 0x74]),
  (CrcVariant::Crc8H2F, [0x12, 0xC2, 0xC6, 0x77, 0x11, 0x33, 0x6C]),
  (
    CrcVariant::Crc16CcittFalse,
    [0x84C0, 0xD374, 0x2023, 0xB8F9, 0xF53F, 0x0745, 0x1D0F],
  ),
  (
    CrcVariant::Crc32Ethernet,
    [
      0x2144_DF1C,
      0x24AB_9D77,
      0xB6C9_B287,
      0x32A0_6212,
      0xB0AE_863D,
      0x9CDE_A29B,
      0xFFFF_FFFF,
    ],
  ),
];

fn cases() -> impl Iterator<Item = (CrcVariant, &'static [u8], u32)> {
  EXPECTED
    .into_iter()
    .flat_map(|(variant, expected)| MESSAGES.into_iter().zip(expected).map(move |(msg, crc)| (variant, msg, crc)))
}

#[test]
fn generated_table_matches_vectors() {
  for (variant, msg, expected) in cases() {
    let p = variant.params();
    let table = generate_table(p.width, p.polynomial).unwrap();
    let crc = compute_crc(&table, msg, p.initial, p.xor_out, p.reflect_out, p.reflect_in).unwrap();
    assert_eq!(crc, expected, "{variant} over {msg:02X?}");
  }
}

#[test]
fn crc_handle_matches_vectors() {
  for (variant, msg, expected) in cases() {
    assert_eq!(Crc::from_variant(variant).checksum(msg), expected, "{variant} over {msg:02X?}");
    let custom = Crc::new(variant.params()).unwrap();
    assert_eq!(custom.checksum(msg), expected, "{variant} (generated table) over {msg:02X?}");
  }
}

#[test]
fn reference_matches_vectors() {
  for (variant, msg, expected) in cases() {
    assert_eq!(crc_bitwise(&variant.params(), msg), expected, "{variant} over {msg:02X?}");
  }
}

#[test]
fn check_values() {
  for variant in CrcVariant::ALL {
    assert_eq!(Crc::from_variant(variant).checksum(b"123456789"), variant.check(), "{variant}");
  }
}

#[test]
fn empty_buffer_is_init_xor_xorout() {
  for variant in CrcVariant::ALL {
    let p = variant.params();
    let table = variant.table();
    let mut expected = p.initial ^ p.xor_out;
    if p.reflect_out {
      expected = autosar_crc::reflect(expected, p.width.bits());
    }
    assert_eq!(compute_crc(&table, &[], p.initial, p.xor_out, p.reflect_out, p.reflect_in), Ok(expected));
  }
}

#[test]
fn table_generation_is_deterministic() {
  for variant in CrcVariant::ALL {
    let p = variant.params();
    let first = generate_table(p.width, p.polynomial).unwrap();
    let second = generate_table(p.width, p.polynomial).unwrap();
    assert_eq!(first, second, "{variant}");
    assert_eq!(first, variant.table(), "{variant}");
  }
}
