//! Table-driven CRC engine following the AUTOSAR configurable CRC model.
//!
//! A CRC variant is fully described by its register width (8, 16 or 32 bits),
//! generator polynomial, initial value, final XOR value and two reflection
//! flags. This crate builds a 256-entry lookup table once per
//! (width, polynomial) pair and computes CRCs over complete buffers with it.
//!
//! # Supported Variants
//!
//! | Variant | Width | Poly | Init | XorOut | Reflect in/out |
//! |---------|-------|------|------|--------|----------------|
//! | CRC-8 (SAE-J1850) | 8 | 0x1D | 0xFF | 0xFF | no/no |
//! | CRC-8H2F | 8 | 0x2F | 0xFF | 0xFF | no/no |
//! | CRC-16/CCITT-FALSE | 16 | 0x1021 | 0xFFFF | 0x0000 | no/no |
//! | CRC-32/Ethernet | 32 | 0x04C11DB7 | 0xFFFFFFFF | 0xFFFFFFFF | yes/yes |
//!
//! Any other parameter set of a supported width works the same way.
//!
//! # Layers
//!
//! - [`crc8`], [`crc16`], [`crc32`]: monomorphic `const fn` engines. These are
//!   infallible and usable at compile time.
//! - [`generate_table`] / [`compute_crc`]: width chosen at runtime through
//!   [`CrcWidth`] and [`CrcTable`]; values are range-checked.
//! - [`Crc`]: parameters plus a prebuilt table behind a single `checksum` call.
//!
//! # Example
//!
//! ```rust
//! use autosar_crc::{Crc, CrcVariant, CrcWidth, compute_crc, generate_table};
//!
//! // Build the table once, reuse it for every buffer.
//! let table = generate_table(CrcWidth::Bits8, 0x1D)?;
//! assert_eq!(compute_crc(&table, &[0x00, 0x00, 0x00, 0x00], 0xFF, 0xFF, false, false)?, 0x59);
//! assert_eq!(compute_crc(&table, &[0xFF, 0xFF, 0xFF, 0xFF], 0xFF, 0xFF, false, false)?, 0x74);
//!
//! // Or use a preset.
//! let ethernet = Crc::from_variant(CrcVariant::Crc32Ethernet);
//! assert_eq!(ethernet.checksum(&[0x33, 0x22, 0x55, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]), 0xB0AE_863D);
//! # Ok::<(), autosar_crc::CrcError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` and allocation-free. Every table and every CRC can
//! be computed in a `const` context.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod config;
mod crc;
pub mod crc16;
pub mod crc32;
pub mod crc8;
pub mod error;
mod params;
pub mod reference;
mod reflect;
mod table;
mod width;

pub use config::CrcVariant;
pub use crc::Crc;
pub use error::CrcError;
pub use params::CrcParams;
pub use reflect::{MAX_REFLECT_BITS, reflect};
pub use table::{CrcTable, compute_crc, generate_table};
pub use width::CrcWidth;
