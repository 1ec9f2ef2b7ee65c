//! Internal macros for per-width CRC engine generation.
//!
//! The CRC-8, CRC-16 and CRC-32 engines share table generation and the compute
//! loop structure; they differ only in register type and in the table-driven
//! step, which is spelled out explicitly per width.

/// Generate the table generator and compute function for one register width.
///
/// This macro creates:
/// - `WIDTH`, `TOP_BIT` and `BYTE_SHIFT` constants
/// - `generate_table(poly)`: MSB-first 256-entry table (`const fn`)
/// - `compute(table, data, initial, xor_out, reflect_output, reflect_input)` (`const fn`)
///
/// # Arguments
///
/// - `$reg`: register type (`u8`, `u16`, `u32`)
/// - `$width`: the matching [`CrcWidth`](crate::CrcWidth) variant
/// - `step`: table-driven update; `$crc` is the register, `$byte` the (possibly
///   reflected) input byte and `$table` the lookup table
macro_rules! define_crc_engine {
  (
    register: $reg:ty,
    width: $width:expr,
    step: |$crc:ident, $byte:ident, $table:ident| $step:expr $(,)?
  ) => {
    /// Register width in bits.
    pub const WIDTH: u8 = $width.bits();

    /// Most significant register bit, `1 << (WIDTH - 1)`.
    pub const TOP_BIT: $reg = 1 << (WIDTH - 1);

    /// Shift aligning a dividend byte with the top of the register, `WIDTH - 8`.
    pub const BYTE_SHIFT: u32 = WIDTH as u32 - 8;

    /// Generate the 256-entry lookup table for `poly` (normal form, MSB-first).
    ///
    /// Entry `i` is the remainder of dividing the byte `i`, placed in the most
    /// significant byte of the register, by `poly`. Reflection is never baked
    /// into the table; see [`compute`].
    #[must_use]
    pub const fn generate_table(poly: $reg) -> [$reg; 256] {
      let mut table: [$reg; 256] = [0; 256];
      let mut dividend = 0usize;

      while dividend < 256 {
        let mut remainder = (dividend as $reg) << BYTE_SHIFT;
        let mut bit = 0;
        while bit < 8 {
          if remainder & TOP_BIT == 0 {
            remainder <<= 1;
          } else {
            remainder = (remainder << 1) ^ poly;
          }
          bit += 1;
        }
        table[dividend] = remainder;
        dividend += 1;
      }

      table
    }

    /// Compute the CRC of `data` with a table from [`generate_table`].
    ///
    /// The register starts at `initial` and absorbs one byte at a time, each
    /// reflected first when `reflect_input` is set. The result is XORed with
    /// `xor_out` and then, when `reflect_output` is set, reflected across the
    /// full register width.
    #[must_use]
    pub const fn compute(
      table: &[$reg; 256],
      data: &[u8],
      initial: $reg,
      xor_out: $reg,
      reflect_output: bool,
      reflect_input: bool,
    ) -> $reg {
      let mut crc = initial;
      let mut i = 0usize;

      while i < data.len() {
        let byte = if reflect_input {
          $crate::reflect(data[i] as u32, 8) as u8
        } else {
          data[i]
        };
        crc = {
          let $crc = crc;
          let $byte = byte;
          let $table = table;
          $step
        };
        i += 1;
      }

      crc ^= xor_out;
      if reflect_output {
        crc = $crate::reflect(crc as u32, WIDTH) as $reg;
      }
      crc
    }
  };
}
