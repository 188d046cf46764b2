//! Verilog hex literal formatting
//!
//! Renders quantized samples as unsigned B-bit two's-complement hex
//! literals of the form `B'h<hex>` with an optional trailing comma, e.g.
//! `12'h0ab,`. Hex digits are lowercase and zero-padded to `ceil(B/4)`
//! characters regardless of bit width.

/// Number of hex digits needed to print a B-bit value.
pub fn hex_digits(bit_width: u32) -> usize {
    ((bit_width + 3) / 4) as usize
}

/// Convert a signed quantized sample to its unsigned B-bit
/// two's-complement value.
pub fn to_unsigned(q: i64, bit_width: u32) -> u64 {
    if q < 0 {
        (q + (1i64 << bit_width)) as u64
    } else {
        q as u64
    }
}

/// Decode an unsigned B-bit two's-complement value back to a signed sample.
pub fn to_signed(value: u64, bit_width: u32) -> i64 {
    let half = 1u64 << (bit_width - 1);
    if value >= half {
        value as i64 - (1i64 << bit_width)
    } else {
        value as i64
    }
}

/// Render one sample as a Verilog hex literal line (without newline).
pub fn hex_literal(q: i64, bit_width: u32, trailing_comma: bool) -> String {
    let value = to_unsigned(q, bit_width);
    let width = hex_digits(bit_width);
    if trailing_comma {
        format!("{}'h{:0width$x},", bit_width, value)
    } else {
        format!("{}'h{:0width$x}", bit_width, value)
    }
}
