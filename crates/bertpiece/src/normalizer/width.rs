//! # Full-Width to Half-Width Conversion

/// The ideographic space.
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Convert full-width characters to their half-width forms.
///
/// * `U+3000` (ideographic space) becomes an ASCII space.
/// * Any character in `U+FF00..=U+FFFF` maps to `(low_byte + 0x20) & 0xFF`;
///   so `！` becomes `!` and `Ａ` becomes `A`.
///
/// The mapping is applied to the whole block, so the tail of the block
/// (e.g. `U+FFE0..`) wraps into the C0 control range; cleaning removes
/// those afterwards.
pub fn full_width_to_half_width(text: &str) -> String {
    text.chars().map(half_width_char).collect()
}

fn half_width_char(c: char) -> char {
    if c == IDEOGRAPHIC_SPACE {
        return ' ';
    }
    let cp = c as u32;
    if cp >> 8 == 0xFF {
        let low = (cp + 0x20) & 0xFF;
        // `low` is always below 0x100.
        return char::from(low as u8);
    }
    c
}
