//! # Character Classes
//!
//! Unicode category predicates used by the normalizer.
//!
//! Characters outside the Basic Multilingual Plane are opaque to every
//! predicate here; they are never control, whitespace, punctuation,
//! accent, or CJK characters. Such characters are kept intact through
//! every normalization stage.

use unicode_general_category::{GeneralCategory, get_general_category};

/// The lower bound of the supplementary (astral) planes.
const SUPPLEMENTARY_PLANE_START: u32 = 0x1_0000;

fn is_bmp(c: char) -> bool {
    (c as u32) < SUPPLEMENTARY_PLANE_START
}

fn bmp_category(c: char) -> Option<GeneralCategory> {
    is_bmp(c).then(|| get_general_category(c))
}

/// Is `c` a control character?
///
/// Tab, newline and carriage-return are whitespace, not control.
/// Otherwise, any `C*` category character is control.
pub fn is_control(c: char) -> bool {
    if matches!(c, '\t' | '\n' | '\r') {
        return false;
    }
    matches!(
        bmp_category(c),
        Some(
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
        )
    )
}

/// Is `c` whitespace?
///
/// Space, tab, newline, carriage-return; or any `Z*` separator.
pub fn is_whitespace(c: char) -> bool {
    if matches!(c, ' ' | '\t' | '\n' | '\r') {
        return true;
    }
    matches!(
        bmp_category(c),
        Some(
            GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
    )
}

/// Is `c` punctuation?
///
/// All non-alphanumeric printable ASCII is punctuation, including
/// symbols such as `$`, `^` and `` ` `` which Unicode does not
/// classify as `P*`. Otherwise, any `P*` category character.
pub fn is_punctuation(c: char) -> bool {
    let cp = c as u32;
    if (33..=47).contains(&cp)
        || (58..=64).contains(&cp)
        || (91..=96).contains(&cp)
        || (123..=126).contains(&cp)
    {
        return true;
    }
    matches!(
        bmp_category(c),
        Some(
            GeneralCategory::ConnectorPunctuation
                | GeneralCategory::DashPunctuation
                | GeneralCategory::OpenPunctuation
                | GeneralCategory::ClosePunctuation
                | GeneralCategory::InitialPunctuation
                | GeneralCategory::FinalPunctuation
                | GeneralCategory::OtherPunctuation
        )
    )
}

/// Is `c` in the isolated CJK ranges?
///
/// Only the Unified block `U+4E00..=U+9FA5` and Extension-A
/// `U+3400..=U+4DBF`; the compatibility and supplementary ideograph
/// blocks are not isolated.
pub fn is_cjk_char(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FA5}' | '\u{3400}'..='\u{4DBF}')
}

/// Is `c` a non-spacing combining mark (`Mn`)?
pub fn is_accent_mark(c: char) -> bool {
    bmp_category(c) == Some(GeneralCategory::NonspacingMark)
}
