//! # Truncation Policy
//!
//! Pure length arithmetic for single and paired sequences.

/// Positions reserved for `[CLS]` and `[SEP]`.
const SINGLE_RESERVED: usize = 2;

/// Positions reserved for `[CLS]` and two `[SEP]`.
const PAIR_RESERVED: usize = 3;

/// The number of tokens kept from a single sequence of `len` tokens.
///
/// When `len` exceeds `max_len - 2`, `max_len - 1` tokens are kept;
/// one more than fits beside `[CLS]` and `[SEP]`. The assembled
/// encoding is then cut to `max_len`, dropping the closing `[SEP]`.
pub fn truncate_single_len(
    len: usize,
    max_len: usize,
) -> usize {
    if len > max_len.saturating_sub(SINGLE_RESERVED) {
        len.min(max_len.saturating_sub(1))
    } else {
        len
    }
}

/// The number of tokens kept from a `(query, doc)` pair.
///
/// The overflow beyond `max_len - 3` is split in half; the doc absorbs
/// the odd token. When one side is too short for its share, the other
/// side absorbs the rest.
///
/// ## Returns
/// `(query_len, doc_len)`.
pub fn truncate_pair_lens(
    query_len: usize,
    doc_len: usize,
    max_len: usize,
) -> (usize, usize) {
    let budget = max_len.saturating_sub(PAIR_RESERVED);
    let total = query_len + doc_len;
    if total <= budget {
        return (query_len, doc_len);
    }

    let delta = total - budget;
    let mut query_cut = delta / 2;
    let mut doc_cut = delta - query_cut;

    if query_cut > query_len {
        doc_cut += query_cut - query_len;
        query_cut = query_len;
    }
    if doc_cut > doc_len {
        query_cut += doc_cut - doc_len;
        doc_cut = doc_len;
    }

    (query_len - query_cut, doc_len - doc_cut)
}
