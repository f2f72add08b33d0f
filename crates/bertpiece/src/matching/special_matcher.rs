//! # Special Token Matcher
//!
//! A multi-pattern byte automaton over the special token set.
//!
//! States live in an arena, addressed by [`StateId`]. Each state has
//! sorted sparse transitions, a failure link, an optional terminal
//! pattern, and a dictionary-suffix link to the nearest terminal state
//! reachable through failure links. The root has a dense transition table.
//!
//! Matching is leftmost-longest and non-overlapping.

use core::ops::Range;

use crate::types::BPHashSet;

/// Index of a state in the matcher arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(u32);

impl StateId {
    const ROOT: StateId = StateId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
struct State {
    /// Sorted by byte.
    transitions: Vec<(u8, StateId)>,

    fail: Option<StateId>,

    /// Pattern which ends exactly at this state.
    terminal: Option<usize>,

    /// Nearest proper-suffix state with a terminal pattern.
    dict_link: Option<StateId>,

    /// Length of the prefix this state spells.
    depth: usize,
}

impl State {
    fn next(
        &self,
        byte: u8,
    ) -> Option<StateId> {
        self.transitions
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|idx| self.transitions[idx].1)
    }
}

/// A special token found by [`SpecialMatcher::scan`].
///
/// `start..end` are byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialMatch<'t> {
    /// Byte offset of the first matched byte.
    pub start: usize,

    /// Byte offset one past the last matched byte.
    pub end: usize,

    /// The matched special token.
    pub token: &'t str,
}

impl SpecialMatch<'_> {
    /// The byte range of the match.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Span Label/Range Reference for [`SpecialMatcher::split_spans`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef {
    /// A literal text reference; subject to normalization.
    Literal(Range<usize>),

    /// A special token reference.
    Special(Range<usize>),
}

impl From<SpanRef> for Range<usize> {
    fn from(span: SpanRef) -> Self {
        match span {
            SpanRef::Literal(range) => range,
            SpanRef::Special(range) => range,
        }
    }
}

/// Multi-pattern matcher for special tokens.
///
/// Built once; immutable and shareable across threads afterwards.
///
/// ## Style Hints
/// Instance names should prefer `special_matcher`, or `matcher`.
#[derive(Debug, Clone)]
pub struct SpecialMatcher {
    states: Vec<State>,
    root_table: Box<[StateId; 256]>,
    patterns: Vec<String>,
}

impl Default for SpecialMatcher {
    fn default() -> Self {
        Self::new(Vec::<&str>::new())
    }
}

impl SpecialMatcher {
    /// Build a matcher over a set of special tokens.
    ///
    /// Empty patterns are ignored; duplicates are collapsed.
    ///
    /// ## Arguments
    /// * `patterns` - The special token strings.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: BPHashSet<String> = BPHashSet::default();
        let mut unique: Vec<String> = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                log::warn!("ignoring empty special token pattern");
                continue;
            }
            if seen.insert(pattern.to_string()) {
                unique.push(pattern.to_string());
            }
        }
        // Deterministic arena layout, independent of hash set order.
        unique.sort();

        let mut matcher = Self {
            states: vec![State::default()],
            root_table: Box::new([StateId::ROOT; 256]),
            patterns: unique,
        };
        matcher.build_trie();
        matcher.build_links();
        matcher
    }

    fn build_trie(&mut self) {
        for (pattern_id, pattern) in self.patterns.iter().enumerate() {
            let mut current = StateId::ROOT;
            for &byte in pattern.as_bytes() {
                current = match self.states[current.index()].next(byte) {
                    Some(next) => next,
                    None => {
                        let next = StateId(self.states.len() as u32);
                        let depth = self.states[current.index()].depth + 1;
                        self.states.push(State {
                            depth,
                            ..State::default()
                        });
                        let transitions = &mut self.states[current.index()].transitions;
                        let pos = transitions.partition_point(|&(b, _)| b < byte);
                        transitions.insert(pos, (byte, next));
                        next
                    }
                };
            }
            self.states[current.index()].terminal = Some(pattern_id);
        }
    }

    /// Breadth-first failure and dictionary link construction.
    fn build_links(&mut self) {
        let mut queue = std::collections::VecDeque::new();

        for &(byte, child) in &self.states[StateId::ROOT.index()].transitions {
            self.root_table[byte as usize] = child;
        }
        for &(_, child) in self.states[StateId::ROOT.index()].transitions.clone().iter() {
            self.states[child.index()].fail = Some(StateId::ROOT);
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let transitions = self.states[current.index()].transitions.clone();
            for (byte, child) in transitions {
                let mut fallback = self.states[current.index()].fail;
                let fail = loop {
                    match fallback {
                        Some(state) => {
                            if let Some(next) = self.step(state, byte) {
                                break next;
                            }
                            fallback = self.states[state.index()].fail;
                        }
                        None => break StateId::ROOT,
                    }
                };

                let fail_state = &self.states[fail.index()];
                let dict_link = if fail_state.terminal.is_some() {
                    Some(fail)
                } else {
                    fail_state.dict_link
                };

                let child_state = &mut self.states[child.index()];
                child_state.fail = Some(fail);
                child_state.dict_link = dict_link;
                queue.push_back(child);
            }
        }
    }

    /// A goto transition; the root never fails.
    fn step(
        &self,
        state: StateId,
        byte: u8,
    ) -> Option<StateId> {
        if state == StateId::ROOT {
            Some(self.root_table[byte as usize])
        } else {
            self.states[state.index()].next(byte)
        }
    }

    /// The number of states in the arena.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// The distinct special tokens, in sorted order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Is the matcher empty?
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Scan `text` for special tokens.
    ///
    /// Runs in time linear in the text length, for a fixed pattern set.
    ///
    /// ## Returns
    /// Non-overlapping matches ordered by start offset.
    /// At any offset, the longest special token wins.
    pub fn scan<'t>(
        &self,
        text: &'t str,
    ) -> Vec<SpecialMatch<'t>> {
        let mut matches = Vec::new();
        if self.is_empty() {
            return matches;
        }

        let mut from = 0;
        while let Some((start, end)) = self.find_leftmost_longest(text.as_bytes(), from) {
            matches.push(SpecialMatch {
                start,
                end,
                token: &text[start..end],
            });
            from = end;
        }
        matches
    }

    /// Find the leftmost-longest match starting at or after `from`.
    ///
    /// The best candidate is committed as soon as the automaton depth
    /// shows no later match can start at or before it; so at most the
    /// longest pattern's length of bytes is read past the match.
    fn find_leftmost_longest(
        &self,
        bytes: &[u8],
        from: usize,
    ) -> Option<(usize, usize)> {
        let mut state = StateId::ROOT;
        let mut best: Option<(usize, usize)> = None;

        for (offset, &byte) in bytes[from..].iter().enumerate() {
            state = self.transition(state, byte);
            let end = from + offset + 1;

            // The longest pattern ending here is the terminal itself,
            // else the first dictionary link.
            let current = &self.states[state.index()];
            let hit = if current.terminal.is_some() {
                Some(state)
            } else {
                current.dict_link
            };
            if let Some(pattern_id) = hit.and_then(|h| self.states[h.index()].terminal) {
                let start = end - self.patterns[pattern_id].len();
                if best.is_none_or(|(best_start, _)| start <= best_start) {
                    best = Some((start, end));
                }
            }

            if let Some((best_start, _)) = best
                && end - current.depth > best_start
            {
                return best;
            }
        }
        best
    }

    /// Follow failure links until `byte` can be consumed.
    fn transition(
        &self,
        mut state: StateId,
        byte: u8,
    ) -> StateId {
        loop {
            if let Some(next) = self.step(state, byte) {
                return next;
            }
            state = self.states[state.index()].fail.unwrap_or(StateId::ROOT);
        }
    }

    /// Split `text` into alternating [`SpanRef::Literal`] and [`SpanRef::Special`] spans.
    ///
    /// Spans cover the whole text, in order; empty literal spans are omitted.
    pub fn split_spans(
        &self,
        text: &str,
    ) -> Vec<SpanRef> {
        let mut spans = Vec::new();
        let mut last = 0;
        for m in self.scan(text) {
            if last < m.start {
                spans.push(SpanRef::Literal(last..m.start));
            }
            spans.push(SpanRef::Special(m.range()));
            last = m.end;
        }
        if last < text.len() {
            spans.push(SpanRef::Literal(last..text.len()));
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use aho_corasick::{AhoCorasick, MatchKind};
    use proptest::prelude::*;

    use super::*;
    use crate::types::{check_is_send, check_is_sync};

    fn scan_tuples(
        matcher: &SpecialMatcher,
        text: &str,
    ) -> Vec<(usize, usize, String)> {
        matcher
            .scan(text)
            .into_iter()
            .map(|m| (m.start, m.end, m.token.to_string()))
            .collect()
    }

    #[test]
    fn test_bert_specials() {
        let matcher = SpecialMatcher::new(["[UNK]", "[CLS]", "[SEP]", "[MASK]", "[PAD]"]);
        check_is_send(&matcher);
        check_is_sync(&matcher);

        let text = "[CLS]美甲。地址: [SEP] milk[PAD][PAD]";
        let matches = matcher.scan(text);
        assert_eq!(
            matches.iter().map(|m| m.token).collect::<Vec<_>>(),
            vec!["[CLS]", "[SEP]", "[PAD]", "[PAD]"]
        );
        for m in &matches {
            assert_eq!(&text[m.range()], m.token);
        }
        assert_eq!(matches[0].range(), 0..5);
    }

    #[test]
    fn test_split_spans() {
        use SpanRef::*;

        let matcher = SpecialMatcher::new(["<|FNORD|>", "<|NORP|>"]);

        let source = "abc 1<|FNORD|> def  <|NORP|><|NORP|> ghi";
        assert_eq!(
            matcher.split_spans(source),
            vec![
                Literal(0..5),
                Special(5..14),
                Literal(14..20),
                Special(20..28),
                Special(28..36),
                Literal(36..40),
            ]
        );

        assert!(matcher.split_spans("").is_empty());
        assert_eq!(matcher.split_spans("<|NORP|>"), vec![Special(0..8)]);
    }

    #[test]
    fn test_longest_wins_at_same_start() {
        let matcher = SpecialMatcher::new(["[M", "[MASK]", "ASK"]);
        assert_eq!(
            scan_tuples(&matcher, "a[MASK]b[MAS"),
            vec![(1, 7, "[MASK]".to_string()), (8, 10, "[M".to_string())]
        );
    }

    #[test]
    fn test_leftmost_beats_longer_later() {
        let matcher = SpecialMatcher::new(["ab", "bcdef"]);
        assert_eq!(
            scan_tuples(&matcher, "abcdef"),
            vec![(0, 2, "ab".to_string())]
        );

        // Suffix hits found through dictionary links.
        let matcher = SpecialMatcher::new(["xabcy", "bc"]);
        assert_eq!(
            scan_tuples(&matcher, "xabcz"),
            vec![(2, 4, "bc".to_string())]
        );
    }

    #[test]
    fn test_overlapping_candidates() {
        // "ab" is still extendable to "xabcy" when "c" is found.
        let matcher = SpecialMatcher::new(["ab", "c", "xabcy"]);
        assert_eq!(scan_tuples(&matcher, "xabcz"), vec![
            (1, 3, "ab".to_string()),
            (3, 4, "c".to_string()),
        ]);
        assert_eq!(scan_tuples(&matcher, "xabcyc"), vec![
            (0, 5, "xabcy".to_string()),
            (5, 6, "c".to_string()),
        ]);

        let matcher = SpecialMatcher::new(["a", "aa", "aaa"]);
        assert_eq!(
            scan_tuples(&matcher, "aaaaaaa")
                .into_iter()
                .map(|(start, end, _)| (start, end))
                .collect::<Vec<_>>(),
            vec![(0, 3), (3, 6), (6, 7)]
        );
    }

    #[test]
    fn test_empty_matcher() {
        let matcher = SpecialMatcher::default();
        assert!(matcher.is_empty());
        assert_eq!(matcher.state_count(), 1);
        assert!(matcher.scan("[CLS] anything").is_empty());
        assert_eq!(
            matcher.split_spans("[CLS]"),
            vec![SpanRef::Literal(0..5)]
        );

        let matcher = SpecialMatcher::new([""]);
        assert!(matcher.is_empty());
    }

    #[test]
    fn test_dedup_and_patterns() {
        let matcher = SpecialMatcher::new(["[SEP]", "[CLS]", "[SEP]"]);
        assert_eq!(matcher.patterns(), &["[CLS]", "[SEP]"]);
        // root + "[" shared + "CLS]" + "SEP]"
        assert_eq!(matcher.state_count(), 1 + 1 + 4 + 4);
    }

    #[test]
    fn test_multibyte_boundaries() {
        let matcher = SpecialMatcher::new(["美甲", "[CLS]"]);
        let text = "😀美甲x[CLS]美";
        let matches = matcher.scan(text);
        assert_eq!(matches.len(), 2);
        for m in matches {
            assert!(text.is_char_boundary(m.start));
            assert!(text.is_char_boundary(m.end));
        }
    }

    fn reference_scan(
        patterns: &[String],
        text: &str,
    ) -> Vec<(usize, usize, String)> {
        let patterns: Vec<&String> = patterns.iter().filter(|p| !p.is_empty()).collect();
        if patterns.is_empty() {
            return Vec::new();
        }
        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .unwrap();
        ac.find_iter(text)
            .map(|m| (m.start(), m.end(), text[m.start()..m.end()].to_string()))
            .collect()
    }

    proptest! {
        #[test]
        fn test_matches_aho_corasick(
            patterns in prop::collection::vec("[abc\\[\\]é]{0,4}", 0..6),
            text in "[abc\\[\\]é ]{0,40}",
        ) {
            let matcher = SpecialMatcher::new(&patterns);
            prop_assert_eq!(scan_tuples(&matcher, &text), reference_scan(&patterns, &text));
        }

        #[test]
        fn test_spans_cover_text(
            patterns in prop::collection::vec("[ab]{1,3}", 1..4),
            text in "[abc]{0,30}",
        ) {
            let matcher = SpecialMatcher::new(&patterns);
            let mut rebuilt = String::new();
            let mut last = 0;
            for span in matcher.split_spans(&text) {
                let range: Range<usize> = span.into();
                prop_assert_eq!(range.start, last);
                rebuilt.push_str(&text[range.clone()]);
                last = range.end;
            }
            prop_assert_eq!(rebuilt, text);
        }
    }
}
