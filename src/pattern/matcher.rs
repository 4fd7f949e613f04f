//! Backtracking matcher for compiled patterns.
//!
//! Each placeholder offers a list of candidate capture lengths: typed slots
//! longest first, untyped slots shortest first. The matcher tries them in
//! order and backtracks when the remainder of the pattern cannot consume the
//! remainder of the sentence. A candidate whose text fails conversion is
//! skipped like any other non-matching span.
//!
//! Whether the remaining segments match from a given sentence position does
//! not depend on what was captured before it, so failed `(segment, position)`
//! pairs are remembered and never explored twice. This keeps patterns with
//! several untyped placeholders polynomial in the sentence length.

use std::collections::HashSet;

use tracing::trace;

use super::{Argument, Placeholder, PlaceholderKind, Segment};

/// Matches `input` in full against `segments`.
pub(super) fn match_sentence(segments: &[Segment], input: &str) -> Option<Vec<Argument>> {
    let mut matcher = Matcher {
        segments,
        input,
        captures: Vec::new(),
        failed: HashSet::new(),
    };
    matcher.match_at(0, 0).then_some(matcher.captures)
}

struct Matcher<'p, 's> {
    segments: &'p [Segment],
    input: &'s str,
    captures: Vec<Argument>,
    failed: HashSet<(usize, usize)>,
}

impl Matcher<'_, '_> {
    fn match_at(&mut self, index: usize, position: usize) -> bool {
        let Some(segment) = self.segments.get(index) else {
            return position == self.input.len();
        };
        if self.failed.contains(&(index, position)) {
            return false;
        }
        let Some(rest) = self.input.get(position..) else {
            return false;
        };
        let matched = match segment {
            Segment::Literal(text) => {
                rest.starts_with(text.as_str()) && self.match_at(index + 1, position + text.len())
            }
            Segment::Placeholder(placeholder) => {
                self.match_placeholder(placeholder, index, position, rest)
            }
        };
        if !matched {
            self.failed.insert((index, position));
        }
        matched
    }

    fn match_placeholder(
        &mut self,
        placeholder: &Placeholder,
        index: usize,
        position: usize,
        rest: &str,
    ) -> bool {
        for end in candidate_ends(placeholder.kind(), rest) {
            if self.failed.contains(&(index + 1, position + end)) {
                continue;
            }
            let Some(text) = rest.get(..end) else {
                continue;
            };
            let value = match placeholder.kind().convert(text) {
                Ok(value) => value,
                Err(error) => {
                    trace!(placeholder = placeholder.name(), %error, "rejected capture");
                    continue;
                }
            };
            self.captures.push(Argument {
                name: placeholder.name().to_owned(),
                value,
            });
            if self.match_at(index + 1, position + end) {
                return true;
            }
            self.captures.pop();
        }
        false
    }
}

/// Returns the byte lengths a placeholder of `kind` may capture from `rest`,
/// in the order they should be tried.
fn candidate_ends(kind: PlaceholderKind, rest: &str) -> Vec<usize> {
    match kind {
        PlaceholderKind::Any => rest
            .char_indices()
            .skip(1)
            .map(|(offset, _)| offset)
            .chain((!rest.is_empty()).then_some(rest.len()))
            .collect(),
        PlaceholderKind::Word => {
            let mut ends: Vec<usize> = rest
                .char_indices()
                .take_while(|&(_, ch)| is_word_char(ch))
                .map(|(offset, ch)| offset + ch.len_utf8())
                .collect();
            ends.reverse();
            ends
        }
        PlaceholderKind::Integer => {
            let sign = usize::from(rest.starts_with('-'));
            let digits = rest
                .bytes()
                .skip(sign)
                .take_while(u8::is_ascii_digit)
                .count();
            (sign + 1..=sign + digits).rev().collect()
        }
        PlaceholderKind::Float => float_ends(rest),
    }
}

/// Ends of every prefix of the form `-?` digits with at most one `.`, where
/// the prefix ends in a digit. Longest first.
fn float_ends(rest: &str) -> Vec<usize> {
    let sign = usize::from(rest.starts_with('-'));
    let mut seen_dot = false;
    let mut ends = Vec::new();
    for (offset, byte) in rest.bytes().enumerate().skip(sign) {
        match byte {
            b'0'..=b'9' => ends.push(offset + 1),
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    ends.reverse();
    ends
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
