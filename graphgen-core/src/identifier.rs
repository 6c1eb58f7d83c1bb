//! Fixed-width base-26 alphabetic node identifiers.
//!
//! Index `0` maps to `A…A`, index `25` to `A…Z`, index `26` to `A…BA`, and so
//! on. Every digit position is emitted, so labels of one graph share a width
//! and sort in index order.

const RADIX: usize = 26;

/// Returns the label width needed to give `node_count` nodes distinct labels.
///
/// This is the smallest `w >= 1` with `26^w >= node_count`; counts of zero
/// or one need a single letter.
///
/// # Examples
/// ```
/// use graphgen_core::identifier_width;
///
/// assert_eq!(identifier_width(1), 1);
/// assert_eq!(identifier_width(26), 1);
/// assert_eq!(identifier_width(27), 2);
/// assert_eq!(identifier_width(676), 2);
/// assert_eq!(identifier_width(677), 3);
/// ```
#[must_use]
pub fn identifier_width(node_count: usize) -> usize {
    let mut width = 1;
    let mut capacity = RADIX;
    while capacity < node_count {
        match capacity.checked_mul(RADIX) {
            Some(next) => capacity = next,
            None => return width + 1,
        }
        width += 1;
    }
    width
}

/// Encodes `index` as a base-26 label of exactly `width` letters, most
/// significant first.
///
/// Digits above `width` are discarded, so callers size `width` with
/// [`identifier_width`].
///
/// # Examples
/// ```
/// use graphgen_core::encode;
///
/// assert_eq!(encode(0, 2), "AA");
/// assert_eq!(encode(25, 2), "AZ");
/// assert_eq!(encode(26, 2), "BA");
/// assert_eq!(encode(0, 3), "AAA");
/// ```
#[must_use]
pub fn encode(index: usize, width: usize) -> String {
    let mut digits = Vec::with_capacity(width);
    let mut remainder = index;
    for _ in 0..width {
        digits.push(letter(remainder % RADIX));
        remainder /= RADIX;
    }
    digits.iter().rev().collect()
}

/// Decodes a label produced by [`encode`] back into its index.
///
/// Returns `None` for empty labels, characters outside `A..=Z`, or values
/// that overflow `usize`.
///
/// # Examples
/// ```
/// use graphgen_core::{decode, encode};
///
/// assert_eq!(decode("BA"), Some(26));
/// assert_eq!(decode(&encode(701, 3)), Some(701));
/// assert_eq!(decode("a"), None);
/// ```
#[must_use]
pub fn decode(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    label.chars().try_fold(0_usize, |value, ch| {
        let digit = digit(ch)?;
        value.checked_mul(RADIX)?.checked_add(digit)
    })
}

fn letter(digit: usize) -> char {
    u8::try_from(digit)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .map_or('?', char::from)
}

fn digit(ch: char) -> Option<usize> {
    ch.is_ascii_uppercase()
        .then(|| usize::from(ch as u8 - b'A'))
}

/// Labels the nodes of one graph with a shared width.
///
/// # Examples
/// ```
/// use graphgen_core::NodeLabeler;
///
/// let labeler = NodeLabeler::for_node_count(30);
/// assert_eq!(labeler.width(), 2);
/// assert_eq!(labeler.label(27), "BB");
/// assert_eq!(labeler.index_of("BB"), Some(27));
/// assert_eq!(labeler.index_of("BE"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeLabeler {
    node_count: usize,
    width: usize,
}

impl NodeLabeler {
    /// Creates a labeler sized for `node_count` nodes.
    #[must_use]
    pub fn for_node_count(node_count: usize) -> Self {
        Self {
            node_count,
            width: identifier_width(node_count),
        }
    }

    /// Returns the number of nodes the labeler covers.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the label width in letters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the label for `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        encode(index, self.width)
    }

    /// Returns every label in index order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        (0..self.node_count).map(|index| self.label(index)).collect()
    }

    /// Resolves `label` to a node index of this graph.
    ///
    /// Labels of the wrong width or beyond the node count resolve to `None`.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        if label.len() != self.width {
            return None;
        }
        decode(label).filter(|&index| index < self.node_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(2, 1)]
    #[case(26, 1)]
    #[case(27, 2)]
    #[case(676, 2)]
    #[case(677, 3)]
    #[case(17_576, 3)]
    #[case(17_577, 4)]
    fn width_matches_ceiling_log26(#[case] nodes: usize, #[case] expected: usize) {
        assert_eq!(identifier_width(nodes), expected);
    }

    #[rstest]
    fn width_saturates_near_usize_max() {
        assert!(identifier_width(usize::MAX) >= 13);
    }

    #[rstest]
    #[case(0, 2, "AA")]
    #[case(25, 2, "AZ")]
    #[case(26, 2, "BA")]
    #[case(675, 2, "ZZ")]
    #[case(0, 3, "AAA")]
    #[case(3, 1, "D")]
    fn encode_emits_every_digit(#[case] index: usize, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(encode(index, width), expected);
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("A1")]
    #[case("ÄB")]
    fn decode_rejects_invalid_labels(#[case] label: &str) {
        assert_eq!(decode(label), None);
    }

    #[rstest]
    fn decode_rejects_overflow() {
        assert_eq!(decode(&"Z".repeat(20)), None);
    }

    #[rstest]
    fn labeler_rejects_wrong_width_and_out_of_range() {
        let labeler = NodeLabeler::for_node_count(5);
        assert_eq!(labeler.index_of("AB"), None);
        assert_eq!(labeler.index_of("F"), None);
        assert_eq!(labeler.index_of("E"), Some(4));
    }

    #[rstest]
    #[case(2)]
    #[case(26)]
    #[case(27)]
    #[case(700)]
    fn labels_are_distinct_and_sorted(#[case] nodes: usize) {
        let labels = NodeLabeler::for_node_count(nodes).labels();
        let unique: HashSet<&String> = labels.iter().collect();
        assert_eq!(unique.len(), nodes);
        assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
    }

    proptest! {
        #[test]
        fn encode_is_inverted_by_decode(nodes in 2_usize..50_000, seed in any::<usize>()) {
            let index = seed % nodes;
            let width = identifier_width(nodes);
            let label = encode(index, width);
            prop_assert_eq!(label.len(), width);
            prop_assert_eq!(decode(&label), Some(index));
            prop_assert_eq!(encode(index, width), label);
        }
    }
}
