//! Namespace-chain expansion semantics.

use herald::namespace_chain;
use proptest::prelude::*;

#[test]
fn test_chain_drops_one_segment_at_a_time() {
    assert_eq!(namespace_chain("x.y.z"), vec!["x.y.z", "x.y", "x"]);
}

#[test]
fn test_chain_of_plain_name_is_the_name() {
    assert_eq!(namespace_chain("solo"), vec!["solo"]);
}

#[test]
fn test_chain_of_empty_name() {
    assert_eq!(namespace_chain(""), vec![""]);
}

#[test]
fn test_chain_truncation_is_textual() {
    // Empty segments are segments too.
    assert_eq!(namespace_chain("a..b"), vec!["a..b", "a.", "a"]);
    assert_eq!(namespace_chain("a."), vec!["a.", "a"]);
}

proptest! {
    /// Element i of the chain is the first (k - i) segments rejoined.
    #[test]
    fn chain_matches_segment_truncation(segments in prop::collection::vec("[a-z]{1,6}", 1..6)) {
        let name = segments.join(".");
        let chain = namespace_chain(&name);

        prop_assert_eq!(chain.len(), segments.len());
        for (i, level) in chain.iter().enumerate() {
            prop_assert_eq!(*level, segments[..segments.len() - i].join("."));
        }
    }

    /// Walking the chain only ever shortens the name, and every level is a
    /// textual prefix of the one before it.
    #[test]
    fn chain_levels_shrink_and_nest(segments in prop::collection::vec("[a-z]{1,6}", 1..6)) {
        let name = segments.join(".");
        let chain = namespace_chain(&name);

        prop_assert_eq!(chain[0], name.as_str());
        for pair in chain.windows(2) {
            prop_assert!(pair[1].len() < pair[0].len());
            prop_assert!(pair[0].starts_with(pair[1]));
        }
    }
}
