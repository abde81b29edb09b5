//! Property-based tests for path handling.
//!
//! Note: Each path module already carries quick property tests. This module
//! runs the cross-module properties with a much higher case count.

use super::absolute::is_absolute;
use super::join::{join, normalize};
use super::resolver::PathResolver;
use super::segments::reduce_segment;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        "[a-z0-9_-]{1,12}",
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\"), Just("//"), Just("/\\")]
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(segment_strategy(), 1..8),
        separator_strategy(),
    )
        .prop_map(|(parts, sep)| parts.join(sep))
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("/"), Just("\\"), Just("C:\\"), Just("e:/")],
        relative_path_strategy(),
    )
        .prop_map(|(root, rest)| format!("{root}{rest}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn path_normalization_idempotent(path in absolute_path_strategy()) {
        if let Ok(once) = normalize(&path) {
            if !once.is_empty() {
                prop_assert_eq!(normalize(&once).unwrap(), once);
            }
        }
    }

    // Joining in one call equals joining in two steps
    #[test]
    fn join_is_associative(first in relative_path_strategy(), a in relative_path_strategy(), b in relative_path_strategy()) {
        let rooted = format!("/{first}");
        let whole = join(&rooted, &[a.as_str(), b.as_str()]).unwrap();
        let partial = join(&rooted, &[a.as_str()]).unwrap();
        if !partial.is_empty() {
            prop_assert_eq!(join(&partial, &[b.as_str()]).unwrap(), whole);
        }
    }

    // Join agrees with folding the reducer over all segments
    #[test]
    fn join_matches_reducer(parts in prop::collection::vec(segment_strategy(), 1..10)) {
        let expected = parts.iter().map(String::as_str).fold(Vec::new(), reduce_segment).join("/");
        prop_assert_eq!(join(&parts[0], &parts[1..]).unwrap(), expected);
    }

    // A rooted result never keeps a `..` segment
    #[test]
    fn rooted_join_has_no_parent_segments(path in absolute_path_strategy()) {
        if let Ok(joined) = normalize(&path) {
            if joined.starts_with('/') {
                prop_assert!(joined.split('/').all(|s| s != ".."));
            }
        }
    }

    // Absolute paths resolve exactly as they normalize
    #[test]
    fn resolve_absolute_matches_normalize(path in absolute_path_strategy()) {
        prop_assert!(is_absolute(&path));
        let resolved = PathResolver::new().resolve(&path, &[] as &[&str]).ok();
        prop_assert_eq!(resolved, normalize(&path).ok());
    }
}
