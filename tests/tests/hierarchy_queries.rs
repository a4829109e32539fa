//! Relationship queries over built forests.

use grove_descriptor::{build, Descriptor};
use grove_forest::Forest;

fn built(descriptor: &str) -> Forest {
    build(&descriptor.parse::<Descriptor>().expect("descriptor should parse"))
}

// a <- {b, c}; b <- {d, e}; c <- f
const TWO_LEVEL: &str = "-aabbc";

#[test]
fn child_names_per_level() {
    let f = built(TWO_LEVEL);

    assert_eq!(f.child_names("a"), vec!["b", "c"]);
    assert_eq!(f.child_names("b"), vec!["d", "e"]);
    assert_eq!(f.child_names("c"), vec!["f"]);
    assert!(f.child_names("d").is_empty());
}

#[test]
fn ancestry_runs_root_first() {
    let f = built(TWO_LEVEL);

    assert_eq!(f.ancestry_names("f"), vec!["a", "c", "f"]);
    assert_eq!(f.ancestry_names("d"), vec!["a", "b", "d"]);
    assert_eq!(f.ancestry_names("a"), vec!["a"]);
}

#[test]
fn descendants_in_preorder() {
    let f = built(TWO_LEVEL);

    assert_eq!(f.descendant_names("a"), vec!["b", "d", "e", "c", "f"]);
    assert_eq!(f.descendant_names("b"), vec!["d", "e"]);
    assert!(f.descendant_names("f").is_empty());
}

#[test]
fn ancestor_relation() {
    let f = built(TWO_LEVEL);

    assert!(f.is_ancestor("a", "f"));
    assert!(f.is_ancestor("c", "f"));
    assert!(!f.is_ancestor("b", "f"));
    assert!(!f.is_ancestor("f", "a"));
    assert!(!f.is_ancestor("a", "a"));
}

#[test]
fn queries_stay_within_their_tree() {
    let f = built("-aa-dd");

    assert_eq!(f.descendant_names("a"), vec!["b", "c"]);
    assert_eq!(f.descendant_names("d"), vec!["e", "f"]);
    assert!(!f.is_ancestor("a", "e"));
    assert_eq!(f.ancestry_names("f"), vec!["d", "f"]);
}

#[test]
fn queries_are_cycle_safe() {
    let f = built("bca");

    // Every membership query terminates despite the cycle.
    assert_eq!(f.ancestry_names("a").len(), 3);
    assert_eq!(f.descendant_names("a").len(), 2);
    assert!(f.is_ancestor("a", "b"));
    assert!(f.is_ancestor("b", "a"));
}

#[test]
fn placeholder_parent_appears_in_queries() {
    let f = built("z");

    assert_eq!(f.ancestry_names("a"), vec!["z", "a"]);
    assert_eq!(f.descendant_names("z"), vec!["a"]);
    assert!(f.is_ancestor("z", "a"));
}
