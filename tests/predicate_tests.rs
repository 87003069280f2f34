use yit::document::node::{Kind, Node};
use yit::predicate::{
    all, intersect, negate, none, union, with_kind, with_map_key, with_map_key_value,
    with_map_value, with_prefix, with_short_tag, with_string_value, with_suffix, Predicate,
};

fn constant(value: bool) -> Predicate {
    Predicate::new(move |_| value)
}

fn mapping(pairs: &[(&str, &str)]) -> Node {
    Node::mapping(
        pairs
            .iter()
            .map(|(k, v)| (Node::scalar(*k), Node::scalar(*v)))
            .collect(),
    )
}

#[test]
fn test_with_kind_matches_supplied_kind() {
    let predicate = with_kind(Kind::Scalar);
    assert!(predicate.test(&Node::scalar("x")));
}

#[test]
fn test_with_kind_rejects_other_kinds() {
    let predicate = with_kind(Kind::Scalar);
    assert!(!predicate.test(&Node::mapping(vec![])));
}

#[test]
fn test_truth_tables() {
    let cases: [(fn(Vec<Predicate>) -> Predicate, bool, bool, bool); 8] = [
        (union, true, true, true),
        (union, true, false, true),
        (union, false, true, true),
        (union, false, false, false),
        (intersect, true, true, true),
        (intersect, true, false, false),
        (intersect, false, true, false),
        (intersect, false, false, false),
    ];

    let node = Node::default();
    for (op, a, b, expected) in cases {
        let actual = op(vec![constant(a), constant(b)]);
        assert_eq!(actual.test(&node), expected, "{} op {} should be {}", a, b, expected);
    }
}

#[test]
fn test_with_short_tag_matches() {
    let predicate = with_short_tag("booooo");
    assert!(predicate.test(&Node::default().with_tag("booooo")));
}

#[test]
fn test_with_short_tag_does_not_match() {
    let predicate = with_short_tag("booooo");
    assert!(!predicate.test(&Node::default().with_tag("not boooo")));
}

#[test]
fn test_with_string_value() {
    let predicate = with_string_value("a");
    assert!(predicate.test(&Node::scalar("a")));
    assert!(!predicate.test(&Node::scalar("ab")));
}

#[test]
fn test_with_map_key_present() {
    assert!(with_map_key("a").test(&mapping(&[("a", "b")])));
}

#[test]
fn test_with_map_key_absent() {
    assert!(!with_map_key("a").test(&mapping(&[("c", "d")])));
}

#[test]
fn test_with_map_key_ignores_values() {
    assert!(!with_map_key("b").test(&mapping(&[("a", "b")])));
}

#[test]
fn test_with_map_key_not_a_map() {
    let node = Node::sequence(vec![Node::scalar("b")]);
    assert!(!with_map_key("a").test(&node));
    assert!(!with_map_key("b").test(&node));
}

#[test]
fn test_with_map_value() {
    assert!(with_map_value("b").test(&mapping(&[("a", "b")])));
    assert!(!with_map_value("a").test(&mapping(&[("a", "b")])));
}

#[test]
fn test_with_map_key_value_present() {
    let predicate = with_map_key_value(with_string_value("a"), with_string_value("b"));
    assert!(predicate.test(&mapping(&[("x", "y"), ("a", "b")])));
}

#[test]
fn test_with_map_key_value_requires_same_pair() {
    let predicate = with_map_key_value(with_string_value("a"), with_string_value("b"));
    assert!(!predicate.test(&mapping(&[("a", "c")])));
    assert!(!predicate.test(&mapping(&[("a", "c"), ("x", "b")])));
}

#[test]
fn test_with_map_key_value_not_a_map() {
    let predicate = with_map_key_value(with_string_value("a"), with_string_value("b"));
    let node = Node::sequence(vec![Node::scalar("a"), Node::scalar("b")]);
    assert!(!predicate.test(&node));
}

#[test]
fn test_with_prefix() {
    let predicate = with_prefix("pre");
    assert!(predicate.test(&Node::scalar("prefix")));
    assert!(!predicate.test(&Node::scalar("postfix")));
}

#[test]
fn test_with_suffix() {
    let predicate = with_suffix("fix");
    assert!(predicate.test(&Node::scalar("prefix")));
    assert!(!predicate.test(&Node::scalar("fixpost")));
}

#[test]
fn test_negate_reverses_the_result() {
    let node = Node::default();
    assert!(!negate(all()).test(&node));
    assert!(negate(none()).test(&node));
}

#[test]
fn test_combinators_accept_more_than_two() {
    let node = Node::scalar("value");
    assert!(union([none(), none(), with_prefix("val")]).test(&node));
    assert!(!intersect([all(), all(), with_suffix("x")]).test(&node));
}
