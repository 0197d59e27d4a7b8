use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Node {
    number: u32,
    more: Option<Vec<Node>>,
    aside: Option<Vec<Node>>,
}

impl Nested for Node {
    fn children(&self) -> Option<&[Self]> {
        self.more.as_deref()
    }

    fn take_children(&mut self) -> Option<Vec<Self>> {
        self.more.take()
    }
}

fn leaf(number: u32) -> Node {
    Node {
        number,
        more: None,
        aside: None,
    }
}

fn node(number: u32, more: Vec<Node>) -> Node {
    Node {
        number,
        more: Some(more),
        aside: None,
    }
}

fn numbers(nodes: &[Node]) -> Vec<u32> {
    nodes.iter().map(|n| n.number).collect()
}

// 1
// -2
// --3
// ---4
// --5
// -6
// --7
// 8
// -9
fn big() -> Vec<Node> {
    vec![
        node(
            1,
            vec![
                node(2, vec![node(3, vec![leaf(4)]), leaf(5)]),
                node(6, vec![leaf(7)]),
            ],
        ),
        node(8, vec![leaf(9)]),
    ]
}

fn small() -> Node {
    node(1, vec![node(2, vec![leaf(3)])])
}

#[test]
fn returns_input_when_nothing_to_flatten() {
    let single = leaf(1);
    assert_eq!(
        flatten_one(&single, &Children, &FlattenOptions::default()),
        vec![single.clone()]
    );

    let pair = vec![leaf(1), leaf(2)];
    assert_eq!(flatten(&pair, &Children, &FlattenOptions::default()), pair);
}

#[test]
fn flattens_a_single_nested_node() {
    let actual = flatten_one(&small(), &Children, &FlattenOptions::default());
    assert_eq!(actual, vec![leaf(1), leaf(2), leaf(3)]);
}

#[test]
fn shallow_emits_generation_by_generation() {
    let actual = flatten(&big(), &Children, &FlattenOptions::shallow());
    assert_eq!(numbers(&actual), vec![1, 8, 2, 6, 9, 3, 5, 7, 4]);
    assert!(actual.iter().all(|n| n.more.is_none()));
}

#[test]
fn deep_emits_pre_order() {
    let actual = flatten(&big(), &Children, &FlattenOptions::deep());
    assert_eq!(numbers(&actual), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert!(actual.iter().all(|n| n.more.is_none()));
}

#[test]
fn depth_limits_deep_flatten() {
    let cases: &[(usize, &[u32])] = &[
        (0, &[1, 8]),
        (1, &[1, 2, 6, 8, 9]),
        (2, &[1, 2, 3, 5, 6, 7, 8, 9]),
        (3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
        (10, &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
    ];

    for (depth, expected) in cases {
        let actual = flatten(&big(), &Children, &FlattenOptions::deep().with_depth(*depth));
        assert_eq!(numbers(&actual), *expected, "deep flatten with depth {depth}");
        assert!(
            actual.iter().all(|n| n.more.is_none()),
            "depth {depth} should strip every emitted node"
        );
    }
}

#[test]
fn depth_limits_shallow_flatten() {
    let actual = flatten_one(&small(), &Children, &FlattenOptions::shallow().with_depth(0));
    assert_eq!(actual, vec![leaf(1)]);

    let actual = flatten(&big(), &Children, &FlattenOptions::shallow().with_depth(1));
    assert_eq!(numbers(&actual), vec![1, 8, 2, 6, 9]);

    let actual = flatten(&big(), &Children, &FlattenOptions::shallow().with_depth(2));
    assert_eq!(numbers(&actual), vec![1, 8, 2, 6, 9, 3, 5, 7]);
}

#[test]
fn keep_field_leaves_structure_on_copies() {
    let actual = flatten(&big(), &Children, &FlattenOptions::deep().keep_field());
    assert_eq!(numbers(&actual), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

    assert_eq!(actual[0], big()[0], "root copy should keep its whole subtree");
    assert_eq!(actual[1].more.as_ref().map(Vec::len), Some(2));
    assert!(actual[3].more.is_none(), "leaf 4 never had a field");
}

#[test]
fn keep_field_at_depth_zero_returns_input_unchanged() {
    let input = big();
    let actual = flatten(&input, &Children, &FlattenOptions::deep().with_depth(0).keep_field());
    assert_eq!(actual, input);
}

#[test]
fn does_not_mutate_input() {
    let input = big();
    let before = input.clone();

    let _ = flatten(&input, &Children, &FlattenOptions::deep());
    let _ = flatten(&input, &Children, &FlattenOptions::shallow());

    assert_eq!(input, before);
}

#[test]
fn deep_flatten_yields_one_element_per_node() {
    fn count(nodes: &[Node]) -> usize {
        nodes
            .iter()
            .map(|n| 1 + n.more.as_deref().map_or(0, count))
            .sum()
    }

    let input = big();
    let actual = flatten(&input, &Children, &FlattenOptions::deep());
    assert_eq!(actual.len(), count(&input));
}

#[test]
fn empty_child_collection_is_stripped_but_not_expanded() {
    let input = vec![node(1, Vec::new()), leaf(2)];
    let actual = flatten(&input, &Children, &FlattenOptions::deep());
    assert_eq!(actual, vec![leaf(1), leaf(2)]);
}

#[test]
fn field_fns_select_an_alternative_collection() {
    let aside = FieldFns::<Node> {
        get: |n| n.aside.as_deref(),
        remove: |n| n.aside.take(),
    };

    let mut root = node(1, vec![leaf(2)]);
    root.aside = Some(vec![leaf(10), leaf(11)]);

    let actual = flatten_one(&root, &aside, &FlattenOptions::deep());
    assert_eq!(numbers(&actual), vec![1, 10, 11]);
    assert!(actual[0].aside.is_none());
    assert_eq!(
        actual[0].more,
        Some(vec![leaf(2)]),
        "the other collection is left alone"
    );
}
