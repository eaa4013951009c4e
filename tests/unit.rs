use annotree::annotations::{self, AnnotationMap};
use annotree::render::{is_known_dir, render_lines};
use annotree::tree::{TreeNode, directory_prefixes, parse_paths};
use std::collections::HashSet;

fn paths(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

fn annotation_map(pairs: &[(&str, &str)]) -> AnnotationMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_parse_paths_drops_empty_lines() {
    let parsed = parse_paths("src/main.rs\n\nREADME.md\n");
    assert_eq!(parsed, paths(&["src/main.rs", "README.md"]));
    assert!(parse_paths("").is_empty());
    assert!(parse_paths("\n\n").is_empty());
}

#[test]
fn test_directory_prefixes_strict_ancestors_only() {
    let set = directory_prefixes(&paths(&["a/b/c.txt", "README.md"]));
    assert!(set.contains("a"));
    assert!(set.contains("a/b"));
    assert!(!set.contains("a/b/c.txt"));
    assert!(!set.contains("README.md"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_directory_prefixes_empty_input() {
    assert!(directory_prefixes(&[]).is_empty());
}

#[test]
fn test_tree_builder_is_idempotent() {
    let once = TreeNode::from_paths(&paths(&["a/b.txt"]));
    let twice = TreeNode::from_paths(&paths(&["a/b.txt", "a/b.txt"]));
    assert_eq!(once, twice);
}

#[test]
fn test_tree_builder_prefix_reinsertion_keeps_descendants() {
    let root = TreeNode::from_paths(&paths(&["a/b/c.txt", "a"]));
    let a = &root.children()["a"];
    let b = &a.children()["b"];
    assert!(b.children().contains_key("c.txt"));
}

#[test]
fn test_tree_builder_skips_empty_paths() {
    let root = TreeNode::from_paths(&paths(&["", "x"]));
    assert_eq!(root.children().len(), 1);
    assert!(root.children().contains_key("x"));
}

#[test]
fn test_render_sorts_siblings_and_draws_guides() {
    let input = paths(&["src/main.go", "src/util.go", "README.md"]);
    let prefixes = directory_prefixes(&input);
    let root = TreeNode::from_paths(&input);
    let lines = render_lines(&root, &prefixes, &AnnotationMap::new());
    assert_eq!(
        lines,
        vec![
            "├── README.md",
            "└── src/",
            "    ├── main.go",
            "    └── util.go",
        ]
    );
}

#[test]
fn test_render_continuation_guide_for_non_last_directory() {
    let input = paths(&["a/one.txt", "a/two.txt", "b.txt"]);
    let prefixes = directory_prefixes(&input);
    let root = TreeNode::from_paths(&input);
    let lines = render_lines(&root, &prefixes, &AnnotationMap::new());
    assert_eq!(
        lines,
        vec![
            "├── a/",
            "│   ├── one.txt",
            "│   └── two.txt",
            "└── b.txt",
        ]
    );
}

#[test]
fn test_annotated_directory_with_child() {
    let input = paths(&["a/b.txt"]);
    let prefixes = directory_prefixes(&input);
    let root = TreeNode::from_paths(&input);
    let ann = annotation_map(&[("a/", "generated dir")]);
    let lines = render_lines(&root, &prefixes, &ann);
    assert_eq!(lines, vec!["└── a/  # generated dir", "    └── b.txt"]);
}

#[test]
fn test_annotation_only_directory_marker() {
    let ann = annotation_map(&[("x/", "dirnote")]);
    assert!(is_known_dir("x", &HashSet::new(), &ann));
    assert!(!is_known_dir("y", &HashSet::new(), &ann));
}

#[test]
fn test_exact_annotation_wins_over_trailing_separator() {
    let input = paths(&["x"]);
    let prefixes = directory_prefixes(&input);
    let root = TreeNode::from_paths(&input);
    let ann = annotation_map(&[("x", "note"), ("x/", "dirnote")]);
    let lines = render_lines(&root, &prefixes, &ann);
    assert_eq!(lines, vec!["└── x/  # note"]);
}

#[test]
fn test_lookup_forms() {
    let ann = annotation_map(&[("a/b/", "slash only")]);
    assert_eq!(annotations::lookup(&ann, "a/b"), Some("slash only"));
    let ann = annotation_map(&[("a/b", "bare only")]);
    assert_eq!(annotations::lookup(&ann, "a/b/"), Some("bare only"));
    assert_eq!(annotations::lookup(&ann, "a/c"), None);
}
