use crate::annotations::{self, AnnotationMap};
use crate::error::AnnotreeError;
use crate::options::AnnotreeOptions;
use crate::render::render_lines;
use crate::tree::{TreeNode, directory_prefixes, parse_paths};
use crate::types::AnnotreeResult;
#[cfg(feature = "logging")]
use tracing;

/// Builds the annotated tree document from a newline-separated path block.
///
/// Splits the block into paths, loads the annotation sub-map for
/// `options.repo` (empty when `options.annotations_file` is unset or the
/// repository has no entry), then analyzes, builds, and renders the tree.
///
/// # Errors
///
/// Returns an error if the annotation file cannot be read or parsed.
pub fn annotree(
    paths_input: &str,
    options: &AnnotreeOptions,
) -> Result<AnnotreeResult, AnnotreeError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Building annotated tree for repo: {}", options.repo);
    let paths = parse_paths(paths_input);
    let annotations = match &options.annotations_file {
        Some(path) => annotations::load_annotations(path, &options.repo)?,
        None => AnnotationMap::new(),
    };
    #[cfg(feature = "logging")]
    tracing::debug!(
        "{} paths, {} annotations for this repo",
        paths.len(),
        annotations.len()
    );
    let prefixes = directory_prefixes(&paths);
    let root = TreeNode::from_paths(&paths);

    let mut lines = Vec::with_capacity(paths.len() + 1);
    lines.push(format!("{}/", options.display_name));
    lines.extend(render_lines(&root, &prefixes, &annotations));
    let tree = format!("```\n{}\n```\n", lines.join("\n"));
    Ok(AnnotreeResult { tree, lines })
}
