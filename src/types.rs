use serde::{Deserialize, Serialize};

/// The complete result of an annotree render.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotreeResult {
    /// The fenced tree document: an opening fence line, the root label and
    /// one box-drawn line per node, a closing fence line, and a trailing
    /// newline.
    pub tree: String,
    /// The individual lines of the tree, starting with the root label.
    ///
    /// Useful for consumers that want to embed the tree without the fence or
    /// post-process single lines.
    pub lines: Vec<String>,
}
