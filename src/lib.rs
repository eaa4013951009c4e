//! # Annotree
//!
//! `annotree` renders a textual, box-drawn directory tree from a flat list of
//! slash-delimited paths and a per-repository map of path annotations. It is
//! meant for generating human-readable documentation of a project's layout,
//! with inline comments describing selected files and directories.
//!
//! The pipeline has three pure stages: the path set analyzer
//! ([`tree::directory_prefixes`]) derives which prefixes act as directories,
//! the tree builder ([`TreeNode::from_paths`]) folds the paths into a nested
//! hierarchy, and the renderer ([`render::render_lines`]) walks the hierarchy
//! depth-first and emits one box-drawn line per node. Annotations are loaded
//! from a YAML document keyed by repository identifier; a path with no
//! annotation simply renders without a comment.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```
//! use annotree::{AnnotreeBuilder, annotree};
//!
//! let options = AnnotreeBuilder::new("myrepo")
//!     .display_name("My Repo")
//!     .build();
//!
//! let result = annotree("src/main.rs\nsrc/lib.rs\nREADME.md", &options)
//!     .expect("Failed to build tree");
//!
//! println!("{}", result.tree);
//! ```

pub mod annotations;
mod engine;
mod error;
mod options;
pub mod output;
pub mod render;
pub mod tree;
mod types;

pub use engine::annotree;
pub use error::AnnotreeError;
pub use options::{AnnotreeBuilder, AnnotreeOptions};
pub use tree::TreeNode;
pub use types::AnnotreeResult;
