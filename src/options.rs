use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotreeOptions {
    pub repo: String,
    pub display_name: String,
    pub annotations_file: Option<PathBuf>,
}
impl Default for AnnotreeOptions {
    fn default() -> Self {
        Self {
            repo: String::new(),
            display_name: String::new(),
            annotations_file: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct AnnotreeBuilder {
    options: AnnotreeOptions,
}
impl AnnotreeBuilder {
    pub fn new(repo: impl Into<String>) -> Self {
        let repo = repo.into();
        Self {
            options: AnnotreeOptions {
                display_name: repo.clone(),
                repo,
                ..Default::default()
            },
        }
    }
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.options.display_name = name.into();
        self
    }
    pub fn annotations_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.annotations_file = Some(path.into());
        self
    }
    pub fn no_annotations(mut self) -> Self {
        self.options.annotations_file = None;
        self
    }
    pub fn build(self) -> AnnotreeOptions {
        self.options
    }
}
