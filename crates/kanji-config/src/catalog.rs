use serde::{Deserialize, Serialize};

fn default_use_embedded() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Start from the bundled N5 dataset
    #[serde(default = "default_use_embedded")]
    pub use_embedded: bool,
    /// Extra dataset files merged over the bundled one, in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            use_embedded: default_use_embedded(),
            additional_paths: vec![],
        }
    }
}
