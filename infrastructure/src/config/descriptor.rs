//! Producer descriptor: the JSON file that configures one two-stage producer.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Remote endpoints for one two-stage producer.
///
/// ```json
/// { "retriever-url": "http://localhost:9000/retrieve",
///   "summarizer-url": "http://localhost:9001/summarize" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerDescriptor {
    #[serde(rename = "retriever-url")]
    pub retriever_url: String,
    #[serde(rename = "summarizer-url")]
    pub summarizer_url: String,
}

impl ProducerDescriptor {
    /// Read and parse a descriptor file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadDescriptor {
            path: path.to_path_buf(),
            source,
        })?;
        let descriptor: Self =
            serde_json::from_str(&raw).map_err(|source| ConfigError::ParseDescriptor {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("producer.json");
        std::fs::write(
            &path,
            r#"{"retriever-url": "http://r.local/retrieve", "summarizer-url": "http://s.local/summarize"}"#,
        )
        .unwrap();

        let descriptor = ProducerDescriptor::load(&path).unwrap();
        assert_eq!(descriptor.retriever_url, "http://r.local/retrieve");
        assert_eq!(descriptor.summarizer_url, "http://s.local/summarize");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ProducerDescriptor::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::ReadDescriptor { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("producer.json");
        std::fs::write(&path, r#"{"retriever-url": "http://r.local"}"#).unwrap();

        let result = ProducerDescriptor::load(&path);
        assert!(matches!(result, Err(ConfigError::ParseDescriptor { .. })));
    }
}
