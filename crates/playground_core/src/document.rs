//! Initial document source for the editor.

use crate::config::Config;
use crate::error::AppError;
use std::path::PathBuf;
use tracing::info;

/// Built-in example shown when no document file is configured.
pub const DEFAULT_DOCUMENT: &str = r#"#lang rzk-1

-- Press Shift+Enter to typecheck.

#define id (A : U)
  : A -> A
  := \ x -> x

#define compose
  (A B C : U)
  (g : B -> C)
  (f : A -> B)
  : A -> C
  := \ x -> g (f x)
"#;

/// Document content plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialDocument {
    pub text: String,
    /// `None` for the built-in example.
    pub source: Option<PathBuf>,
}

impl InitialDocument {
    /// The built-in example document.
    pub fn builtin() -> Self {
        Self {
            text: DEFAULT_DOCUMENT.to_string(),
            source: None,
        }
    }

    /// Resolves the document named by `config`, falling back to the example.
    ///
    /// # Errors
    /// Returns [`AppError::Document`] when a configured file cannot be read.
    pub fn load(config: &Config) -> Result<Self, AppError> {
        let Some(path) = config.document_path.as_ref() else {
            return Ok(Self::builtin());
        };
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Document {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = text.len(), "loaded initial document");
        Ok(Self {
            text,
            source: Some(path.clone()),
        })
    }
}

impl Default for InitialDocument {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_without_path_returns_builtin_example() {
        let doc = InitialDocument::load(&Config::default()).expect("builtin");
        assert_eq!(doc.text, DEFAULT_DOCUMENT);
        assert!(doc.source.is_none());
    }

    #[test]
    fn load_reads_configured_file_verbatim() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("scratch.rzk");
        std::fs::write(&path, "x := 5").expect("write");

        let config = Config {
            document_path: Some(path.clone()),
            ..Config::default()
        };
        let doc = InitialDocument::load(&config).expect("file");
        assert_eq!(doc.text, "x := 5");
        assert_eq!(doc.source, Some(path));
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing.rzk");
        let config = Config {
            document_path: Some(path.clone()),
            ..Config::default()
        };
        match InitialDocument::load(&config) {
            Err(AppError::Document { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
