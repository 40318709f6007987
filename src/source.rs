//! Input types: source text, language selection, extension mapping.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File extensions the analyzer accepts (without dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["js", "jsx", "py"];

/// The declared source-language variant, selecting which rule set runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKind {
    JavaScript,
    Python,
}

impl LanguageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageKind::JavaScript => "javascript",
            LanguageKind::Python => "python",
        }
    }

    /// Map a file extension (without dot) to a language kind.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" => Some(LanguageKind::JavaScript),
            "py" => Some(LanguageKind::Python),
            _ => None,
        }
    }

    /// Map a file path to a language kind, rejecting unsupported extensions.
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedExtension> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| UnsupportedExtension {
                path: path.display().to_string(),
            })
    }
}

impl std::fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rejection for inputs the analyzer does not accept.
/// Raised before the core pipeline runs.
#[derive(Debug, Clone, Error)]
#[error("unsupported file type {path:?}: expected .js, .jsx, or .py")]
pub struct UnsupportedExtension {
    pub path: String,
}

/// The unit of analysis: raw content plus its line-split form.
///
/// Lines are split on `'\n'`, keeping empty lines and the trailing empty
/// segment after a final newline. Line order is significant; the unit is
/// immutable for the duration of an analysis.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    content: String,
    lines: Vec<String>,
}

impl SourceUnit {
    pub fn new(content: String) -> Self {
        let lines = content.split('\n').map(str::to_string).collect();
        Self { content, lines }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of physical lines, counting empty ones.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl From<&str> for SourceUnit {
    fn from(content: &str) -> Self {
        Self::new(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_extension() {
        assert_eq!(
            LanguageKind::from_extension("js"),
            Some(LanguageKind::JavaScript)
        );
        assert_eq!(
            LanguageKind::from_extension("JSX"),
            Some(LanguageKind::JavaScript)
        );
        assert_eq!(LanguageKind::from_extension("py"), Some(LanguageKind::Python));
        assert_eq!(LanguageKind::from_extension("rb"), None);
        assert_eq!(LanguageKind::from_extension(""), None);
    }

    #[test]
    fn test_from_path_rejects_unsupported() {
        let err = LanguageKind::from_path(&PathBuf::from("app.rb")).unwrap_err();
        assert!(err.to_string().contains("app.rb"));
        assert!(err.to_string().contains(".js, .jsx, or .py"));

        // No extension at all
        assert!(LanguageKind::from_path(&PathBuf::from("Makefile")).is_err());
    }

    #[test]
    fn test_line_splitting() {
        let unit = SourceUnit::from("a\nb\n");
        // Trailing newline yields a trailing empty segment
        assert_eq!(unit.lines(), &["a", "b", ""]);
        assert_eq!(unit.line_count(), 3);

        let empty = SourceUnit::from("");
        assert_eq!(empty.line_count(), 1);
        assert_eq!(empty.lines(), &[""]);
    }
}
