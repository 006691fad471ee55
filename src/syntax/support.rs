//! Language support objects registered with an editor document

use std::path::Path;
use std::sync::Arc;

use super::highlights::SyntaxHighlights;
use super::language::LanguageDefinition;
use super::tree::LanguageParser;

/// Editor-facing metadata that travels with a language
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageData {
    /// Display name (e.g. "Diagwiz")
    pub display_name: &'static str,
    /// File extensions without the dot
    pub extensions: &'static [&'static str],
    /// Token used for toggling line comments
    pub line_comment: Option<&'static str>,
}

/// A language definition plus its editor metadata.
///
/// Cheap to clone; the definition itself is shared.
#[derive(Debug)]
pub struct LanguageSupport<P> {
    language: Arc<LanguageDefinition<P>>,
    data: LanguageData,
}

impl<P> Clone for LanguageSupport<P> {
    fn clone(&self) -> Self {
        Self {
            language: Arc::clone(&self.language),
            data: self.data.clone(),
        }
    }
}

impl<P> LanguageSupport<P> {
    pub fn new(language: LanguageDefinition<P>, data: LanguageData) -> Self {
        Self {
            language: Arc::new(language),
            data,
        }
    }

    pub fn language(&self) -> &LanguageDefinition<P> {
        &self.language
    }

    /// Shared handle to the definition, for highlighting on other threads
    pub fn shared_language(&self) -> Arc<LanguageDefinition<P>> {
        Arc::clone(&self.language)
    }

    pub fn data(&self) -> &LanguageData {
        &self.data
    }

    /// Check whether a file extension belongs to this language
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.data.extensions.iter().any(|e| *e == ext)
    }

    /// Detect from file path
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.matches_extension(ext))
            .unwrap_or(false)
    }
}

impl<P: LanguageParser> LanguageSupport<P> {
    /// Parse and highlight a whole document
    pub fn highlight(&self, source: &str) -> SyntaxHighlights {
        self.language.highlight(source)
    }
}
