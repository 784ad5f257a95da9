//! Languages recognized by the client-side editor highlighter.
//!
//! Fenced code blocks in help documents carry a language token. Only the
//! languages listed here are tagged with a `data-lang` attribute; the value is
//! the editor mode name the browser side expects, not the fence token itself.

/// Editor highlighting mode for a recognized fence language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightMode {
    /// `kotlin` fences.
    Kotlin,
    /// `java` fences.
    Java,
}

impl HighlightMode {
    /// Look up the mode for a fence language token.
    ///
    /// Matching is exact and case-sensitive, like the fence tokens written in
    /// example help documents.
    #[must_use]
    pub fn from_fence(lang: &str) -> Option<Self> {
        match lang {
            "kotlin" => Some(Self::Kotlin),
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    /// Mode name written into the `data-lang` attribute.
    #[must_use]
    pub fn mode_name(self) -> &'static str {
        match self {
            Self::Kotlin => "kotlin",
            Self::Java => "text/x-java",
        }
    }
}

/// Extract the language token from a fence info string.
///
/// The info string may carry extra words after the language
/// (```` ```kotlin runnable ````); only the first token names the language.
pub(crate) fn fence_language(info: &str) -> Option<&str> {
    info.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fence_recognized() {
        assert_eq!(HighlightMode::from_fence("kotlin"), Some(HighlightMode::Kotlin));
        assert_eq!(HighlightMode::from_fence("java"), Some(HighlightMode::Java));
    }

    #[test]
    fn test_from_fence_unrecognized() {
        assert_eq!(HighlightMode::from_fence("rust"), None);
        assert_eq!(HighlightMode::from_fence("Kotlin"), None);
        assert_eq!(HighlightMode::from_fence(""), None);
    }

    #[test]
    fn test_mode_name() {
        assert_eq!(HighlightMode::Kotlin.mode_name(), "kotlin");
        assert_eq!(HighlightMode::Java.mode_name(), "text/x-java");
    }

    #[test]
    fn test_fence_language() {
        assert_eq!(fence_language("kotlin"), Some("kotlin"));
        assert_eq!(fence_language("kotlin runnable"), Some("kotlin"));
        assert_eq!(fence_language("  java  "), Some("java"));
        assert_eq!(fence_language(""), None);
    }
}
