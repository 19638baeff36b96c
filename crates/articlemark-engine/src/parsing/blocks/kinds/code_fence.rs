/// Fenced code block delimiters.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Detects an opening fence, returning the optional language token.
    pub fn open(text: &str) -> Option<Option<&str>> {
        let lang = text.strip_prefix(Self::BACKTICKS)?.trim();
        Some((!lang.is_empty()).then_some(lang))
    }

    /// Returns true if the (trimmed) line closes a fence.
    pub fn closes(text: &str) -> bool {
        text.starts_with(Self::BACKTICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence_with_language() {
        assert_eq!(CodeFence::open("```swift"), Some(Some("swift")));
    }

    #[test]
    fn detect_bare_fence() {
        assert_eq!(CodeFence::open("```"), Some(None));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::open("~~~"), None);
        assert_eq!(CodeFence::open("hello"), None);
    }

    #[test]
    fn closing_fence() {
        assert!(CodeFence::closes("```"));
        assert!(!CodeFence::closes("``"));
    }
}
