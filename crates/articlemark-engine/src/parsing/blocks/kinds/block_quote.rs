/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text of a `> ` line.
    ///
    /// A bare `>` is an empty quote line (the trailing space of `> ` does not
    /// survive whitespace trimming).
    pub fn strip(text: &str) -> Option<&str> {
        if text == ">" {
            return Some("");
        }
        text.strip_prefix(Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip("> hello"), Some("hello"));
    }

    #[test]
    fn bare_marker_is_empty_quote() {
        assert_eq!(BlockQuote::strip(">"), Some(""));
    }

    #[test]
    fn marker_needs_space() {
        assert_eq!(BlockQuote::strip(">hello"), None);
        assert_eq!(BlockQuote::strip("hello"), None);
    }
}
