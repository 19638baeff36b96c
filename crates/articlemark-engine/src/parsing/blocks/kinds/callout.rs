use crate::parsing::blocks::types::CalloutKind;

/// Callout markers: a leading emoji or a bold `**Label**:` prefix.
pub struct Callout;

impl Callout {
    pub const EMOJI: [(char, CalloutKind); 4] = [
        ('💡', CalloutKind::Tip),
        ('⚠', CalloutKind::Warning),
        ('ℹ', CalloutKind::Info),
        ('✅', CalloutKind::Success),
    ];

    const VARIATION_SELECTOR: char = '\u{FE0F}';

    /// Detects a callout line, returning its kind and the body text after the
    /// marker.
    pub fn detect(text: &str) -> Option<(CalloutKind, &str)> {
        if let Some((kind, rest)) = Self::strip_emoji(text) {
            let rest = rest.trim_start();
            let body = Self::strip_label(rest)
                .or_else(|| Self::strip_plain_label(rest))
                .map_or(rest, |(_, body)| body);
            return Some((kind, body.trim()));
        }
        Self::strip_label(text).map(|(kind, body)| (kind, body.trim()))
    }

    fn strip_emoji(text: &str) -> Option<(CalloutKind, &str)> {
        let first = text.chars().next()?;
        let (_, kind) = Self::EMOJI.iter().find(|(c, _)| *c == first)?;
        let rest = &text[first.len_utf8()..];
        Some((*kind, rest.strip_prefix(Self::VARIATION_SELECTOR).unwrap_or(rest)))
    }

    /// `**Label**:` with a known label, case-insensitive.
    fn strip_label(text: &str) -> Option<(CalloutKind, &str)> {
        let inner = text.strip_prefix("**")?;
        let (label, rest) = inner.split_once("**")?;
        let body = rest.strip_prefix(':')?;
        CalloutKind::from_label(label).map(|kind| (kind, body))
    }

    /// `Label:` without emphasis; only accepted after an emoji marker.
    fn strip_plain_label(text: &str) -> Option<(CalloutKind, &str)> {
        let (label, body) = text.split_once(':')?;
        CalloutKind::from_label(label).map(|kind| (kind, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("💡 **Tip**: Warm up first.", CalloutKind::Tip, "Warm up first.")]
    #[case("⚠️ **Warning**: Stop if it hurts.", CalloutKind::Warning, "Stop if it hurts.")]
    #[case("⚠ bare warning", CalloutKind::Warning, "bare warning")]
    #[case("ℹ️ Info: details", CalloutKind::Info, "details")]
    #[case("✅ Done and dusted", CalloutKind::Success, "Done and dusted")]
    #[case("**note**: lower case label", CalloutKind::Note, "lower case label")]
    #[case("**SUCCESS**:no space", CalloutKind::Success, "no space")]
    fn detects_markers(#[case] line: &str, #[case] kind: CalloutKind, #[case] body: &str) {
        assert_eq!(Callout::detect(line), Some((kind, body)));
    }

    #[test]
    fn emoji_kind_wins_over_label() {
        assert_eq!(
            Callout::detect("💡 **Note**: hmm"),
            Some((CalloutKind::Tip, "hmm"))
        );
    }

    #[rstest]
    #[case("💡 Remember this: warm up", "Remember this: warm up")]
    #[case("ℹ️ See https://example.com: docs", "See https://example.com: docs")]
    fn colon_after_unknown_label_stays_in_body(#[case] line: &str, #[case] body: &str) {
        assert_eq!(Callout::detect(line).map(|(_, b)| b), Some(body));
    }

    #[rstest]
    #[case("**Tip** without colon")]
    #[case("**Hint**: unknown label")]
    #[case("Tip: plain label needs an emoji")]
    #[case("Ordinary text 💡")]
    fn rejects_non_callouts(#[case] line: &str) {
        assert_eq!(Callout::detect(line), None);
    }
}
