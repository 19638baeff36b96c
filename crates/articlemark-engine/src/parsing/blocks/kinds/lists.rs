/// Checklist item markers.
pub struct Checklist;

impl Checklist {
    pub const UNCHECKED: &'static str = "- [ ]";
    pub const CHECKED: [&'static str; 2] = ["- [x]", "- [X]"];

    /// Returns `(checked, text)` for a checklist line.
    pub fn match_line(text: &str) -> Option<(bool, &str)> {
        if let Some(rest) = text.strip_prefix(Self::UNCHECKED) {
            return Some((false, rest.trim()));
        }
        Self::CHECKED
            .iter()
            .find_map(|m| text.strip_prefix(m))
            .map(|rest| (true, rest.trim()))
    }
}

/// Bullet list markers.
pub struct BulletList;

impl BulletList {
    pub const MARKERS: [&'static str; 3] = ["- ", "* ", "• "];

    pub fn match_line(text: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|m| text.strip_prefix(m))
            .map(str::trim)
    }
}

/// Numbered list items: `<digits>.` then whitespace or end of line.
pub struct NumberedList;

impl NumberedList {
    pub const SEPARATOR: char = '.';

    /// Returns `(label, text)` where `label` is the digit run.
    pub fn match_line(text: &str) -> Option<(&str, &str)> {
        let digits = text.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let (label, rest) = text.split_at(digits);
        let rest = rest.strip_prefix(Self::SEPARATOR)?;
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((label, rest.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_states() {
        assert_eq!(Checklist::match_line("- [ ] todo"), Some((false, "todo")));
        assert_eq!(Checklist::match_line("- [x] done"), Some((true, "done")));
        assert_eq!(Checklist::match_line("- [X] DONE"), Some((true, "DONE")));
        assert_eq!(Checklist::match_line("- [y] nope"), None);
    }

    #[test]
    fn bullet_markers() {
        assert_eq!(BulletList::match_line("- dash"), Some("dash"));
        assert_eq!(BulletList::match_line("* star"), Some("star"));
        assert_eq!(BulletList::match_line("• dot"), Some("dot"));
        assert_eq!(BulletList::match_line("-nospace"), None);
    }

    #[test]
    fn numbered_labels() {
        assert_eq!(NumberedList::match_line("1. first"), Some(("1", "first")));
        assert_eq!(NumberedList::match_line("12. twelfth"), Some(("12", "twelfth")));
        assert_eq!(NumberedList::match_line("3."), Some(("3", "")));
    }

    #[test]
    fn numbers_that_are_not_list_items() {
        assert_eq!(NumberedList::match_line("3.5 percent"), None);
        assert_eq!(NumberedList::match_line("2024 was a year"), None);
        assert_eq!(NumberedList::match_line("v1. nope"), None);
    }
}
