/// Thematic divider line.
pub struct Divider;

impl Divider {
    pub const FORMS: [&'static str; 3] = ["---", "***", "* * *"];

    pub fn is_divider(text: &str) -> bool {
        Self::FORMS.contains(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_forms_only() {
        assert!(Divider::is_divider("---"));
        assert!(Divider::is_divider("***"));
        assert!(Divider::is_divider("* * *"));
        assert!(!Divider::is_divider("----"));
        assert!(!Divider::is_divider("- - -"));
    }
}
