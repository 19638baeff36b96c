/// Header block type. Levels 1 to 3 only.
pub struct Heading;

impl Heading {
    /// Checked longest-first so `### ` is never read as `## ` or `# `.
    pub const PREFIXES: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns the level and title of a header line.
    pub fn match_line(text: &str) -> Option<(u8, &str)> {
        Self::PREFIXES.iter().find_map(|(prefix, level)| {
            text.strip_prefix(prefix)
                .map(|title| (*level, title.trim()))
        })
    }
}
