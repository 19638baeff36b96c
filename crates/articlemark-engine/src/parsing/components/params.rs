/// Literal parameter value meaning "absent" for a few legacy fields.
///
/// Only honored where [`Params::nullable`] is used; new fields use an empty
/// value instead.
pub const NULL_SENTINEL: &str = "null";

/// How a tag's parameter string is cut into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// Every comma separates a field.
    Every,
    /// At most `n` fields; the last one keeps any further commas.
    Bounded(usize),
    /// Only the last comma separates, so the leading field keeps its commas.
    LastComma,
}

/// Trimmed parameter fields of a tag line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Params<'a> {
    pub fn split(raw: &'a str, rule: SplitRule) -> Self {
        let fields: Vec<&str> = match rule {
            SplitRule::Every => raw.split(',').collect(),
            SplitRule::Bounded(n) => raw.splitn(n.max(1), ',').collect(),
            SplitRule::LastComma => match raw.rsplit_once(',') {
                Some((head, tail)) => vec![head, tail],
                None => vec![raw],
            },
        };
        Self {
            fields: fields.into_iter().map(str::trim).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|f| f.is_empty())
    }

    /// The field at `index`; empty fields count as absent.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied().filter(|f| !f.is_empty())
    }

    pub fn text_or(&self, index: usize, default: &str) -> String {
        self.get(index).unwrap_or(default).to_string()
    }

    pub fn optional(&self, index: usize) -> Option<String> {
        self.get(index).map(str::to_string)
    }

    /// Like [`optional`](Self::optional) but the literal `null` is absent too.
    pub fn nullable(&self, index: usize) -> Option<String> {
        self.get(index)
            .filter(|f| *f != NULL_SENTINEL)
            .map(str::to_string)
    }

    pub fn parse_or<T: std::str::FromStr>(&self, index: usize, default: T) -> T {
        self.get(index)
            .and_then(|f| f.parse().ok())
            .unwrap_or(default)
    }
}
