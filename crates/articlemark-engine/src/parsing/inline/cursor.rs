/// A byte cursor for left-to-right inline scanning.
///
/// Every delimiter the inline grammar recognizes is ASCII, so positions
/// returned by [`find`](Cursor::find) always fall on UTF-8 char boundaries and
/// can be used to slice the input.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes, stopping at the end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Moves to the end of input.
    pub fn skip_to_end(&mut self) {
        self.i = self.s.len();
    }

    /// Absolute index of the next occurrence of `pat` at or after `from`.
    pub fn find(&self, from: usize, pat: &[u8]) -> Option<usize> {
        let hay = self.s.as_bytes().get(from..)?;
        if pat.is_empty() || hay.len() < pat.len() {
            return None;
        }
        hay.windows(pat.len())
            .position(|w| w == pat)
            .map(|p| from + p)
    }

    /// Slices the input between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
