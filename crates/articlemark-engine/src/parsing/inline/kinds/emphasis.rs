/// Bold and italic delimiters.
pub struct Emphasis;

impl Emphasis {
    /// Opens and closes a bold run.
    pub const STRONG: &'static [u8; 2] = b"**";
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Returns true if `b` opens a single-delimiter italic run.
    pub fn is_italic_delim(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }
}
