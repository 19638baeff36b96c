/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: their contents are never further formatted.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
}
