/// Tunables for the parsing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Spaces per list nesting level. Tabs always count as one level each.
    pub indent_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}
