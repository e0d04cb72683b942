#[derive(Clone, Debug)]
pub struct Options {
    /// Emit newlines and indentation between items, and one space after the
    /// colon of a property name.
    pub indented: bool,
    /// Spaces per nesting level when `indented` is set.
    pub indent_width: u8,
    /// Maximum container nesting. Enforced even when validation is skipped,
    /// since it bounds the per-level kind stack.
    pub max_depth: u16,
    /// Bypass the structural state machine. Token order is then the caller's
    /// problem and output may be invalid JSON.
    pub skip_validation: bool,
    /// Allow more than one top-level value. Successive values are separated
    /// by a single newline.
    pub multiple_values: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indented: false,
            indent_width: 2,
            max_depth: 1000,
            skip_validation: false,
            multiple_values: false,
        }
    }
}

impl Options {
    /// The indented preset with the default width.
    pub fn indented() -> Self {
        Self {
            indented: true,
            ..Self::default()
        }
    }
}
