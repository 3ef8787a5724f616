//! Parser configuration.

/// Longest string literal accepted by default.
pub const MAX_STRING_LEN: usize = 128;

/// What to do with a property key no object kind recognises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownPropertyPolicy {
    /// Record a warning, then consume and discard the value.
    #[default]
    Skip,
    /// Fail the parse.
    Reject,
}

/// Options controlling how strictly a scene is parsed.
///
/// ```
/// use raycast_core::{ParseOptions, UnknownPropertyPolicy};
///
/// let options = ParseOptions::new()
///     .allow_empty_scene(false)
///     .unknown_properties(UnknownPropertyPolicy::Reject);
/// assert_eq!(options.max_string_len, 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Longest string literal (keys and type names) in bytes.
    pub max_string_len: usize,
    /// Accept `[]` as a scene with no objects.
    pub allow_empty_scene: bool,
    pub unknown_properties: UnknownPropertyPolicy,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = len;
        self
    }

    pub fn allow_empty_scene(mut self, allow: bool) -> Self {
        self.allow_empty_scene = allow;
        self
    }

    pub fn unknown_properties(mut self, policy: UnknownPropertyPolicy) -> Self {
        self.unknown_properties = policy;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_string_len: MAX_STRING_LEN,
            allow_empty_scene: true,
            unknown_properties: UnknownPropertyPolicy::Skip,
        }
    }
}
