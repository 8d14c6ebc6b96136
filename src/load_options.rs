//! Options for loading outline sources.

/// Options for controlling how outline files are read and decoded.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// How to handle invalid text encoding.
    pub error_mode: ErrorMode,

    /// Whether to apply Unicode NFC normalization to the decoded text.
    pub normalize_unicode: bool,

    /// Size limit in bytes (0 = unlimited).
    pub max_size: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            normalize_unicode: true,
            max_size: 0,
        }
    }
}

impl LoadOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces invalid byte sequences instead of failing.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Fails on any invalid byte sequence.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Keeps the decoded text exactly as stored.
    pub fn without_normalization(mut self) -> Self {
        self.normalize_unicode = false;
        self
    }

    /// Sets the size limit in megabytes.
    pub fn with_max_size_mb(mut self, mb: usize) -> Self {
        self.max_size = mb * 1024 * 1024;
        self
    }

    /// Returns true if decoding errors should be replaced where possible.
    pub fn is_lenient(&self) -> bool {
        matches!(self.error_mode, ErrorMode::Lenient)
    }
}

/// How to handle decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on the first invalid sequence.
    #[default]
    Strict,
    /// Substitute U+FFFD and continue.
    Lenient,
}
