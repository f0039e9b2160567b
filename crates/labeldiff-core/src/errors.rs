use crate::diff::format::{format_lines, join_lines};
use crate::diff::mismatch::Mismatch;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that test harnesses and callers can
/// match on without parsing the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// More than one mismatch was found
    DiffFound,
    /// A single value differed
    ValueMismatch,
    /// A single sequence differed in length
    LengthMismatch,
    /// The two sides decomposed into a different number of comparers
    ArityMismatch,
    /// A comparer was handed a value of the wrong type
    InvalidType,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::DiffFound => "ERR_DIFF_FOUND",
            ExErrorKind::ValueMismatch => "ERR_VALUE_MISMATCH",
            ExErrorKind::LengthMismatch => "ERR_LENGTH_MISMATCH",
            ExErrorKind::ArityMismatch => "ERR_ARITY_MISMATCH",
            ExErrorKind::InvalidType => "ERR_INVALID_TYPE",
        }
    }

    /// Classify a mismatch tree.
    ///
    /// A tree holding exactly one leaf takes that leaf's kind; anything wider
    /// is `DiffFound`.
    pub fn classify(mismatch: &Mismatch) -> Self {
        match mismatch {
            Mismatch::Value(_) => ExErrorKind::ValueMismatch,
            Mismatch::Length { .. } => ExErrorKind::LengthMismatch,
            Mismatch::Arity { .. } => ExErrorKind::ArityMismatch,
            Mismatch::InvalidType { .. } => ExErrorKind::InvalidType,
            Mismatch::Labeled { inner, .. } => Self::classify(inner),
            Mismatch::Aggregate(children) => match children.as_slice() {
                [only] => Self::classify(only),
                _ => ExErrorKind::DiffFound,
            },
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification of a failed comparison together with the
/// rendered report, so an assertion failure is readable on its own.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    label: Option<String>,
    message: String,
    mismatch_count: usize,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            label: None,
            message: String::new(),
            mismatch_count: 0,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the label path of the offending field
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Record how many report lines the failure produced
    pub fn with_mismatch_count(mut self, count: usize) -> Self {
        self.mismatch_count = count;
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the label path, if the failure is confined to one labeled field
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the error message (the rendered report when built from a mismatch)
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of report lines
    pub fn mismatch_count(&self) -> usize {
        self.mismatch_count
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if let Some(label) = &self.label {
            write!(f, " (label: {})", label)?;
        }
        if !self.message.is_empty() {
            write!(f, ":\n{}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

impl From<Mismatch> for ExError {
    fn from(mismatch: Mismatch) -> Self {
        let kind = ExErrorKind::classify(&mismatch);
        let lines = format_lines(&Err(mismatch), "");
        let mut err = ExError::new(kind)
            .with_message(join_lines(&lines))
            .with_mismatch_count(lines.len());
        if let [line] = lines.as_slice() {
            if !line.path.is_empty() {
                err = err.with_label(line.path.clone());
            }
        }
        err
    }
}
