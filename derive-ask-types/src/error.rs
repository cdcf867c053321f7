use crate::TemplateError;

/// Error type for extracting and asking questions.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// The record handed to the extractor is absent or not a struct.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A field's tag does not follow the `<default>,<question>` grammar.
    #[error("Malformed tag {tag:?} on field `{field}`: must provide <default>,<question>")]
    MalformedTag { field: String, tag: String },

    /// Reading an answer or writing a prompt failed, including end of input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The process-wide prompt template could not be rendered.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl AskError {
    /// Create an `InvalidArgument` error for a missing record.
    pub fn missing_record() -> Self {
        Self::InvalidArgument("non-nil pointer required".to_string())
    }

    /// Check if this error was caused by the input stream running dry.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == std::io::ErrorKind::UnexpectedEof)
    }

    /// Check if this error comes from a malformed tag.
    pub fn is_malformed_tag(&self) -> bool {
        matches!(self, Self::MalformedTag { .. })
    }
}
