use crate::AskError;

/// A parsed `<default>,<prompt>` tag.
///
/// The empty tag parses to an empty default and an empty prompt; callers fall
/// back to the field name for the prompt in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tag<'t> {
    /// Answer used when the user submits an empty line.
    pub default: &'t str,

    /// Prompt text. Everything after the first comma, commas included.
    pub prompt: &'t str,
}

impl<'t> Tag<'t> {
    /// Parse the tag attached to `field`.
    ///
    /// A non-empty tag must contain at least one comma.
    pub fn parse(field: &str, tag: &'t str) -> Result<Self, AskError> {
        if tag.is_empty() {
            return Ok(Self::default());
        }
        match tag.split_once(',') {
            Some((default, prompt)) => Ok(Self { default, prompt }),
            None => Err(AskError::MalformedTag {
                field: field.to_string(),
                tag: tag.to_string(),
            }),
        }
    }
}
