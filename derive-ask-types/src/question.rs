use std::fmt;

use crate::{AskError, Style, Tag};

/// Write capability into one field of a record.
pub type Setter<'a> = Box<dyn FnMut(String) + 'a>;

/// A single question asked on the console.
///
/// A question never owns the record it came from. When it is bound to a
/// field it holds a [`Setter`] borrowing that one field, so the record stays
/// mutably borrowed until the question is dropped.
pub struct Question<'a> {
    /// Name of the bound field (or any identifier for manual questions).
    name: String,

    /// The prompt text shown to the user.
    prompt: String,

    /// Answer used when the user submits an empty line.
    default: String,

    /// Called once with the resolved answer.
    setter: Option<Setter<'a>>,
}

impl<'a> Question<'a> {
    /// Create an unbound question.
    ///
    /// An empty `prompt` falls back to `"<name>?"`.
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let mut prompt = prompt.into();
        if prompt.is_empty() {
            prompt = format!("{name}?");
        }
        Self {
            name,
            prompt,
            default: default.into(),
            setter: None,
        }
    }

    /// Create an unbound question from a `<default>,<prompt>` tag.
    pub fn from_tag(name: impl Into<String>, tag: &str) -> Result<Self, AskError> {
        let name = name.into();
        let Tag { default, prompt } = Tag::parse(&name, tag)?;
        Ok(Self::new(name, prompt, default))
    }

    /// Bind this question to a setter.
    pub fn with_setter(mut self, setter: impl FnMut(String) + 'a) -> Self {
        self.setter = Some(Box::new(setter));
        self
    }

    /// Bind this question to a string slot.
    pub fn bind(self, slot: &'a mut String) -> Self {
        self.with_setter(move |answer| *slot = answer)
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the default answer.
    pub fn default(&self) -> &str {
        &self.default
    }

    /// Check if answers to this question are written anywhere.
    pub fn is_bound(&self) -> bool {
        self.setter.is_some()
    }

    /// Deliver a resolved answer to the setter, if any.
    pub fn set(&mut self, answer: &str) {
        if let Some(setter) = self.setter.as_mut() {
            setter(answer.to_string());
        }
    }

    /// Emphasize `text` the way `{..|strong}` does in a template.
    pub fn strong(&self, text: &str, style: Style) -> String {
        style.strong(text)
    }

    /// Highlight `text` the way `{..|accent}` does in a template.
    pub fn accent(&self, text: &str, style: Style) -> String {
        style.accent(text)
    }
}

impl fmt::Debug for Question<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("prompt", &self.prompt)
            .field("default", &self.default)
            .field("bound", &self.is_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_falls_back_to_name() {
        let question = Question::new("Name", "", "");
        assert_eq!(question.prompt(), "Name?");
    }

    #[test]
    fn from_tag() {
        let question = Question::from_tag("Age", "30,How old are you?").unwrap();
        assert_eq!(question.name(), "Age");
        assert_eq!(question.prompt(), "How old are you?");
        assert_eq!(question.default(), "30");
        assert!(!question.is_bound());
    }

    #[test]
    fn from_empty_tag() {
        let question = Question::from_tag("Name", "").unwrap();
        assert_eq!(question.prompt(), "Name?");
        assert_eq!(question.default(), "");
    }

    #[test]
    fn from_malformed_tag() {
        assert!(Question::from_tag("X", "bad-tag-no-comma")
            .unwrap_err()
            .is_malformed_tag());
    }

    #[test]
    fn bound_question_writes_slot() {
        let mut name = String::new();
        {
            let mut question = Question::new("Name", "", "").bind(&mut name);
            assert!(question.is_bound());
            question.set("Alice");
        }
        assert_eq!(name, "Alice");
    }

    #[test]
    fn unbound_set_is_a_no_op() {
        let mut question = Question::new("Name", "", "");
        question.set("Alice");
        assert!(!question.is_bound());
    }

    #[test]
    fn strong_delegates_to_style() {
        let question = Question::new("Name", "Who?", "Bob");
        assert_eq!(question.strong("Who?", Style::Plain), "Who?");

        colored::control::set_override(true);
        let strong = question.strong("Who?", Style::Colorful);
        assert_eq!(strong, Style::Colorful.strong("Who?"));
        assert!(strong.starts_with('\u{1b}'));
    }

    #[test]
    fn accent_delegates_to_style() {
        let question = Question::new("Name", "Who?", "Bob");
        assert_eq!(question.accent("Bob", Style::Plain), "Bob");

        colored::control::set_override(true);
        let accent = question.accent("Bob", Style::Colorful);
        assert_eq!(accent, Style::Colorful.accent("Bob"));
        assert_ne!(accent, question.strong("Bob", Style::Colorful));
    }

    #[test]
    fn debug_hides_setter() {
        let mut slot = String::new();
        let question = Question::new("Name", "Who?", "Bob").bind(&mut slot);
        let debug = format!("{question:?}");
        assert!(debug.contains("bound: true"));
        assert!(debug.contains("\"Bob\""));
    }
}
