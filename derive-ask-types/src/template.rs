//! Prompt templates.
//!
//! A template is plain text with placeholders in braces. The variables are
//! `{prompt}`, `{default}` and `{name}`; each may be piped through the
//! `strong` and `accent` transforms, e.g. `{prompt|strong}`. `{{` and `}}`
//! produce literal braces.
//!
//! One template is shared by the whole process. It starts out as
//! [`DEFAULT_TEMPLATE`] and only changes through [`set_template`].

use std::borrow::Cow;
use std::sync::RwLock;

use colored::Colorize;

use crate::Question;

/// The template used until [`set_template`] is called.
pub const DEFAULT_TEMPLATE: &str = "{prompt|strong} (default={default|accent}) > ";

static TEMPLATE: RwLock<Cow<'static, str>> = RwLock::new(Cow::Borrowed(DEFAULT_TEMPLATE));

/// Replace the process-wide template.
///
/// Affects renders started after the call. The template is not validated
/// here; a malformed one fails on the next render.
pub fn set_template(template: impl Into<String>) {
    let template = template.into();
    tracing::debug!(%template, "prompt template replaced");
    match TEMPLATE.write() {
        Ok(mut guard) => *guard = Cow::Owned(template),
        Err(poisoned) => *poisoned.into_inner() = Cow::Owned(template),
    }
}

/// Restore [`DEFAULT_TEMPLATE`].
pub fn reset_template() {
    match TEMPLATE.write() {
        Ok(mut guard) => *guard = Cow::Borrowed(DEFAULT_TEMPLATE),
        Err(poisoned) => *poisoned.into_inner() = Cow::Borrowed(DEFAULT_TEMPLATE),
    }
}

/// A copy of the current process-wide template.
pub fn template() -> String {
    match TEMPLATE.read() {
        Ok(guard) => guard.to_string(),
        Err(poisoned) => poisoned.into_inner().to_string(),
    }
}

/// Error raised while rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A `{` has no matching `}`.
    #[error("unclosed placeholder starting at byte {0}")]
    Unclosed(usize),

    /// A `}` appears outside a placeholder and is not doubled.
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedBrace(usize),

    /// The placeholder names something other than `prompt`, `default` or `name`.
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    /// The placeholder pipes through something other than `strong` or `accent`.
    #[error("unknown transform `{0}`")]
    UnknownTransform(String),
}

/// How the `strong` and `accent` transforms decorate text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// ANSI bold for `strong`, bold blue for `accent`.
    #[default]
    Colorful,

    /// Both transforms leave text untouched.
    Plain,
}

impl Style {
    /// Emphasize `text`.
    pub fn strong(self, text: &str) -> String {
        match self {
            Self::Colorful => text.bold().to_string(),
            Self::Plain => text.to_string(),
        }
    }

    /// Highlight `text` in the accent color.
    pub fn accent(self, text: &str) -> String {
        match self {
            Self::Colorful => text.blue().bold().to_string(),
            Self::Plain => text.to_string(),
        }
    }

    fn apply(self, transform: &str, text: String) -> Result<String, TemplateError> {
        match transform {
            "strong" => Ok(self.strong(&text)),
            "accent" => Ok(self.accent(&text)),
            other => Err(TemplateError::UnknownTransform(other.to_string())),
        }
    }
}

/// Render `template` with `question` as context.
pub fn render(
    template: &str,
    question: &Question<'_>,
    style: Style,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + question.prompt().len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let brace_at = offset + pos;
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            offset = brace_at + 2;
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            offset = brace_at + 2;
        } else if tail.starts_with('}') {
            return Err(TemplateError::UnmatchedBrace(brace_at));
        } else {
            let end = tail.find('}').ok_or(TemplateError::Unclosed(brace_at))?;
            let placeholder = &tail[1..end];
            if placeholder.contains('{') {
                return Err(TemplateError::Unclosed(brace_at));
            }
            out.push_str(&expand(placeholder, question, style)?);
            rest = &tail[end + 1..];
            offset = brace_at + end + 1;
        }
    }
    out.push_str(rest);

    Ok(out)
}

fn expand(
    placeholder: &str,
    question: &Question<'_>,
    style: Style,
) -> Result<String, TemplateError> {
    let mut parts = placeholder.split('|').map(str::trim);
    let variable = parts.next().unwrap_or_default();
    let mut value = match variable {
        "prompt" => question.prompt().to_string(),
        "default" => question.default().to_string(),
        "name" => question.name().to_string(),
        other => return Err(TemplateError::UnknownVariable(other.to_string())),
    };
    for transform in parts {
        value = style.apply(transform, value)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question<'static> {
        Question::new("Name", "What is your name?", "Bob")
    }

    #[test]
    fn default_template_plain() {
        let rendered = render(DEFAULT_TEMPLATE, &question(), Style::Plain).unwrap();
        assert_eq!(rendered, "What is your name? (default=Bob) > ");
    }

    #[test]
    fn all_variables() {
        let rendered =
            render("[{name}] {prompt} <{default}>", &question(), Style::Plain).unwrap();
        assert_eq!(rendered, "[Name] What is your name? <Bob>");
    }

    #[test]
    fn colorful_transforms_decorate() {
        colored::control::set_override(true);
        let rendered = render("{prompt|strong}", &question(), Style::Colorful).unwrap();
        assert_ne!(rendered, "What is your name?");
        assert!(rendered.contains("What is your name?"));
        assert!(rendered.starts_with('\u{1b}'));
    }

    #[test]
    fn chained_transforms() {
        let rendered = render("{ name | strong | accent }", &question(), Style::Plain).unwrap();
        assert_eq!(rendered, "Name");
    }

    #[test]
    fn escaped_braces() {
        let rendered = render("{{{default}}}", &question(), Style::Plain).unwrap();
        assert_eq!(rendered, "{Bob}");
    }

    #[test]
    fn text_without_placeholders() {
        assert_eq!(render("> ", &question(), Style::Plain).unwrap(), "> ");
    }

    #[test]
    fn unclosed_placeholder() {
        assert_eq!(
            render("ok {prompt", &question(), Style::Plain),
            Err(TemplateError::Unclosed(3))
        );
        assert_eq!(
            render("{prompt {name}", &question(), Style::Plain),
            Err(TemplateError::Unclosed(0))
        );
    }

    #[test]
    fn unmatched_closing_brace() {
        assert_eq!(
            render("a } b", &question(), Style::Plain),
            Err(TemplateError::UnmatchedBrace(2))
        );
    }

    #[test]
    fn unknown_variable() {
        assert_eq!(
            render("{Usage}", &question(), Style::Plain),
            Err(TemplateError::UnknownVariable("Usage".to_string()))
        );
    }

    #[test]
    fn unknown_transform() {
        assert_eq!(
            render("{prompt|blink}", &question(), Style::Plain),
            Err(TemplateError::UnknownTransform("blink".to_string()))
        );
    }
}
