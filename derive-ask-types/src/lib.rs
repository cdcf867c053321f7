//! Core types for the derive-ask crate.
//!
//! This crate provides the foundational types for asking questions:
//! - `Question` - A prompt, a default answer and an optional setter
//! - `Tag` - The `<default>,<prompt>` grammar attached to fields
//! - `Record` and `Field` - Describe the fields of a record
//! - `extract_questions` - Turn a record into questions bound to its fields
//! - `render` and the process-wide template - How a question is displayed

mod error;
pub use error::AskError;

mod tag;
pub use tag::Tag;

mod question;
pub use question::{Question, Setter};

mod record;
pub use record::{Field, Fields, Record, extract_questions};

pub mod template;
pub use template::{
    DEFAULT_TEMPLATE, Style, TemplateError, render, reset_template, set_template, template,
};
