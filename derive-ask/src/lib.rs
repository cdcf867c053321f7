//! # derive-ask
//!
//! Ask for the fields of Rust structs on the console, one question per field.
//!
//! This crate provides the `#[derive(Record)]` macro, which describes a
//! struct's `String` fields as questions, and a [`Prompter`] that asks them
//! on a line-oriented console and writes the answers back into the struct.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use derive_ask::Record;
//!
//! #[derive(Record, Debug, Default)]
//! struct UserInfo {
//!     #[question(",What is your name?")]
//!     name: String,
//!
//!     #[question("30,How old are you?")]
//!     age: String,
//! }
//!
//! let mut user = UserInfo::default();
//! derive_ask::ask(&mut user)?;
//! println!("{user:?}");
//! ```
//!
//! ## Tags
//!
//! - `#[question("default,prompt")]` - Everything before the first comma is
//!   the default answer, everything after it is the prompt
//! - `#[question]` or no attribute - No default; the prompt is `field?`
//! - `#[question(skip)]` - Never ask for this field
//!
//! A non-empty tag without a comma is rejected with
//! [`AskError::MalformedTag`] when the questions are extracted.
//!
//! ## Answers
//!
//! An empty line selects the default. A question whose answer is still empty
//! is asked again until a non-empty answer arrives or the input closes.
//!
//! ## Prompt template
//!
//! Prompts are rendered with one process-wide template, by default
//! [`DEFAULT_TEMPLATE`]. Replace it with [`set_template`] before asking.

// Re-export all types from derive-ask-types
pub use derive_ask_types::*;

// Re-export the derive macro
pub use derive_ask_macro::Record;

mod prompter;
pub use prompter::{Prompter, ask, ask_question, ask_questions};
