//! Console prompter: renders questions, reads answers, resolves defaults.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use derive_ask_types::{AskError, Question, Record, Style, extract_questions, render, template};
use tracing::{debug, trace};

/// Asks questions over a line-oriented input and a text output.
///
/// Each question is rendered with the process-wide template (see
/// [`set_template`](crate::set_template)), then one line is read. An empty
/// line selects the question's default. If the answer is still empty the
/// question is asked again, with no limit on attempts, so a question with
/// an empty default blocks until the user types something or the input
/// closes.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Create a prompter on standard input and standard output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter with colorful emphasis.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            style: Style::Colorful,
        }
    }

    /// Create a prompter whose `strong` and `accent` transforms are no-ops.
    pub fn plain(input: R, output: W) -> Self {
        Self {
            input,
            output,
            style: Style::Plain,
        }
    }

    /// Replace the emphasis style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The emphasis style in use.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Give back the input and output streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Ask one question and return the answer.
    ///
    /// The question's setter is called exactly once, with the returned answer.
    pub fn ask_question(&mut self, question: &mut Question<'_>) -> Result<String, AskError> {
        let template = template();
        self.ask_with_template(&template, question)
    }

    /// Ask every question in order and return the answers.
    ///
    /// Stops at the first failure. Questions answered before it keep their
    /// answers; later questions are never shown and their setters never run.
    pub fn ask_questions<'q>(
        &mut self,
        questions: impl IntoIterator<Item = Question<'q>>,
    ) -> Result<Vec<String>, AskError> {
        let template = template();
        let mut answers = Vec::new();
        for mut question in questions {
            answers.push(self.ask_with_template(&template, &mut question)?);
        }
        Ok(answers)
    }

    /// Ask for every settable field of `record` and store the answers in it.
    pub fn ask<Rec: Record + ?Sized>(&mut self, record: &mut Rec) -> Result<(), AskError> {
        let questions = extract_questions(record)?;
        self.ask_questions(questions)?;
        Ok(())
    }

    fn ask_with_template(
        &mut self,
        template: &str,
        question: &mut Question<'_>,
    ) -> Result<String, AskError> {
        let mut attempt = 1usize;
        loop {
            let prompt = render(template, question, self.style)?;
            trace!(question = question.name(), attempt, "prompting");
            self.output.write_all(prompt.as_bytes())?;
            self.output.flush()?;

            let line = self.read_line()?;
            let answer = if line.is_empty() {
                question.default().to_string()
            } else {
                line
            };

            if answer.is_empty() {
                trace!(question = question.name(), attempt, "empty answer, asking again");
                attempt += 1;
                continue;
            }

            debug!(question = question.name(), %answer, attempt, "question answered");
            question.set(&answer);
            return Ok(answer);
        }
    }

    /// Read one line, without its terminator and surrounding whitespace.
    fn read_line(&mut self) -> Result<String, AskError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )
            .into());
        }
        Ok(line.trim().to_string())
    }
}

/// Ask one question on standard input and output.
pub fn ask_question(question: &mut Question<'_>) -> Result<String, AskError> {
    Prompter::stdio().ask_question(question)
}

/// Ask every question in order on standard input and output.
pub fn ask_questions<'q>(
    questions: impl IntoIterator<Item = Question<'q>>,
) -> Result<Vec<String>, AskError> {
    Prompter::stdio().ask_questions(questions)
}

/// Ask for every settable field of `record` on standard input and output.
///
/// `record` is typically a struct deriving [`Record`](derive_ask_macro::Record).
pub fn ask<R: Record + ?Sized>(record: &mut R) -> Result<(), AskError> {
    Prompter::stdio().ask(record)
}
