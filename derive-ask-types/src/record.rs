use tracing::{debug, trace};

use crate::{AskError, Question};

/// Description of one field of a record.
///
/// Produced by a [`Record`] implementation, consumed by [`extract_questions`].
#[derive(Debug)]
pub struct Field<'a> {
    /// Field name, used as the prompt fallback.
    pub name: &'a str,

    /// Raw `<default>,<prompt>` tag. `None` behaves like the empty tag.
    pub tag: Option<&'a str>,

    /// Slot the answer is written to. `None` marks the field as not settable.
    pub slot: Option<&'a mut String>,
}

impl<'a> Field<'a> {
    /// A settable field.
    pub fn new(name: &'a str, tag: Option<&'a str>, slot: &'a mut String) -> Self {
        Self {
            name,
            tag,
            slot: Some(slot),
        }
    }

    /// A field that is described but cannot be written.
    pub fn read_only(name: &'a str, tag: Option<&'a str>) -> Self {
        Self {
            name,
            tag,
            slot: None,
        }
    }

    /// Check if answers can be written back into this field.
    pub fn is_settable(&self) -> bool {
        self.slot.is_some()
    }
}

/// Trait for types whose fields can be asked for.
///
/// This trait is typically derived using `#[derive(Record)]`.
/// Implementations must list fields in declaration order.
pub trait Record {
    /// Describes the fields of this record, in order.
    ///
    /// Fails with [`AskError::InvalidArgument`] when there is no record to
    /// describe.
    fn fields(&mut self) -> Result<Vec<Field<'_>>, AskError>;
}

impl<R: Record + ?Sized> Record for &mut R {
    fn fields(&mut self) -> Result<Vec<Field<'_>>, AskError> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&mut self) -> Result<Vec<Field<'_>>, AskError> {
        (**self).fields()
    }
}

impl<R: Record> Record for Option<R> {
    fn fields(&mut self) -> Result<Vec<Field<'_>>, AskError> {
        match self {
            Some(record) => record.fields(),
            None => Err(AskError::missing_record()),
        }
    }
}

/// Builds one question per settable field of `record`, in field order.
///
/// Fields without a slot are skipped. A malformed tag on any settable field
/// aborts the extraction.
pub fn extract_questions<R: Record + ?Sized>(
    record: &mut R,
) -> Result<Vec<Question<'_>>, AskError> {
    let fields = record.fields()?;
    let mut questions = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(slot) = field.slot else {
            trace!(field = field.name, "skipping field that is not settable");
            continue;
        };
        let question = Question::from_tag(field.name, field.tag.unwrap_or(""))?.bind(slot);
        questions.push(question);
    }

    debug!(count = questions.len(), "extracted questions");
    Ok(questions)
}

/// A record assembled at runtime.
///
/// Useful when the fields to ask for are not known until the program runs.
/// Entries keep the order they were added in.
///
/// ```rust,ignore
/// let mut host = String::new();
/// let mut port = String::new();
/// let mut fields = Fields::new()
///     .field("host", "localhost,Server host:", &mut host)
///     .field("port", "8080,Server port:", &mut port);
/// derive_ask::ask(&mut fields)?;
/// ```
#[derive(Debug, Default)]
pub struct Fields<'a> {
    entries: Vec<Entry<'a>>,
}

#[derive(Debug)]
struct Entry<'a> {
    name: String,
    tag: Option<String>,
    slot: Option<&'a mut String>,
}

impl<'a> Fields<'a> {
    /// Create an empty record.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a settable field with a tag.
    pub fn field(
        mut self,
        name: impl Into<String>,
        tag: impl Into<String>,
        slot: &'a mut String,
    ) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            tag: Some(tag.into()),
            slot: Some(slot),
        });
        self
    }

    /// Add a settable field without a tag.
    pub fn untagged(mut self, name: impl Into<String>, slot: &'a mut String) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            tag: None,
            slot: Some(slot),
        });
        self
    }

    /// Add a field that is never asked for.
    pub fn read_only(mut self, name: impl Into<String>, tag: impl Into<String>) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            tag: Some(tag.into()),
            slot: None,
        });
        self
    }

    /// Number of entries, settable or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Record for Fields<'_> {
    fn fields(&mut self) -> Result<Vec<Field<'_>>, AskError> {
        Ok(self
            .entries
            .iter_mut()
            .map(|Entry { name, tag, slot }| Field {
                name: name.as_str(),
                tag: tag.as_deref(),
                slot: slot.as_deref_mut(),
            })
            .collect())
    }
}
