//! Template join and input detection.
//!
//! The entry point accepts either a plain markup string or a template: an
//! ordered sequence of literal pieces plus interpolated values, stringified
//! and joined alternately. Which one was supplied is detected structurally
//! through `MarkupInput`.

use std::fmt::Display;

/// Literal pieces plus stringified interpolated values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub pieces: Vec<String>,
    pub values: Vec<String>,
}

impl Template {
    /// Build a template, stringifying each interpolated value.
    pub fn new<P, V>(pieces: P, values: V) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        V: IntoIterator,
        V::Item: Display,
    {
        Self {
            pieces: pieces.into_iter().map(Into::into).collect(),
            values: values.into_iter().map(|value| value.to_string()).collect(),
        }
    }

    /// Join pieces and values alternately into one markup string.
    ///
    /// Each piece is followed by the value at the same index, when there is
    /// one; surplus values past the last piece are ignored.
    pub fn join(&self) -> String {
        let mut out = String::new();
        for (index, piece) in self.pieces.iter().enumerate() {
            out.push_str(piece);
            if let Some(value) = self.values.get(index) {
                out.push_str(value);
            }
        }
        out
    }
}

/// What the entry point was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupInput {
    Template(Template),
    Raw(String),
}

impl MarkupInput {
    /// The single markup string to parse: templates are joined, plain
    /// strings pass through.
    pub fn into_markup(self) -> String {
        match self {
            MarkupInput::Template(template) => template.join(),
            MarkupInput::Raw(markup) => markup,
        }
    }
}

impl From<&str> for MarkupInput {
    fn from(markup: &str) -> Self {
        MarkupInput::Raw(markup.to_string())
    }
}

impl From<String> for MarkupInput {
    fn from(markup: String) -> Self {
        MarkupInput::Raw(markup)
    }
}

impl From<Template> for MarkupInput {
    fn from(template: Template) -> Self {
        MarkupInput::Template(template)
    }
}
