//! Tokens produced by the line matcher.

use smol_str::SmolStr;

use crate::kinds::TokenKind;
use crate::location::Location;

/// A column-tagged fragment of a matched line: one table cell or one tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineSpan {
    /// Column where the fragment starts.
    pub column: u32,
    /// The fragment text.
    pub text: SmolStr,
}

impl LineSpan {
    /// Creates a new span.
    #[must_use]
    pub fn new(column: u32, text: impl Into<SmolStr>) -> Self {
        Self {
            column,
            text: text.into(),
        }
    }
}

/// The keyword dialect a header line was matched with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dialect {
    language: SmolStr,
}

impl Dialect {
    /// Creates a dialect for the given language code.
    #[must_use]
    pub fn new(language: impl Into<SmolStr>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// The language code, e.g. `en`.
    #[must_use]
    pub fn language(&self) -> &SmolStr {
        &self.language
    }
}

/// A matched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the line was matched as.
    pub kind: TokenKind,
    /// Where the line starts.
    pub location: Location,
    /// The keyword the line was matched with, if any.
    pub keyword: Option<SmolStr>,
    /// The text after the keyword, or the whole line for `Other`.
    pub text: SmolStr,
    /// Cells of a table row or tags of a tag line.
    pub items: Vec<LineSpan>,
    /// Resolved dialect, set on feature lines.
    pub dialect: Option<Dialect>,
    /// Indentation of the line.
    pub indent: u32,
}

impl Token {
    /// Creates an empty token of `kind` at `location`.
    #[must_use]
    pub fn new(kind: TokenKind, location: Location) -> Self {
        Self {
            kind,
            location,
            keyword: None,
            text: SmolStr::default(),
            items: Vec::new(),
            dialect: None,
            indent: 0,
        }
    }

    /// Sets the matched text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<SmolStr>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the matched keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<SmolStr>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Sets the matched spans.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = LineSpan>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Sets the resolved dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// Sets the matched indentation.
    #[must_use]
    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = indent;
        self
    }

    /// The token location, moved to `column` unless it is `0`.
    #[must_use]
    pub fn location_at(&self, column: u32) -> Location {
        self.location.with_column(column)
    }

    /// The matched keyword, or an empty string.
    #[must_use]
    pub fn keyword_or_empty(&self) -> SmolStr {
        self.keyword.clone().unwrap_or_default()
    }
}
