//! Grammar events.
//!
//! The grammar driver produces a flat stream of events that a [`Builder`]
//! turns into a tree. Recording the stream as values makes it possible to
//! replay it into any builder later.
//!
//! [`Builder`]: crate::sink::Builder

use crate::kinds::RuleKind;
use crate::token::Token;

/// An event produced by the grammar driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A matched token belonging to the innermost open rule.
    Token(Token),
    /// A rule was entered.
    Start(RuleKind),
    /// The innermost open rule was left.
    End(RuleKind),
}

impl From<Token> for Event {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}
