//! `gherkin-syntax` - The vocabulary shared by a Gherkin grammar driver and the builders it feeds.
//!
//! A Gherkin parser is split into stages. The tokenizer matches raw lines into
//! [`Token`]s, the grammar state machine decides which rule each token opens,
//! continues or closes, and a [`Builder`] turns the resulting flat stream of
//! events into a tree.
//!
//! This crate only defines the pieces those stages exchange:
//!
//! - **Locations**: 1-based `(line, column)` pairs attached to every token
//! - **Kinds**: [`TokenKind`] for lexical categories and [`RuleKind`] for grammar rules
//! - **Tokens**: matched keyword, text, column-tagged spans and resolved dialect
//! - **Events**: [`Event`] and the [`Builder`] trait that consumes them
//!
//! # Example
//!
//! ```
//! use gherkin_syntax::{Event, Location, RuleKind, Token, TokenKind};
//!
//! let events = vec![
//!     Event::Start(RuleKind::GherkinDocument),
//!     Event::Token(Token::new(TokenKind::Comment, Location::new(1, 1)).with_text("# hi")),
//!     Event::End(RuleKind::GherkinDocument),
//! ];
//! assert_eq!(events.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod event;
pub mod kinds;
pub mod location;
pub mod sink;
pub mod token;

pub use event::Event;
pub use kinds::{RuleKind, TokenKind};
pub use location::Location;
pub use sink::{replay, Builder};
pub use token::{Dialect, LineSpan, Token};
