//! `gherkin-ast` - Typed syntax tree for Gherkin feature files.
//!
//! This crate is the reduction stage of a Gherkin parser. It consumes the
//! event stream of a grammar driver (see `gherkin-syntax`) and assembles an
//! immutable [`GherkinDocument`]:
//!
//! - **Reduction stack**: [`AstBuilder`] keeps one untyped accumulator per open rule
//! - **Rule reducer**: every closed rule is reduced to its typed node
//! - **Validation**: tables with ragged rows are rejected with the row's location
//!
//! # Architecture
//!
//! ```text
//! grammar driver ──events──▶ AstBuilder ──end_rule──▶ reduce ──▶ parent accumulator
//!                                                               ▲
//!                            comments ──────────────────────────┘ (document-wide)
//! ```
//!
//! # Example
//!
//! ```
//! use gherkin_ast::AstBuilder;
//! use gherkin_syntax::{replay, Dialect, Event, Location, RuleKind, Token, TokenKind};
//!
//! let feature_line = Token::new(TokenKind::FeatureLine, Location::new(1, 1))
//!     .with_keyword("Feature")
//!     .with_text("Cucumbers")
//!     .with_dialect(Dialect::new("en"));
//!
//! let events = vec![
//!     Event::Start(RuleKind::GherkinDocument),
//!     Event::Start(RuleKind::Feature),
//!     Event::Start(RuleKind::FeatureHeader),
//!     Event::Token(feature_line),
//!     Event::End(RuleKind::FeatureHeader),
//!     Event::End(RuleKind::Feature),
//!     Event::End(RuleKind::GherkinDocument),
//! ];
//!
//! let document = replay(&mut AstBuilder::new(), events).unwrap();
//! assert_eq!(document.feature.unwrap().name, "Cucumbers");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod ast;
mod builder;
pub mod error;
mod node;
mod reduce;

pub use ast::{
    Background, Comment, DataTable, DocString, Examples, Feature, GherkinDocument, HasLocation,
    Scenario, ScenarioDefinition, ScenarioOutline, Step, StepArgument, TableCell, TableRow, Tag,
};
pub use builder::AstBuilder;
pub use error::{BuildError, ContractViolation, ValidationError};
