//! Build errors.
//!
//! A run fails for one of two reasons. [`ValidationError`] means the feature
//! file itself is malformed and is meant to be reported to the user.
//! [`ContractViolation`] means the grammar driver produced an event stream
//! that breaks its own contract; it always points at a bug upstream.

#![allow(missing_docs)]

use gherkin_syntax::{Location, RuleKind, TokenKind};
use smol_str::SmolStr;
use thiserror::Error;

/// Message for tables whose rows disagree on the number of cells.
pub const INCONSISTENT_CELL_COUNT: &str = "inconsistent cell count within the table";

/// Malformed input, located at the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {message}")]
pub struct ValidationError {
    pub message: SmolStr,
    pub location: Location,
}

impl ValidationError {
    #[must_use]
    pub fn new(message: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// The event stream does not have the shape the grammar guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// `end_rule` was called with no rule open.
    #[error("cannot end {0}: no rule is open")]
    NoOpenRule(RuleKind),

    /// `end_rule` named a rule other than the innermost open one.
    #[error("cannot end {ended}: innermost open rule is {open}")]
    UnbalancedRule { open: RuleKind, ended: RuleKind },

    /// A rule ended without a token it always carries.
    #[error("{rule} has no {token} token")]
    MissingToken { rule: RuleKind, token: TokenKind },

    /// A rule ended without a child it always carries.
    #[error("{rule} has no {child} child")]
    MissingChild { rule: RuleKind, child: RuleKind },

    /// A child was reduced to a different kind of value than its rule produces.
    #[error("{rule} has a malformed {child} child")]
    UnexpectedChild { rule: RuleKind, child: RuleKind },
}

/// Why a build was aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("internal grammar error: {0}")]
    Contract(#[from] ContractViolation),
}

impl BuildError {
    /// Returns `true` if the error points at a bug in the grammar driver
    /// rather than at the input.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Contract(_))
    }

    /// Location of the offending input, for validation errors.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::Validation(err) => Some(err.location),
            Self::Contract(_) => None,
        }
    }
}
