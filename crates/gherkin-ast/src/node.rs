//! Untyped accumulators for open rules.
//!
//! Every open rule owns an [`AstNode`] that collects the tokens matched while
//! it was innermost and the values its already-closed child rules reduced to.
//! When the rule ends, the node is moved into the reducer, which takes out
//! what it needs.

use gherkin_syntax::{RuleKind, Token, TokenKind};
use indexmap::IndexMap;

use crate::ast::{
    Background, DataTable, DocString, Examples, Feature, GherkinDocument, ScenarioDefinition, Step,
    TableRow,
};
use crate::error::ContractViolation;
use crate::reduce::ScenarioShape;

/// Value a closed rule was reduced to, waiting in its parent's accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reduced {
    Document(GherkinDocument),
    Feature(Option<Feature>),
    Background(Background),
    Definition(ScenarioDefinition),
    Shape(ScenarioShape),
    Examples(Examples),
    Rows(Vec<TableRow>),
    Step(Step),
    DataTable(DataTable),
    DocString(DocString),
    Description(String),
    /// A rule without a reduction of its own, passed through untouched.
    Node(AstNode),
}

/// Typed extraction from a [`Reduced`] value.
pub(crate) trait FromReduced: Sized {
    /// Returns the payload, or the value back if it has another shape.
    fn from_reduced(value: Reduced) -> Result<Self, Reduced>;
}

macro_rules! impl_from_reduced {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl FromReduced for $ty {
                fn from_reduced(value: Reduced) -> Result<Self, Reduced> {
                    match value {
                        Reduced::$variant(it) => Ok(it),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_from_reduced!(
    Document => GherkinDocument,
    Feature => Option<Feature>,
    Background => Background,
    Definition => ScenarioDefinition,
    Shape => ScenarioShape,
    Examples => Examples,
    Rows => Vec<TableRow>,
    Step => Step,
    DataTable => DataTable,
    DocString => DocString,
    Description => String,
    Node => AstNode,
);

/// Accumulator of one open rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AstNode {
    rule: RuleKind,
    tokens: IndexMap<TokenKind, Vec<Token>>,
    children: IndexMap<RuleKind, Vec<Reduced>>,
}

impl AstNode {
    pub(crate) fn new(rule: RuleKind) -> Self {
        Self {
            rule,
            tokens: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    pub(crate) fn rule(&self) -> RuleKind {
        self.rule
    }

    pub(crate) fn add_token(&mut self, token: Token) {
        self.tokens.entry(token.kind).or_default().push(token);
    }

    pub(crate) fn add_child(&mut self, rule: RuleKind, value: Reduced) {
        self.children.entry(rule).or_default().push(value);
    }

    /// Takes every token of `kind`, in arrival order.
    pub(crate) fn take_tokens(&mut self, kind: TokenKind) -> Vec<Token> {
        self.tokens.shift_remove(&kind).unwrap_or_default()
    }

    /// Takes the first token of `kind`.
    pub(crate) fn take_token(&mut self, kind: TokenKind) -> Option<Token> {
        self.take_tokens(kind).into_iter().next()
    }

    /// Takes the first token of `kind`, which the grammar guarantees is there.
    pub(crate) fn require_token(&mut self, kind: TokenKind) -> Result<Token, ContractViolation> {
        let missing = ContractViolation::MissingToken {
            rule: self.rule,
            token: kind,
        };
        self.take_token(kind).ok_or(missing)
    }

    /// Takes every child reduced under `rule`, in order.
    pub(crate) fn take_children<T: FromReduced>(
        &mut self,
        rule: RuleKind,
    ) -> Result<Vec<T>, ContractViolation> {
        let parent = self.rule;
        let unexpected = |_: Reduced| ContractViolation::UnexpectedChild {
            rule: parent,
            child: rule,
        };
        self.children
            .shift_remove(&rule)
            .unwrap_or_default()
            .into_iter()
            .map(|value| T::from_reduced(value).map_err(unexpected))
            .collect()
    }

    /// Takes the first child reduced under `rule`.
    pub(crate) fn take_child<T: FromReduced>(
        &mut self,
        rule: RuleKind,
    ) -> Result<Option<T>, ContractViolation> {
        Ok(self.take_children(rule)?.into_iter().next())
    }

    /// Takes the first child reduced under `rule`, which the grammar guarantees is there.
    pub(crate) fn require_child<T: FromReduced>(
        &mut self,
        rule: RuleKind,
    ) -> Result<T, ContractViolation> {
        let missing = ContractViolation::MissingChild {
            rule: self.rule,
            child: rule,
        };
        self.take_child(rule)?.ok_or(missing)
    }

    /// Fails if anything was filed under `rule`, which this node never reads.
    pub(crate) fn reject_child(&self, rule: RuleKind) -> Result<(), ContractViolation> {
        if self.children.get(&rule).is_none_or(Vec::is_empty) {
            return Ok(());
        }
        Err(ContractViolation::UnexpectedChild {
            rule: self.rule,
            child: rule,
        })
    }
}
