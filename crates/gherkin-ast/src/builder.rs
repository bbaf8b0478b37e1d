//! The reduction stack.

use std::mem;

use gherkin_syntax::{Builder, RuleKind, Token};
use tracing::{debug, trace, warn};

use crate::ast::{Comment, GherkinDocument};
use crate::error::{BuildError, ContractViolation};
use crate::node::AstNode;
use crate::reduce::reduce;

/// Builds a [`GherkinDocument`] from grammar events.
///
/// One accumulator is kept per open rule. Ending a rule reduces its
/// accumulator and files the result under the rule's kind in the enclosing
/// one. Comments bypass the stack and are collected for the whole document.
///
/// A builder serves one run at a time; call [`Builder::reset`] before reusing
/// it, including after a failed run.
#[derive(Debug)]
pub struct AstBuilder {
    root: AstNode,
    stack: Vec<AstNode>,
    comments: Vec<Comment>,
}

impl AstBuilder {
    /// Creates a builder ready for a run.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: AstNode::new(RuleKind::None),
            stack: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Number of rules currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn current_node(&mut self) -> &mut AstNode {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    fn close(&mut self, rule: RuleKind) -> Result<(), BuildError> {
        let Some(node) = self.stack.pop() else {
            return Err(ContractViolation::NoOpenRule(rule).into());
        };
        if node.rule() != rule {
            let unbalanced = ContractViolation::UnbalancedRule {
                open: node.rule(),
                ended: rule,
            };
            return Err(unbalanced.into());
        }
        let reduced = reduce(node, &mut self.comments)?;
        self.current_node().add_child(rule, reduced);
        Ok(())
    }
}

impl Default for AstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for AstBuilder {
    type Output = GherkinDocument;
    type Error = BuildError;

    fn reset(&mut self) {
        self.root = AstNode::new(RuleKind::None);
        self.stack.clear();
        self.comments.clear();
    }

    fn build(&mut self, token: Token) {
        if token.kind.is_comment() {
            self.comments.push(Comment {
                location: token.location,
                text: token.text,
            });
        } else {
            self.current_node().add_token(token);
        }
    }

    fn start_rule(&mut self, rule: RuleKind) {
        trace!("start {rule} at depth {}", self.stack.len());
        self.stack.push(AstNode::new(rule));
    }

    fn end_rule(&mut self, rule: RuleKind) -> Result<(), BuildError> {
        trace!("end {rule} at depth {}", self.stack.len());
        self.close(rule).inspect_err(|err| match err {
            BuildError::Contract(violation) => warn!("grammar contract violated: {violation}"),
            BuildError::Validation(invalid) => debug!("rejected {rule}: {invalid}"),
        })
    }

    fn result(&mut self) -> GherkinDocument {
        match self.root.take_child(RuleKind::GherkinDocument) {
            Ok(Some(document)) => document,
            _ => GherkinDocument {
                feature: None,
                comments: mem::take(&mut self.comments),
            },
        }
    }
}
