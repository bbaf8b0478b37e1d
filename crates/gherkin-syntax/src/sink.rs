//! Consumers of the grammar event stream.

use crate::event::Event;
use crate::kinds::RuleKind;
use crate::token::Token;

/// Receives the events of one parse and produces its result.
///
/// The grammar driver calls [`Builder::reset`] before a run, then
/// [`Builder::start_rule`], [`Builder::build`] and [`Builder::end_rule`] in
/// properly nested order, and finally [`Builder::result`].
pub trait Builder {
    /// What a complete run produces.
    type Output;
    /// Why a run was aborted.
    type Error;

    /// Discards all state so the builder can be reused for a new run.
    fn reset(&mut self);

    /// Attaches a matched token to the innermost open rule.
    fn build(&mut self, token: Token);

    /// Opens a rule.
    fn start_rule(&mut self, rule: RuleKind);

    /// Closes the innermost open rule, which must be `rule`.
    ///
    /// # Errors
    ///
    /// Returns an error when the closed rule cannot be turned into a node.
    fn end_rule(&mut self, rule: RuleKind) -> Result<(), Self::Error>;

    /// Returns the result of the run.
    fn result(&mut self) -> Self::Output;
}

/// Resets `builder`, feeds it `events` in order and returns its result.
///
/// Stops at the first failing event.
///
/// # Errors
///
/// Returns the builder's error for the first event it rejects.
pub fn replay<B, I>(builder: &mut B, events: I) -> Result<B::Output, B::Error>
where
    B: Builder + ?Sized,
    I: IntoIterator<Item = Event>,
{
    builder.reset();
    for event in events {
        match event {
            Event::Token(token) => builder.build(token),
            Event::Start(rule) => builder.start_rule(rule),
            Event::End(rule) => builder.end_rule(rule)?,
        }
    }
    Ok(builder.result())
}
