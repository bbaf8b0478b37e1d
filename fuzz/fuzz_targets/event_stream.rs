#![no_main]

use gherkin_ast::AstBuilder;
use gherkin_syntax::{replay, Dialect, Event, LineSpan, Location, RuleKind, Token, TokenKind};
use libfuzzer_sys::fuzz_target;

const MAX_EVENTS: usize = 512;

fn token(kind: TokenKind, line: u32, seed: u8) -> Token {
    let column = u32::from(seed % 16) + 1;
    let spans = (0..seed % 4).map(|i| LineSpan::new(column + u32::from(i) * 4, "x"));
    let mut token = Token::new(kind, Location::new(line, column))
        .with_keyword("Keyword")
        .with_text(format!("t{seed}"))
        .with_items(spans);
    if seed % 3 != 0 {
        token = token.with_dialect(Dialect::new("en"));
    }
    token
}

fn decode(data: &[u8]) -> Vec<Event> {
    let mut events = Vec::new();
    let mut line = 1;
    for pair in data.chunks(2).take(MAX_EVENTS) {
        let op = pair[0];
        let seed = pair.get(1).copied().unwrap_or(0);
        let event = match op % 3 {
            0 => {
                line += 1;
                let kind = TokenKind::ALL[usize::from(seed) % TokenKind::ALL.len()];
                Event::Token(token(kind, line, op / 3))
            }
            1 => Event::Start(RuleKind::ALL[usize::from(seed) % RuleKind::ALL.len()]),
            _ => Event::End(RuleKind::ALL[usize::from(seed) % RuleKind::ALL.len()]),
        };
        events.push(event);
    }
    events
}

fuzz_target!(|data: &[u8]| {
    let mut builder = AstBuilder::new();
    let events = decode(data);
    // Any stream either builds or reports an error; the builder stays reusable.
    let _ = replay(&mut builder, events.clone());
    let _ = replay(&mut builder, events);
});
