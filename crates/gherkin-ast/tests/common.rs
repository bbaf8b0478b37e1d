//! Shared helpers for builder tests.
#![allow(dead_code, unused_imports)]

use std::fmt::Write as _;

pub use gherkin_ast::{
    AstBuilder, BuildError, ContractViolation, Examples, Feature, GherkinDocument, HasLocation,
    ScenarioDefinition, Step, StepArgument, TableRow, Tag, ValidationError,
};
pub use gherkin_syntax::{
    replay, Builder, Dialect, Event, LineSpan, Location, RuleKind, Token, TokenKind,
};

/// Installs a log subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A recorded event stream, written in the order the grammar driver would emit it.
#[derive(Debug, Clone, Default)]
pub struct Events(Vec<Event>);

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, rule: RuleKind) -> Self {
        self.0.push(Event::Start(rule));
        self
    }

    pub fn end(mut self, rule: RuleKind) -> Self {
        self.0.push(Event::End(rule));
        self
    }

    pub fn token(mut self, token: Token) -> Self {
        self.0.push(Event::Token(token));
        self
    }

    /// Appends another recorded stream.
    pub fn then(mut self, other: Events) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Wraps the stream in `rule`.
    pub fn wrap(self, rule: RuleKind) -> Self {
        Events::new().start(rule).then(self).end(rule)
    }

    pub fn into_events(self) -> Vec<Event> {
        self.0
    }

    /// Replays the stream into a fresh builder.
    pub fn build(self) -> Result<GherkinDocument, BuildError> {
        init_tracing();
        replay(&mut AstBuilder::new(), self.0)
    }
}

pub fn keyword_line(kind: TokenKind, line: u32, keyword: &str, text: &str) -> Token {
    Token::new(kind, Location::new(line, 1))
        .with_keyword(keyword)
        .with_text(text)
}

pub fn feature_line(line: u32, name: &str, language: &str) -> Token {
    let dialect = Dialect::new(language);
    keyword_line(TokenKind::FeatureLine, line, "Feature", name).with_dialect(dialect)
}

pub fn other(line: u32, text: &str) -> Token {
    Token::new(TokenKind::Other, Location::new(line, 1)).with_text(text)
}

pub fn comment(line: u32, text: &str) -> Token {
    Token::new(TokenKind::Comment, Location::new(line, 1)).with_text(text)
}

/// A tag line with tags separated by single spaces, starting at `column`.
pub fn tag_line(line: u32, column: u32, tags: &[&str]) -> Token {
    let mut spans = Vec::new();
    let mut at = column;
    for tag in tags {
        spans.push(LineSpan::new(at, *tag));
        at += tag.len() as u32 + 1;
    }
    Token::new(TokenKind::TagLine, Location::new(line, column)).with_items(spans)
}

/// A `| a | b |` row whose pipe starts at column 5.
pub fn table_row(line: u32, cells: &[&str]) -> Token {
    let mut spans = Vec::new();
    let mut at = 7;
    for cell in cells {
        spans.push(LineSpan::new(at, *cell));
        at += cell.len() as u32 + 3;
    }
    Token::new(TokenKind::TableRow, Location::new(line, 5)).with_items(spans)
}

pub fn doc_string_separator(line: u32, content_type: &str) -> Token {
    Token::new(TokenKind::DocStringSeparator, Location::new(line, 7)).with_text(content_type)
}

pub fn description(lines: &[(u32, &str)]) -> Events {
    let mut events = Events::new();
    for (line, text) in lines {
        events = events.token(other(*line, text));
    }
    events.wrap(RuleKind::Description)
}

pub fn tags(lines: impl IntoIterator<Item = Token>) -> Events {
    lines
        .into_iter()
        .fold(Events::new(), Events::token)
        .wrap(RuleKind::Tags)
}

pub fn step(line: u32, keyword: &str, text: &str) -> Events {
    Events::new()
        .token(keyword_line(TokenKind::StepLine, line, keyword, text))
        .wrap(RuleKind::Step)
}

pub fn step_with(line: u32, keyword: &str, text: &str, argument: Events) -> Events {
    Events::new()
        .token(keyword_line(TokenKind::StepLine, line, keyword, text))
        .then(argument)
        .wrap(RuleKind::Step)
}

pub fn data_table(rows: impl IntoIterator<Item = Token>) -> Events {
    rows.into_iter()
        .fold(Events::new(), Events::token)
        .wrap(RuleKind::DataTable)
}

/// A doc string opened on line `open`, with `lines` as its body and a closing fence after them.
pub fn doc_string(open: u32, content_type: &str, lines: &[&str]) -> Events {
    let mut events = Events::new().token(doc_string_separator(open, content_type));
    let mut at = open;
    for text in lines {
        at += 1;
        events = events.token(other(at, text));
    }
    events
        .token(doc_string_separator(at + 1, ""))
        .wrap(RuleKind::DocString)
}

pub fn background(line: u32, body: Events) -> Events {
    let line = keyword_line(TokenKind::BackgroundLine, line, "Background", "");
    Events::new()
        .token(line)
        .then(body)
        .wrap(RuleKind::Background)
}

pub fn scenario(line: u32, name: &str, body: Events) -> Events {
    let line = keyword_line(TokenKind::ScenarioLine, line, "Scenario", name);
    Events::new()
        .token(line)
        .then(body)
        .wrap(RuleKind::Scenario)
}

pub fn scenario_outline(line: u32, name: &str, body: Events) -> Events {
    let line = keyword_line(
        TokenKind::ScenarioOutlineLine,
        line,
        "Scenario Outline",
        name,
    );
    Events::new()
        .token(line)
        .then(body)
        .wrap(RuleKind::ScenarioOutline)
}

pub fn examples(line: u32, name: &str, rows: impl IntoIterator<Item = Token>) -> Events {
    let table = rows
        .into_iter()
        .fold(Events::new(), Events::token)
        .wrap(RuleKind::ExamplesTable);
    let line = keyword_line(TokenKind::ExamplesLine, line, "Examples", name);
    Events::new()
        .token(line)
        .then(table)
        .wrap(RuleKind::Examples)
        .wrap(RuleKind::ExamplesDefinition)
}

/// A feature with a header made of `header` and body `children`.
pub fn feature(header: Events, children: Events) -> Events {
    header
        .wrap(RuleKind::FeatureHeader)
        .then(children)
        .wrap(RuleKind::Feature)
}

pub fn document(body: Events) -> Events {
    body.wrap(RuleKind::GherkinDocument)
}

/// Renders a document as an indented outline for snapshots.
pub fn dump(document: &GherkinDocument) -> String {
    let mut out = String::from("Document\n");
    for comment in &document.comments {
        let text = format!("Comment{} {:?}", comment.location, comment.text);
        line(&mut out, 1, text);
    }
    let Some(feature) = &document.feature else {
        return out;
    };

    let header = format!("Feature{} {}", feature.location, feature.language);
    let title = format!("{:?} {:?}", feature.keyword, feature.name);
    let tags = tag_list(&feature.tags);
    line(&mut out, 1, format!("{header} {title}{tags}"));
    description_line(&mut out, 2, &feature.description);

    for child in &feature.children {
        let (kind, tags) = match child {
            ScenarioDefinition::Background(_) => ("Background", String::new()),
            ScenarioDefinition::Scenario(it) => ("Scenario", tag_list(&it.tags)),
            ScenarioDefinition::ScenarioOutline(it) => ("ScenarioOutline", tag_list(&it.tags)),
        };
        let header = format!("{kind}{} {:?}", child.location(), child.keyword());
        line(&mut out, 2, format!("{header} {:?}{tags}", child.name()));
        description_line(&mut out, 3, child.description());

        for step in child.steps() {
            dump_step(&mut out, 3, step);
        }
        if let ScenarioDefinition::ScenarioOutline(outline) = child {
            for examples in &outline.examples {
                dump_examples(&mut out, examples);
            }
        }
    }
    out
}

fn dump_step(out: &mut String, depth: usize, step: &Step) {
    let text = format!("Step{} {:?} {:?}", step.location, step.keyword, step.text);
    line(out, depth, text);
    match &step.argument {
        Some(StepArgument::DataTable(table)) => {
            line(out, depth + 1, format!("DataTable{}", table.location()));
            for row in &table.rows {
                line(out, depth + 2, format!("Row{}", cells(row)));
            }
        }
        Some(StepArgument::DocString(doc)) => {
            let text = format!("DocString{} {:?}", doc.location, doc.content_type);
            line(out, depth + 1, format!("{text} {:?}", doc.content));
        }
        None => {}
    }
}

fn dump_examples(out: &mut String, examples: &Examples) {
    let header = format!("Examples{} {:?}", examples.location, examples.keyword);
    let tags = tag_list(&examples.tags);
    line(out, 3, format!("{header} {:?}{tags}", examples.name));
    if let Some(row) = &examples.table_header {
        line(out, 4, format!("Header{}", cells(row)));
    }
    for row in examples.table_body.iter().flatten() {
        line(out, 4, format!("Row{}", cells(row)));
    }
}

fn cells(row: &TableRow) -> String {
    let mut out = row.location.to_string();
    for cell in &row.cells {
        let _ = write!(out, " {}={:?}", cell.location.column, cell.value);
    }
    out
}

fn tag_list(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let names: Vec<_> = tags.iter().map(|tag| tag.name.as_str()).collect();
    format!(" [{}]", names.join(" "))
}

fn description_line(out: &mut String, depth: usize, description: &str) {
    if !description.is_empty() {
        line(out, depth, format!("Description {description:?}"));
    }
}

fn line(out: &mut String, depth: usize, text: String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&text);
    out.push('\n');
}
