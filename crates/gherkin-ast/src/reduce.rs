//! Rule reductions.
//!
//! When a rule ends, its accumulator is reduced to the value its parent
//! collects. Each rule kind has its own policy; rules without one pass their
//! accumulator through so an enclosing rule can pick it apart.

use std::mem;

use gherkin_syntax::{Dialect, Location, RuleKind, Token, TokenKind};
use smol_str::SmolStr;
use tracing::debug;

use crate::ast::{
    Background, Comment, DataTable, DocString, Examples, Feature, GherkinDocument, Scenario,
    ScenarioDefinition, ScenarioOutline, Step, StepArgument, TableCell, TableRow, Tag,
};
use crate::error::{BuildError, ContractViolation, ValidationError, INCONSISTENT_CELL_COUNT};
use crate::node::{AstNode, Reduced};

/// The line, description and steps shared by scenarios, outlines and backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScenarioParts {
    location: Location,
    keyword: SmolStr,
    name: SmolStr,
    description: String,
    steps: Vec<Step>,
}

/// What a `Scenario_Definition` wraps, decided by the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScenarioShape {
    Scenario(ScenarioParts),
    Outline(ScenarioParts, Vec<Examples>),
}

/// Reduces the accumulator of a rule that just ended.
///
/// `comments` is the document-wide comment list; the document rule takes it.
pub(crate) fn reduce(
    mut node: AstNode,
    comments: &mut Vec<Comment>,
) -> Result<Reduced, BuildError> {
    let reduced = match node.rule() {
        RuleKind::Step => Reduced::Step(step(&mut node)?),
        RuleKind::DocString => Reduced::DocString(doc_string(&mut node)?),
        RuleKind::DataTable => Reduced::DataTable(DataTable {
            rows: table_rows(&mut node)?,
        }),
        RuleKind::Background => Reduced::Background(background(&mut node)?),
        RuleKind::Scenario => {
            let parts = scenario_parts(&mut node, TokenKind::ScenarioLine)?;
            Reduced::Shape(ScenarioShape::Scenario(parts))
        }
        RuleKind::ScenarioOutline => {
            let parts = scenario_parts(&mut node, TokenKind::ScenarioOutlineLine)?;
            let examples = node.take_children(RuleKind::ExamplesDefinition)?;
            Reduced::Shape(ScenarioShape::Outline(parts, examples))
        }
        RuleKind::ScenarioDefinition => Reduced::Definition(scenario_definition(&mut node)?),
        RuleKind::ExamplesDefinition => Reduced::Examples(examples_definition(&mut node)?),
        RuleKind::ExamplesTable => Reduced::Rows(table_rows(&mut node)?),
        RuleKind::Description => Reduced::Description(description(&mut node)),
        RuleKind::Feature => Reduced::Feature(feature(&mut node)?),
        RuleKind::GherkinDocument => {
            let feature: Option<Option<Feature>> = node.take_child(RuleKind::Feature)?;
            Reduced::Document(GherkinDocument {
                feature: feature.flatten(),
                comments: mem::take(comments),
            })
        }
        RuleKind::None
        | RuleKind::FeatureHeader
        | RuleKind::Examples
        | RuleKind::StepArg
        | RuleKind::Tags
        | RuleKind::DescriptionHelper => Reduced::Node(node),
    };
    Ok(reduced)
}

fn step(node: &mut AstNode) -> Result<Step, ContractViolation> {
    node.reject_child(RuleKind::StepArg)?;
    let line = node.require_token(TokenKind::StepLine)?;
    let table: Option<DataTable> = node.take_child(RuleKind::DataTable)?;
    let doc_string: Option<DocString> = node.take_child(RuleKind::DocString)?;
    let argument = table
        .map(StepArgument::DataTable)
        .or_else(|| doc_string.map(StepArgument::DocString));

    Ok(Step {
        location: line.location,
        keyword: line.keyword_or_empty(),
        text: line.text,
        argument,
    })
}

fn doc_string(node: &mut AstNode) -> Result<DocString, ContractViolation> {
    let separator = node.require_token(TokenKind::DocStringSeparator)?;
    let content_type = (!separator.text.is_empty()).then_some(separator.text);
    Ok(DocString {
        location: separator.location,
        content_type,
        content: join_lines(node.take_tokens(TokenKind::Other)),
    })
}

fn background(node: &mut AstNode) -> Result<Background, ContractViolation> {
    let ScenarioParts {
        location,
        keyword,
        name,
        description,
        steps,
    } = scenario_parts(node, TokenKind::BackgroundLine)?;
    Ok(Background {
        location,
        keyword,
        name,
        description,
        steps,
    })
}

fn scenario_parts(
    node: &mut AstNode,
    line_kind: TokenKind,
) -> Result<ScenarioParts, ContractViolation> {
    let line = node.require_token(line_kind)?;
    Ok(ScenarioParts {
        location: line.location,
        keyword: line.keyword_or_empty(),
        name: line.text,
        description: description_of(node)?,
        steps: node.take_children(RuleKind::Step)?,
    })
}

fn scenario_definition(node: &mut AstNode) -> Result<ScenarioDefinition, ContractViolation> {
    let tags = tags(node)?;
    let scenario: Option<ScenarioShape> = node.take_child(RuleKind::Scenario)?;
    let outline: Option<ScenarioShape> = node.take_child(RuleKind::ScenarioOutline)?;
    let Some(shape) = scenario.or(outline) else {
        return Err(ContractViolation::MissingChild {
            rule: RuleKind::ScenarioDefinition,
            child: RuleKind::Scenario,
        });
    };

    Ok(match shape {
        ScenarioShape::Scenario(parts) => ScenarioDefinition::Scenario(Scenario {
            tags,
            location: parts.location,
            keyword: parts.keyword,
            name: parts.name,
            description: parts.description,
            steps: parts.steps,
        }),
        ScenarioShape::Outline(parts, examples) => {
            ScenarioDefinition::ScenarioOutline(ScenarioOutline {
                tags,
                location: parts.location,
                keyword: parts.keyword,
                name: parts.name,
                description: parts.description,
                steps: parts.steps,
                examples,
            })
        }
    })
}

fn examples_definition(node: &mut AstNode) -> Result<Examples, ContractViolation> {
    let tags = tags(node)?;
    let mut examples = node.require_child::<AstNode>(RuleKind::Examples)?;
    let line = examples.require_token(TokenKind::ExamplesLine)?;
    let description = description_of(&mut examples)?;

    let rows: Option<Vec<TableRow>> = examples.take_child(RuleKind::ExamplesTable)?;
    let mut rows = rows.unwrap_or_default().into_iter();
    let table_header = rows.next();
    let table_body = table_header.as_ref().map(|_| rows.collect());

    Ok(Examples {
        tags,
        location: line.location,
        keyword: line.keyword_or_empty(),
        name: line.text,
        description,
        table_header,
        table_body,
    })
}

fn description(node: &mut AstNode) -> String {
    let mut lines = node.take_tokens(TokenKind::Other);
    while lines.last().is_some_and(|line| is_blank(&line.text)) {
        lines.pop();
    }
    join_lines(lines)
}

/// Only ASCII whitespace, vertical tab included, makes a line blank; a no-break space is content.
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}

fn feature(node: &mut AstNode) -> Result<Option<Feature>, ContractViolation> {
    let mut children = Vec::new();
    if let Some(background) = node.take_child(RuleKind::Background)? {
        children.push(ScenarioDefinition::Background(background));
    }
    let scenarios = node.take_children::<ScenarioDefinition>(RuleKind::ScenarioDefinition)?;
    children.extend(scenarios);

    // Without a header rule, the header line, tags and description sit on the
    // feature rule itself.
    let mut header_rule = node.take_child::<AstNode>(RuleKind::FeatureHeader)?;
    let header = header_rule.as_mut().unwrap_or(node);

    let Some(line) = header.take_token(TokenKind::FeatureLine) else {
        debug!("feature has no feature line; document has no feature");
        return Ok(None);
    };
    // Same outcome as a missing feature line, but a different cause.
    let Some(language) = line.dialect.as_ref().map(Dialect::language).cloned() else {
        debug!(
            "feature line at {} has no resolved dialect; document has no feature",
            line.location
        );
        return Ok(None);
    };

    Ok(Some(Feature {
        tags: tags(header)?,
        location: line.location,
        language,
        keyword: line.keyword_or_empty(),
        name: line.text,
        description: description_of(header)?,
        children,
    }))
}

/// Reduced description of `node`, or an empty string.
fn description_of(node: &mut AstNode) -> Result<String, ContractViolation> {
    node.reject_child(RuleKind::DescriptionHelper)?;
    let description: Option<String> = node.take_child(RuleKind::Description)?;
    Ok(description.unwrap_or_default())
}

/// Tags of every tag line under `node`, left to right, then top to bottom.
fn tags(node: &mut AstNode) -> Result<Vec<Tag>, ContractViolation> {
    let Some(mut tags_node) = node.take_child::<AstNode>(RuleKind::Tags)? else {
        return Ok(Vec::new());
    };

    let mut tags = Vec::new();
    for mut token in tags_node.take_tokens(TokenKind::TagLine) {
        for span in mem::take(&mut token.items) {
            tags.push(Tag {
                location: token.location_at(span.column),
                name: span.text,
            });
        }
    }
    Ok(tags)
}

/// One row per table row token, all with the same number of cells.
fn table_rows(node: &mut AstNode) -> Result<Vec<TableRow>, ValidationError> {
    let rows: Vec<TableRow> = node
        .take_tokens(TokenKind::TableRow)
        .into_iter()
        .map(table_row)
        .collect();
    ensure_cell_count(&rows)?;
    Ok(rows)
}

fn table_row(mut token: Token) -> TableRow {
    let cells = mem::take(&mut token.items)
        .into_iter()
        .map(|span| TableCell {
            location: token.location_at(span.column),
            value: span.text,
        })
        .collect();
    TableRow {
        location: token.location,
        cells,
    }
}

fn ensure_cell_count(rows: &[TableRow]) -> Result<(), ValidationError> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    match rows.iter().find(|row| row.len() != first.len()) {
        Some(row) => {
            debug!(
                "table row at {} has {} cells, expected {}",
                row.location,
                row.len(),
                first.len()
            );
            Err(ValidationError::new(INCONSISTENT_CELL_COUNT, row.location))
        }
        None => Ok(()),
    }
}

fn join_lines(lines: Vec<Token>) -> String {
    let texts: Vec<SmolStr> = lines.into_iter().map(|line| line.text).collect();
    texts.join("\n")
}
