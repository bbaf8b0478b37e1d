//! The typed Gherkin syntax tree.
//!
//! Nodes are created once, when their rule ends, and never change afterwards.

#![allow(missing_docs)]

use gherkin_syntax::Location;
use smol_str::SmolStr;

/// Nodes that know where they start in the source.
pub trait HasLocation {
    /// The node's source location.
    fn location(&self) -> Location;
}

macro_rules! impl_has_location {
    ($($node:ty),* $(,)?) => {
        $(
            impl HasLocation for $node {
                fn location(&self) -> Location {
                    self.location
                }
            }
        )*
    };
}

impl_has_location!(
    Comment,
    Tag,
    Feature,
    Background,
    Scenario,
    ScenarioOutline,
    Examples,
    Step,
    DocString,
    TableRow,
    TableCell,
);

/// A parsed feature file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GherkinDocument {
    /// The feature, absent for empty files or files without a usable header.
    pub feature: Option<Feature>,
    /// Every comment line, in source order.
    pub comments: Vec<Comment>,
}

/// A `#` comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub location: Location,
    /// The full line text.
    pub text: SmolStr,
}

/// An `@tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub location: Location,
    pub name: SmolStr,
}

/// A `Feature:` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub tags: Vec<Tag>,
    pub location: Location,
    /// Language code of the dialect the header was matched with.
    pub language: SmolStr,
    pub keyword: SmolStr,
    pub name: SmolStr,
    pub description: String,
    /// The background, if any, followed by scenarios and outlines in source order.
    pub children: Vec<ScenarioDefinition>,
}

impl Feature {
    /// The feature's background.
    #[must_use]
    pub fn background(&self) -> Option<&Background> {
        self.children.iter().find_map(|child| match child {
            ScenarioDefinition::Background(background) => Some(background),
            _ => None,
        })
    }

    /// Scenarios and outlines, without the background.
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioDefinition> {
        self.children
            .iter()
            .filter(|child| !matches!(child, ScenarioDefinition::Background(_)))
    }
}

/// One block of steps in a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioDefinition {
    Background(Background),
    Scenario(Scenario),
    ScenarioOutline(ScenarioOutline),
}

impl ScenarioDefinition {
    #[must_use]
    pub fn keyword(&self) -> &SmolStr {
        match self {
            Self::Background(it) => &it.keyword,
            Self::Scenario(it) => &it.keyword,
            Self::ScenarioOutline(it) => &it.keyword,
        }
    }

    #[must_use]
    pub fn name(&self) -> &SmolStr {
        match self {
            Self::Background(it) => &it.name,
            Self::Scenario(it) => &it.name,
            Self::ScenarioOutline(it) => &it.name,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Background(it) => &it.description,
            Self::Scenario(it) => &it.description,
            Self::ScenarioOutline(it) => &it.description,
        }
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        match self {
            Self::Background(it) => &it.steps,
            Self::Scenario(it) => &it.steps,
            Self::ScenarioOutline(it) => &it.steps,
        }
    }
}

impl HasLocation for ScenarioDefinition {
    fn location(&self) -> Location {
        match self {
            Self::Background(it) => it.location,
            Self::Scenario(it) => it.location,
            Self::ScenarioOutline(it) => it.location,
        }
    }
}

/// Steps run before every scenario of a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub location: Location,
    pub keyword: SmolStr,
    pub name: SmolStr,
    pub description: String,
    pub steps: Vec<Step>,
}

/// A `Scenario:` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub tags: Vec<Tag>,
    pub location: Location,
    pub keyword: SmolStr,
    pub name: SmolStr,
    pub description: String,
    pub steps: Vec<Step>,
}

/// A `Scenario Outline:` block, run once per examples row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutline {
    pub tags: Vec<Tag>,
    pub location: Location,
    pub keyword: SmolStr,
    pub name: SmolStr,
    pub description: String,
    pub steps: Vec<Step>,
    pub examples: Vec<Examples>,
}

/// An `Examples:` block of a scenario outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Examples {
    pub tags: Vec<Tag>,
    pub location: Location,
    pub keyword: SmolStr,
    pub name: SmolStr,
    pub description: String,
    /// First row of the table.
    pub table_header: Option<TableRow>,
    /// Remaining rows; `None` when there is no table or it is empty.
    pub table_body: Option<Vec<TableRow>>,
}

/// A `Given`/`When`/`Then`/... step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub location: Location,
    pub keyword: SmolStr,
    pub text: SmolStr,
    pub argument: Option<StepArgument>,
}

/// Block attached to a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepArgument {
    DataTable(DataTable),
    DocString(DocString),
}

/// A table of rows with the same number of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    pub rows: Vec<TableRow>,
}

impl HasLocation for DataTable {
    /// Location of the first row. Tables always have at least one row in
    /// well-formed input; an empty table reports the default location.
    fn location(&self) -> Location {
        match self.rows.first() {
            Some(row) => row.location,
            None => Location::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub location: Location,
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub location: Location,
    pub value: SmolStr,
}

/// A fenced multi-line string attached to a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocString {
    /// Location of the opening fence.
    pub location: Location,
    /// Text after the opening fence, e.g. `json`.
    pub content_type: Option<SmolStr>,
    /// Body lines joined with `\n`.
    pub content: String,
}
