//! Token and rule kinds of the Gherkin grammar.
//!
//! Both enums carry the grammar's own spelling of each kind (`name()`), which
//! is what diagnostics print.

use std::fmt;

macro_rules! define_kinds {
    (
        $(#[$meta:meta])*
        $kind:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $name:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum $kind {
            $($(#[$variant_meta])* $variant,)*
        }

        impl $kind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [$kind] = &[$($kind::$variant,)*];

            /// Returns the grammar's name for this kind.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $($kind::$variant => $name,)*
                }
            }
        }

        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

define_kinds! {
    /// Lexical category of a matched line.
    TokenKind {
        /// Placeholder for an unmatched token.
        None => "None",
        /// End of input.
        Eof => "EOF",
        /// A blank line.
        Empty => "Empty",
        /// A `#` comment line.
        Comment => "Comment",
        /// A line of `@tags`.
        TagLine => "TagLine",
        /// `Feature:` header line.
        FeatureLine => "FeatureLine",
        /// `Background:` line.
        BackgroundLine => "BackgroundLine",
        /// `Scenario:` line.
        ScenarioLine => "ScenarioLine",
        /// `Scenario Outline:` line.
        ScenarioOutlineLine => "ScenarioOutlineLine",
        /// `Examples:` line.
        ExamplesLine => "ExamplesLine",
        /// A step line such as `Given ...`.
        StepLine => "StepLine",
        /// Opening or closing doc string fence.
        DocStringSeparator => "DocStringSeparator",
        /// A `| cell | cell |` row.
        TableRow => "TableRow",
        /// `# language:` directive.
        Language => "Language",
        /// Any other line: description text or doc string content.
        Other => "Other",
    }
}

define_kinds! {
    /// A grammar rule bracketing a span of events.
    RuleKind {
        /// Sentinel rule of the builder's root frame.
        None => "None",
        /// The whole document.
        GherkinDocument => "GherkinDocument",
        /// A feature with its header and children.
        Feature => "Feature",
        /// Tags, feature line and description of a feature.
        FeatureHeader => "Feature_Header",
        /// A background block.
        Background => "Background",
        /// Tags plus either a scenario or a scenario outline.
        ScenarioDefinition => "Scenario_Definition",
        /// A plain scenario.
        Scenario => "Scenario",
        /// A scenario outline.
        ScenarioOutline => "ScenarioOutline",
        /// Tags plus an examples block.
        ExamplesDefinition => "Examples_Definition",
        /// An examples block.
        Examples => "Examples",
        /// The table of an examples block.
        ExamplesTable => "Examples_Table",
        /// A step with an optional argument.
        Step => "Step",
        /// The argument of a step.
        StepArg => "Step_Arg",
        /// A data table attached to a step.
        DataTable => "DataTable",
        /// A doc string attached to a step.
        DocString => "DocString",
        /// One or more tag lines.
        Tags => "Tags",
        /// Comments and description lines under a header.
        DescriptionHelper => "Description_Helper",
        /// Free-form description text.
        Description => "Description",
    }
}

impl TokenKind {
    /// Returns `true` for tokens that are document metadata rather than tree content.
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::Comment)
    }
}
