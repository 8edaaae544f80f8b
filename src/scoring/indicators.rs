//! Static indicator sets and keyword tables for the five dimensions.
//!
//! These are fixed configuration: constructed once as consts, never
//! mutated. All matching against them is case-insensitive substring
//! containment (not tokenized word matching).

use crate::textutil::count_present_ci;
use regex::Regex;
use std::sync::OnceLock;

/// Named positive/negative phrase lists for one dimension.
pub struct IndicatorSet {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

impl IndicatorSet {
    /// Distinct positive phrases present in `text`.
    pub fn positive_hits(&self, text: &str) -> usize {
        count_present_ci(text, self.positive)
    }

    /// Distinct negative phrases present in `text`.
    pub fn negative_hits(&self, text: &str) -> usize {
        count_present_ci(text, self.negative)
    }
}

pub const CLARITY: IndicatorSet = IndicatorSet {
    positive: &[
        "clearly",
        "specifically",
        "exactly",
        "precisely",
        "detailed",
        "explain",
        "describe",
        "analyze",
        "compare",
        "contrast",
        "step-by-step",
        "in detail",
        "thoroughly",
    ],
    negative: &[
        "something",
        "anything",
        "stuff",
        "things",
        "maybe",
        "perhaps",
        "sort of",
        "kind of",
        "whatever",
        "somehow",
        "general",
    ],
};

pub const SPECIFICITY: IndicatorSet = IndicatorSet {
    positive: &[
        "format:",
        "length:",
        "style:",
        "tone:",
        "audience:",
        "purpose:",
        "requirements:",
        "constraints:",
        "examples:",
        "criteria:",
        "must include",
        "should contain",
        "exactly",
        "precisely",
    ],
    negative: &[
        "general", "broad", "overview", "basic", "simple", "easy", "quick", "brief", "short",
    ],
};

pub const STRUCTURE: IndicatorSet = IndicatorSet {
    positive: &[
        "first",
        "second",
        "third",
        "finally",
        "next",
        "then",
        "step 1",
        "step 2",
        "bullet points",
        "numbered list",
        "introduction",
        "conclusion",
        "summary",
    ],
    negative: &[],
};

pub const CONTEXT: IndicatorSet = IndicatorSet {
    positive: &[
        "background:",
        "context:",
        "given that",
        "assuming",
        "in the context of",
        "for the purpose of",
        "target audience",
        "use case",
        "scenario",
        "situation",
    ],
    negative: &[],
};

pub const CREATIVITY: IndicatorSet = IndicatorSet {
    positive: &[
        "creative",
        "innovative",
        "unique",
        "original",
        "imaginative",
        "brainstorm",
        "generate ideas",
        "think outside",
        "alternative",
        "unconventional",
        "novel",
        "fresh perspective",
    ],
    negative: &[
        "standard",
        "typical",
        "usual",
        "conventional",
        "traditional",
        "common",
        "ordinary",
        "basic",
        "simple",
    ],
};

/// Pronouns that make a prompt ambiguous when used bare. Matched as
/// space-padded tokens only, so a pronoun at the very start or end of the
/// text or adjacent to punctuation is deliberately not counted.
pub const AMBIGUOUS_PRONOUNS: &[&str] = &["it", "this", "that", "they", "them"];

/// Output format names that signal a specific deliverable.
pub const FORMAT_KEYWORDS: &[&str] = &[
    "json", "csv", "xml", "markdown", "html", "list", "table", "paragraph",
];

/// Connectives that signal logical flow between sentences.
pub const TRANSITION_WORDS: &[&str] = &[
    "however",
    "therefore",
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
];

/// Phrases that assign the assistant a role or persona.
pub const ROLE_PHRASES: &[&str] = &[
    "you are",
    "act as",
    "pretend to be",
    "imagine you are",
    "role:",
    "persona:",
];

/// Domain names that anchor a prompt in a field.
pub const DOMAIN_KEYWORDS: &[&str] = &[
    "technical",
    "medical",
    "legal",
    "financial",
    "academic",
    "creative",
    "business",
];

/// Words that express constraints or requirements.
pub const CONSTRAINT_KEYWORDS: &[&str] = &[
    "must", "should", "cannot", "avoid", "include", "exclude", "limit", "maximum", "minimum",
];

/// Open-ended question openers that invite exploration.
pub const OPEN_QUESTION_PHRASES: &[&str] =
    &["what if", "how might", "what could", "imagine", "suppose"];

/// Phrases requesting multiple perspectives or solutions.
pub const PERSPECTIVE_PHRASES: &[&str] = &[
    "different ways",
    "various approaches",
    "multiple solutions",
    "alternatives",
];

static RESTRICTIVE: OnceLock<Regex> = OnceLock::new();

/// Word-bounded occurrences of restrictive keywords. More than three of
/// these in one prompt triggers the creativity penalty and the softening
/// rewrite.
pub fn restrictive_keyword_count(text: &str) -> usize {
    RESTRICTIVE
        .get_or_init(|| {
            Regex::new(r"(?i)\b(only|exactly|precisely|must be|required)\b").expect("valid regex")
        })
        .find_iter(text)
        .count()
}
