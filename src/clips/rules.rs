use crate::clips::{error::ClipError, record::ClipRecord};
use regex::Regex;

pub const MIN_PLAYS: u64 = 201;
pub const MIN_LIKES: u64 = 11;
/// Up to 29 characters, none of them a line break.
pub const TITLE_PATTERN: &str = r"^.{0,29}$";
/// Matches anywhere in the privacy label.
pub const PRIVACY_PATTERN: &str = "anybody";

/// A record column that a rule can look at.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Field {
    Title,
    Privacy,
    TotalPlays,
    TotalLikes,
}

/// Column value handed to a rule.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Count(u64),
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Privacy => "privacy",
            Field::TotalPlays => "total_plays",
            Field::TotalLikes => "total_likes",
        }
    }

    pub fn extract<'a>(&self, record: &'a ClipRecord) -> FieldValue<'a> {
        match self {
            Field::Title => FieldValue::Text(&record.title),
            Field::Privacy => FieldValue::Text(&record.privacy),
            Field::TotalPlays => FieldValue::Count(record.total_plays),
            Field::TotalLikes => FieldValue::Count(record.total_likes),
        }
    }
}

/// Predicate over a single column.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Passes iff the count is >= `min`.
    AtLeast { min: u64 },
    /// Passes iff the text matches the pattern. Anchoring lives in the pattern.
    Matches(Regex),
}

impl Rule {
    /// A value of the wrong shape for the rule never passes.
    pub fn check(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Rule::AtLeast { min }, FieldValue::Count(count)) => count >= *min,
            (Rule::Matches(pattern), FieldValue::Text(text)) => pattern.is_match(text),
            _ => false,
        }
    }
}

/// Ordered field -> rule pairs. Every rule has to pass for a record to be valid.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<(Field, Rule)>,
}

impl RuleSet {
    pub fn new(rules: Vec<(Field, Rule)>) -> Self {
        RuleSet { rules }
    }

    /// The fixed rules applied to clip exports.
    pub fn clip_defaults() -> Result<Self, ClipError> {
        Ok(RuleSet::new(vec![
            (Field::TotalPlays, Rule::AtLeast { min: MIN_PLAYS }),
            (Field::TotalLikes, Rule::AtLeast { min: MIN_LIKES }),
            (Field::Title, Rule::Matches(Regex::new(TITLE_PATTERN)?)),
            (Field::Privacy, Rule::Matches(Regex::new(PRIVACY_PATTERN)?)),
        ]))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, Rule)> {
        self.rules.iter()
    }
}
