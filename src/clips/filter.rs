use crate::clips::{
    record::ClipRecord,
    rules::{Field, RuleSet},
};

/// Classification of a single record.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    /// Name of the destination records with this verdict are routed to.
    pub fn destination(&self) -> &'static str {
        match self {
            Verdict::Valid => "valid",
            Verdict::Invalid => "invalid",
        }
    }
}

/// Fields whose rule rejected `record`, in rule order.
/// Every rule is evaluated; none of them touch the record.
pub fn failed_fields(record: &ClipRecord, rules: &RuleSet) -> Vec<Field> {
    rules
        .iter()
        .filter(|(field, rule)| !rule.check(field.extract(record)))
        .map(|(field, _)| *field)
        .collect()
}

/// Valid iff every rule in `rules` passes.
pub fn evaluate(record: &ClipRecord, rules: &RuleSet) -> Verdict {
    if rules
        .iter()
        .all(|(field, rule)| rule.check(field.extract(record)))
    {
        Verdict::Valid
    } else {
        Verdict::Invalid
    }
}
