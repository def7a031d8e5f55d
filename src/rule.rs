//! Detection rules: a matcher paired with a category and risk tier.
//!
//! Rules are immutable after construction. A rule's `id` is unique within a
//! registry and stable for the life of the process; everything else about it
//! is plain data, so adding a category or rule never touches the pipeline.

use crate::category::{CategoryTag, RiskTier, RuleGroup};
use crate::checksum::Checksum;
use crate::error::RegistryError;
use regex::Regex;

/// How a rule decides whether its category fires for a text.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Fires if the pattern matches anywhere in the text.
    Pattern(Regex),
    /// Fires if any term occurs as a substring, case-folded when
    /// `case_insensitive` is set. Terms are stored pre-folded.
    Keywords {
        terms: Vec<String>,
        case_insensitive: bool,
    },
    /// The pattern extracts numeric candidates; fires on the first candidate
    /// that passes the checksum. Later candidates are not validated.
    Validated {
        candidates: Regex,
        checksum: Checksum,
    },
}

impl Matcher {
    /// Evaluate this matcher against a text.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Pattern(regex) => regex.is_match(text),
            Self::Keywords {
                terms,
                case_insensitive,
            } => {
                if *case_insensitive {
                    let folded = text.to_lowercase();
                    terms.iter().any(|term| folded.contains(term.as_str()))
                } else {
                    terms.iter().any(|term| text.contains(term.as_str()))
                }
            }
            Self::Validated {
                candidates,
                checksum,
            } => candidates
                .find_iter(text)
                .any(|m| checksum.validate(m.as_str())),
        }
    }
}

/// One immutable detection rule.
#[derive(Debug, Clone)]
pub struct Rule {
    id: String,
    group: RuleGroup,
    category: CategoryTag,
    matcher: Matcher,
    tier: RiskTier,
    enabled_by_default: bool,
}

impl Rule {
    /// Build a regex-pattern rule.
    pub fn pattern(
        id: impl Into<String>,
        group: RuleGroup,
        category: CategoryTag,
        pattern: &str,
    ) -> Result<Self, RegistryError> {
        let id = id.into();
        let regex = compile(&id, pattern)?;
        Ok(Self::with_matcher(id, group, category, Matcher::Pattern(regex)))
    }

    /// Build a keyword-set rule. Terms are folded at construction when the
    /// rule is case-insensitive, so matching never re-folds them.
    pub fn keywords<I, S>(
        id: impl Into<String>,
        group: RuleGroup,
        category: CategoryTag,
        terms: I,
        case_insensitive: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| {
                if case_insensitive {
                    t.as_ref().to_lowercase()
                } else {
                    t.as_ref().to_string()
                }
            })
            .collect();
        Self::with_matcher(
            id.into(),
            group,
            category,
            Matcher::Keywords {
                terms,
                case_insensitive,
            },
        )
    }

    /// Build a checksum-validated pattern rule.
    pub fn validated(
        id: impl Into<String>,
        group: RuleGroup,
        category: CategoryTag,
        pattern: &str,
        checksum: Checksum,
    ) -> Result<Self, RegistryError> {
        let id = id.into();
        let candidates = compile(&id, pattern)?;
        Ok(Self::with_matcher(
            id,
            group,
            category,
            Matcher::Validated {
                candidates,
                checksum,
            },
        ))
    }

    fn with_matcher(id: String, group: RuleGroup, category: CategoryTag, matcher: Matcher) -> Self {
        Self {
            id,
            group,
            category,
            matcher,
            tier: category.risk_tier(),
            enabled_by_default: true,
        }
    }

    /// Mark this rule as disabled unless a configuration enables it.
    pub fn disabled_by_default(mut self) -> Self {
        self.enabled_by_default = false;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn group(&self) -> RuleGroup {
        self.group
    }

    pub fn category(&self) -> CategoryTag {
        self.category
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The rule's risk tier. Always equal to `category.risk_tier()`.
    pub fn tier(&self) -> RiskTier {
        self.tier
    }

    pub fn enabled_by_default(&self) -> bool {
        self.enabled_by_default
    }

    /// Evaluate this rule's matcher against a text.
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

fn compile(rule: &str, pattern: &str) -> Result<Regex, RegistryError> {
    Regex::new(pattern).map_err(|source| RegistryError::InvalidPattern {
        rule: rule.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule_matches() {
        let rule = Rule::pattern(
            "pan_card",
            RuleGroup::Identity,
            CategoryTag::PanCard,
            r"\b[A-Z]{5}[0-9]{4}[A-Z]\b",
        )
        .unwrap();
        assert!(rule.is_match("PAN: ABCDE1234F"));
        assert!(!rule.is_match("no identifiers here"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = Rule::pattern(
            "broken",
            RuleGroup::Secrets,
            CategoryTag::GenericApiKey,
            r"[unclosed",
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPattern { .. }));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let rule = Rule::keywords(
            "markers",
            RuleGroup::Confidentiality,
            CategoryTag::ConfidentialMarker,
            ["CONFIDENTIAL", "Trade Secret"],
            true,
        );
        assert!(rule.is_match("this memo is confidential"));
        assert!(rule.is_match("TRADE SECRET enclosed"));
        assert!(!rule.is_match("public announcement"));
    }

    #[test]
    fn test_keywords_case_sensitive() {
        let rule = Rule::keywords(
            "markers",
            RuleGroup::Confidentiality,
            CategoryTag::ConfidentialMarker,
            ["CONFIDENTIAL"],
            false,
        );
        assert!(rule.is_match("CONFIDENTIAL"));
        assert!(!rule.is_match("confidential"));
    }

    #[test]
    fn test_validated_rule_requires_passing_candidate() {
        let rule = Rule::validated(
            "payment_card",
            RuleGroup::Financial,
            CategoryTag::PaymentCard,
            r"\b(?:\d[ -]*?){13,19}\b",
            Checksum::Luhn,
        )
        .unwrap();
        assert!(rule.is_match("card 4111111111111111 on file"));
        // Candidate present but checksum fails
        assert!(!rule.is_match("card 4111111111111112 on file"));
        assert!(!rule.is_match("no digits"));
    }

    #[test]
    fn test_validated_rule_any_candidate_suffices() {
        let rule = Rule::validated(
            "payment_card",
            RuleGroup::Financial,
            CategoryTag::PaymentCard,
            r"\b(?:\d[ -]*?){13,19}\b",
            Checksum::Luhn,
        )
        .unwrap();
        // First candidate invalid, second valid
        assert!(rule.is_match("try 4111111111111112 then 4111111111111111"));
    }

    #[test]
    fn test_tier_mirrors_category() {
        let rule = Rule::keywords(
            "hr",
            RuleGroup::Organization,
            CategoryTag::OrgHr,
            ["salary structure"],
            true,
        );
        assert_eq!(rule.tier(), CategoryTag::OrgHr.risk_tier());
    }

    #[test]
    fn test_disabled_by_default() {
        let rule = Rule::keywords(
            "opt_in",
            RuleGroup::Organization,
            CategoryTag::OrgHr,
            ["headcount"],
            true,
        )
        .disabled_by_default();
        assert!(!rule.enabled_by_default());
    }
}
