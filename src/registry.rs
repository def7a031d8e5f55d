//! The read-only catalog of detection rules.
//!
//! The built-in table below unifies what used to be several drifting
//! per-deployment rule lists into one declarative catalog. Organization
//! brand terms are deliberately absent: they arrive per scan through
//! `ScanConfig::organization_terms`.

use crate::category::{CategoryTag, RuleGroup};
use crate::checksum::Checksum;
use crate::error::RegistryError;
use crate::rule::Rule;
use std::collections::BTreeSet;

/// Declarative form of a built-in rule, compiled at registry construction.
struct RuleDef {
    id: &'static str,
    group: RuleGroup,
    category: CategoryTag,
    matcher: MatcherDef,
}

enum MatcherDef {
    Pattern(&'static str),
    Keywords(&'static [&'static str]),
    Validated(&'static str, Checksum),
}

const BUILTIN_RULES: &[RuleDef] = &[
    // Identity documents
    RuleDef {
        id: "pan_card",
        group: RuleGroup::Identity,
        category: CategoryTag::PanCard,
        matcher: MatcherDef::Pattern(r"\b[A-Z]{5}[0-9]{4}[A-Z]\b"),
    },
    RuleDef {
        id: "aadhaar_number",
        group: RuleGroup::Identity,
        category: CategoryTag::AadhaarNumber,
        matcher: MatcherDef::Validated(r"\b\d{4}[\s-]?\d{4}[\s-]?\d{4}\b", Checksum::Verhoeff),
    },
    // Financial data
    RuleDef {
        id: "payment_card",
        group: RuleGroup::Financial,
        category: CategoryTag::PaymentCard,
        matcher: MatcherDef::Validated(r"\b(?:\d[ -]*?){13,19}\b", Checksum::Luhn),
    },
    RuleDef {
        id: "ifsc_code",
        group: RuleGroup::Financial,
        category: CategoryTag::IfscCode,
        matcher: MatcherDef::Pattern(r"\b[A-Z]{4}0[A-Z0-9]{6}\b"),
    },
    RuleDef {
        id: "bank_account",
        group: RuleGroup::Financial,
        category: CategoryTag::BankAccount,
        matcher: MatcherDef::Pattern(r"\b\d{9,18}\b"),
    },
    // Secrets and credentials
    RuleDef {
        id: "openai_api_key",
        group: RuleGroup::Secrets,
        category: CategoryTag::OpenaiApiKey,
        matcher: MatcherDef::Pattern(r"\bsk-[A-Za-z0-9]{48,}\b"),
    },
    RuleDef {
        id: "gemini_api_key",
        group: RuleGroup::Secrets,
        category: CategoryTag::GeminiApiKey,
        matcher: MatcherDef::Pattern(r"\bAIzaSy[A-Za-z0-9_-]{33}\b"),
    },
    RuleDef {
        id: "deepseek_api_key",
        group: RuleGroup::Secrets,
        category: CategoryTag::DeepseekApiKey,
        matcher: MatcherDef::Pattern(r"\bds-[A-Za-z0-9]{32,}\b"),
    },
    RuleDef {
        id: "generic_api_key",
        group: RuleGroup::Secrets,
        category: CategoryTag::GenericApiKey,
        matcher: MatcherDef::Pattern(
            r"(?i)\b(?:api[_-]?key|access[_-]?token|secret[_-]?key|bearer[_-]?token)[\s=:]+[A-Za-z0-9+/=_-]{20,}\b",
        ),
    },
    RuleDef {
        id: "jwt_token",
        group: RuleGroup::Secrets,
        category: CategoryTag::JwtToken,
        matcher: MatcherDef::Pattern(
            r"\beyJ[A-Za-z0-9+/=_-]+\.[A-Za-z0-9+/=_-]+\.[A-Za-z0-9+/=_-]+\b",
        ),
    },
    RuleDef {
        id: "password_disclosure",
        group: RuleGroup::Secrets,
        category: CategoryTag::PasswordDisclosure,
        matcher: MatcherDef::Pattern(r"(?i)\b(?:password|passwd|pwd)[\s=:]+\S{6,}"),
    },
    RuleDef {
        id: "database_url",
        group: RuleGroup::Secrets,
        category: CategoryTag::DatabaseCredentials,
        matcher: MatcherDef::Pattern(r"(?i)\b(?:mongodb|mysql|postgresql|redis)://\S+"),
    },
    RuleDef {
        id: "connection_string",
        group: RuleGroup::Secrets,
        category: CategoryTag::DatabaseCredentials,
        matcher: MatcherDef::Pattern(r"(?i)\b(?:server|host|database|user|password)[\s=:]+[^\s;]+"),
    },
    RuleDef {
        id: "aws_access_key",
        group: RuleGroup::Secrets,
        category: CategoryTag::AwsAccessKey,
        matcher: MatcherDef::Pattern(r"\bAKIA[0-9A-Z]{16}\b"),
    },
    RuleDef {
        id: "private_key_block",
        group: RuleGroup::Secrets,
        category: CategoryTag::PrivateKeyBlock,
        matcher: MatcherDef::Pattern(r"-----BEGIN (?:(?:RSA|EC|DSA|OPENSSH) )?PRIVATE KEY-----"),
    },
    // Organization markers
    RuleDef {
        id: "project_code_name",
        group: RuleGroup::Organization,
        category: CategoryTag::OrgProjectCode,
        matcher: MatcherDef::Pattern(r"(?i)\bproject[\s-]?[a-z]{2,}\b"),
    },
    RuleDef {
        id: "project_code_alnum",
        group: RuleGroup::Organization,
        category: CategoryTag::OrgProjectCode,
        matcher: MatcherDef::Pattern(r"\b[A-Z]{2,4}-?\d{2,4}\b"),
    },
    RuleDef {
        id: "project_code_greek",
        group: RuleGroup::Organization,
        category: CategoryTag::OrgProjectCode,
        matcher: MatcherDef::Pattern(r"(?i)\b(?:alpha|beta|gamma|delta|sigma|omega)[\s-]?\d{1,3}\b"),
    },
    RuleDef {
        id: "org_financial_terms",
        group: RuleGroup::Organization,
        category: CategoryTag::OrgFinancial,
        matcher: MatcherDef::Keywords(&[
            "quarterly results",
            "annual report",
            "board meeting",
            "investor presentation",
            "financial performance",
            "sales figures",
            "profit margins",
            "revenue targets",
            "market share",
            "expansion plans",
            "capex",
            "budget allocation",
        ]),
    },
    RuleDef {
        id: "org_research_terms",
        group: RuleGroup::Organization,
        category: CategoryTag::OrgResearch,
        matcher: MatcherDef::Keywords(&[
            "r&d blueprint",
            "manufacturing process",
            "quality control",
            "production capacity",
            "supply chain",
            "vendor details",
            "cost analysis",
            "material sourcing",
            "product design",
            "technical specifications",
            "prototype",
            "patent application",
        ]),
    },
    RuleDef {
        id: "org_hr_terms",
        group: RuleGroup::Organization,
        category: CategoryTag::OrgHr,
        matcher: MatcherDef::Keywords(&[
            "employee id",
            "salary structure",
            "appraisal rating",
            "performance review",
            "organization chart",
            "headcount",
            "recruitment plan",
            "training program",
            "employee database",
            "hr policy",
            "compensation",
            "benefits package",
        ]),
    },
    // Confidentiality markers
    RuleDef {
        id: "confidential_markers",
        group: RuleGroup::Confidentiality,
        category: CategoryTag::ConfidentialMarker,
        matcher: MatcherDef::Keywords(&[
            "confidential",
            "classified",
            "restricted",
            "proprietary",
            "internal only",
            "not for distribution",
            "privileged",
            "trade secret",
            "sensitive",
            "private",
            "internal use only",
            "strictly confidential",
            "top secret",
            "business sensitive",
            "commercially sensitive",
            "for internal use",
            "confidential information",
        ]),
    },
    RuleDef {
        id: "classification_markers",
        group: RuleGroup::Confidentiality,
        category: CategoryTag::ClassifiedDocument,
        matcher: MatcherDef::Keywords(&[
            "confidential document",
            "internal document",
            "restricted access",
            "authorized personnel only",
            "management confidential",
            "board confidential",
            "executive summary",
            "strategic document",
        ]),
    },
];

/// Read-only catalog of detection rules, constructed once and shared by any
/// number of concurrent scans. Nothing here mutates after construction.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// The built-in rule catalog.
    ///
    /// The table is compiled into the binary, so a pattern that fails to
    /// compile is a programming error, not a runtime condition.
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|def| def.compile())
            .collect::<Result<Vec<_>, _>>()
            .expect("built-in rules should always compile");
        tracing::debug!(rules = rules.len(), "built-in rule registry constructed");
        Self { rules }
    }

    /// Build a registry from a caller-supplied rule table.
    ///
    /// Rule ids must be unique; patterns were already validated when each
    /// `Rule` was constructed.
    pub fn with_rules(rules: Vec<Rule>) -> Result<Self, RegistryError> {
        let mut seen = BTreeSet::new();
        for rule in &rules {
            if !seen.insert(rule.id().to_string()) {
                return Err(RegistryError::DuplicateRuleId(rule.id().to_string()));
            }
        }
        Ok(Self { rules })
    }

    /// All rules in the catalog.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules whose category is in the given set. Categories absent from the
    /// catalog are simply absent from the result.
    pub fn rules_for(&self, categories: &BTreeSet<CategoryTag>) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| categories.contains(&rule.category()))
            .collect()
    }

    /// Whether the registry carries at least one rule for this category.
    /// The reserved custom-keyword category is always known.
    pub fn contains_category(&self, category: CategoryTag) -> bool {
        category == CategoryTag::CustomKeyword
            || self.rules.iter().any(|rule| rule.category() == category)
    }

    /// The set of categories the catalog can report, excluding the reserved
    /// custom-keyword category.
    pub fn categories(&self) -> BTreeSet<CategoryTag> {
        self.rules.iter().map(|rule| rule.category()).collect()
    }
}

impl RuleDef {
    fn compile(&self) -> Result<Rule, RegistryError> {
        let rule = match self.matcher {
            MatcherDef::Pattern(pattern) => {
                Rule::pattern(self.id, self.group, self.category, pattern)?
            }
            MatcherDef::Keywords(terms) => {
                Rule::keywords(self.id, self.group, self.category, terms.iter().copied(), true)
            }
            MatcherDef::Validated(pattern, checksum) => {
                Rule::validated(self.id, self.group, self.category, pattern, checksum)?
            }
        };
        Ok(rule)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
