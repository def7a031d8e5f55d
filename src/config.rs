//! Per-scan configuration and rule resolution.
//!
//! A `ScanConfig` is supplied by the caller for each scan (typically loaded
//! from persisted settings by a configuration-store collaborator). Resolution
//! merges it with the registry: gate built-in rules by enabled categories,
//! then synthesize keyword rules for custom keywords and organization terms.
//! Validation is exhaustive before any rule list is produced, so a caller
//! never scans with a partially-resolved rule set.

use crate::category::{CategoryTag, RuleGroup};
use crate::error::ConfigError;
use crate::registry::RuleRegistry;
use crate::rule::Rule;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Caller-supplied scan configuration. Immutable for the duration of one
/// scan; concurrent scans with different configs never interfere because
/// each resolves to its own rule list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Categories to detect. `None` enables every category the registry
    /// knows. A category absent from the set is removed entirely, built-in
    /// and synthesized rules alike.
    pub enabled_categories: Option<BTreeSet<CategoryTag>>,

    /// Extra terms to flag, matched case-insensitively and reported under
    /// the reserved custom-keyword category.
    pub custom_keywords: Vec<String>,

    /// Organization-specific terms (division names, house phrasing),
    /// reported under the given category. The category must be known to the
    /// registry.
    pub organization_terms: BTreeMap<CategoryTag, Vec<String>>,

    /// Upper bound on scanned input, in bytes. Longer input is truncated at
    /// a character boundary before matching. `None` scans everything the
    /// caller hands over.
    pub max_input_bytes: Option<usize>,
}

impl ScanConfig {
    /// Whether a category survives this config's gating.
    pub fn is_enabled(&self, category: CategoryTag) -> bool {
        match &self.enabled_categories {
            Some(enabled) => enabled.contains(&category),
            None => true,
        }
    }
}

/// Rule id for the synthesized custom-keyword rule.
const CUSTOM_KEYWORDS_RULE_ID: &str = "custom_keywords";

/// Resolve a configuration against a registry into the active rule list for
/// one scan.
///
/// The returned rules are clones (pattern internals are shared), so the
/// caller may cache the list per config instance and reuse it across scans.
pub fn resolve(registry: &RuleRegistry, config: &ScanConfig) -> Result<Vec<Rule>, ConfigError> {
    validate(registry, config)?;

    let mut active: Vec<Rule> = registry
        .rules()
        .iter()
        .filter(|rule| rule.enabled_by_default() && config.is_enabled(rule.category()))
        .cloned()
        .collect();

    if !config.custom_keywords.is_empty() && config.is_enabled(CategoryTag::CustomKeyword) {
        active.push(Rule::keywords(
            CUSTOM_KEYWORDS_RULE_ID,
            RuleGroup::Custom,
            CategoryTag::CustomKeyword,
            config.custom_keywords.iter().map(|k| k.trim()),
            true,
        ));
    }

    for (&category, terms) in &config.organization_terms {
        if terms.is_empty() || !config.is_enabled(category) {
            continue;
        }
        active.push(Rule::keywords(
            format!("org_terms_{category}"),
            RuleGroup::Custom,
            category,
            terms.iter().map(|t| t.trim()),
            true,
        ));
    }

    tracing::debug!(
        active = active.len(),
        custom_keywords = config.custom_keywords.len(),
        "scan configuration resolved"
    );
    Ok(active)
}

fn validate(registry: &RuleRegistry, config: &ScanConfig) -> Result<(), ConfigError> {
    for (index, keyword) in config.custom_keywords.iter().enumerate() {
        if keyword.trim().is_empty() {
            return Err(ConfigError::BlankCustomKeyword { index });
        }
    }

    for (&category, terms) in &config.organization_terms {
        if category == CategoryTag::CustomKeyword {
            return Err(ConfigError::ReservedCategory { category });
        }
        if !registry.contains_category(category) {
            return Err(ConfigError::UnknownCategory { category });
        }
        if terms.iter().any(|term| term.trim().is_empty()) {
            return Err(ConfigError::BlankOrganizationTerm { category });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RuleRegistry {
        RuleRegistry::builtin()
    }

    #[test]
    fn test_default_config_enables_everything() {
        let config = ScanConfig::default();
        let active = resolve(&registry(), &config).unwrap();
        assert_eq!(active.len(), registry().rules().len());
    }

    #[test]
    fn test_category_gating_removes_rules() {
        let config = ScanConfig {
            enabled_categories: Some(BTreeSet::from([CategoryTag::PaymentCard])),
            ..ScanConfig::default()
        };
        let active = resolve(&registry(), &config).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].category(), CategoryTag::PaymentCard);
    }

    #[test]
    fn test_empty_enabled_set_disables_everything() {
        let config = ScanConfig {
            enabled_categories: Some(BTreeSet::new()),
            custom_keywords: vec!["secret sauce".into()],
            ..ScanConfig::default()
        };
        let active = resolve(&registry(), &config).unwrap();
        assert!(active.is_empty());
    }

    #[test]
    fn test_custom_keywords_synthesize_one_rule() {
        let config = ScanConfig {
            custom_keywords: vec!["Project Kraken".into(), "blue harvest".into()],
            ..ScanConfig::default()
        };
        let active = resolve(&registry(), &config).unwrap();
        let custom: Vec<_> = active
            .iter()
            .filter(|r| r.category() == CategoryTag::CustomKeyword)
            .collect();
        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].id(), "custom_keywords");
        assert!(custom[0].is_match("the BLUE HARVEST files"));
    }

    #[test]
    fn test_blank_custom_keyword_rejected() {
        let config = ScanConfig {
            custom_keywords: vec!["ok".into(), "   ".into()],
            ..ScanConfig::default()
        };
        let err = resolve(&registry(), &config).unwrap_err();
        assert!(matches!(err, ConfigError::BlankCustomKeyword { index: 1 }));
    }

    #[test]
    fn test_organization_terms_synthesize_rules() {
        let config = ScanConfig {
            organization_terms: BTreeMap::from([(
                CategoryTag::ConfidentialMarker,
                vec!["eyes only west wing".to_string()],
            )]),
            ..ScanConfig::default()
        };
        let active = resolve(&registry(), &config).unwrap();
        let synthesized = active
            .iter()
            .find(|r| r.id() == "org_terms_confidential_marker")
            .expect("synthesized rule present");
        assert_eq!(synthesized.category(), CategoryTag::ConfidentialMarker);
        assert!(synthesized.is_match("Eyes Only West Wing briefing"));
    }

    #[test]
    fn test_organization_terms_unknown_category_rejected() {
        // A registry that only knows one category
        let narrow = RuleRegistry::with_rules(vec![Rule::keywords(
            "only_hr",
            RuleGroup::Organization,
            CategoryTag::OrgHr,
            ["headcount"],
            true,
        )])
        .unwrap();
        let config = ScanConfig {
            organization_terms: BTreeMap::from([(
                CategoryTag::OrgFinancial,
                vec!["budget".to_string()],
            )]),
            ..ScanConfig::default()
        };
        let err = resolve(&narrow, &config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownCategory {
                category: CategoryTag::OrgFinancial
            }
        ));
    }

    #[test]
    fn test_organization_terms_reserved_category_rejected() {
        let config = ScanConfig {
            organization_terms: BTreeMap::from([(
                CategoryTag::CustomKeyword,
                vec!["anything".to_string()],
            )]),
            ..ScanConfig::default()
        };
        let err = resolve(&registry(), &config).unwrap_err();
        assert!(matches!(err, ConfigError::ReservedCategory { .. }));
    }

    #[test]
    fn test_blank_organization_term_rejected() {
        let config = ScanConfig {
            organization_terms: BTreeMap::from([(
                CategoryTag::OrgHr,
                vec!["fine".to_string(), String::new()],
            )]),
            ..ScanConfig::default()
        };
        let err = resolve(&registry(), &config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BlankOrganizationTerm {
                category: CategoryTag::OrgHr
            }
        ));
    }

    #[test]
    fn test_gated_custom_keywords_still_validated() {
        // Validation happens before gating: a blank keyword fails even when
        // the custom-keyword category is disabled.
        let config = ScanConfig {
            enabled_categories: Some(BTreeSet::new()),
            custom_keywords: vec![String::new()],
            ..ScanConfig::default()
        };
        assert!(resolve(&registry(), &config).is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ScanConfig = serde_json::from_str("{}").unwrap();
        assert!(config.enabled_categories.is_none());
        assert!(config.custom_keywords.is_empty());

        let config: ScanConfig = serde_json::from_str(
            r#"{
                "enabled_categories": ["payment_card", "jwt_token"],
                "custom_keywords": ["blue harvest"],
                "organization_terms": {"org_hr": ["badge number"]},
                "max_input_bytes": 65536
            }"#,
        )
        .unwrap();
        assert!(config.is_enabled(CategoryTag::PaymentCard));
        assert!(!config.is_enabled(CategoryTag::PanCard));
        assert_eq!(config.max_input_bytes, Some(65536));
    }
}
