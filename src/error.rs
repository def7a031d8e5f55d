//! Engine error types.
//!
//! Only two things can fail: building a registry from a custom rule table,
//! and resolving a caller-supplied configuration. Absent matches, failed
//! checksums, and empty or oversized input are normal negative results and
//! never surface here.

use crate::category::CategoryTag;
use thiserror::Error;

/// Error building a rule registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A rule pattern failed to compile
    #[error("rule `{rule}` has an invalid pattern: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// Two rules share an id
    #[error("duplicate rule id `{0}`")]
    DuplicateRuleId(String),
}

/// Error resolving a scan configuration. Raised before any scan runs, so a
/// caller never observes a partially-resolved rule set.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A custom keyword entry is empty or whitespace-only
    #[error("custom keyword at index {index} is blank")]
    BlankCustomKeyword { index: usize },

    /// An organization term entry is empty or whitespace-only
    #[error("organization term for category `{category}` is blank")]
    BlankOrganizationTerm { category: CategoryTag },

    /// Organization terms reference a category the registry does not know
    #[error("organization terms reference category `{category}` not present in the registry")]
    UnknownCategory { category: CategoryTag },

    /// Organization terms target the reserved custom-keyword category
    #[error("category `{category}` is reserved for synthesized custom-keyword rules")]
    ReservedCategory { category: CategoryTag },
}
