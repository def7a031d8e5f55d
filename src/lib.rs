//! Rule-based sensitive-data classification.
//!
//! `leakscan` inspects arbitrary text (form input, file content, clipboard
//! snippets) and reports which categories of sensitive information it
//! contains, with a derived risk tier:
//!
//! - [`checksum`] — Luhn and Verhoeff check-digit validators
//! - [`category`] — category tags, risk tiers, rule groups
//! - [`rule`] — declarative detection rules and their matchers
//! - [`registry`] — the compiled-in rule catalog
//! - [`config`] — per-scan configuration and rule resolution
//! - [`scanner`] — the detection pipeline and scan facade
//!
//! The engine consumes a text and a [`ScanConfig`] and produces a
//! [`ScanResult`]; it never touches storage, network, or UI. Ingestion
//! (extracting and bounding text), reporting, and presentation belong to
//! calling code.
//!
//! ```
//! use leakscan::{CategoryTag, RiskTier, ScanConfig, Scanner};
//!
//! let scanner = Scanner::builtin();
//! let result = scanner
//!     .scan("My card is 4111111111111111", &ScanConfig::default())
//!     .unwrap();
//! assert!(result.contains(CategoryTag::PaymentCard));
//! assert_eq!(result.tier, RiskTier::High);
//! ```

pub mod category;
pub mod checksum;
pub mod config;
pub mod error;
pub mod registry;
pub mod rule;
pub mod scanner;

// Flat re-exports for convenience
pub use category::{CategoryTag, RiskTier, RuleGroup};
pub use checksum::{luhn_valid, verhoeff_valid, Checksum};
pub use config::{resolve, ScanConfig};
pub use error::{ConfigError, RegistryError};
pub use registry::RuleRegistry;
pub use rule::{Matcher, Rule};
pub use scanner::{classify, scan_rules, ScanResult, Scanner};
