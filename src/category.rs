//! Categories of sensitive data and their risk tiers.
//!
//! A `CategoryTag` identifies one class of sensitive data; each tag carries a
//! fixed risk tier. The overall tier of a scan is the maximum tier over the
//! categories that fired, so adding a hit can never lower the result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered severity classification derived from the categories detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    None,
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Logical grouping of detection rules. Metadata only: evaluation order
/// across groups is unspecified and only the final category set is a
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    Identity,
    Financial,
    Secrets,
    Organization,
    Confidentiality,
    Custom,
}

/// A class of sensitive data the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryTag {
    /// Indian PAN card number
    PanCard,
    /// Indian Aadhaar number (Verhoeff-verified)
    AadhaarNumber,
    /// Payment card number (Luhn-verified)
    PaymentCard,
    /// Indian bank IFSC code
    IfscCode,
    /// Bank account number
    BankAccount,
    /// OpenAI API key
    OpenaiApiKey,
    /// Google Gemini API key
    GeminiApiKey,
    /// DeepSeek API key
    DeepseekApiKey,
    /// Generic API key or secret assignment
    GenericApiKey,
    /// JSON Web Token
    JwtToken,
    /// Password or credential assignment
    PasswordDisclosure,
    /// Database URL or connection string
    DatabaseCredentials,
    /// AWS access key id
    AwsAccessKey,
    /// PEM private key block
    PrivateKeyBlock,
    /// Organization project code or code name
    OrgProjectCode,
    /// Organization financial information
    OrgFinancial,
    /// Organization R&D or manufacturing data
    OrgResearch,
    /// Organization HR or employee information
    OrgHr,
    /// Generic confidentiality marker
    ConfidentialMarker,
    /// Document classification marker
    ClassifiedDocument,
    /// Caller-supplied custom keyword (reserved for synthesized rules)
    CustomKeyword,
}

impl CategoryTag {
    /// The fixed risk tier assigned to this category.
    pub fn risk_tier(&self) -> RiskTier {
        match self {
            Self::PanCard
            | Self::AadhaarNumber
            | Self::PaymentCard
            | Self::BankAccount
            | Self::OpenaiApiKey
            | Self::GeminiApiKey
            | Self::DeepseekApiKey
            | Self::JwtToken
            | Self::PasswordDisclosure
            | Self::DatabaseCredentials
            | Self::AwsAccessKey
            | Self::PrivateKeyBlock
            | Self::OrgFinancial
            | Self::OrgResearch => RiskTier::High,
            Self::IfscCode
            | Self::GenericApiKey
            | Self::OrgProjectCode
            | Self::OrgHr
            | Self::ClassifiedDocument
            | Self::CustomKeyword => RiskTier::Medium,
            Self::ConfidentialMarker => RiskTier::Low,
        }
    }

    /// Stable string id, also used as the serde wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PanCard => "pan_card",
            Self::AadhaarNumber => "aadhaar_number",
            Self::PaymentCard => "payment_card",
            Self::IfscCode => "ifsc_code",
            Self::BankAccount => "bank_account",
            Self::OpenaiApiKey => "openai_api_key",
            Self::GeminiApiKey => "gemini_api_key",
            Self::DeepseekApiKey => "deepseek_api_key",
            Self::GenericApiKey => "generic_api_key",
            Self::JwtToken => "jwt_token",
            Self::PasswordDisclosure => "password_disclosure",
            Self::DatabaseCredentials => "database_credentials",
            Self::AwsAccessKey => "aws_access_key",
            Self::PrivateKeyBlock => "private_key_block",
            Self::OrgProjectCode => "org_project_code",
            Self::OrgFinancial => "org_financial",
            Self::OrgResearch => "org_research",
            Self::OrgHr => "org_hr",
            Self::ConfidentialMarker => "confidential_marker",
            Self::ClassifiedDocument => "classified_document",
            Self::CustomKeyword => "custom_keyword",
        }
    }

    /// Short human-readable label for reporting layers.
    pub fn description(&self) -> &'static str {
        match self {
            Self::PanCard => "Indian PAN card number",
            Self::AadhaarNumber => "Indian Aadhaar number (verified)",
            Self::PaymentCard => "Payment card number (Luhn verified)",
            Self::IfscCode => "Indian bank IFSC code",
            Self::BankAccount => "Bank account number",
            Self::OpenaiApiKey => "OpenAI API key",
            Self::GeminiApiKey => "Google Gemini API key",
            Self::DeepseekApiKey => "DeepSeek API key",
            Self::GenericApiKey => "Generic API key or secret",
            Self::JwtToken => "JSON Web Token",
            Self::PasswordDisclosure => "Password or credential",
            Self::DatabaseCredentials => "Database connection details",
            Self::AwsAccessKey => "AWS access key",
            Self::PrivateKeyBlock => "Private key material",
            Self::OrgProjectCode => "Organization project code",
            Self::OrgFinancial => "Organization financial information",
            Self::OrgResearch => "Organization R&D or manufacturing data",
            Self::OrgHr => "Organization HR or employee information",
            Self::ConfidentialMarker => "Confidential document marker",
            Self::ClassifiedDocument => "Document classification marker",
            Self::CustomKeyword => "Custom keyword",
        }
    }

    /// All built-in categories.
    pub fn all() -> &'static [CategoryTag] {
        &[
            Self::PanCard,
            Self::AadhaarNumber,
            Self::PaymentCard,
            Self::IfscCode,
            Self::BankAccount,
            Self::OpenaiApiKey,
            Self::GeminiApiKey,
            Self::DeepseekApiKey,
            Self::GenericApiKey,
            Self::JwtToken,
            Self::PasswordDisclosure,
            Self::DatabaseCredentials,
            Self::AwsAccessKey,
            Self::PrivateKeyBlock,
            Self::OrgProjectCode,
            Self::OrgFinancial,
            Self::OrgResearch,
            Self::OrgHr,
            Self::ConfidentialMarker,
            Self::ClassifiedDocument,
            Self::CustomKeyword,
        ]
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tier_ordering() {
        assert!(RiskTier::High > RiskTier::Medium);
        assert!(RiskTier::Medium > RiskTier::Low);
        assert!(RiskTier::Low > RiskTier::None);
    }

    #[test]
    fn test_every_category_has_a_tier_above_none() {
        for tag in CategoryTag::all() {
            assert!(
                tag.risk_tier() > RiskTier::None,
                "{tag} must carry a real tier"
            );
        }
    }

    #[test]
    fn test_tier_table_spot_checks() {
        assert_eq!(CategoryTag::PaymentCard.risk_tier(), RiskTier::High);
        assert_eq!(CategoryTag::OrgProjectCode.risk_tier(), RiskTier::Medium);
        assert_eq!(CategoryTag::ConfidentialMarker.risk_tier(), RiskTier::Low);
        assert_eq!(CategoryTag::DeepseekApiKey.risk_tier(), RiskTier::High);
    }

    #[test]
    fn test_serde_wire_names_match_as_str() {
        for tag in CategoryTag::all() {
            let json = serde_json::to_string(tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
            let back: CategoryTag = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *tag);
        }
    }

    #[test]
    fn test_risk_tier_display() {
        assert_eq!(RiskTier::None.to_string(), "none");
        assert_eq!(RiskTier::High.to_string(), "high");
    }
}
