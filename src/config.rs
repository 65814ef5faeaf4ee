#![forbid(unsafe_code)]

//! Static Inspector service configuration
//!
//! The fixed enumerations and defaults the validators and the resolver
//! reason over. Validators take these tables as parameters, so tests can
//! substitute a smaller domain without touching this module.

use crate::types::{FindingStatus, FindingType, Severity};

/// Regions where Inspector scanning is supported.
pub const SUPPORTED_REGIONS: [&str; 17] = [
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "ap-east-1",
    "ap-south-1",
    "ap-northeast-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-northeast-1",
    "ca-central-1",
    "eu-central-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-north-1",
    "sa-east-1",
];

/// Severities a finding can carry, from most to least severe.
pub const FINDING_SEVERITIES: [Severity; 6] = [
    Severity::Critical,
    Severity::High,
    Severity::Medium,
    Severity::Low,
    Severity::Informational,
    Severity::Untriaged,
];

/// Short finding-type aliases accepted on the command line, mapped to the
/// canonical Inspector finding type.
pub const FINDING_TYPE_ALIASES: [(&str, FindingType); 2] = [
    ("package", FindingType::PackageVulnerability),
    ("network", FindingType::NetworkReachability),
];

/// Finding-status tokens accepted on the command line.
///
/// `all` is a pseudo-status that expands to every other member during
/// validation.
pub const FINDING_STATUSES: [&str; 4] = ["active", "suppressed", "closed", "all"];

/// Pattern for `--start-date` and `--end-date` values.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Severities queried when `--severities` is not supplied.
pub const DEFAULT_SEVERITIES: [Severity; 2] = [Severity::Critical, Severity::High];

/// Finding type queried when `--type` is not supplied.
pub const DEFAULT_FINDING_TYPE: FindingType = FindingType::PackageVulnerability;

/// Finding status queried when `--status` is not supplied.
pub const DEFAULT_FINDING_STATUS: FindingStatus = FindingStatus::Active;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_finding_type_alias_is_distinct() {
        assert_ne!(FINDING_TYPE_ALIASES[0].0, FINDING_TYPE_ALIASES[1].0);
        assert_ne!(FINDING_TYPE_ALIASES[0].1, FINDING_TYPE_ALIASES[1].1);
    }

    #[test]
    fn test_status_table_lists_the_expansion_token_last() {
        assert_eq!(FINDING_STATUSES[FINDING_STATUSES.len() - 1], "all");
    }

    #[test]
    fn test_defaults_are_members_of_their_enumerations() {
        for severity in DEFAULT_SEVERITIES {
            assert!(FINDING_SEVERITIES.contains(&severity));
        }
        assert!(
            FINDING_TYPE_ALIASES
                .iter()
                .any(|(_, ty)| *ty == DEFAULT_FINDING_TYPE)
        );
        assert!(FINDING_STATUSES.contains(&"active"));
    }
}
