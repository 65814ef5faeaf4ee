#![forbid(unsafe_code)]

//! Table-driven validators for enumerated fields
//!
//! Each validator takes the enumeration it checks against as a slice;
//! production callers pass the `config` tables and tests can substitute
//! their own.

use crate::error::ValidationError;
use crate::types::{FindingStatus, FindingType, Region, Severity};

/// Validates one region token against the supported-region table.
///
/// Matching is exact and case-sensitive. Returns a singleton list;
/// repeated `--region` flags accumulate upstream by concatenating these
/// singletons.
pub fn region(raw: &str, supported: &[&str]) -> Result<Vec<Region>, ValidationError> {
    if supported.contains(&raw) {
        Ok(vec![Region::new(raw)])
    } else {
        Err(ValidationError::new(
            "region",
            "unsupported Inspector region",
            raw,
        ))
    }
}

/// Validates a comma-separated severity list.
///
/// Tokens are trimmed and matched case-insensitively against `allowed`.
/// The result preserves input order and keeps duplicates; it is never
/// empty, since an empty token fails the membership check.
pub fn severities(raw: &str, allowed: &[Severity]) -> Result<Vec<Severity>, ValidationError> {
    let mut result = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        let canonical = token.to_uppercase();
        match allowed.iter().find(|s| s.as_str() == canonical) {
            Some(severity) => result.push(*severity),
            None => {
                return Err(ValidationError::new("severities", "invalid severity", token));
            }
        }
    }
    Ok(result)
}

/// Looks a finding-type alias up in the alias table.
pub fn finding_type(
    raw: &str,
    aliases: &[(&str, FindingType)],
) -> Result<FindingType, ValidationError> {
    aliases
        .iter()
        .find(|(alias, _)| *alias == raw)
        .map(|(_, ty)| *ty)
        .ok_or_else(|| ValidationError::new("type", "invalid finding type", raw))
}

/// Validates a finding-status token.
///
/// `statuses` holds the accepted lower-case tokens including the
/// pseudo-status `all`, which expands to every other member.
pub fn finding_status(
    raw: &str,
    statuses: &[&str],
) -> Result<Vec<FindingStatus>, ValidationError> {
    if !statuses.contains(&raw) {
        return Err(ValidationError::new("status", "invalid finding status", raw));
    }
    if raw == "all" {
        return Ok(statuses
            .iter()
            .filter(|token| **token != "all")
            .filter_map(|token| FindingStatus::from_token(token))
            .collect());
    }
    match FindingStatus::from_token(raw) {
        Some(status) => Ok(vec![status]),
        None => Err(ValidationError::new("status", "invalid finding status", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn test_region_accepts_every_supported_region() {
        for supported in config::SUPPORTED_REGIONS {
            let regions = region(supported, &config::SUPPORTED_REGIONS).unwrap();
            assert_eq!(regions, vec![Region::new(supported)]);
        }
    }

    #[test]
    fn test_region_rejects_unknown_and_miscased_tokens() {
        let err = region("us-east-9", &config::SUPPORTED_REGIONS).unwrap_err();
        assert_eq!(
            err.to_string(),
            "argument --region: unsupported Inspector region: us-east-9"
        );
        assert!(region("US-EAST-1", &config::SUPPORTED_REGIONS).is_err());
        assert!(region("", &config::SUPPORTED_REGIONS).is_err());
    }

    #[test]
    fn test_region_checks_against_the_supplied_table() {
        assert!(region("local-1", &["local-1"]).is_ok());
        assert!(region("us-east-1", &["local-1"]).is_err());
    }

    #[test]
    fn test_severities_normalizes_case_and_whitespace() {
        let parsed = severities("high,Critical", &config::FINDING_SEVERITIES).unwrap();
        assert_eq!(parsed, vec![Severity::High, Severity::Critical]);

        let parsed = severities(" low , MEDIUM ", &config::FINDING_SEVERITIES).unwrap();
        assert_eq!(parsed, vec![Severity::Low, Severity::Medium]);
    }

    #[test]
    fn test_severities_keeps_duplicates_and_input_order() {
        let parsed = severities("high,high,critical", &config::FINDING_SEVERITIES).unwrap();
        assert_eq!(
            parsed,
            vec![Severity::High, Severity::High, Severity::Critical]
        );
    }

    #[test]
    fn test_severities_reports_the_offending_token() {
        let err = severities("high,bogus,low", &config::FINDING_SEVERITIES).unwrap_err();
        assert_eq!(err.to_string(), "argument --severities: invalid severity: bogus");
    }

    #[test]
    fn test_severities_rejects_empty_tokens() {
        assert!(severities("", &config::FINDING_SEVERITIES).is_err());
        assert!(severities("high,,low", &config::FINDING_SEVERITIES).is_err());
        assert!(severities("high,", &config::FINDING_SEVERITIES).is_err());
    }

    #[test]
    fn test_severities_checks_against_the_supplied_table() {
        assert!(severities("high", &[Severity::Critical]).is_err());
        assert_eq!(
            severities("critical", &[Severity::Critical]).unwrap(),
            vec![Severity::Critical]
        );
    }

    #[test]
    fn test_finding_type_resolves_aliases() {
        assert_eq!(
            finding_type("package", &config::FINDING_TYPE_ALIASES).unwrap(),
            FindingType::PackageVulnerability
        );
        assert_eq!(
            finding_type("network", &config::FINDING_TYPE_ALIASES).unwrap(),
            FindingType::NetworkReachability
        );
    }

    #[test]
    fn test_finding_type_is_case_sensitive() {
        let err = finding_type("Package", &config::FINDING_TYPE_ALIASES).unwrap_err();
        assert_eq!(err.to_string(), "argument --type: invalid finding type: Package");
        assert!(finding_type("code", &config::FINDING_TYPE_ALIASES).is_err());
    }

    #[test]
    fn test_finding_status_resolves_single_tokens() {
        assert_eq!(
            finding_status("active", &config::FINDING_STATUSES).unwrap(),
            vec![FindingStatus::Active]
        );
        assert_eq!(
            finding_status("suppressed", &config::FINDING_STATUSES).unwrap(),
            vec![FindingStatus::Suppressed]
        );
        assert_eq!(
            finding_status("closed", &config::FINDING_STATUSES).unwrap(),
            vec![FindingStatus::Closed]
        );
    }

    #[test]
    fn test_finding_status_all_expands_to_every_member() {
        assert_eq!(
            finding_status("all", &config::FINDING_STATUSES).unwrap(),
            vec![
                FindingStatus::Active,
                FindingStatus::Suppressed,
                FindingStatus::Closed,
            ]
        );
    }

    #[test]
    fn test_finding_status_is_case_sensitive() {
        assert!(finding_status("ACTIVE", &config::FINDING_STATUSES).is_err());
        let err = finding_status("open", &config::FINDING_STATUSES).unwrap_err();
        assert_eq!(
            err.to_string(),
            "argument --status: invalid finding status: open"
        );
    }

    #[test]
    fn test_finding_status_expansion_respects_the_supplied_table() {
        assert_eq!(
            finding_status("all", &["closed", "all"]).unwrap(),
            vec![FindingStatus::Closed]
        );
    }
}
