#![forbid(unsafe_code)]

//! Core domain types shared by validation, resolution and output
//!
//! Identifier newtypes validate their grammar in the constructor and can
//! therefore only hold well-formed values. Membership-checked values such
//! as regions are plain wrappers; the `validate` module enforces their
//! domains against the `config` tables.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static INSTANCE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^i-[0-9a-f]{12,20}$").unwrap());

static CVE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CVE-[0-9]{4}-[0-9]{1,5}$").unwrap());

/// An AWS region identifier, e.g. `us-east-1`.
///
/// The wrapper itself does not check membership in the supported-region
/// table; `validate::fields::region` does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    /// Creates a new Region from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Region(name.into())
    }

    /// Returns the region identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Finding criticality, in the service's fixed order from most to least
/// severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Informational,
    Untriaged,
}

impl Severity {
    /// Canonical upper-case form used by the Inspector API.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Informational => "INFORMATIONAL",
            Severity::Untriaged => "UNTRIAGED",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical Inspector finding type, selected on the command line through
/// a short alias from the `config` alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingType {
    PackageVulnerability,
    NetworkReachability,
}

impl FindingType {
    /// Canonical upper-case form used by the Inspector API.
    pub fn as_str(self) -> &'static str {
        match self {
            FindingType::PackageVulnerability => "PACKAGE_VULNERABILITY",
            FindingType::NetworkReachability => "NETWORK_REACHABILITY",
        }
    }
}

impl fmt::Display for FindingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingStatus {
    Active,
    Suppressed,
    Closed,
}

impl FindingStatus {
    /// Canonical upper-case form used by the Inspector API.
    pub fn as_str(self) -> &'static str {
        match self {
            FindingStatus::Active => "ACTIVE",
            FindingStatus::Suppressed => "SUPPRESSED",
            FindingStatus::Closed => "CLOSED",
        }
    }

    /// Maps a lower-case status token to its status.
    ///
    /// Returns `None` for unknown tokens, including the pseudo-status
    /// `all`, which is not a status of its own.
    pub fn from_token(token: &str) -> Option<FindingStatus> {
        match token {
            "active" => Some(FindingStatus::Active),
            "suppressed" => Some(FindingStatus::Suppressed),
            "closed" => Some(FindingStatus::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An EC2 instance identifier: `i-` followed by 12 to 20 lowercase hex
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    /// Creates an InstanceId, or `None` when the grammar does not match.
    pub fn new(raw: &str) -> Option<InstanceId> {
        if INSTANCE_ID_RE.is_match(raw) {
            Some(InstanceId(raw.to_string()))
        } else {
            None
        }
    }

    /// Returns the instance id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A CVE identifier: `CVE-`, a four digit year, and a one to five digit
/// sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CveId(String);

impl CveId {
    /// Creates a CveId, or `None` when the grammar does not match.
    pub fn new(raw: &str) -> Option<CveId> {
        if CVE_ID_RE.is_match(raw) {
            Some(CveId(raw.to_string()))
        } else {
            None
        }
    }

    /// Returns the CVE id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
