#![forbid(unsafe_code)]

//! Identifier grammar validators
//!
//! Thin wrappers over the validating constructors in `types`, turning a
//! rejected grammar into the flag-level error the command line reports.

use crate::error::ValidationError;
use crate::types::{CveId, InstanceId};

/// Validates an EC2 instance id: `i-` followed by 12 to 20 lowercase hex
/// characters.
pub fn instance_id(raw: &str) -> Result<InstanceId, ValidationError> {
    InstanceId::new(raw)
        .ok_or_else(|| ValidationError::new("instance-id", "invalid instance id", raw))
}

/// Validates a CVE id: `CVE-`, a four digit year and a one to five digit
/// sequence number.
pub fn cve_id(raw: &str) -> Result<CveId, ValidationError> {
    CveId::new(raw).ok_or_else(|| ValidationError::new("cve-id", "invalid CVE id", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_id_boundary_lengths() {
        // 12 and 20 hex characters pass, 11 and 21 fail.
        assert!(instance_id("i-0123456789ab").is_ok());
        assert!(instance_id("i-0123456789abcdef0123").is_ok());
        assert!(instance_id("i-0123456789a").is_err());
        assert!(instance_id("i-0123456789abcdef01234").is_err());
    }

    #[test]
    fn test_instance_id_error_names_the_flag() {
        let err = instance_id("junk").unwrap_err();
        assert_eq!(err.to_string(), "argument --instance-id: invalid instance id: junk");
    }

    #[test]
    fn test_cve_id_sequence_lengths() {
        assert!(cve_id("CVE-2023-1").is_ok());
        assert!(cve_id("CVE-2023-12345").is_ok());
        assert!(cve_id("CVE-2023-123456").is_err());
        assert!(cve_id("CVE-23-1").is_err());
    }

    #[test]
    fn test_cve_id_error_names_the_flag() {
        let err = cve_id("cve-2023-1").unwrap_err();
        assert_eq!(err.to_string(), "argument --cve-id: invalid CVE id: cve-2023-1");
    }
}
