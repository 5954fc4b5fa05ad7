//! Diagnosis coding systems.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coding system a diagnosis code belongs to.
///
/// Serializes as the FHIR system URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodingSystem {
    /// ICD-9-CM, source version `"9"`.
    #[serde(rename = "http://hl7.org/fhir/sid/icd-9-cm")]
    Icd9Cm,
    /// ICD-10, source version `"10"`.
    #[serde(rename = "http://hl7.org/fhir/sid/icd-10")]
    Icd10,
}

impl CodingSystem {
    /// Map an `icd_version` value to its coding system.
    ///
    /// Only the exact values `"9"` and `"10"` are recognized.
    #[must_use]
    pub fn from_version(version: &str) -> Option<Self> {
        match version {
            "9" => Some(Self::Icd9Cm),
            "10" => Some(Self::Icd10),
            _ => None,
        }
    }

    /// FHIR system URI.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::Icd9Cm => "http://hl7.org/fhir/sid/icd-9-cm",
            Self::Icd10 => "http://hl7.org/fhir/sid/icd-10",
        }
    }
}

impl fmt::Display for CodingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_version() {
        assert_eq!(CodingSystem::from_version("9"), Some(CodingSystem::Icd9Cm));
        assert_eq!(CodingSystem::from_version("10"), Some(CodingSystem::Icd10));
        assert_eq!(CodingSystem::from_version(""), None);
        assert_eq!(CodingSystem::from_version("11"), None);
        assert_eq!(CodingSystem::from_version(" 9"), None);
    }

    #[test]
    fn test_serializes_as_uri() {
        let json = serde_json::to_string(&CodingSystem::Icd9Cm).unwrap();
        assert_eq!(json, "\"http://hl7.org/fhir/sid/icd-9-cm\"");
        let none: Option<CodingSystem> = None;
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
    }
}
