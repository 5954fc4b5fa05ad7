//! Allow-listed SQL identifiers.
//!
//! Column names come from source file headers and end up in DDL and INSERT
//! text, which cannot be parameterized. Only plain identifiers pass.

use std::fmt;

use crate::error::{Result, StoreError};

/// A column name that may be placed into SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Accepts `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn parse(raw: &str) -> Result<Self> {
        if is_identifier(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(StoreError::InvalidIdentifier {
                name: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Double-quoted form, safe next to SQL keywords such as `date`.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true for a plain ASCII identifier.
pub fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Parses every header into an identifier, failing on the first bad one.
pub fn parse_columns(headers: &[String]) -> Result<Vec<Identifier>> {
    headers.iter().map(|name| Identifier::parse(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_plain_names() {
        assert!(is_identifier("patient_id"));
        assert!(is_identifier("_x1"));
        assert!(is_identifier("date"));
    }

    #[test]
    fn test_rejects_injection() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("a b"));
        assert!(!is_identifier("x\"); DROP TABLE demo; --"));
        assert!(!is_identifier("gender PRIMARY KEY"));
        assert!(matches!(
            Identifier::parse("a,b"),
            Err(StoreError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_quoted() {
        let id = Identifier::parse("date").unwrap();
        assert_eq!(id.quoted(), "\"date\"");
    }

    proptest! {
        #[test]
        fn accepted_identifiers_never_need_escaping(raw in "\\PC{0,12}") {
            if is_identifier(&raw) {
                prop_assert!(!raw.contains('"'));
                prop_assert!(!raw.contains(char::is_whitespace));
                prop_assert!(raw.is_ascii());
            }
        }

        #[test]
        fn generated_identifiers_are_accepted(raw in "[A-Za-z_][A-Za-z0-9_]{0,15}") {
            prop_assert!(Identifier::parse(&raw).is_ok());
        }
    }
}
