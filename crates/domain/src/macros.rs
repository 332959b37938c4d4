//! Macro for implementing Display and FromStr for domain enums
//!
//! This macro eliminates boilerplate for enum conversions by providing
//! a single implementation for both Display and FromStr traits. It handles
//! case-insensitive parsing and consistent string representation.
//!
//! # Example
//!
//! ```rust
//! use skyledger_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum EngineClass {
//!     Single,
//!     Multi,
//! }
//!
//! impl_domain_enum_conversions!(EngineClass {
//!     Single => "single",
//!     Multi => "multi",
//! });
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// This macro generates:
/// - Display trait: converts enum variants to lowercase strings
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations
///
/// # Features
///
/// - Case-insensitive parsing (e.g., "PIC", "pic", "Pic" all work)
/// - Consistent lowercase string output
/// - Descriptive error messages with enum name
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    // Test enum for macro validation
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Draft,
        Final,
        Amended,
        Voided,
    }

    impl_domain_enum_conversions!(TestStatus {
        Draft => "draft",
        Final => "final",
        Amended => "amended",
        Voided => "voided",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestStatus::Draft.to_string(), "draft");
        assert_eq!(TestStatus::Final.to_string(), "final");
        assert_eq!(TestStatus::Amended.to_string(), "amended");
        assert_eq!(TestStatus::Voided.to_string(), "voided");
    }

    #[test]
    fn test_fromstr_lowercase() {
        assert_eq!(TestStatus::from_str("draft").unwrap(), TestStatus::Draft);
        assert_eq!(TestStatus::from_str("amended").unwrap(), TestStatus::Amended);
    }

    #[test]
    fn test_fromstr_mixed_case() {
        assert_eq!(TestStatus::from_str("DRAFT").unwrap(), TestStatus::Draft);
        assert_eq!(TestStatus::from_str("FiNaL").unwrap(), TestStatus::Final);
        assert_eq!(TestStatus::from_str("VoIdEd").unwrap(), TestStatus::Voided);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("invalid");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestStatus: invalid"));
    }

    #[test]
    fn test_fromstr_empty() {
        let result = TestStatus::from_str("");
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip() {
        let statuses =
            vec![TestStatus::Draft, TestStatus::Final, TestStatus::Amended, TestStatus::Voided];

        for status in statuses {
            let string = status.to_string();
            let parsed = TestStatus::from_str(&string).unwrap();
            assert_eq!(status, parsed);
        }
    }
}
