/// Error type for form-engine operations.
///
/// Validation failures are NOT errors: a failing field produces an
/// ordinary non-empty message list. This type covers the structural
/// failures: schema/model mismatches and unresolvable validator names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A validator chain references a name absent from the registry.
    #[error("unknown validator `{name}`")]
    UnknownValidator { name: String },

    /// A field's model path cannot be traversed or created because an
    /// intermediate segment holds a non-object value.
    #[error("malformed model path `{path}`: {reason}")]
    MalformedPath { path: String, reason: String },

    /// Two fields share the same key after slugification.
    #[error("duplicate field key `{key}` after slugification")]
    DuplicateKey { key: String },
}

impl FormError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownValidator { .. } => "FORM_UNKNOWN_VALIDATOR",
            Self::MalformedPath { .. } => "FORM_MALFORMED_PATH",
            Self::DuplicateKey { .. } => "FORM_DUPLICATE_KEY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = FormError::UnknownValidator {
            name: "phone".into(),
        };
        assert_eq!(err.to_string(), "unknown validator `phone`");

        let err = FormError::MalformedPath {
            path: "address.street".into(),
            reason: "segment `address` is not an object".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed model path `address.street`: segment `address` is not an object"
        );

        let err = FormError::DuplicateKey { key: "name".into() };
        assert_eq!(
            err.to_string(),
            "duplicate field key `name` after slugification"
        );
    }

    #[test]
    fn codes_are_unique() {
        let errors = [
            FormError::UnknownValidator {
                name: String::new(),
            },
            FormError::MalformedPath {
                path: String::new(),
                reason: String::new(),
            },
            FormError::DuplicateKey { key: String::new() },
        ];

        let mut codes: Vec<&str> = errors.iter().map(FormError::code).collect();
        for code in &codes {
            assert!(code.starts_with("FORM_"), "unexpected code prefix: {code}");
        }
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
