use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    UnknownContinent { input: String },
    UnknownScriptType { input: String },
    UnknownRecordType { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::UnknownContinent { input } => write!(f, "unknown continent: {input}"),
            Self::UnknownScriptType { input } => write!(f, "unknown script type: {input}"),
            Self::UnknownRecordType { input } => write!(f, "unknown DNS record type: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "SUBID" };
        assert_eq!(err.to_string(), "SUBID must not be empty");

        let err = ValidationError::UnknownContinent {
            input: "Atlantis".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown continent: Atlantis");

        let err = ValidationError::UnknownScriptType {
            input: "shell".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown script type: shell");

        let err = ValidationError::UnknownRecordType {
            input: "PTR".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown DNS record type: PTR");
    }
}
