/// Errors raised while resolving a note or looking up a pattern
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TheoryError {
    #[error("Invalid note: '{0}' is not in the chromatic scale.")]
    InvalidNote(String),

    #[error("Invalid scale type: '{given}'. Please use one of {}.", .available.join(", "))]
    InvalidScaleType {
        given: String,
        available: Vec<&'static str>,
    },

    #[error("Invalid chord type: '{given}'. Please use one of {}.", .available.join(", "))]
    InvalidChordType {
        given: String,
        available: Vec<&'static str>,
    },
}

pub type Result<T> = std::result::Result<T, TheoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_note_message() {
        let err = TheoryError::InvalidNote("Z".to_string());
        assert_eq!(err.to_string(), "Invalid note: 'Z' is not in the chromatic scale.");
    }

    #[test]
    fn test_invalid_type_message_lists_names() {
        let err = TheoryError::InvalidScaleType {
            given: "blues".to_string(),
            available: vec!["major", "minor"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid scale type: 'blues'. Please use one of major, minor."
        );
    }
}
