use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Failed to parse {field} '{value}': {reason}")]
    Parse {
        field: String,
        value: String,
        reason: String,
    },
}

impl SlotError {
    pub fn parse(field: &str, value: &str, reason: impl Into<String>) -> Self {
        SlotError::Parse {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SlotError::Parse { field, value, .. } => {
                format!("The {} time '{}' is not a valid HH:MM time", field, value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SlotError::Parse { .. } => {
                "Use a zero-padded 24-hour time between 00:00 and 23:59, e.g. 09:05"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SlotError>;
