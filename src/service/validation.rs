//! Request validation for todo payloads.

use crate::error::AppError;
use crate::model::TodoInput;

pub struct RequestValidator;

impl RequestValidator {
    /// Title and description must not be empty strings.
    pub fn validate(input: &TodoInput) -> Result<(), AppError> {
        require_text("title", &input.title)?;
        require_text("description", &input.description)?;
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, description: &str) -> TodoInput {
        TodoInput {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    #[test]
    fn accepts_filled_fields() {
        assert!(RequestValidator::validate(&input("A", "B")).is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        let err = RequestValidator::validate(&input("", "B")).unwrap_err();
        assert_eq!(err.to_string(), "validation: title must not be empty");
    }

    #[test]
    fn accepts_whitespace_only_title() {
        assert!(RequestValidator::validate(&input("   ", "B")).is_ok());
    }

    #[test]
    fn rejects_empty_description() {
        let err = RequestValidator::validate(&input("A", "")).unwrap_err();
        assert_eq!(err.to_string(), "validation: description must not be empty");
    }
}
