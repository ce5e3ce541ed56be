//! Validation helpers for DTOs.

use validator::ValidationError;

/// Minimum length of a board name after trimming.
const MIN_BOARD_NAME_LENGTH: usize = 3;

/// Validates that a board name carries at least three non-whitespace-padded
/// characters.
///
/// # Examples
///
/// ```ignore
/// validate_board_name("Uno night")  // Ok
/// validate_board_name("  ab  ")     // Err - too short once trimmed
/// ```
pub fn validate_board_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_BOARD_NAME_LENGTH {
        let mut err = ValidationError::new("board_name_length");
        err.message = Some(
            format!("Board name must be at least {MIN_BOARD_NAME_LENGTH} characters").into(),
        );
        return Err(err);
    }

    Ok(())
}

/// Validates that a participant name is not empty once trimmed.
pub fn validate_participant_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("participant_name_empty");
        err.message = Some("Participant name must not be empty".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_board_name_valid() {
        assert!(validate_board_name("Uno").is_ok());
        assert!(validate_board_name("Friday night scrabble").is_ok());
        assert!(validate_board_name("  Uno  ").is_ok());
    }

    #[test]
    fn test_validate_board_name_too_short() {
        assert!(validate_board_name("").is_err());
        assert!(validate_board_name("ab").is_err());
        assert!(validate_board_name("  ab  ").is_err()); // trimmed below minimum
    }

    #[test]
    fn test_validate_participant_name() {
        assert!(validate_participant_name("Alice").is_ok());
        assert!(validate_participant_name("").is_err());
        assert!(validate_participant_name("   ").is_err());
    }
}
