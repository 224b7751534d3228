//! Input validation for join names and message bodies.

use super::error::ChatError;

/// Validate a join name.
///
/// Returns the trimmed name.
pub fn validate_name(name: &str) -> Result<&str, ChatError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ChatError::EmptyName);
    }
    Ok(name)
}

/// Validate a message body.
///
/// Returns the trimmed text.
pub fn validate_message(text: &str) -> Result<&str, ChatError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    Ok(text)
}
