//! Input validation for prompts and settings

use std::time::Duration;

/// Longest prompt kept in the transcript; anything beyond is cut off.
pub const MAX_PROMPT_CHARS: usize = 4000;

pub const MIN_DELAY_MS: u64 = 50;
pub const MAX_DELAY_MS: u64 = 10_000;

/// Validates a prompt before it is sent
pub fn validate_prompt(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Prompt cannot be empty".to_string());
    }
    Ok(())
}

/// Trim surrounding whitespace and cap the prompt length (by characters, not bytes).
pub fn sanitize_prompt(text: &str) -> String {
    text.trim().chars().take(MAX_PROMPT_CHARS).collect()
}

/// Clamp a configured delay into the supported range.
pub fn clamp_delay(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_prompt() {
        assert!(validate_prompt("hello").is_ok());
        assert!(validate_prompt("  x  ").is_ok());
        assert!(validate_prompt("").is_err());
        assert!(validate_prompt("   \n\t ").is_err());
    }

    #[test]
    fn test_sanitize_prompt() {
        assert_eq!(sanitize_prompt("  hi there \n"), "hi there");
        assert_eq!(sanitize_prompt(&"é".repeat(MAX_PROMPT_CHARS + 10)).chars().count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn test_clamp_delay() {
        assert_eq!(clamp_delay(0), Duration::from_millis(MIN_DELAY_MS));
        assert_eq!(clamp_delay(1500), Duration::from_millis(1500));
        assert_eq!(clamp_delay(u64::MAX), Duration::from_millis(MAX_DELAY_MS));
    }
}
