//! ID generation utilities for chatseed
//!
//! Provides functions for generating unique identifiers for stored records.

use rand::Rng;

/// Prefix for snippet record IDs
pub const SNIPPET_PREFIX: &str = "snip";

/// Prefix for prompt record IDs
pub const PROMPT_PREFIX: &str = "prompt";

/// Prefix for conversation record IDs
pub const CONVERSATION_PREFIX: &str = "conv";

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// Generate a unique record ID
///
/// Format: `{prefix}-{timestamp_ms}-{random_hex}`
/// Example: `conv-1738300800123-a1b2`
pub fn generate_id(prefix: &str) -> String {
    let timestamp = now_ms();
    let random: u16 = rand::rng().random();
    format!("{}-{}-{:04x}", prefix, timestamp, random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms_returns_reasonable_timestamp() {
        let ts = now_ms();
        // Should be after 2020-01-01 and before 2100-01-01
        assert!(ts > 1577836800000);
        assert!(ts < 4102444800000);
    }

    #[test]
    fn test_generate_id_format() {
        let id = generate_id(CONVERSATION_PREFIX);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "conv");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_id_prefixes() {
        assert!(generate_id(SNIPPET_PREFIX).starts_with("snip-"));
        assert!(generate_id(PROMPT_PREFIX).starts_with("prompt-"));
    }
}
