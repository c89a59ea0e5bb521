//! Redaction of secret values for display.

/// Number of leading characters kept visible.
const VISIBLE_PREFIX: usize = 3;

/// Redact a secret for display.
///
/// Keeps a short prefix (enough to tell `sk-` keys from `sk-proj-` keys
/// apart at a glance) and replaces the rest. Values too short to keep a
/// prefix are fully masked.
///
/// # Example
///
/// ```
/// use ragcheck::secrets::redact;
///
/// assert_eq!(redact("sk-proj-abcdef"), "sk-…");
/// assert_eq!(redact("abc"), "…");
/// ```
pub fn redact(value: &str) -> String {
    if value.chars().count() <= VISIBLE_PREFIX * 2 {
        return "…".to_string();
    }
    let prefix: String = value.chars().take(VISIBLE_PREFIX).collect();
    format!("{}…", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_prefix() {
        let masked = redact("sk-real123");
        assert_eq!(masked, "sk-…");
        assert!(!masked.contains("real123"));
    }

    #[test]
    fn short_values_fully_masked() {
        assert_eq!(redact(""), "…");
        assert_eq!(redact("abcdef"), "…");
    }

    #[test]
    fn handles_multibyte_characters() {
        assert_eq!(redact("ключ-секрет"), "клю…");
    }
}
