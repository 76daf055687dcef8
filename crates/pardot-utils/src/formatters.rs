/// Mask a secret for logging, keeping four characters on each end.
///
/// Secrets of eight characters or fewer are hidden entirely.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Render the Pardot authorization header value.
pub fn authorization_header(api_key: &str, user_key: &str) -> String {
    format!("Pardot api_key={}, user_key={}", api_key, user_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdefghijklmnop"), "abcd...mnop");
        assert_eq!(mask_secret("short"), "****");
        assert_eq!(mask_secret(""), "****");
    }

    #[test]
    fn test_authorization_header() {
        assert_eq!(
            authorization_header("abc123", "ukey"),
            "Pardot api_key=abc123, user_key=ukey"
        );
    }
}
