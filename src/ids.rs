use uuid::Uuid;

/// Opaque prefixed identifier, e.g. `user_1f8a0c...` or `bot_77e2d1...`.
pub fn new_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &hex[..12])
}

/// Opaque bearer credential stored in the sessions table.
pub fn new_session_token() -> String {
    format!("sess_{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_the_prefix_and_a_short_hex_suffix() {
        let id = new_id("bot");
        let suffix = id.strip_prefix("bot_").expect("bot_ prefix");
        assert_eq!(suffix.len(), 12);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_tokens_carry_the_full_hex() {
        let token = new_session_token();
        let suffix = token.strip_prefix("sess_").expect("sess_ prefix");
        assert_eq!(suffix.len(), 32);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_values_are_unique() {
        assert_ne!(new_id("user"), new_id("user"));
        assert_ne!(new_session_token(), new_session_token());
    }
}
