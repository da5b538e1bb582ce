pub struct CommandDescription {
    pub keyword: String,
    pub description: String,
}

/// Extracts the command keyword from a `/command` chat message. Anything
/// after the keyword is ignored; no picker command takes arguments.
pub fn parse_command(message: &str) -> &str {
    message
        .trim_start_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strips_slash_and_trailing_tokens() {
        assert_eq!(parse_command("/list"), "list");
        assert_eq!(parse_command("/select now please"), "select");
    }

    #[test]
    fn empty_message_parses_to_empty_keyword() {
        assert_eq!(parse_command("/"), "");
        assert_eq!(parse_command(""), "");
    }
}
