/// Validates an identifier that is used as a directory name and a document key.
///
/// Checks:
/// - Non-empty
/// - First character is an ASCII letter or digit
/// - Remaining characters are ASCII alphanumeric, '-', or '_'
///
/// Path separators, `.`/`..`, whitespace and null bytes are rejected by construction.
pub fn validate_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Validates a server address such as `myserver:25565`.
pub fn validate_address(address: &str) -> bool {
    !address.is_empty() && !address.chars().any(|c| c.is_whitespace() || c.is_control())
}
