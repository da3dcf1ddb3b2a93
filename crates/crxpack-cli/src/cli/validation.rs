/// Parse and validate a `--env` pair.
///
/// Accepts `KEY` or `KEY=VALUE` where KEY is a non-empty identifier made of
/// letters, digits and underscores.
///
/// # Errors
///
/// Returns an error message if the key is empty or contains other characters.
pub fn parse_env_pair(s: &str) -> Result<String, String> {
    let key = s.split_once('=').map_or(s, |(key, _)| key);

    if key.is_empty() {
        return Err("Env option name cannot be empty".to_string());
    }

    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!(
            "Env option name can only contain letters, numbers or underscores: '{key}'"
        ));
    }

    Ok(s.to_string())
}
