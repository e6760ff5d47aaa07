/// Display label for a resource URL: the configured protocol/host/port prefix is dropped so
/// labels stay short. URLs outside that prefix are returned unchanged.
pub fn short_title(identifier: &str, known_prefix: &str) -> String {
    if known_prefix.is_empty() {
        return identifier.to_string();
    }
    match identifier.strip_prefix(known_prefix) {
        Some("") => "/".to_string(),
        Some(rest) => rest.to_string(),
        None => identifier.to_string(),
    }
}
