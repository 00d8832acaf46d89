use tracing::debug;

/// Resolve a configured credential. A value starting with `$` names an
/// environment variable; an unset or blank variable resolves to `None` so the
/// caller can fall back or fail instead of sending the literal reference.
pub fn resolve_credential<F>(value: &str, env: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let resolved = match value.strip_prefix('$') {
        Some(var_name) => {
            let found = env(var_name);
            debug!(var = %var_name, found = found.is_some(), "Resolving credential from environment");
            found?
        }
        None => value.to_string(),
    };

    if resolved.trim().is_empty() {
        None
    } else {
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_credential() {
        assert_eq!(resolve_credential("sk-literal", |_| None), Some("sk-literal".to_string()));
    }

    #[test]
    fn test_env_reference() {
        let env = |var: &str| (var == "OBSERVER_TEST_KEY").then(|| "secret123".to_string());
        assert_eq!(resolve_credential("$OBSERVER_TEST_KEY", env), Some("secret123".to_string()));
    }

    #[test]
    fn test_missing_env_reference() {
        assert_eq!(resolve_credential("$NOT_SET_ANYWHERE", |_| None), None);
    }

    #[test]
    fn test_blank_literal() {
        assert_eq!(resolve_credential("   ", |_| None), None);
    }
}
